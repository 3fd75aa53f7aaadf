use super::super::state::App;
use super::Effect;
use crate::intake::SourceDocument;
use std::path::PathBuf;
use tracing::{info, warn};

impl App {
    pub(super) fn handle_path_input_changed(&mut self, path: String) {
        self.intake.path_input = path;
    }

    pub(super) fn handle_load_path_requested(&mut self, effects: &mut Vec<Effect>) {
        let candidate = PathBuf::from(self.intake.path_input.trim());
        if candidate.as_os_str().is_empty() {
            return;
        }
        if !candidate.exists() {
            self.notice = Some(format!("File not found: {}", candidate.display()));
            return;
        }
        let request_id = self.intake.begin_load();
        info!(request_id, path = %candidate.display(), "Opening document from path input");
        effects.push(Effect::LoadDocument {
            path: candidate,
            request_id,
        });
    }

    pub(super) fn handle_file_hovered(&mut self) {
        self.intake.drag_active = true;
    }

    pub(super) fn handle_file_hover_left(&mut self) {
        self.intake.drag_active = false;
    }

    pub(super) fn handle_file_dropped(&mut self, path: PathBuf, effects: &mut Vec<Effect>) {
        // Drag feedback clears on drop no matter what happens to the load.
        self.intake.drag_active = false;
        let request_id = self.intake.begin_load();
        info!(request_id, path = %path.display(), "Opening dropped document");
        effects.push(Effect::LoadDocument { path, request_id });
    }

    pub(super) fn handle_document_loaded(
        &mut self,
        request_id: u64,
        path: PathBuf,
        document: SourceDocument,
    ) {
        if !self.intake.is_current_load(request_id) {
            warn!(request_id, path = %path.display(), "Ignoring stale document load");
            return;
        }
        self.intake.loading = false;
        self.intake.path_input.clear();
        info!(
            request_id,
            path = %path.display(),
            file = %document.file_name,
            bytes = document.bytes.len(),
            "Document ready for submission"
        );
        self.intake.document = Some(document);
    }

    pub(super) fn handle_document_load_failed(
        &mut self,
        request_id: u64,
        path: PathBuf,
        error: String,
    ) {
        if !self.intake.is_current_load(request_id) {
            warn!(request_id, path = %path.display(), "Ignoring stale document-load failure");
            return;
        }
        self.intake.loading = false;
        warn!(request_id, path = %path.display(), "Failed to load document: {error}");
        self.notice = Some(format!("Failed to open {}: {}", path.display(), error));
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::tests::build_test_app;
    use super::super::Effect;
    use crate::intake::SourceDocument;
    use std::path::PathBuf;

    fn sample_document(name: &str) -> SourceDocument {
        SourceDocument {
            file_name: name.to_string(),
            mime_type: "application/pdf",
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        }
    }

    fn load_request_id(effects: &[Effect]) -> u64 {
        match effects {
            [Effect::LoadDocument { request_id, .. }] => *request_id,
            other => panic!("expected one load effect, got {} effects", other.len()),
        }
    }

    #[test]
    fn drop_clears_drag_state_and_requests_load() {
        let mut app = build_test_app();
        app.reduce(Message::FileHovered);
        assert!(app.intake.drag_active);

        let effects = app.reduce(Message::FileDropped(PathBuf::from("/tmp/report.pdf")));
        assert!(!app.intake.drag_active);
        assert!(app.intake.loading);
        assert!(matches!(
            effects.as_slice(),
            [Effect::LoadDocument { path, .. }] if path == &PathBuf::from("/tmp/report.pdf")
        ));
    }

    #[test]
    fn hover_leave_clears_drag_state_without_loading() {
        let mut app = build_test_app();
        app.reduce(Message::FileHovered);
        let effects = app.reduce(Message::FileHoverLeft);
        assert!(!app.intake.drag_active);
        assert!(effects.is_empty());
        assert!(!app.intake.loading);
    }

    #[test]
    fn loaded_document_replaces_previous_selection() {
        let mut app = build_test_app();
        app.intake.document = Some(sample_document("old.pdf"));
        let effects = app.reduce(Message::FileDropped(PathBuf::from("/tmp/new.pdf")));
        let request_id = load_request_id(&effects);

        app.reduce(Message::DocumentLoaded {
            request_id,
            path: PathBuf::from("/tmp/new.pdf"),
            document: sample_document("new.pdf"),
        });

        assert!(!app.intake.loading);
        assert_eq!(
            app.intake.document.as_ref().map(|d| d.file_name.as_str()),
            Some("new.pdf")
        );
    }

    #[test]
    fn out_of_order_load_completions_keep_the_last_drop() {
        let mut app = build_test_app();
        let first = app.reduce(Message::FileDropped(PathBuf::from("/tmp/a.pdf")));
        let first_id = load_request_id(&first);
        let second = app.reduce(Message::FileDropped(PathBuf::from("/tmp/b.pdf")));
        let second_id = load_request_id(&second);

        // The slower first read lands after the second drop superseded it.
        app.reduce(Message::DocumentLoaded {
            request_id: second_id,
            path: PathBuf::from("/tmp/b.pdf"),
            document: sample_document("b.pdf"),
        });
        app.reduce(Message::DocumentLoaded {
            request_id: first_id,
            path: PathBuf::from("/tmp/a.pdf"),
            document: sample_document("a.pdf"),
        });

        assert_eq!(
            app.intake.document.as_ref().map(|d| d.file_name.as_str()),
            Some("b.pdf")
        );
    }

    #[test]
    fn stale_load_failure_is_discarded() {
        let mut app = build_test_app();
        let first = app.reduce(Message::FileDropped(PathBuf::from("/tmp/a.pdf")));
        let first_id = load_request_id(&first);
        app.reduce(Message::FileDropped(PathBuf::from("/tmp/b.pdf")));

        app.reduce(Message::DocumentLoadFailed {
            request_id: first_id,
            path: PathBuf::from("/tmp/a.pdf"),
            error: "interrupted".to_string(),
        });

        // The superseded failure neither ends the live load nor raises a notice.
        assert!(app.intake.loading);
        assert!(app.notice.is_none());
    }

    #[test]
    fn failed_load_keeps_previous_document_and_surfaces_notice() {
        let mut app = build_test_app();
        app.intake.document = Some(sample_document("kept.pdf"));
        let effects = app.reduce(Message::FileDropped(PathBuf::from("/tmp/broken.pdf")));
        let request_id = load_request_id(&effects);

        app.reduce(Message::DocumentLoadFailed {
            request_id,
            path: PathBuf::from("/tmp/broken.pdf"),
            error: "permission denied".to_string(),
        });

        assert!(!app.intake.loading);
        assert!(app.notice.as_deref().unwrap_or("").contains("broken.pdf"));
        assert_eq!(
            app.intake.document.as_ref().map(|d| d.file_name.as_str()),
            Some("kept.pdf")
        );
    }

    #[test]
    fn empty_path_input_is_ignored() {
        let mut app = build_test_app();
        app.intake.path_input = "   ".to_string();
        let effects = app.reduce(Message::LoadPathRequested);
        assert!(effects.is_empty());
        assert!(!app.intake.loading);
    }
}
