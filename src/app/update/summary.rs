use super::super::state::{App, ResultTab, SummaryLifecycle};
use super::Effect;
use crate::backend::SummaryResult;
use tracing::{debug, info, warn};

impl App {
    /// Snapshot the current selectors and document and dispatch a
    /// summarization request. Any previous result and any audio derived from
    /// it are discarded before the request leaves.
    pub(super) fn handle_submit_summary(&mut self, effects: &mut Vec<Effect>) {
        if self.summary.is_in_flight() {
            debug!("Ignoring summarization submit while a request is in flight");
            return;
        }
        let Some(document) = self.intake.document.clone() else {
            self.notice = Some("Select a document first.".to_string());
            return;
        };

        // The request rides with the effect by value; later selector edits
        // cannot touch it.
        let request = self.generation;
        let request_id = self.summary.begin();
        self.audio.invalidate();
        self.active_tab = ResultTab::Original;
        self.notice = None;

        effects.push(Effect::SubmitSummary {
            document,
            request,
            request_id,
        });
    }

    pub(super) fn handle_summary_ready(&mut self, request_id: u64, result: SummaryResult) {
        if self.summary.in_flight_request() != Some(request_id) {
            warn!(request_id, "Ignoring stale summarization completion");
            return;
        }
        info!(
            request_id,
            total = result
                .metrics
                .as_ref()
                .map(|metrics| metrics.total_label())
                .as_deref()
                .unwrap_or("n/a"),
            "Summarization completed"
        );
        self.summary.lifecycle = SummaryLifecycle::Ready(result);
        self.active_tab = ResultTab::Original;
    }

    pub(super) fn handle_summary_failed(&mut self, request_id: u64, error: String) {
        if self.summary.in_flight_request() != Some(request_id) {
            warn!(request_id, "Ignoring stale summarization failure");
            return;
        }
        warn!(request_id, "Summarization failed: {error}");
        self.summary.lifecycle = SummaryLifecycle::Idle;
        self.notice = Some(format!("Failed to generate summary: {error}"));
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::tests::build_test_app;
    use super::super::super::state::{App, AudioLifecycle, ResultTab, SummaryLifecycle};
    use super::super::Effect;
    use crate::backend::{AudioArtifact, SummaryMode, SummaryResult, Voice};
    use crate::intake::SourceDocument;

    fn app_with_document() -> App {
        let mut app = build_test_app();
        app.intake.document = Some(SourceDocument {
            file_name: "report.pdf".to_string(),
            mime_type: "application/pdf",
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        });
        app
    }

    fn sample_result() -> SummaryResult {
        SummaryResult {
            original_summary: "Original text".to_string(),
            translated_summary: "Texto traducido".to_string(),
            metrics: None,
        }
    }

    #[test]
    fn submit_without_document_is_rejected_with_notice() {
        let mut app = build_test_app();
        let effects = app.reduce(Message::SubmitSummary);
        assert!(effects.is_empty());
        assert!(app.notice.is_some());
        assert!(!app.summary.is_in_flight());
    }

    #[test]
    fn submit_freezes_selector_snapshot() {
        let mut app = app_with_document();
        app.generation.mode = SummaryMode::Quick;

        let effects = app.reduce(Message::SubmitSummary);
        app.generation.mode = SummaryMode::Deep;

        match effects.as_slice() {
            [Effect::SubmitSummary { request, .. }] => {
                assert_eq!(request.mode, SummaryMode::Quick);
            }
            other => panic!("expected one submit effect, got {} effects", other.len()),
        }
    }

    #[test]
    fn resubmit_while_in_flight_is_rejected() {
        let mut app = app_with_document();
        let first = app.reduce(Message::SubmitSummary);
        assert_eq!(first.len(), 1);
        let id = app.summary.in_flight_request();

        let second = app.reduce(Message::SubmitSummary);
        assert!(second.is_empty());
        assert_eq!(app.summary.in_flight_request(), id);
    }

    #[test]
    fn submission_discards_previous_result_and_audio() {
        let mut app = app_with_document();
        app.summary.lifecycle = SummaryLifecycle::Ready(sample_result());
        app.audio.lifecycle = AudioLifecycle::Ready(AudioArtifact {
            url: "http://localhost:5000/results/old.mp3".to_string(),
            voice: Voice::Kore,
            audio: vec![1, 2, 3],
        });

        app.reduce(Message::SubmitSummary);

        assert!(app.summary.result().is_none());
        assert!(app.summary.is_in_flight());
        assert_eq!(app.audio.lifecycle, AudioLifecycle::Idle);
        assert!(app.audio.artifact().is_none());
    }

    #[test]
    fn completion_stores_result_and_resets_tab() {
        let mut app = app_with_document();
        app.reduce(Message::SubmitSummary);
        let request_id = app.summary.in_flight_request().unwrap();
        app.active_tab = ResultTab::Translated;

        app.reduce(Message::SummaryReady {
            request_id,
            result: sample_result(),
        });

        assert_eq!(app.summary.result(), Some(&sample_result()));
        assert_eq!(app.active_tab, ResultTab::Original);
    }

    #[test]
    fn failure_returns_to_idle_and_allows_resubmission() {
        let mut app = app_with_document();
        app.reduce(Message::SubmitSummary);
        let request_id = app.summary.in_flight_request().unwrap();

        app.reduce(Message::SummaryFailed {
            request_id,
            error: "backend unreachable".to_string(),
        });

        assert_eq!(app.summary.lifecycle, SummaryLifecycle::Idle);
        assert!(app.notice.as_deref().unwrap_or("").contains("backend unreachable"));

        let retry = app.reduce(Message::SubmitSummary);
        assert_eq!(retry.len(), 1);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut app = app_with_document();
        app.reduce(Message::SubmitSummary);
        let stale_id = app.summary.in_flight_request().unwrap();
        app.reduce(Message::SummaryFailed {
            request_id: stale_id,
            error: "timeout".to_string(),
        });
        app.reduce(Message::SubmitSummary);
        let live_id = app.summary.in_flight_request().unwrap();

        app.reduce(Message::SummaryReady {
            request_id: stale_id,
            result: sample_result(),
        });

        assert_eq!(app.summary.in_flight_request(), Some(live_id));
        assert!(app.summary.result().is_none());
    }
}
