use crate::intake::SourceDocument;

/// Which summary the results panel is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultTab {
    Original,
    Translated,
}

impl Default for ResultTab {
    fn default() -> Self {
        ResultTab::Original
    }
}

/// Document selection state shared by the path field and drag-and-drop.
pub struct IntakeState {
    pub(in crate::app) document: Option<SourceDocument>,
    pub(in crate::app) path_input: String,
    pub(in crate::app) drag_active: bool,
    pub(in crate::app) loading: bool,
    pub(in crate::app) request_id: u64,
}

impl IntakeState {
    pub(in crate::app) fn new() -> Self {
        IntakeState {
            document: None,
            path_input: String::new(),
            drag_active: false,
            loading: false,
            request_id: 0,
        }
    }

    /// Enter the loading state under a fresh request id. A later load
    /// supersedes an earlier one; completions bearing older ids are stale.
    pub(in crate::app) fn begin_load(&mut self) -> u64 {
        self.request_id = self.request_id.wrapping_add(1);
        self.loading = true;
        self.request_id
    }

    pub(in crate::app) fn is_current_load(&self, request_id: u64) -> bool {
        self.loading && self.request_id == request_id
    }
}
