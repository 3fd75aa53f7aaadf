use crate::backend::{AudioRequest, SummaryRequest};
use crate::intake::SourceDocument;
use std::path::PathBuf;

mod audio;
mod core;
mod intake;
mod runtime;
mod selection;
mod summary;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    LoadDocument {
        path: PathBuf,
        request_id: u64,
    },
    SubmitSummary {
        document: SourceDocument,
        request: SummaryRequest,
        request_id: u64,
    },
    SubmitAudio {
        request: AudioRequest,
        request_id: u64,
    },
    StartPlayback,
    StopPlayback,
}
