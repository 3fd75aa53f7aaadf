use crate::backend::{AudioArtifact, SummaryMode, SummaryResult, TargetLanguage, Voice};
use crate::intake::SourceDocument;
use std::path::PathBuf;
use std::time::Instant;

use super::state::ResultTab;

/// Messages emitted by the UI and by completing async work.
#[derive(Debug, Clone)]
pub enum Message {
    // Document intake
    PathInputChanged(String),
    LoadPathRequested,
    FileHovered,
    FileHoverLeft,
    FileDropped(PathBuf),
    DocumentLoaded {
        request_id: u64,
        path: PathBuf,
        document: SourceDocument,
    },
    DocumentLoadFailed {
        request_id: u64,
        path: PathBuf,
        error: String,
    },
    // Generation selections
    ModeSelected(SummaryMode),
    LanguageSelected(TargetLanguage),
    AdvancedModelToggled(bool),
    VoiceSelected(Voice),
    // Summarization phase
    SubmitSummary,
    SummaryReady {
        request_id: u64,
        result: SummaryResult,
    },
    SummaryFailed {
        request_id: u64,
        error: String,
    },
    // Results panel
    ResultTabSelected(ResultTab),
    // Audio synthesis phase
    SubmitAudio,
    AudioReady {
        request_id: u64,
        artifact: AudioArtifact,
    },
    AudioFailed {
        request_id: u64,
        error: String,
    },
    TogglePlayback,
    StopPlayback,
    // Chrome
    ToggleTheme,
    DismissNotice,
    Tick(Instant),
}
