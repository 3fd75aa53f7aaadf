use crate::backend::{ModelBackend, SummaryMode, TargetLanguage, Voice};
use crate::config::LogLevel;

pub(crate) fn default_window_width() -> f32 {
    1180.0
}

pub(crate) fn default_window_height() -> f32 {
    760.0
}

pub(crate) fn default_log_level() -> LogLevel {
    LogLevel::Info
}

pub(crate) fn default_mode() -> SummaryMode {
    SummaryMode::Standard
}

pub(crate) fn default_language() -> TargetLanguage {
    TargetLanguage::Es
}

pub(crate) fn default_model() -> ModelBackend {
    ModelBackend::Standard
}

pub(crate) fn default_voice() -> Voice {
    Voice::Standard
}
