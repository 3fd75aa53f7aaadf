use super::super::state::{App, ResultTab};
use crate::backend::{ModelBackend, SummaryMode, TargetLanguage, Voice};
use crate::config::ThemeMode;
use tracing::debug;

impl App {
    pub(super) fn handle_mode_selected(&mut self, mode: SummaryMode) {
        debug!(%mode, "Summary mode selected");
        self.generation.mode = mode;
    }

    pub(super) fn handle_language_selected(&mut self, language: TargetLanguage) {
        debug!(%language, "Target language selected");
        self.generation.language = language;
    }

    pub(super) fn handle_advanced_model_toggled(&mut self, advanced: bool) {
        self.generation.model_backend = if advanced {
            ModelBackend::Advanced
        } else {
            ModelBackend::Standard
        };
        debug!(backend = %self.generation.model_backend, "Model backend selected");
    }

    pub(super) fn handle_voice_selected(&mut self, voice: Voice) {
        debug!(voice = voice.as_param(), "Voice selected");
        self.voice = voice;
    }

    pub(super) fn handle_result_tab_selected(&mut self, tab: ResultTab) {
        self.active_tab = tab;
    }

    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = match self.config.theme {
            ThemeMode::Day => ThemeMode::Night,
            ThemeMode::Night => ThemeMode::Day,
        };
    }
}
