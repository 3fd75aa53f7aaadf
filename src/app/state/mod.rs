mod audio;
mod constants;
mod summary;
mod ui;

use crate::backend::{SummaryMetrics, SummaryRequest, Voice};
use crate::config::AppConfig;
use iced::Task;
use std::path::PathBuf;

use super::messages::Message;

pub(crate) use constants::*;
pub(in crate::app) use audio::{AudioLifecycle, AudioState};
pub(in crate::app) use summary::{SummaryLifecycle, SummaryState};
pub(in crate::app) use ui::{IntakeState, ResultTab};

/// Core application state composed of sub-models.
///
/// One instance owns the whole session: the active document, the current
/// generation selections, and the two independent remote-operation state
/// machines. Nothing here outlives the process.
pub struct App {
    pub(super) http: reqwest::Client,
    pub(super) config: AppConfig,
    pub(super) intake: IntakeState,
    /// Current selections; frozen by value into each dispatched request.
    pub(super) generation: SummaryRequest,
    pub(super) voice: Voice,
    pub(super) summary: SummaryState,
    pub(super) audio: AudioState,
    pub(super) active_tab: ResultTab,
    pub(super) notice: Option<String>,
}

impl App {
    pub(super) fn bootstrap(
        config: AppConfig,
        initial_document: Option<PathBuf>,
    ) -> (App, Task<Message>) {
        let app = App {
            http: reqwest::Client::new(),
            intake: IntakeState::new(),
            generation: SummaryRequest {
                mode: config.default_mode,
                language: config.default_language,
                model_backend: config.default_model,
            },
            voice: config.default_voice,
            summary: SummaryState::new(),
            audio: AudioState::new(),
            active_tab: ResultTab::default(),
            notice: None,
            config,
        };

        // A document given on the command line enters through the same
        // intake path as a drop.
        let init_task = match initial_document {
            Some(path) => Task::done(Message::FileDropped(path)),
            None => Task::none(),
        };
        (app, init_task)
    }

    /// The results panel shows a placeholder only while both summaries are
    /// empty.
    pub(super) fn results_available(&self) -> bool {
        self.summary
            .result()
            .map(|result| {
                !result.original_summary.is_empty() || !result.translated_summary.is_empty()
            })
            .unwrap_or(false)
    }

    pub(super) fn metrics(&self) -> Option<&SummaryMetrics> {
        self.summary.result().and_then(|r| r.metrics.as_ref())
    }

    /// Voice selector and synthesis control are tied to the translated tab
    /// with non-empty translated text.
    pub(super) fn show_voice_controls(&self) -> bool {
        self.active_tab == ResultTab::Translated && self.summary.translated_summary().is_some()
    }

    pub(super) fn can_submit_summary(&self) -> bool {
        self.intake.document.is_some() && !self.summary.is_in_flight() && !self.intake.loading
    }

    pub(super) fn can_submit_audio(&self) -> bool {
        self.summary.translated_summary().is_some()
            && !self.audio.is_in_flight()
            && !self.summary.is_in_flight()
    }

    pub(super) fn displayed_summary(&self) -> &str {
        let Some(result) = self.summary.result() else {
            return "";
        };
        match self.active_tab {
            ResultTab::Original => &result.original_summary,
            ResultTab::Translated => &result.translated_summary,
        }
    }
}

#[cfg(test)]
pub(in crate::app) mod tests {
    use super::*;
    use crate::backend::SummaryResult;

    pub(in crate::app) fn build_test_app() -> App {
        let (app, _task) = App::bootstrap(AppConfig::default(), None);
        app
    }

    fn ready_result(original: &str, translated: &str) -> SummaryLifecycle {
        SummaryLifecycle::Ready(SummaryResult {
            original_summary: original.to_string(),
            translated_summary: translated.to_string(),
            metrics: None,
        })
    }

    #[test]
    fn placeholder_shows_until_any_summary_text_exists() {
        let mut app = build_test_app();
        assert!(!app.results_available());

        app.summary.lifecycle = SummaryLifecycle::InFlight { request_id: 1 };
        assert!(!app.results_available());

        app.summary.lifecycle = ready_result("original text", "");
        assert!(app.results_available());
    }

    #[test]
    fn voice_controls_need_translated_tab_and_translated_text() {
        let mut app = build_test_app();
        app.summary.lifecycle = ready_result("original", "traducido");

        app.active_tab = ResultTab::Original;
        assert!(!app.show_voice_controls());

        app.active_tab = ResultTab::Translated;
        assert!(app.show_voice_controls());

        app.summary.lifecycle = ready_result("original", "");
        assert!(!app.show_voice_controls());
    }

    #[test]
    fn displayed_summary_follows_active_tab() {
        let mut app = build_test_app();
        app.summary.lifecycle = ready_result("first", "segundo");

        app.active_tab = ResultTab::Original;
        assert_eq!(app.displayed_summary(), "first");
        app.active_tab = ResultTab::Translated;
        assert_eq!(app.displayed_summary(), "segundo");
    }
}
