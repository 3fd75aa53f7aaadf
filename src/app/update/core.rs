use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use iced::event;
use iced::time;
use iced::window;
use iced::{Event, Subscription, Task};
use std::time::Duration;

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime_event_to_message)];

        // Poll only while a sink exists so finished playback gets reaped
        // and the transport controls stay truthful.
        if app.audio.playback.is_some() {
            subscriptions.push(time::every(Duration::from_millis(200)).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::PathInputChanged(path) => self.handle_path_input_changed(path),
            Message::LoadPathRequested => self.handle_load_path_requested(&mut effects),
            Message::FileHovered => self.handle_file_hovered(),
            Message::FileHoverLeft => self.handle_file_hover_left(),
            Message::FileDropped(path) => self.handle_file_dropped(path, &mut effects),
            Message::DocumentLoaded {
                request_id,
                path,
                document,
            } => self.handle_document_loaded(request_id, path, document),
            Message::DocumentLoadFailed {
                request_id,
                path,
                error,
            } => self.handle_document_load_failed(request_id, path, error),
            Message::ModeSelected(mode) => self.handle_mode_selected(mode),
            Message::LanguageSelected(language) => self.handle_language_selected(language),
            Message::AdvancedModelToggled(advanced) => {
                self.handle_advanced_model_toggled(advanced)
            }
            Message::VoiceSelected(voice) => self.handle_voice_selected(voice),
            Message::SubmitSummary => self.handle_submit_summary(&mut effects),
            Message::SummaryReady { request_id, result } => {
                self.handle_summary_ready(request_id, result)
            }
            Message::SummaryFailed { request_id, error } => {
                self.handle_summary_failed(request_id, error)
            }
            Message::ResultTabSelected(tab) => self.handle_result_tab_selected(tab),
            Message::SubmitAudio => self.handle_submit_audio(&mut effects),
            Message::AudioReady {
                request_id,
                artifact,
            } => self.handle_audio_ready(request_id, artifact),
            Message::AudioFailed { request_id, error } => {
                self.handle_audio_failed(request_id, error)
            }
            Message::TogglePlayback => self.handle_toggle_playback(&mut effects),
            Message::StopPlayback => effects.push(Effect::StopPlayback),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::DismissNotice => self.notice = None,
            Message::Tick(_now) => self.handle_tick(),
        }

        effects
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::FileHovered(_)) => Some(Message::FileHovered),
        Event::Window(window::Event::FilesHoveredLeft) => Some(Message::FileHoverLeft),
        Event::Window(window::Event::FileDropped(path)) => Some(Message::FileDropped(path)),
        _ => None,
    }
}
