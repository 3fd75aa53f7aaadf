use super::messages::Message;
use super::state::{
    App, AudioLifecycle, ResultTab, CHIP_FONT_SIZE_PX, RESULT_MIN_HEIGHT_PX, SIDEBAR_WIDTH_PX,
    SUMMARY_MODES, SUMMARY_SCROLL_ID, TARGET_LANGUAGES, VOICES,
};
use crate::backend::AudioArtifact;
use crate::config::ThemeMode;
use iced::widget::{
    button, checkbox, column, container, horizontal_space, pick_list, radio, row, scrollable,
    text, text_input, tooltip, Column, Row,
};
use iced::{Element, Length};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let theme_label = if matches!(self.config.theme, ThemeMode::Night) {
            "Day Mode"
        } else {
            "Night Mode"
        };
        let header = row![
            column![
                text("PodifyAI").size(24),
                text("Documents that speak").size(14)
            ]
            .spacing(2),
            horizontal_space(),
            button(theme_label).on_press(Message::ToggleTheme),
        ]
        .spacing(12)
        .width(Length::Fill);

        let body = row![
            container(self.sidebar()).width(Length::Fixed(SIDEBAR_WIDTH_PX)),
            container(self.results_panel()).width(Length::Fill),
        ]
        .spacing(16)
        .height(Length::Fill);

        let mut layout: Column<'_, Message> = column![header, body]
            .padding(16)
            .spacing(12)
            .height(Length::Fill);

        if let Some(notice) = &self.notice {
            layout = layout.push(
                container(
                    row![
                        text(notice.as_str()),
                        horizontal_space(),
                        button("Dismiss").on_press(Message::DismissNotice),
                    ]
                    .spacing(12),
                )
                .padding(8)
                .width(Length::Fill),
            );
        }

        layout.into()
    }

    fn sidebar(&self) -> Element<'_, Message> {
        let dropzone_label = if self.intake.drag_active {
            "Release to load the document"
        } else {
            "Drag a PDF, TXT, or DOCX file here"
        };
        let dropzone = container(text(dropzone_label))
            .padding(24)
            .width(Length::Fill)
            .center_x(Length::Fill);

        let load_button = if self.intake.loading {
            button("Loading...")
        } else {
            button("Load").on_press(Message::LoadPathRequested)
        };
        let path_row = row![
            text_input("Path to a document", &self.intake.path_input)
                .on_input(Message::PathInputChanged)
                .on_submit(Message::LoadPathRequested),
            load_button,
        ]
        .spacing(8);

        let file_caption = match &self.intake.document {
            Some(document) => format!("Selected: {}", document.file_name),
            None => "No document selected".to_string(),
        };

        let mode_picker = SUMMARY_MODES.iter().fold(
            column![text("Summary depth")].spacing(6),
            |col, mode| {
                col.push(radio(
                    mode.to_string(),
                    *mode,
                    Some(self.generation.mode),
                    Message::ModeSelected,
                ))
            },
        );

        let language_picker = column![
            text("Translate to"),
            pick_list(
                TARGET_LANGUAGES,
                Some(self.generation.language),
                Message::LanguageSelected,
            )
            .width(Length::Fill),
        ]
        .spacing(6);

        let model_toggle = checkbox(
            "Advanced model",
            matches!(
                self.generation.model_backend,
                crate::backend::ModelBackend::Advanced
            ),
        )
        .on_toggle(Message::AdvancedModelToggled);

        let submit_label = if self.summary.is_in_flight() {
            "Generating..."
        } else {
            "Generate Summary"
        };
        let submit_button = if self.can_submit_summary() {
            button(submit_label).on_press(Message::SubmitSummary)
        } else {
            button(submit_label)
        };

        column![
            dropzone,
            path_row,
            text(file_caption).size(CHIP_FONT_SIZE_PX),
            mode_picker,
            language_picker,
            model_toggle,
            submit_button,
        ]
        .spacing(14)
        .into()
    }

    fn results_panel(&self) -> Element<'_, Message> {
        if !self.results_available() {
            return container(text("Your summaries will appear here."))
                .width(Length::Fill)
                .height(Length::Fixed(RESULT_MIN_HEIGHT_PX))
                .center_x(Length::Fill)
                .center_y(Length::Fill)
                .into();
        }

        let tab_button = |label: &'static str, tab: ResultTab, active: ResultTab| {
            if tab == active {
                button(label)
            } else {
                button(label).on_press(Message::ResultTabSelected(tab))
            }
        };
        let mut tab_row: Row<'_, Message> = row![
            tab_button("Original", ResultTab::Original, self.active_tab),
            tab_button("Translated", ResultTab::Translated, self.active_tab),
        ]
        .spacing(8);

        if let Some(metrics) = self.metrics() {
            tab_row = tab_row.push(horizontal_space()).push(tooltip(
                text(metrics.total_label()).size(CHIP_FONT_SIZE_PX),
                container(text(metrics.breakdown_label()).size(CHIP_FONT_SIZE_PX)).padding(6),
                tooltip::Position::Bottom,
            ));
        }

        let summary_view = scrollable(
            container(text(self.displayed_summary()))
                .width(Length::Fill)
                .padding(12),
        )
        .id(SUMMARY_SCROLL_ID.clone())
        .height(Length::Fill);

        let mut panel: Column<'_, Message> = column![tab_row, summary_view]
            .spacing(10)
            .height(Length::Fill);

        if self.show_voice_controls() {
            let synth_label = if self.audio.is_in_flight() {
                "Synthesizing..."
            } else {
                "Generate Audio"
            };
            let synth_button = if self.can_submit_audio() {
                button(synth_label).on_press(Message::SubmitAudio)
            } else {
                button(synth_label)
            };
            let voice_row = row![
                pick_list(VOICES, Some(self.voice), Message::VoiceSelected),
                synth_button,
            ]
            .spacing(8);
            panel = panel.push(voice_row);
        }

        if let AudioLifecycle::Ready(artifact) = &self.audio.lifecycle {
            panel = panel.push(self.player_row(artifact));
        }

        panel.into()
    }

    fn player_row(&self, artifact: &AudioArtifact) -> Element<'_, Message> {
        let transport_label = match &self.audio.playback {
            Some(playback) if !playback.is_paused() => "Pause",
            Some(_) => "Resume",
            None => "Play",
        };
        let stop_button = if self.audio.playback.is_some() {
            button("Stop").on_press(Message::StopPlayback)
        } else {
            button("Stop")
        };

        row![
            button(transport_label).on_press(Message::TogglePlayback),
            stop_button,
            text(format!("Voice: {}", artifact.voice)).size(CHIP_FONT_SIZE_PX),
        ]
        .spacing(8)
        .into()
    }
}
