use super::super::messages::Message;
use super::super::state::App;
use super::Effect;
use crate::backend;
use crate::intake::load_document;
use crate::playback::AudioPlayback;
use iced::Task;
use tracing::{info, warn};

impl App {
    pub(super) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::LoadDocument { path, request_id } => Task::perform(
                async move {
                    match load_document(&path) {
                        Ok(document) => Message::DocumentLoaded {
                            request_id,
                            path,
                            document,
                        },
                        Err(err) => Message::DocumentLoadFailed {
                            request_id,
                            path,
                            error: err.to_string(),
                        },
                    }
                },
                |message| message,
            ),
            Effect::SubmitSummary {
                document,
                request,
                request_id,
            } => {
                let client = self.http.clone();
                info!(
                    request_id,
                    file = %document.file_name,
                    mode = %request.mode,
                    language = request.language.code(),
                    backend = %request.model_backend,
                    "Dispatching summarization request"
                );
                Task::perform(
                    async move {
                        match backend::summarize(
                            &client,
                            backend::SERVICE_ORIGIN,
                            document,
                            request,
                        )
                        .await
                        {
                            Ok(result) => Message::SummaryReady { request_id, result },
                            Err(err) => {
                                warn!(request_id, "Summarization request failed: {err:?}");
                                Message::SummaryFailed {
                                    request_id,
                                    error: err.to_string(),
                                }
                            }
                        }
                    },
                    |message| message,
                )
            }
            Effect::SubmitAudio {
                request,
                request_id,
            } => {
                let client = self.http.clone();
                info!(
                    request_id,
                    voice = request.voice.as_param(),
                    language = request.language.code(),
                    "Dispatching audio-synthesis request"
                );
                Task::perform(
                    async move {
                        match backend::synthesize(&client, backend::SERVICE_ORIGIN, request).await
                        {
                            Ok(artifact) => Message::AudioReady {
                                request_id,
                                artifact,
                            },
                            Err(err) => {
                                warn!(request_id, "Audio-synthesis request failed: {err:?}");
                                Message::AudioFailed {
                                    request_id,
                                    error: err.to_string(),
                                }
                            }
                        }
                    },
                    |message| message,
                )
            }
            Effect::StartPlayback => {
                let Some(artifact) = self.audio.artifact() else {
                    return Task::none();
                };
                match AudioPlayback::from_encoded(artifact.audio.clone()) {
                    Ok(playback) => {
                        self.audio.playback = Some(playback);
                    }
                    Err(err) => {
                        warn!("Could not start audio playback: {err:?}");
                        self.notice = Some(format!("Audio playback failed: {err}"));
                    }
                }
                Task::none()
            }
            Effect::StopPlayback => {
                self.audio.stop_playback();
                Task::none()
            }
        }
    }
}
