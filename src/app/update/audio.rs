use super::super::state::{App, AudioLifecycle};
use super::Effect;
use crate::backend::{AudioArtifact, AudioRequest};
use tracing::{debug, info, warn};

impl App {
    /// Snapshot the translated text, language, and voice and dispatch a
    /// synthesis request. Rejected while either phase is still in flight.
    pub(super) fn handle_submit_audio(&mut self, effects: &mut Vec<Effect>) {
        if self.audio.is_in_flight() {
            debug!("Ignoring audio submit while a synthesis request is in flight");
            return;
        }
        if self.summary.is_in_flight() {
            debug!("Rejecting audio submit while summarization is in flight");
            return;
        }
        let Some(translated) = self.summary.translated_summary() else {
            self.notice = Some("Generate a summary first.".to_string());
            return;
        };

        let request = AudioRequest {
            translated_summary: translated.to_string(),
            language: self.generation.language,
            voice: self.voice,
        };
        let request_id = self.audio.begin();
        self.notice = None;

        effects.push(Effect::SubmitAudio {
            request,
            request_id,
        });
    }

    pub(super) fn handle_audio_ready(&mut self, request_id: u64, artifact: AudioArtifact) {
        if self.audio.in_flight_request() != Some(request_id) {
            warn!(request_id, "Ignoring stale audio-synthesis completion");
            return;
        }
        info!(
            request_id,
            voice = artifact.voice.as_param(),
            bytes = artifact.audio.len(),
            "Audio artifact ready"
        );
        self.audio.lifecycle = AudioLifecycle::Ready(artifact);
    }

    pub(super) fn handle_audio_failed(&mut self, request_id: u64, error: String) {
        if self.audio.in_flight_request() != Some(request_id) {
            warn!(request_id, "Ignoring stale audio-synthesis failure");
            return;
        }
        warn!(request_id, "Audio synthesis failed: {error}");
        self.audio.lifecycle = AudioLifecycle::Idle;
        self.notice = Some(format!("Failed to generate audio: {error}"));
    }

    pub(super) fn handle_toggle_playback(&mut self, effects: &mut Vec<Effect>) {
        if let Some(playback) = &self.audio.playback {
            if playback.is_paused() {
                playback.resume();
            } else {
                playback.pause();
            }
        } else if self.audio.artifact().is_some() {
            effects.push(Effect::StartPlayback);
        }
    }

    /// Reap the sink once it drains so the transport controls reset.
    pub(super) fn handle_tick(&mut self) {
        let finished = self
            .audio
            .playback
            .as_ref()
            .is_some_and(|playback| playback.is_finished());
        if finished {
            debug!("Playback finished; releasing sink");
            self.audio.playback = None;
        }
    }
}
