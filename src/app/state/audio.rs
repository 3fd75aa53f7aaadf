use crate::backend::AudioArtifact;
use crate::playback::AudioPlayback;

/// Lifecycle of the audio-synthesis phase, independent of summarization
/// except for the forced reset on a new document submission.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioLifecycle {
    Idle,
    InFlight { request_id: u64 },
    Ready(AudioArtifact),
}

pub struct AudioState {
    pub(in crate::app) lifecycle: AudioLifecycle,
    pub(in crate::app) request_id: u64,
    pub(in crate::app) playback: Option<AudioPlayback>,
}

impl AudioState {
    pub(in crate::app) fn new() -> Self {
        AudioState {
            lifecycle: AudioLifecycle::Idle,
            request_id: 0,
            playback: None,
        }
    }

    pub(in crate::app) fn is_in_flight(&self) -> bool {
        matches!(self.lifecycle, AudioLifecycle::InFlight { .. })
    }

    pub(in crate::app) fn in_flight_request(&self) -> Option<u64> {
        match self.lifecycle {
            AudioLifecycle::InFlight { request_id } => Some(request_id),
            _ => None,
        }
    }

    pub(in crate::app) fn artifact(&self) -> Option<&AudioArtifact> {
        match &self.lifecycle {
            AudioLifecycle::Ready(artifact) => Some(artifact),
            _ => None,
        }
    }

    /// Drop any prior artifact and enter the in-flight state under a fresh
    /// request id.
    pub(in crate::app) fn begin(&mut self) -> u64 {
        self.stop_playback();
        self.request_id = self.request_id.wrapping_add(1);
        self.lifecycle = AudioLifecycle::InFlight {
            request_id: self.request_id,
        };
        self.request_id
    }

    /// Forced reset when a new summarization begins: artifact and playback
    /// are gone, and the bumped id makes any still-running synthesis stale.
    pub(in crate::app) fn invalidate(&mut self) {
        self.stop_playback();
        self.request_id = self.request_id.wrapping_add(1);
        self.lifecycle = AudioLifecycle::Idle;
    }

    pub(in crate::app) fn stop_playback(&mut self) {
        if let Some(playback) = self.playback.take() {
            playback.stop();
        }
    }
}
