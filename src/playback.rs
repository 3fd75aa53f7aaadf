//! Local playback of synthesized audio via `rodio`.
//!
//! The artifact's encoded bytes are decoded straight from memory; dropping
//! the `AudioPlayback` tears down the sink and the output stream, which is
//! how stale playback is guaranteed to die with its artifact.

use anyhow::{Context, Result};
use rodio::{Decoder, OutputStream, Sink};
use std::io::Cursor;
use tracing::{debug, info};

pub struct AudioPlayback {
    _stream: OutputStream,
    sink: Sink,
}

impl AudioPlayback {
    /// Start playing encoded audio (the service returns MP3).
    pub fn from_encoded(bytes: Vec<u8>) -> Result<Self> {
        let (_stream, handle) = OutputStream::try_default().context("Opening audio output")?;
        let sink = Sink::try_new(&handle).context("Creating audio sink")?;

        info!(bytes = bytes.len(), "Starting audio playback");
        let source = Decoder::new(Cursor::new(bytes)).context("Decoding synthesized audio")?;
        sink.append(source);
        sink.play();
        Ok(AudioPlayback { _stream, sink })
    }

    pub fn pause(&self) {
        debug!("Pausing playback");
        self.sink.pause();
    }

    pub fn resume(&self) {
        debug!("Resuming playback");
        self.sink.play();
    }

    pub fn stop(&self) {
        debug!("Stopping playback");
        self.sink.stop();
    }

    pub fn is_paused(&self) -> bool {
        self.sink.is_paused()
    }

    /// True once the sink has drained; the reducer reaps finished playback
    /// on the next tick so the controls read "Play" again.
    pub fn is_finished(&self) -> bool {
        self.sink.empty()
    }
}
