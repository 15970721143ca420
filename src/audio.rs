//! Audio clip playback capability
//!
//! The session picks which explosion clip to play; the host owns the actual
//! clips and restarts the chosen one from time zero.

/// Sound playback service consumed by the session
pub trait AudioSink {
    /// Restart explosion clip `clip` from the beginning and play it
    ///
    /// `clip` is always below the configured clip count.
    fn play_explosion(&mut self, clip: usize);
}

/// Sink that only logs what would have played
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play_explosion(&mut self, clip: usize) {
        log::debug!("Playing explosion clip {}", clip);
    }
}

/// Sink that remembers every requested clip
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<usize>,
}

impl AudioSink for RecordingAudio {
    fn play_explosion(&mut self, clip: usize) {
        self.played.push(clip);
    }
}
