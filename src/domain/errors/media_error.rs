//! Media playback error types.

use thiserror::Error;

/// Media error variants. Never shown to the user; logged and dropped.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum MediaError {
    #[error("failed to load sound {sound}: {message}")]
    LoadFailure { sound: String, message: String },

    #[error("playback of {sound} failed: {message}")]
    PlaybackFailure { sound: String, message: String },
}

impl MediaError {
    /// Creates load failure.
    #[must_use]
    pub fn load(sound: impl Into<String>, message: impl Into<String>) -> Self {
        Self::LoadFailure {
            sound: sound.into(),
            message: message.into(),
        }
    }

    /// Creates playback failure.
    #[must_use]
    pub fn playback(sound: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PlaybackFailure {
            sound: sound.into(),
            message: message.into(),
        }
    }
}
