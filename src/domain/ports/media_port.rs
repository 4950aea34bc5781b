//! Audio playback port definition.

use crate::domain::entities::SoundRef;
use crate::domain::errors::MediaError;

/// Progress of an acquired playback.
#[derive(Debug)]
pub enum PlaybackStatus {
    /// Still producing sound.
    Playing,
    /// Ran to completion.
    Finished,
    /// Ended abnormally.
    Failed(MediaError),
}

/// A loaded, playing sound. Dropping the handle releases its resources.
pub trait ActivePlayback: Send {
    /// Sound being played.
    fn sound(&self) -> &SoundRef;

    /// Stops playback and releases the underlying resources.
    fn stop(&mut self);

    /// Polls without blocking.
    fn status(&mut self) -> PlaybackStatus;
}

/// Port for loading and playing pronunciation clips.
pub trait MediaPort: Send + Sync {
    /// Loads `sound` and starts playing it.
    ///
    /// # Errors
    /// Returns `MediaError::LoadFailure` if the clip cannot be loaded.
    fn load_and_play(&self, sound: &SoundRef) -> Result<Box<dyn ActivePlayback>, MediaError>;
}
