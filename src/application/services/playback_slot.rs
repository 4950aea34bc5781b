//! The single "currently playing" sound of the content browser.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::SoundRef;
use crate::domain::ports::{ActivePlayback, MediaPort, PlaybackStatus};

/// Owns at most one playback handle at a time.
///
/// Replacing the handle always releases the previous one before the new one
/// is acquired. Failures are logged and swallowed.
pub struct PlaybackSlot {
    media: Arc<dyn MediaPort>,
    current: Option<Box<dyn ActivePlayback>>,
}

impl PlaybackSlot {
    #[must_use]
    pub fn new(media: Arc<dyn MediaPort>) -> Self {
        Self {
            media,
            current: None,
        }
    }

    /// Stops whatever is playing and starts `sound`.
    pub fn play(&mut self, sound: &SoundRef) {
        self.release();

        match self.media.load_and_play(sound) {
            Ok(handle) => {
                debug!(sound = %sound, "Playback started");
                self.current = Some(handle);
            }
            Err(e) => {
                warn!(sound = %sound, error = %e, "Failed to play sound");
            }
        }
    }

    /// Stops and drops the current handle, if any.
    pub fn release(&mut self) {
        if let Some(mut handle) = self.current.take() {
            debug!(sound = %handle.sound(), "Releasing playback");
            handle.stop();
        }
    }

    /// Drops the handle once playback has ended on its own.
    pub fn poll(&mut self) {
        let Some(handle) = self.current.as_mut() else {
            return;
        };

        match handle.status() {
            PlaybackStatus::Playing => {}
            PlaybackStatus::Finished => {
                debug!(sound = %handle.sound(), "Playback finished");
                self.current = None;
            }
            PlaybackStatus::Failed(e) => {
                warn!(error = %e, "Playback failed");
                self.current = None;
            }
        }
    }

    /// Sound currently held, if any.
    #[must_use]
    pub fn current_sound(&self) -> Option<&SoundRef> {
        self.current.as_ref().map(|handle| handle.sound())
    }

    #[must_use]
    pub const fn is_playing(&self) -> bool {
        self.current.is_some()
    }
}

impl Drop for PlaybackSlot {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Item, Language};
    use crate::domain::ports::mocks::MockMediaPort;

    #[test]
    fn test_new_selection_releases_previous_first() {
        let media = Arc::new(MockMediaPort::new());
        let mut slot = PlaybackSlot::new(media.clone());

        slot.play(&Item::Red.sound(Language::Es));
        slot.play(&Item::Blue.sound(Language::Es));
        slot.play(&Item::Green.sound(Language::Es));

        assert_eq!(media.loaded().len(), 3);
        assert_eq!(media.max_live_at_acquire(), 0);
        assert_eq!(media.live_handles(), 1);
        assert_eq!(slot.current_sound(), Some(&Item::Green.sound(Language::Es)));
    }

    #[test]
    fn test_failure_is_swallowed_and_slot_left_empty() {
        let media = Arc::new(MockMediaPort::new());
        let mut slot = PlaybackSlot::new(media.clone());

        slot.play(&Item::Dog.sound(Language::En));
        media.set_failing(true);
        slot.play(&Item::Cat.sound(Language::En));

        assert!(!slot.is_playing());
        assert_eq!(media.live_handles(), 0);
    }

    #[test]
    fn test_drop_releases_handle() {
        let media = Arc::new(MockMediaPort::new());
        {
            let mut slot = PlaybackSlot::new(media.clone());
            slot.play(&Item::One.sound(Language::Pr));
            assert_eq!(media.live_handles(), 1);
        }
        assert_eq!(media.live_handles(), 0);
    }

    #[test]
    fn test_poll_keeps_playing_handle() {
        let media = Arc::new(MockMediaPort::new());
        let mut slot = PlaybackSlot::new(media);

        slot.play(&Item::Lion.sound(Language::Es));
        slot.poll();

        assert!(slot.is_playing());
    }
}
