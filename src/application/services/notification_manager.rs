use std::time::Duration;

use crate::domain::{Notification, NotificationLevel};

/// Single toast slot. A new toast replaces whatever is on screen.
#[derive(Debug)]
pub struct NotificationManager {
    current: Option<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    #[must_use]
    pub const fn new(default_duration: Duration) -> Self {
        Self {
            current: None,
            default_duration,
        }
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.current =
            Some(Notification::new(level, message).with_duration(self.default_duration));
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Success, message);
    }

    pub fn danger(&mut self, message: impl Into<String>) {
        self.notify(NotificationLevel::Danger, message);
    }

    pub fn tick(&mut self) {
        if let Some(current) = self.current.as_mut() {
            current.mark_displayed();
            if current.is_expired() {
                self.current = None;
            }
        }
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub const fn current_notification(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    #[must_use]
    pub const fn has_notification(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn test_latest_overwrites() {
        let mut manager = NotificationManager::default();
        manager.danger("first");
        manager.danger("second");

        assert_eq!(manager.current_notification().unwrap().message, "second");
    }

    #[test]
    fn test_expiry_clears_slot() {
        let mut manager = NotificationManager::default();
        manager.info("hola");
        manager.tick();
        assert!(manager.has_notification());

        manager.current.as_mut().unwrap().displayed_at =
            Some(Instant::now().checked_sub(Duration::from_secs(10)).unwrap());
        manager.tick();

        assert!(!manager.has_notification());
    }

    #[test]
    fn test_overwrite_restarts_clock() {
        let mut manager = NotificationManager::default();
        manager.danger("old");
        manager.tick();
        manager.danger("new");

        let current = manager.current_notification().unwrap();
        assert!(current.displayed_at.is_none());
        assert_eq!(current.level, NotificationLevel::Danger);
    }
}
