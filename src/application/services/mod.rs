//! Stateful application services.

pub mod form_validation;
mod notification_manager;
mod playback_slot;
mod session_gate;

pub use form_validation::{FieldErrors, validate_email, validate_password};
pub use notification_manager::NotificationManager;
pub use playback_slot::PlaybackSlot;
pub use session_gate::SessionGate;
