//! Application layer with use cases, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{AuthMode, AuthRequest};
pub use services::{NotificationManager, PlaybackSlot, SessionGate};
pub use use_cases::AuthenticateUseCase;
