//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Identity provider adapters.
pub mod identity;
/// Audio playback adapters.
pub mod media;

pub use config::{AppConfig, CliArgs, IdentityProviderKind, LogLevel, StorageManager};
pub use identity::{LocalIdentityProvider, RestIdentityClient};
pub use media::ProcessPlayer;
