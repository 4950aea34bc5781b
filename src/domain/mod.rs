//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Notification model.
pub mod notification;
/// Port definitions.
pub mod ports;

pub use entities::{
    ContentTile, Credentials, ImageRef, Item, Language, Session, SoundRef, Theme, User, catalog,
};
pub use errors::{AuthError, MediaError, ValidationError};
pub use notification::{Notification, NotificationLevel};
pub use ports::{ActivePlayback, IdentityPort, MediaPort};
