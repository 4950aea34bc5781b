//! Domain error types.

mod auth_error;
mod media_error;
mod validation_error;

pub use auth_error::AuthError;
pub use media_error::MediaError;
pub use validation_error::ValidationError;
