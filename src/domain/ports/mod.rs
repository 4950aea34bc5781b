mod identity_port;
mod media_port;

pub use identity_port::IdentityPort;
pub use media_port::{ActivePlayback, MediaPort, PlaybackStatus};

#[cfg(test)]
pub use identity_port::MockIdentityPort;

#[cfg(test)]
pub mod mocks {
    pub use super::media_port::mock::{MockMediaPort, MockPlayback};
}
