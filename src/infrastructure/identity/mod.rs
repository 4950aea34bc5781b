//! Identity provider adapters.

mod dto;
mod local;
mod remote;

pub use local::LocalIdentityProvider;
pub use remote::RestIdentityClient;
