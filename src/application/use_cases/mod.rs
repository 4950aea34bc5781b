//! Use case implementations.

mod authenticate_use_case;

pub use authenticate_use_case::AuthenticateUseCase;
