//! Lingotiles - a trilingual early-childhood learning app for the terminal.
//!
//! Children sign in, then pick colour, number and animal tiles that play a
//! pronunciation clip in Spanish, English or Portuguese. The crate follows a
//! clean architecture split into domain, application, infrastructure and
//! presentation layers.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "lingotiles";
