//! Domain entity definitions.

pub mod catalog;
mod credentials;
mod demo_account;
mod language;
mod session;
mod theme;
mod user;

pub use catalog::{ContentTile, ImageRef, Item, SoundRef};
pub use credentials::Credentials;
pub use demo_account::{DEMO_ACCOUNTS, DemoAccount};
pub use language::Language;
pub use session::Session;
pub use theme::Theme;
pub use user::User;
