//! UI screens.

mod app;
mod auth_screen;
mod home_screen;
mod notification_popup;
mod splash_screen;

pub use app::App;
pub use auth_screen::{AuthAction, AuthField, AuthScreen, AuthState};
pub use home_screen::{HomeAction, HomeScreen};
pub use notification_popup::NotificationPopup;
pub use splash_screen::SplashScreen;
