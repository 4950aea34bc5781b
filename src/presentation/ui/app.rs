//! Main application orchestrator.

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::{DefaultTerminal, Frame};
use tokio::sync::mpsc;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info, warn};

use crate::application::dto::AuthRequest;
use crate::application::services::{NotificationManager, SessionGate};
use crate::domain::entities::{Language, Session};
use crate::domain::errors::AuthError;
use crate::domain::ports::MediaPort;
use crate::infrastructure::config::UiConfig;
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Palette;
use crate::presentation::ui::{
    AuthAction, AuthScreen, HomeAction, HomeScreen, NotificationPopup, SplashScreen,
};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);

#[derive(Debug)]
enum Action {
    AuthSucceeded(Session),
    AuthFailed(AuthError),
    LoggedOut,
}

enum CurrentScreen {
    Splash(SplashScreen),
    Auth(AuthScreen),
    Home(Box<HomeScreen>),
}

pub struct App {
    screen: CurrentScreen,
    gate: SessionGate,
    media: Arc<dyn MediaPort>,
    notifications: NotificationManager,
    palette: Palette,
    default_language: Language,
    show_demo_accounts: bool,
    action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(gate: SessionGate, media: Arc<dyn MediaPort>, ui: &UiConfig) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let mut app = Self {
            screen: CurrentScreen::Splash(SplashScreen::new()),
            gate,
            media,
            notifications: NotificationManager::new(Duration::from_secs(ui.notification_duration)),
            palette: Palette::new(&ui.accent_color),
            default_language: ui.default_language,
            show_demo_accounts: ui.show_demo_accounts,
            action_tx,
            action_rx,
            should_quit: false,
        };

        if !ui.enable_animations {
            app.route();
        }

        app
    }

    /// # Errors
    /// Returns error if drawing to the terminal fails.
    pub async fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.run_event_loop(terminal).await?;
        info!("Application exiting normally");
        Ok(())
    }

    async fn run_event_loop(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        let mut terminal_events = EventStream::new();
        let mut animation_interval = interval(ANIMATION_TICK_RATE);
        animation_interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        terminal.draw(|frame| self.render(frame))?;

        while !self.should_quit {
            let terminal_event = terminal_events.next();

            tokio::select! {
                biased;

                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action);
                    terminal.draw(|frame| self.render(frame))?;
                }

                _ = animation_interval.tick(), if self.is_animating() => {
                    self.tick(ANIMATION_TICK_RATE);
                    terminal.draw(|frame| self.render(frame))?;
                }

                Some(Ok(event)) = terminal_event => {
                    if self.handle_terminal_event(event) == EventResult::Exit {
                        self.should_quit = true;
                    }
                    terminal.draw(|frame| self.render(frame))?;
                }

                else => {
                    warn!("Terminal event stream closed");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Whether anything on screen changes without input.
    fn is_animating(&self) -> bool {
        self.notifications.has_notification()
            || match &self.screen {
                CurrentScreen::Splash(_) => true,
                CurrentScreen::Auth(_) => false,
                CurrentScreen::Home(home) => home.is_animating(),
            }
    }

    fn tick(&mut self, elapsed: Duration) {
        self.notifications.tick();

        match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                splash.tick(elapsed);
                if splash.is_complete() {
                    self.route();
                }
            }
            CurrentScreen::Home(home) => home.tick(),
            CurrentScreen::Auth(_) => {}
        }
    }

    /// Mounts the flow matching the session: home when signed in, the form otherwise.
    fn route(&mut self) {
        let session = self.gate.session();

        self.screen = match session.user() {
            Some(user) => {
                debug!(user = %user.email(), "Mounting home");
                CurrentScreen::Home(Box::new(HomeScreen::new(
                    Arc::clone(&self.media),
                    self.default_language,
                    user.display_name(),
                    self.palette,
                )))
            }
            None => {
                debug!("Mounting auth form");
                CurrentScreen::Auth(AuthScreen::new(self.palette, self.show_demo_accounts))
            }
        };
    }

    fn render(&mut self, frame: &mut Frame) {
        match &mut self.screen {
            CurrentScreen::Splash(screen) => {
                frame.render_widget(screen, frame.area());
            }
            CurrentScreen::Auth(screen) => {
                frame.render_widget(&*screen, frame.area());
            }
            CurrentScreen::Home(screen) => {
                frame.render_widget(screen.as_mut(), frame.area());
            }
        }

        if let Some(notification) = self.notifications.current_notification() {
            frame.render_widget(
                NotificationPopup::new(notification, &self.palette),
                frame.area(),
            );
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match &mut self.screen {
            CurrentScreen::Splash(splash) => {
                splash.skip();
                self.route();
                EventResult::Consumed
            }
            CurrentScreen::Auth(screen) => match screen.handle_key(key) {
                AuthAction::Submit(request) => {
                    self.submit(request);
                    EventResult::Consumed
                }
                AuthAction::Quit => EventResult::Exit,
                AuthAction::None => EventResult::Continue,
            },
            CurrentScreen::Home(screen) => match screen.handle_key(key) {
                HomeAction::Logout => {
                    self.logout();
                    EventResult::Consumed
                }
                HomeAction::Quit => EventResult::Exit,
                HomeAction::None => EventResult::Continue,
            },
        }
    }

    fn submit(&self, request: AuthRequest) {
        info!(mode = %request.mode, email = %request.credentials.email(), "Submitting credentials");

        let gate = self.gate.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let action = match gate.submit(request).await {
                Ok(session) => Action::AuthSucceeded(session),
                Err(e) => Action::AuthFailed(e),
            };
            let _ = tx.send(action);
        });
    }

    fn logout(&self) {
        info!(delay = ?self.gate.logout_delay(), "Logging out");

        let gate = self.gate.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            gate.logout().await;
            let _ = tx.send(Action::LoggedOut);
        });
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::AuthSucceeded(session) => {
                if let Some(user) = session.user() {
                    info!(user = %user.display_name(), "Authenticated");
                }
                self.notifications.dismiss();
                self.route();
            }
            Action::AuthFailed(error) => {
                warn!(error = %error, "Authentication failed");
                self.notifications.danger(error.user_message());
                if let CurrentScreen::Auth(screen) = &mut self.screen {
                    screen.set_failed();
                }
            }
            Action::LoggedOut => {
                info!("Logged out");
                self.route();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::AuthMode;
    use crate::domain::entities::{Credentials, User};
    use crate::domain::ports::MockIdentityPort;
    use crate::domain::ports::mocks::MockMediaPort;
    use crate::presentation::ui::AuthState;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ui(enable_animations: bool) -> UiConfig {
        UiConfig {
            enable_animations,
            ..UiConfig::default()
        }
    }

    fn identity() -> MockIdentityPort {
        let mut identity = MockIdentityPort::new();
        identity.expect_login().returning(|c| {
            if c.password() == "111111" {
                Ok(User::new("1", c.email(), Some("Admin".to_string())))
            } else {
                Err(AuthError::InvalidCredentials)
            }
        });
        identity.expect_logout().returning(|| Ok(()));
        identity
    }

    fn app(identity: MockIdentityPort, delay: Duration) -> App {
        let gate = SessionGate::new(Arc::new(identity)).with_logout_delay(delay);
        App::new(gate, Arc::new(MockMediaPort::new()), &ui(false))
    }

    async fn next_action(app: &mut App) {
        let action = app.action_rx.recv().await.unwrap();
        app.handle_action(action);
    }

    #[test]
    fn test_starts_on_splash_with_animations() {
        let gate = SessionGate::new(Arc::new(identity()));
        let app = App::new(gate, Arc::new(MockMediaPort::new()), &ui(true));
        assert!(matches!(app.screen, CurrentScreen::Splash(_)));
    }

    #[test]
    fn test_routes_to_auth_without_animations() {
        let app = app(identity(), Duration::ZERO);
        assert!(matches!(app.screen, CurrentScreen::Auth(_)));
    }

    #[test]
    fn test_key_skips_splash() {
        let gate = SessionGate::new(Arc::new(identity()));
        let mut app = App::new(gate, Arc::new(MockMediaPort::new()), &ui(true));

        assert_eq!(app.handle_key(key(KeyCode::Enter)), EventResult::Consumed);
        assert!(matches!(app.screen, CurrentScreen::Auth(_)));
    }

    #[test]
    fn test_idle_form_does_not_animate() {
        let mut app = app(identity(), Duration::ZERO);
        assert!(!app.is_animating());

        app.notifications.danger("fallo");
        assert!(app.is_animating());

        app.notifications.dismiss();
        assert!(!app.is_animating());
    }

    #[test]
    fn test_splash_animates() {
        let gate = SessionGate::new(Arc::new(identity()));
        let app = App::new(gate, Arc::new(MockMediaPort::new()), &ui(true));
        assert!(app.is_animating());
    }

    #[test]
    fn test_ctrl_c_exits_from_form() {
        let mut app = app(identity(), Duration::ZERO);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), EventResult::Exit);
    }

    #[tokio::test]
    async fn test_demo_login_mounts_home() {
        let mut app = app(identity(), Duration::ZERO);

        app.handle_key(key(KeyCode::F(1)));
        next_action(&mut app).await;

        assert!(app.gate.is_authenticated());
        let CurrentScreen::Home(home) = &app.screen else {
            panic!("expected home screen");
        };
        assert_eq!(home.language(), Language::Es);
    }

    #[tokio::test]
    async fn test_rejected_login_toasts_and_returns_to_input() {
        let mut app = app(identity(), Duration::ZERO);
        let request = AuthRequest::new(
            AuthMode::Login,
            Credentials::new("admin@admin.com", "999999"),
        );

        app.submit(request);
        next_action(&mut app).await;

        assert!(!app.gate.is_authenticated());
        assert_eq!(
            app.notifications.current_notification().unwrap().message,
            AuthError::InvalidCredentials.user_message()
        );
        let CurrentScreen::Auth(screen) = &app.screen else {
            panic!("expected auth screen");
        };
        assert_eq!(screen.state(), AuthState::Input);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_returns_to_form_after_delay() {
        let mut app = app(identity(), Duration::from_secs(2));
        app.handle_key(key(KeyCode::F(1)));
        next_action(&mut app).await;

        assert_eq!(app.handle_key(key(KeyCode::Char('s'))), EventResult::Consumed);
        let CurrentScreen::Home(home) = &app.screen else {
            panic!("expected home screen");
        };
        assert!(home.is_logging_out());
        assert!(app.is_animating());

        let started = tokio::time::Instant::now();
        next_action(&mut app).await;

        assert!(started.elapsed() >= Duration::from_secs(2));
        assert!(!app.gate.is_authenticated());
        assert!(matches!(app.screen, CurrentScreen::Auth(_)));
    }
}
