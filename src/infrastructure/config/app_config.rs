//! Application configuration.

use crate::domain::entities::Language;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "lingotiles";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "linuxmobile";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from `config.toml` and CLI overrides.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration file path.
    #[serde(skip)]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Session configuration.
    #[serde(default)]
    pub session: SessionConfig,

    /// Identity provider configuration.
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Audio playback configuration.
    #[serde(default)]
    pub media: MediaConfig,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` animations, including the splash screen.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Toast duration in seconds.
    #[serde(default = "default_notification_duration")]
    pub notification_duration: u64,

    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,

    /// Language selected when the content browser opens.
    #[serde(default)]
    pub default_language: Language,

    /// Offer the demo accounts under the login form.
    #[serde(default = "default_true")]
    pub show_demo_accounts: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            notification_duration: default_notification_duration(),
            accent_color: default_accent_color(),
            default_language: Language::default(),
            show_demo_accounts: true,
        }
    }
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Pause before logout takes effect, in milliseconds. 0 disables it.
    #[serde(default = "default_logout_delay_ms")]
    pub logout_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            logout_delay_ms: default_logout_delay_ms(),
        }
    }
}

/// Which identity provider adapter to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProviderKind {
    /// In-process account registry.
    #[default]
    Local,
    /// Identity-Toolkit-style REST service.
    Remote,
}

/// Identity provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Adapter selection.
    #[serde(default)]
    pub provider: IdentityProviderKind,

    /// Base URL of the remote provider. Uses the provider default when unset.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// API key for the remote provider.
    #[serde(default)]
    pub api_key: Option<String>,

    /// File where the local provider keeps registered accounts.
    #[serde(default)]
    pub accounts_file: Option<PathBuf>,
}

/// Audio playback configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaConfig {
    /// Directory holding the `audio/` clip tree.
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,

    /// External player executable.
    #[serde(default = "default_player")]
    pub player: String,

    /// Player arguments. `{file}` is replaced with the clip path.
    #[serde(default = "default_player_args")]
    pub player_args: Vec<String>,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            player: default_player(),
            player_args: default_player_args(),
        }
    }
}

fn default_accent_color() -> String {
    "Yellow".to_string()
}

fn default_true() -> bool {
    true
}

fn default_notification_duration() -> u64 {
    4
}

fn default_logout_delay_ms() -> u64 {
    2_000
}

fn default_player() -> String {
    "ffplay".to_string()
}

fn default_player_args() -> Vec<String> {
    ["-nodisp", "-autoexit", "-loglevel", "quiet", "{file}"]
        .into_iter()
        .map(String::from)
        .collect()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(config_path) = args.config {
            self.config = Some(config_path);
        }
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(assets_dir) = args.assets_dir {
            self.media.assets_dir = Some(assets_dir);
        }
        if let Some(provider) = args.identity_provider {
            self.identity.provider = provider;
        }
        if let Some(api_key) = args.api_key {
            self.identity.api_key = Some(api_key);
        }
        if let Some(delay) = args.logout_delay_ms {
            self.session.logout_delay_ms = delay;
        }
        if let Some(language) = args.language {
            self.ui.default_language = language;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.ui.accent_color = accent_color;
        }
    }

    /// Returns default config directory.
    #[must_use]
    pub fn default_config_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Returns default data directory.
    #[must_use]
    pub fn default_data_dir() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_dir().to_path_buf())
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        Self::default_data_dir().map(|dir| dir.join("lingotiles.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }

    /// Returns effective assets directory: configured, else `<data dir>/assets`, else `./assets`.
    #[must_use]
    pub fn effective_assets_dir(&self) -> PathBuf {
        self.media
            .assets_dir
            .clone()
            .or_else(|| Self::default_data_dir().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }

    /// Returns effective local accounts file.
    #[must_use]
    pub fn effective_accounts_file(&self) -> Option<PathBuf> {
        self.identity
            .accounts_file
            .clone()
            .or_else(|| Self::default_data_dir().map(|dir| dir.join("accounts.toml")))
    }

    /// Returns the logout pause.
    #[must_use]
    pub const fn logout_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.session.logout_delay_ms)
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_sections() {
        let toml_content = r#"
            log_level = "debug"

            [ui]
            enable_animations = false
            default_language = "en"

            [session]
            logout_delay_ms = 0

            [identity]
            provider = "remote"
            api_key = "abc"

            [media]
            player = "afplay"
            player_args = ["{file}"]
        "#;

        let config: AppConfig = toml::from_str(toml_content).expect("Failed to parse config");

        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(!config.ui.enable_animations);
        assert!(config.ui.show_demo_accounts);
        assert_eq!(config.ui.default_language, Language::En);
        assert!(config.logout_delay().is_zero());
        assert_eq!(config.identity.provider, IdentityProviderKind::Remote);
        assert_eq!(config.identity.api_key.as_deref(), Some("abc"));
        assert_eq!(config.media.player, "afplay");
        assert_eq!(config.media.player_args, vec!["{file}".to_string()]);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.logout_delay(), std::time::Duration::from_secs(2));
        assert_eq!(config.identity.provider, IdentityProviderKind::Local);
        assert_eq!(config.ui.default_language, Language::Es);
        assert!(config.media.player_args.contains(&"{file}".to_string()));
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut config: AppConfig = toml::from_str("[session]\nlogout_delay_ms = 500").unwrap();
        let args = CliArgs {
            logout_delay_ms: Some(0),
            language: Some(Language::Pr),
            assets_dir: Some(PathBuf::from("/tmp/clips")),
            ..CliArgs::default()
        };

        config.merge_with_args(args);

        assert!(config.logout_delay().is_zero());
        assert_eq!(config.ui.default_language, Language::Pr);
        assert_eq!(config.effective_assets_dir(), PathBuf::from("/tmp/clips"));
    }
}
