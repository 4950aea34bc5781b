use super::app_config::{IdentityProviderKind, LogLevel};
use crate::domain::entities::Language;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(
    name = "lingotiles",
    version,
    about = "Learn colors, numbers and animals in Spanish, English and Portuguese",
    long_about = None
)]
pub struct CliArgs {
    /// Configuration file path.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Directory holding the `audio/` clip tree.
    #[arg(long, value_name = "PATH", env = "LINGOTILES_ASSETS_DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Identity provider to authenticate against.
    #[arg(long, value_enum)]
    pub identity_provider: Option<IdentityProviderKind>,

    /// API key for the remote identity provider.
    #[arg(long, env = "LINGOTILES_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Pause before logout takes effect, in milliseconds. 0 disables it.
    #[arg(long, value_name = "MS")]
    pub logout_delay_ms: Option<u64>,

    /// Language selected when the content browser opens.
    #[arg(long, value_enum)]
    pub language: Option<Language>,

    /// Enable `TachyonFX` animations.
    #[arg(long)]
    pub enable_animations: Option<bool>,

    /// Accent color (name or hex code).
    #[arg(long)]
    pub accent_color: Option<String>,
}
