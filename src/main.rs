use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use lingotiles::application::SessionGate;
use lingotiles::domain::ports::{IdentityPort, MediaPort};
use lingotiles::infrastructure::{
    AppConfig, CliArgs, IdentityProviderKind, LocalIdentityProvider, ProcessPlayer,
    RestIdentityClient, StorageManager,
};
use lingotiles::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn load_config() -> Result<AppConfig> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;

    let mut config = storage.load_config(args.config.as_deref())?;
    config.merge_with_args(args);

    Ok(config)
}

fn build_identity(config: &AppConfig) -> Result<Arc<dyn IdentityPort>> {
    match config.identity.provider {
        IdentityProviderKind::Local => {
            let provider = match config.effective_accounts_file() {
                Some(path) => LocalIdentityProvider::with_store(path)?,
                None => {
                    warn!("No data directory, registrations will not be persisted");
                    LocalIdentityProvider::new()
                }
            };
            info!(accounts = provider.account_count(), "Using local identity provider");
            Ok(Arc::new(provider))
        }
        IdentityProviderKind::Remote => {
            let api_key = config
                .identity
                .api_key
                .clone()
                .ok_or_else(|| eyre!("remote identity provider requires an API key (--api-key)"))?;

            let client = match &config.identity.endpoint {
                Some(endpoint) => RestIdentityClient::with_base_url(endpoint, api_key)?,
                None => RestIdentityClient::new(api_key)?,
            };
            info!("Using remote identity provider");
            Ok(Arc::new(client))
        }
    }
}

fn create_app() -> Result<App> {
    let config = load_config()?;

    init_logging(&config)?;

    info!(version = lingotiles::VERSION, "Starting Lingotiles");

    let identity = build_identity(&config)?;
    let gate = SessionGate::new(identity).with_logout_delay(config.logout_delay());

    let assets_dir = config.effective_assets_dir();
    info!(assets = %assets_dir.display(), player = %config.media.player, "Audio player configured");
    let media: Arc<dyn MediaPort> = Arc::new(ProcessPlayer::new(
        assets_dir,
        config.media.player.clone(),
        config.media.player_args.clone(),
    ));

    Ok(App::new(gate, media, &config.ui))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
