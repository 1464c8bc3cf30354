//! Twenty Twenty Twenty - A background break reminder
//!
//! This is the main entry point for the twenty-twenty-twenty application.

use std::{sync::Arc, time::Duration};
use tokio::net::TcpListener;
use tracing::{info, warn};

use twenty_twenty_twenty::{
    config::Config,
    state::AppState,
    api::serve,
    services::{check_sound_player, DesktopAlerter},
    tasks::status_refresh_task,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("twenty_twenty_twenty={},tower_http=info", config.log_level()))
        .init();

    info!("Starting twenty-twenty-twenty v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: host={}, port={}, interval={}s",
          config.host, config.port, config.interval);

    // Alerts still show without sound, so a missing player is not fatal
    if let Err(e) = check_sound_player(&config.sound_player).await {
        warn!("{}", e);
    }

    let alerter = Arc::new(DesktopAlerter::new(config.sound_player.clone()));
    let state = Arc::new(
        AppState::new(
            Duration::from_secs(config.interval),
            config.alert(),
            config.glyph(),
            alerter,
        )
        .map_err(anyhow::Error::msg)?,
    );

    // Keep the indicator label fresh
    let refresh_state = Arc::clone(&state);
    tokio::spawn(async move {
        status_refresh_task(refresh_state).await;
    });

    if config.autostart {
        state.start().map_err(anyhow::Error::msg)?;
    }

    let addr = config.address();
    let listener = TcpListener::bind(&addr).await?;

    info!("Status indicator on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /start      - Begin the break cycle");
    info!("  POST /stop       - End the break cycle");
    info!("  POST /test-alert - Fire an alert now");
    info!("  POST /quit       - Stop and exit");
    info!("  GET  /status     - Current schedule");
    info!("  GET  /indicator  - Status label and glyph");
    info!("  GET  /health     - Health check");

    if let Err(e) = serve(listener, state).await {
        tracing::error!("Server error: {}", e);
    }

    info!("Shutdown complete");
    Ok(())
}
