use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;
use std::time::Duration;

mod channels;
mod config;
mod controllers;
mod error;
mod models;
mod notes;

use channels::TelegramChannel;
use config::Config;
use notes::NoteStore;

pub struct AppState {
    pub store: Arc<NoteStore>,
    pub config: Config,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();

    let Some(token) = config.bot_token.clone() else {
        log::error!(
            "No Telegram bot token configured. Set {} (or {}) in the environment or .env file",
            config::env_vars::TELOXIDE_TOKEN,
            config::env_vars::TOKEN
        );
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "missing Telegram bot token",
        ));
    };

    log::info!("Opening note database at {}", config.database_url);
    let store = NoteStore::open(&config.database_url).map_err(|e| {
        log::error!("Failed to initialize note database: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    let store = Arc::new(store);

    match store.count() {
        Ok(count) => log::info!("[NOTES] {} notes on record", count),
        Err(e) => log::warn!("[NOTES] Could not count notes: {}", e),
    }

    log::info!(
        "Inline and HTTP search capped at {} results",
        config.search_result_limit
    );

    let telegram = TelegramChannel::new(&token, store.clone(), config.search_result_limit);
    let telegram_handle = tokio::spawn(telegram.run());

    let host = config.host.clone();
    let port = config.port;
    let state = web::Data::new(AppState {
        store: store.clone(),
        config,
    });

    log::info!("[HTTP] Listening on http://{}:{}", host, port);

    // Stops on Ctrl+C; the Telegram dispatcher has its own Ctrl+C handler
    let server_result = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await;

    log::info!("Shutting down...");

    if tokio::time::timeout(Duration::from_secs(5), telegram_handle)
        .await
        .is_err()
    {
        log::warn!("Timeout waiting for Telegram dispatcher to stop, continuing shutdown...");
    }

    if let Err(e) = store.checkpoint() {
        log::warn!("[NOTES] Final checkpoint failed: {}", e);
    }

    server_result
}
