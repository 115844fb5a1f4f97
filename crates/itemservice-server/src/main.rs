use anyhow::{Context, Result};
use itemservice::{router, AppState, Config, ItemStore, MemoryItemStore, MessageSource, SqlItemStore};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // .env first so RUST_LOG from it reaches the filter
    let env_error = env_file_error(dotenvy::dotenv());
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
    if let Some(e) = env_error {
        warn!("Failed to read .env: {}", e);
    }

    let config_path = std::env::var("ITEMSERVICE_CONFIG")
        .unwrap_or_else(|_| itemservice::config::DEFAULT_CONFIG_PATH.to_string());
    let config = Config::load(&config_path)?.apply_overrides(|key| std::env::var(key).ok())?;

    let messages = load_messages(&config)?;
    info!("Loaded {} error messages", messages.len());

    let store = open_store(&config).await?;
    let state = AppState::new(store, messages);
    let app = router(state);

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server running at http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// A missing .env is fine; anything else is worth a warning
fn env_file_error<T>(result: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    match result {
        Ok(_) => None,
        Err(e) if e.not_found() => None,
        Err(e) => Some(e),
    }
}

fn load_messages(config: &Config) -> Result<MessageSource> {
    let mut messages = MessageSource::with_defaults();
    if let Some(path) = &config.messages.path {
        messages.merge(MessageSource::load(path)?);
        info!("Merged messages from {}", path);
    }
    Ok(messages)
}

async fn open_store(config: &Config) -> Result<Arc<dyn ItemStore>> {
    match &config.database.url {
        Some(url) => {
            let store = SqlItemStore::connect(url)
                .await
                .context("Failed to connect to database")?;
            Ok(Arc::new(store))
        }
        None => {
            info!("No database configured, items are kept in memory");
            Ok(Arc::new(MemoryItemStore::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_file_is_ignored() {
        assert!(env_file_error(dotenvy::from_path("/nonexistent/itemservice/.env")).is_none());
    }

    #[test]
    fn test_log_filter_comes_from_env_file() {
        let path = std::env::temp_dir().join(format!("itemservice-{}.env", std::process::id()));
        std::fs::write(&path, "RUST_LOG=itemservice=trace\n").unwrap();
        std::env::remove_var("RUST_LOG");

        assert!(env_file_error(dotenvy::from_path(&path)).is_none());
        assert!(env_filter().to_string().contains("itemservice=trace"));

        std::fs::remove_file(&path).unwrap();
    }
}
