//! To-Do Backend
//!
//! Layered architecture:
//! - domain: Core entities and business rules
//! - repository: Data access abstractions and implementations
//! - routes: axum HTTP handlers

use std::sync::Arc;

use tokio::sync::Mutex;

mod config;
mod domain;
mod repository;
mod routes;

pub use config::{Config, ConfigError, CorsConfig, StorageConfig};
pub use domain::{DomainError, DomainResult, Entity, Item, ItemId, ItemPatch, NewItem};
pub use repository::{init_db, InMemoryRepository, ItemRepository, Repository};
pub use routes::{router, ApiError};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn Repository<Item>>,
}

impl AppState {
    pub fn new(items: Arc<dyn Repository<Item>>) -> Self {
        Self { items }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryRepository::<Item>::new()))
    }
}

/// Open the item store selected by the configuration
pub fn open_repository(storage: &StorageConfig) -> DomainResult<Arc<dyn Repository<Item>>> {
    match storage {
        StorageConfig::Sqlite(path) => {
            let conn = init_db(path)?;
            tracing::info!(path = %path.display(), "using sqlite storage");
            Ok(Arc::new(ItemRepository::new(Arc::new(Mutex::new(conn)))))
        }
        StorageConfig::Memory => {
            tracing::warn!("using in-memory storage, items are lost on exit");
            Ok(Arc::new(InMemoryRepository::<Item>::new()))
        }
    }
}

/// Serve the API until Ctrl-C
pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let items = open_repository(&config.storage)?;
    let app = router(AppState::new(items), &config.cors);

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!("listening on http://{}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
