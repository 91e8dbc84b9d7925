//! Server Bootstrap
//!
//! 依存性注入とHTTPサーバーの起動

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::geocode::HeartRailsGeocodeProvider;
use crate::adapter::repositories::SqliteAccessLogRepository;
use crate::application::use_cases::{AggregateAccessLogsUseCase, LookupAddressUseCase};
use crate::domain::repositories::{AccessLogRepository, GeocodeProvider};

use super::routes::create_router;

/// Shared state for the HTTP handlers
///
/// Built once at startup; every request shares the same use cases and store.
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<LookupAddressUseCase<dyn GeocodeProvider, dyn AccessLogRepository>>,
    pub access_logs: Arc<AggregateAccessLogsUseCase<dyn AccessLogRepository>>,
}

impl AppState {
    /// Wire the use cases to the given collaborators
    pub fn new(
        geocode_provider: Arc<dyn GeocodeProvider>,
        access_log_repository: Arc<dyn AccessLogRepository>,
    ) -> Self {
        Self {
            lookup: Arc::new(LookupAddressUseCase::new(
                geocode_provider,
                access_log_repository.clone(),
            )),
            access_logs: Arc::new(AggregateAccessLogsUseCase::new(access_log_repository)),
        }
    }

    /// Build production collaborators from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let geocode_provider =
            HeartRailsGeocodeProvider::new(&config.geocode_url, config.geocode_timeout)?;
        let access_log_repository = SqliteAccessLogRepository::open(&config.db_path)?;

        Ok(Self::new(
            Arc::new(geocode_provider),
            Arc::new(access_log_repository),
        ))
    }
}

/// Start the HTTP server and run until it fails
pub async fn serve(config: &Config) -> Result<()> {
    let state = AppState::from_config(config)?;
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!("Starting server at http://{}", config.bind);
    info!(
        "Geocode API: {} (timeout {}s)",
        config.geocode_url,
        config.geocode_timeout.as_secs()
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
