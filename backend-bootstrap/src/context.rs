use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use backend_application::{AppState, Metrics};
use backend_infrastructure::{AppConfig, PgEventRepository, PgGateway, PgToothbrushRepository};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = AppConfig::load(config_path).await?;
        let runtime_config = config.to_runtime_config();
        let db_config = config.to_db_config();

        let gateway = Arc::new(PgGateway::new(&db_config)?);
        // The store may come up after us; every request opens its own connection.
        match gateway.ping().await {
            Ok(()) => info!("store reachable at {}", gateway.target()),
            Err(err) => warn!("store not reachable at startup ({}): {}", gateway.target(), err),
        }

        let state = AppState {
            config: runtime_config,
            event_repo: Arc::new(PgEventRepository::new(gateway.clone())),
            toothbrush_repo: Arc::new(PgToothbrushRepository::new(gateway)),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
