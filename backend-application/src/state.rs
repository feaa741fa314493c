use std::sync::Arc;

use backend_domain::ports::{EventRepository, ToothbrushRepository};
use backend_domain::RuntimeConfig;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventRepository>,
    pub toothbrush_repo: Arc<dyn ToothbrushRepository>,
    pub metrics: Arc<Metrics>,
}
