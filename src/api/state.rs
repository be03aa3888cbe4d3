//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::VariantService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Variant generation service.
    pub variant_service: Arc<VariantService>,
    /// Prometheus handle, present when a recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state without a metrics recorder.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let variant_service = Arc::new(VariantService::new(&config.generation));

        Self {
            config,
            variant_service,
            metrics: None,
        }
    }

    /// Attach an installed Prometheus recorder.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
