use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::EnvFilter;

use crate::config::Observability;

/// Installs the global `tracing` subscriber.
///
/// `RUST_LOG` wins over the configured filter when set.
pub fn init_tracing(settings: &Observability) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_filter.as_str()));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Installs the Prometheus recorder when metrics are enabled.
pub fn init_metrics(settings: &Observability) -> Result<Option<PrometheusHandle>, BuildError> {
    if !settings.enable_metrics {
        return Ok(None);
    }
    let handle = PrometheusBuilder::new()
        .add_global_label("service", settings.service_name.clone())
        .install_recorder()?;
    Ok(Some(handle))
}
