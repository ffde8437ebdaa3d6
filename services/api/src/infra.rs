use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use title_mapper::config::TitleConfig;
use title_mapper::error::AppError;
use title_mapper::titles::{AliasMap, MatchPolicy, NameNormalizer};
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Builds the normalizer from the configured alias file, or the built-in map.
pub(crate) fn build_normalizer(config: &TitleConfig) -> Result<NameNormalizer, AppError> {
    let aliases = match &config.alias_path {
        Some(path) => AliasMap::from_path(path)?,
        None => AliasMap::default_companies(),
    };

    info!(
        aliases = aliases.len(),
        policy = %config.policy,
        "title normalizer configured"
    );
    Ok(NameNormalizer::new(aliases).with_policy(config.policy))
}

pub(crate) fn parse_policy(raw: &str) -> Result<MatchPolicy, String> {
    raw.parse::<MatchPolicy>().map_err(|err| err.to_string())
}
