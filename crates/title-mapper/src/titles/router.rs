use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::aliases::{AliasEntry, AliasMap};
use super::normalizer::{MatchPolicy, NameNormalizer};
use crate::error::AppError;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NormalizeRequest {
    pub titles: Vec<String>,
    /// Request-scoped aliases replacing the service's configured map.
    #[serde(default)]
    pub aliases: Option<Vec<AliasEntry>>,
    #[serde(default)]
    pub policy: Option<MatchPolicy>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NormalizeResponse {
    pub normalized: Vec<String>,
    pub matched: usize,
}

/// Router builder exposing title normalization over HTTP.
pub fn title_router(normalizer: Arc<NameNormalizer>) -> Router {
    Router::new()
        .route("/api/v1/titles/normalize", post(normalize_handler))
        .route("/api/v1/titles/aliases", get(aliases_handler))
        .with_state(normalizer)
}

pub(crate) async fn normalize_handler(
    State(shared): State<Arc<NameNormalizer>>,
    Json(request): Json<NormalizeRequest>,
) -> Result<Json<NormalizeResponse>, AppError> {
    let NormalizeRequest {
        titles,
        aliases,
        policy,
    } = request;

    let response = match (aliases, policy) {
        (Some(entries), policy) => {
            let scoped = NameNormalizer::new(AliasMap::from_entries(entries)?)
                .with_policy(policy.unwrap_or(shared.policy()));
            normalize_titles(&scoped, titles)
        }
        (None, Some(policy)) if policy != shared.policy() => {
            let scoped = NameNormalizer::clone(&shared).with_policy(policy);
            normalize_titles(&scoped, titles)
        }
        (None, _) => normalize_titles(&shared, titles),
    };

    Ok(Json(response))
}

fn normalize_titles(normalizer: &NameNormalizer, titles: Vec<String>) -> NormalizeResponse {
    let count = titles.len();
    let mut matched = 0;
    let normalized: Vec<String> = titles
        .into_iter()
        .map(|title| match normalizer.resolve(&title) {
            Some(canonical) => {
                matched += 1;
                canonical.to_string()
            }
            None => title,
        })
        .collect();
    tracing::debug!(titles = count, matched, "normalized titles");

    NormalizeResponse {
        normalized,
        matched,
    }
}

pub(crate) async fn aliases_handler(
    State(shared): State<Arc<NameNormalizer>>,
) -> Json<Vec<AliasEntry>> {
    Json(shared.aliases().entries().to_vec())
}
