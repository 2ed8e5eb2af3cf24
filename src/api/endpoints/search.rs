//! Catalog search endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiQuery;
use crate::api::types::ApiContext;
use crate::models::MedicineRecord;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Missing `q` searches for the empty string, which matches everything.
    #[serde(default)]
    pub q: String,
}

/// `GET /api/search?q=` — records whose name, usage or symptoms contain `q`.
pub async fn search(
    State(ctx): State<ApiContext>,
    ApiQuery(query): ApiQuery<SearchQuery>,
) -> Result<Json<Vec<MedicineRecord>>, ApiError> {
    let results: Vec<MedicineRecord> = ctx
        .matcher
        .search(&query.q)
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(query = %query.q, hits = results.len(), "Catalog search");

    Ok(Json(results))
}
