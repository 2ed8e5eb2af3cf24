//! Nearby pharmacies endpoint.

use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::extract::ApiQuery;
use crate::pharmacies::{self, Pharmacy};

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lon: f64,
}

/// `GET /api/pharmacies?lat=&lon=`
pub async fn nearby(
    ApiQuery(loc): ApiQuery<LocationQuery>,
) -> Result<Json<Vec<Pharmacy>>, ApiError> {
    Ok(Json(pharmacies::nearby(loc.lat, loc.lon)?))
}
