//! Medicine detail and report endpoints.
//!
//! - `GET /api/medicines/:id` — one catalog record
//! - `GET /api/medicines/:id/report` — the record as a PDF download

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::extract::ApiPath;
use crate::api::types::ApiContext;
use crate::models::MedicineRecord;
use crate::report;

fn find(ctx: &ApiContext, id: i64) -> Result<&MedicineRecord, ApiError> {
    ctx.matcher
        .catalog()
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("Medicine {id} not found")))
}

/// `GET /api/medicines/:id`
pub async fn detail(
    State(ctx): State<ApiContext>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MedicineRecord>, ApiError> {
    Ok(Json(find(&ctx, id)?.clone()))
}

/// `GET /api/medicines/:id/report`
pub async fn report(
    State(ctx): State<ApiContext>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Response, ApiError> {
    let med = find(&ctx, id)?;
    let today = chrono::Local::now().date_naive();
    let pdf = report::generate_report_pdf(&report::MedicineReport::from_record(med, today))?;
    let filename = report::report_filename(&med.name);

    tracing::info!(medicine = %med.name, bytes = pdf.len(), "Report generated");

    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        pdf,
    )
        .into_response())
}
