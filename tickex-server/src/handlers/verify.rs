use axum::{Json, extract::rejection::JsonRejection};
use tickex_core::verdict;
use tickex_model::{VerifyRequest, VerifyResponse};
use tracing::info;

use crate::errors::AppError;

/// `POST /api/verify` - classify a scanned payload.
///
/// The body must be `{ "qrcode": string }`; a missing or non-string field
/// is rejected before the predicate runs. The predicate itself is total,
/// so every well-formed request gets a 200 with a status/message pair.
pub async fn verify_ticket(
    payload: Result<Json<VerifyRequest>, JsonRejection>,
) -> Result<Json<VerifyResponse>, AppError> {
    let Json(request) = payload
        .map_err(|rejection| AppError::unprocessable(rejection.body_text()))?;

    let response = verdict::respond(&request.qrcode);
    info!(status = %response.status, "payload verified");
    Ok(Json(response))
}
