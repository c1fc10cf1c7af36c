use axum::{Json, http::header::SET_COOKIE, response::IntoResponse};
use serde_json::json;

use crate::infra::middleware::csrf;

/// `GET /api/csrf` - issue a fresh token for the double-submit check on
/// the verify route. The cookie stores the token's hash; the client sends
/// the raw token back in the `X-CSRF-TOKEN` header.
pub async fn issue_token() -> impl IntoResponse {
    let token = csrf::generate_token();
    let cookie = csrf::create_csrf_cookie(&csrf::hash_token(&token));

    ([(SET_COOKIE, cookie)], Json(json!({ "token": token })))
}
