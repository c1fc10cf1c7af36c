//! Double-submit CSRF protection for state-changing routes.
//!
//! `GET /api/csrf` hands the client a fresh token and stores its hash in a
//! cookie; the client echoes the token back in the `X-CSRF-TOKEN` header
//! and the middleware checks that the header hashes to the cookie value.

use axum::{
    extract::Request,
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{RngCore, rng};
use sha2::{Digest, Sha256};

use crate::errors::AppError;

pub const CSRF_HEADER: &str = "x-csrf-token";
pub const CSRF_COOKIE: &str = "csrf_token";

/// Generates a cryptographically secure 32-byte CSRF token
pub fn generate_token() -> String {
    let mut token_bytes = [0u8; 32];
    rng().fill_bytes(&mut token_bytes);
    URL_SAFE_NO_PAD.encode(token_bytes)
}

/// Hashes a CSRF token with SHA256 for cookie storage
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}

pub fn create_csrf_cookie(hashed_token: &str) -> String {
    format!(
        "{}={}; HttpOnly; SameSite=Strict; Path=/; Max-Age=3600",
        CSRF_COOKIE, hashed_token
    )
}

pub fn extract_csrf_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get("cookie")?
        .to_str()
        .ok()?
        .split(';')
        .find_map(|cookie| {
            let parts: Vec<&str> = cookie.trim().splitn(2, '=').collect();
            if parts.len() == 2 && parts[0] == CSRF_COOKIE {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

/// Reject the request unless the `X-CSRF-TOKEN` header hashes to the value
/// in the csrf cookie.
pub async fn require_csrf(
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let headers = request.headers();

    let cookie_value = extract_csrf_from_cookies(headers)
        .ok_or_else(|| AppError::forbidden("missing csrf cookie"))?;
    let header_value = headers
        .get(CSRF_HEADER)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| AppError::forbidden("missing csrf token header"))?;

    if hash_token(header_value) != cookie_value {
        return Err(AppError::forbidden("csrf token mismatch"));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn tokens_are_unique_and_url_safe() {
        let a = generate_token();
        let b = generate_token();
        assert_ne!(a, b);
        assert!(!a.contains('='));
        assert!(!a.contains('+'));
    }

    #[test]
    fn cookie_round_trip_recovers_the_hashed_token() {
        let token = generate_token();
        let cookie = create_csrf_cookie(&hash_token(&token));

        let mut headers = HeaderMap::new();
        let cookie_pair = cookie.split(';').next().unwrap();
        headers.insert(
            "cookie",
            HeaderValue::from_str(&format!("other=1; {}", cookie_pair))
                .unwrap(),
        );

        assert_eq!(
            extract_csrf_from_cookies(&headers),
            Some(hash_token(&token))
        );
    }
}
