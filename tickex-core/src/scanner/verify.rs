//! Boundary to the verification endpoint.

use async_trait::async_trait;
use tickex_model::VerifyResponse;

use crate::error::VerifyError;

/// Submits a decoded payload for verification.
///
/// The HTTP client in the scanner binary implements this against
/// `POST /api/verify`; tests plug in in-memory fakes.
#[async_trait]
pub trait TicketVerifier: Send + Sync {
    async fn verify(
        &self,
        payload: &str,
    ) -> std::result::Result<VerifyResponse, VerifyError>;
}
