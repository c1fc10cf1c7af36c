//! Client-side scanning state machine vocabulary.

#[cfg(feature = "chrono")]
use chrono::{DateTime, Utc};
#[cfg(feature = "chrono")]
use uuid::Uuid;

#[cfg(feature = "chrono")]
use crate::verify::VerifyResponse;

/// Phases of one scanning attempt.
///
/// `Error` covers camera denial and verification failures; both are
/// recoverable by an explicit reset or restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanPhase {
    #[default]
    Idle,
    RequestingCamera,
    Scanning,
    Verifying,
    Error,
}

impl ScanPhase {
    /// True while a scan cycle holds or is negotiating the camera, or a
    /// verification call is in flight.
    pub fn is_active(&self) -> bool {
        matches!(
            self,
            ScanPhase::RequestingCamera
                | ScanPhase::Scanning
                | ScanPhase::Verifying
        )
    }
}

/// Summary of one completed decode-and-verify cycle.
#[cfg(feature = "chrono")]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanReport {
    pub scan_id: Uuid,
    pub payload: String,
    pub response: VerifyResponse,
    pub verified_at: DateTime<Utc>,
}

#[cfg(feature = "chrono")]
impl ScanReport {
    pub fn new(payload: impl Into<String>, response: VerifyResponse) -> Self {
        ScanReport {
            scan_id: Uuid::new_v4(),
            payload: payload.into(),
            response,
            verified_at: Utc::now(),
        }
    }
}
