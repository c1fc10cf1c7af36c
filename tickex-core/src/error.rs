use thiserror::Error;

/// Failures of a scanning cycle.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("camera unavailable: {0}")]
    CameraUnavailable(String),

    #[error("camera permission denied")]
    PermissionDenied,

    #[error("verification failed: {0}")]
    Verification(#[from] VerifyError),

    #[error("a scan cycle is already in progress")]
    Busy,
}

/// Failures of the verification call itself.
#[derive(Error, Debug)]
pub enum VerifyError {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error("server rejected request: {0}")]
    Rejected(String),
}

pub type Result<T> = std::result::Result<T, ScanError>;
