//! Core library for the Tickex ticket-verification demo.
//!
//! Two pieces live here:
//!
//! - [`verdict`]: the pure validity predicate applied by the verification
//!   endpoint.
//! - [`scanner`]: the client-side scanning state machine - camera
//!   lifecycle, the polling decode loop, and the capability traits at the
//!   seams (camera source, frame decoder, ticket verifier).

pub mod error;
pub mod scanner;
pub mod verdict;

pub use error::{Result, ScanError, VerifyError};
pub use scanner::{
    CameraConstraints, CameraSource, CameraStream, DecodeCapability,
    FacingMode, Frame, FrameDecoder, POLL_INTERVAL, ScanAbort, ScanEngine,
    ScanSession, TicketVerifier,
};
