//! Camera lifecycle and the polling decode loop.
//!
//! One scanning attempt is a state machine:
//! `Idle -> RequestingCamera -> Scanning -> Verifying -> Idle`, with
//! `Error` reachable from camera denial. [`ScanEngine`] drives it over
//! three seams so that every environment - real capture hardware, still
//! images, test fakes - plugs in the same way.

pub mod camera;
pub mod decode;
pub mod engine;
pub mod session;
pub mod verify;

pub use camera::{
    CameraConstraints, CameraSource, CameraStream, FacingMode, Frame,
};
pub use decode::{DecodeCapability, FrameDecoder};
pub use engine::{POLL_INTERVAL, ScanAbort, ScanEngine};
pub use session::ScanSession;
pub use verify::TicketVerifier;
