//! The in-memory record for one scanning attempt.

use std::fmt;

use tickex_model::{ScanPhase, VerifyResponse};
use tracing::debug;

use crate::scanner::camera::CameraStream;

/// Owned session state: current phase, the camera stream handle, and the
/// latest result or error. Never persisted.
///
/// The session owns the stream; every terminal transition funnels through
/// [`ScanSession::release_camera`], and dropping the session releases the
/// stream as well. That makes camera release a scoped-resource contract
/// rather than best-effort cleanup.
pub struct ScanSession {
    phase: ScanPhase,
    stream: Option<Box<dyn CameraStream>>,
    result: Option<VerifyResponse>,
    error: Option<String>,
}

impl ScanSession {
    pub fn new() -> Self {
        ScanSession {
            phase: ScanPhase::Idle,
            stream: None,
            result: None,
            error: None,
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn is_scanning(&self) -> bool {
        self.phase == ScanPhase::Scanning
    }

    /// True while a verification call is in flight.
    pub fn is_loading(&self) -> bool {
        self.phase == ScanPhase::Verifying
    }

    pub fn has_camera(&self) -> bool {
        self.stream.is_some()
    }

    pub fn result(&self) -> Option<&VerifyResponse> {
        self.result.as_ref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Enter `RequestingCamera`, discarding any previous result or error.
    pub(crate) fn begin(&mut self) {
        self.result = None;
        self.error = None;
        self.phase = ScanPhase::RequestingCamera;
    }

    /// Camera acquisition failed: enter `Error` with no stream acquired.
    pub(crate) fn camera_denied(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.phase = ScanPhase::Error;
    }

    /// Take ownership of a granted stream and enter `Scanning`.
    pub(crate) fn attach(&mut self, stream: Box<dyn CameraStream>) {
        self.stream = Some(stream);
        self.phase = ScanPhase::Scanning;
    }

    pub(crate) fn stream_mut(&mut self) -> Option<&mut (dyn CameraStream + 'static)> {
        self.stream.as_deref_mut()
    }

    /// Halt frame polling and enter `Verifying`. Any previous result or
    /// error is discarded so the manual-entry path observes the same
    /// clean-slate rule as a camera start.
    pub(crate) fn begin_verifying(&mut self) {
        self.result = None;
        self.error = None;
        self.phase = ScanPhase::Verifying;
    }

    /// Verification succeeded: store the result, release the camera,
    /// return to `Idle`.
    pub(crate) fn complete(&mut self, response: VerifyResponse) {
        self.release_camera();
        self.result = Some(response);
        self.phase = ScanPhase::Idle;
    }

    /// Verification failed: store the error, release the camera, return to
    /// `Idle`. The camera is stopped after one decode attempt regardless of
    /// outcome.
    pub(crate) fn verification_failed(&mut self, message: impl Into<String>) {
        self.release_camera();
        self.error = Some(message.into());
        self.phase = ScanPhase::Idle;
    }

    /// Manual stop or teardown: release the camera and return to `Idle`.
    pub(crate) fn cancel(&mut self) {
        self.release_camera();
        self.phase = ScanPhase::Idle;
    }

    /// Stop and drop the camera stream. Idempotent.
    pub fn release_camera(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            debug!("camera released");
        }
    }

    /// Clear a stored result or error and return to `Idle`. A no-op when
    /// neither is present; the camera stays off until the next explicit
    /// start.
    pub fn reset(&mut self) {
        if self.result.is_none() && self.error.is_none() {
            return;
        }
        self.result = None;
        self.error = None;
        self.phase = ScanPhase::Idle;
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        ScanSession::new()
    }
}

impl fmt::Debug for ScanSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanSession")
            .field("phase", &self.phase)
            .field("has_camera", &self.has_camera())
            .field("result", &self.result)
            .field("error", &self.error)
            .finish()
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.release_camera();
    }
}
