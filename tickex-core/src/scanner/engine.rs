//! The polling decode loop.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tickex_model::ScanReport;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::error::{Result, ScanError};
use crate::scanner::camera::{CameraConstraints, CameraSource};
use crate::scanner::decode::DecodeCapability;
use crate::scanner::session::ScanSession;
use crate::scanner::verify::TicketVerifier;

/// Delay between frame capture attempts. Also the retry delay when the
/// capture surface reports zero dimensions.
pub const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Cancels an in-flight polling loop from outside the engine.
///
/// Stopping is cooperative: the loop observes the flag at the top of each
/// iteration, releases the camera, and returns the session to `Idle`.
#[derive(Debug, Clone, Default)]
pub struct ScanAbort {
    cancelled: Arc<AtomicBool>,
}

impl ScanAbort {
    pub fn stop(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    fn is_stopped(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    fn arm(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

/// Drives the scanning state machine over the camera, decode, and
/// verifier seams.
///
/// One decode-and-verify cycle is in flight at a time: the polling loop is
/// halted before the verification call is issued and is never restarted
/// within the cycle.
pub struct ScanEngine<C, V> {
    camera: C,
    verifier: V,
    decoder: DecodeCapability,
    constraints: CameraConstraints,
    session: ScanSession,
    abort: ScanAbort,
}

impl<C, V> ScanEngine<C, V>
where
    C: CameraSource,
    V: TicketVerifier,
{
    pub fn new(camera: C, verifier: V, decoder: DecodeCapability) -> Self {
        ScanEngine {
            camera,
            verifier,
            decoder,
            constraints: CameraConstraints::default(),
            session: ScanSession::new(),
            abort: ScanAbort::default(),
        }
    }

    pub fn with_constraints(mut self, constraints: CameraConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    pub fn session(&self) -> &ScanSession {
        &self.session
    }

    /// Handle for cancelling the polling loop, e.g. from a signal handler.
    pub fn abort_handle(&self) -> ScanAbort {
        self.abort.clone()
    }

    /// Clear a stored result or error; see [`ScanSession::reset`].
    pub fn reset(&mut self) {
        self.session.reset();
    }

    /// Run one full scan cycle: acquire the camera, poll frames until a
    /// payload decodes or the cycle is aborted, verify the payload, and
    /// release the camera.
    ///
    /// Returns `Ok(Some(report))` for a completed decode-and-verify cycle,
    /// `Ok(None)` when the cycle was aborted before a decode. Camera
    /// denial and verification failures are returned as errors and also
    /// recorded on the session. Without a decode capability the loop polls
    /// until aborted; that degradation is deliberate and silent.
    pub async fn scan(&mut self) -> Result<Option<ScanReport>> {
        if self.session.phase().is_active() {
            return Err(ScanError::Busy);
        }
        self.abort.arm();
        self.session.begin();

        let stream = match self.camera.open(&self.constraints).await {
            Ok(stream) => stream,
            Err(err) => {
                warn!(error = %err, "camera acquisition failed");
                self.session.camera_denied(err.to_string());
                return Err(err);
            }
        };
        self.session.attach(stream);
        info!(
            width = self.constraints.ideal_width,
            height = self.constraints.ideal_height,
            "camera attached, scanning"
        );

        let payload = loop {
            if self.abort.is_stopped() {
                debug!("scan aborted");
                self.session.cancel();
                return Ok(None);
            }

            let frame = match self.session.stream_mut() {
                Some(stream) => stream.frame().await,
                None => None,
            };
            let Some(frame) = frame else {
                // Stream went away underneath us; treat as a stop.
                self.session.cancel();
                return Ok(None);
            };

            if frame.is_empty() {
                // Capture surface not ready yet; retry after the same interval.
                sleep(POLL_INTERVAL).await;
                continue;
            }

            let mut hits = self.decoder.attempt(&frame);
            if !hits.is_empty() {
                break hits.remove(0);
            }
            sleep(POLL_INTERVAL).await;
        };

        debug!("payload decoded, halting poll loop");
        self.session.begin_verifying();
        self.finish(payload).await.map(Some)
    }

    /// Feed an already-decoded payload straight into verification,
    /// bypassing the camera entirely.
    ///
    /// Rejected with [`ScanError::Busy`] while a cycle is actively
    /// scanning or a verification call is in flight; no request is issued
    /// in that case.
    pub async fn submit_manual(&mut self, payload: &str) -> Result<ScanReport> {
        if self.session.phase().is_active() {
            return Err(ScanError::Busy);
        }
        self.session.begin_verifying();
        self.finish(payload.to_string()).await
    }

    async fn finish(&mut self, payload: String) -> Result<ScanReport> {
        match self.verifier.verify(&payload).await {
            Ok(response) => {
                info!(status = %response.status, "verification completed");
                self.session.complete(response.clone());
                Ok(ScanReport::new(payload, response))
            }
            Err(err) => {
                warn!(error = %err, "verification failed");
                self.session.verification_failed(err.to_string());
                Err(ScanError::Verification(err))
            }
        }
    }
}

impl<C, V> fmt::Debug for ScanEngine<C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanEngine")
            .field("decoder", &self.decoder)
            .field("constraints", &self.constraints)
            .field("session", &self.session)
            .finish()
    }
}
