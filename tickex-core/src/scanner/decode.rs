//! Optional barcode-detection seam.

use std::fmt;
use std::sync::Arc;

use crate::scanner::camera::Frame;

/// Detects QR payloads in a raster frame.
pub trait FrameDecoder: Send + Sync {
    /// Every decoded payload found in `frame`, possibly none.
    fn decode(&self, frame: &Frame) -> Vec<String>;
}

/// The decode capability of the running environment.
///
/// Absence is a supported degraded mode, not an error: [`attempt`] yields
/// no hits and the scanning loop keeps polling. Callers never distinguish
/// "no detector installed" from "detector found nothing".
///
/// [`attempt`]: DecodeCapability::attempt
#[derive(Clone, Default)]
pub struct DecodeCapability {
    detector: Option<Arc<dyn FrameDecoder>>,
}

impl DecodeCapability {
    /// The empty capability.
    pub fn none() -> Self {
        DecodeCapability { detector: None }
    }

    pub fn with<D: FrameDecoder + 'static>(detector: D) -> Self {
        DecodeCapability {
            detector: Some(Arc::new(detector)),
        }
    }

    pub fn is_available(&self) -> bool {
        self.detector.is_some()
    }

    /// Attempt a decode over one frame.
    pub fn attempt(&self, frame: &Frame) -> Vec<String> {
        match &self.detector {
            Some(detector) => detector.decode(frame),
            None => Vec::new(),
        }
    }
}

impl fmt::Debug for DecodeCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodeCapability")
            .field("available", &self.is_available())
            .finish()
    }
}
