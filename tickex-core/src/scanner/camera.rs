//! Media capture seam.

use async_trait::async_trait;
use image::GrayImage;

use crate::error::ScanError;

/// Which way the requested camera should face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FacingMode {
    User,
    /// Rear-facing; preferred for scanning printed codes.
    #[default]
    Environment,
}

/// Preferred capture settings. Sources treat these as hints, not hard
/// requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraConstraints {
    pub facing: FacingMode,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

impl Default for CameraConstraints {
    fn default() -> Self {
        CameraConstraints {
            facing: FacingMode::Environment,
            ideal_width: 640,
            ideal_height: 480,
        }
    }
}

/// One captured raster frame, stored as 8-bit luma.
#[derive(Debug, Clone)]
pub struct Frame {
    image: GrayImage,
}

impl Frame {
    /// A zero-dimension frame: the capture surface is not ready yet.
    pub fn empty() -> Self {
        Frame {
            image: GrayImage::new(0, 0),
        }
    }

    /// Build a frame from raw luma bytes. `None` if `data` does not match
    /// the given dimensions.
    pub fn from_luma(width: u32, height: u32, data: Vec<u8>) -> Option<Self> {
        GrayImage::from_raw(width, height, data).map(|image| Frame { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// True while the stream has not produced real pixels yet; decode
    /// attempts on such frames are deferred, not failed.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Row-major luma bytes, `width * height` of them.
    pub fn luma(&self) -> &[u8] {
        self.image.as_raw()
    }
}

impl From<GrayImage> for Frame {
    fn from(image: GrayImage) -> Self {
        Frame { image }
    }
}

/// Hands out revocable capture streams.
#[async_trait]
pub trait CameraSource: Send + Sync {
    /// Request a stream honoring `constraints` as far as the device allows.
    ///
    /// Denial or absence of a device surfaces as
    /// [`ScanError::PermissionDenied`] or [`ScanError::CameraUnavailable`].
    async fn open(
        &self,
        constraints: &CameraConstraints,
    ) -> Result<Box<dyn CameraStream>, ScanError>;
}

/// A live capture stream. The owner must call [`CameraStream::stop`] when
/// done; `stop` is idempotent.
#[async_trait]
pub trait CameraStream: Send {
    /// Capture the current frame. `None` once the stream is stopped or the
    /// device went away.
    async fn frame(&mut self) -> Option<Frame>;

    /// Release the underlying device and all of its tracks.
    fn stop(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constraints_prefer_the_rear_camera_at_bounded_resolution() {
        let constraints = CameraConstraints::default();
        assert_eq!(constraints.facing, FacingMode::Environment);
        assert_eq!(constraints.ideal_width, 640);
        assert_eq!(constraints.ideal_height, 480);
    }

    #[test]
    fn zero_dimension_frames_report_empty() {
        assert!(Frame::empty().is_empty());

        let frame = Frame::from_luma(2, 2, vec![0, 64, 128, 255]).unwrap();
        assert!(!frame.is_empty());
        assert_eq!(frame.luma().len(), 4);
    }

    #[test]
    fn mismatched_luma_length_is_rejected() {
        assert!(Frame::from_luma(3, 3, vec![0; 4]).is_none());
    }
}
