//! Still-image camera source.
//!
//! Stands in for live capture hardware: frames come from image files on
//! disk, converted to 8-bit luma. Once the configured frames are
//! exhausted the stream keeps repeating the last one, the way a camera
//! pointed at a motionless code would.

use std::path::PathBuf;

use async_trait::async_trait;
use tickex_core::{
    CameraConstraints, CameraSource, CameraStream, Frame, ScanError,
};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct StillCamera {
    paths: Vec<PathBuf>,
}

impl StillCamera {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        StillCamera { paths }
    }
}

#[async_trait]
impl CameraSource for StillCamera {
    async fn open(
        &self,
        constraints: &CameraConstraints,
    ) -> Result<Box<dyn CameraStream>, ScanError> {
        if self.paths.is_empty() {
            return Err(ScanError::CameraUnavailable(
                "no frame images configured".to_string(),
            ));
        }

        info!(
            facing = ?constraints.facing,
            width = constraints.ideal_width,
            height = constraints.ideal_height,
            "opening still-image camera"
        );

        let mut frames = Vec::with_capacity(self.paths.len());
        for path in &self.paths {
            let image = image::open(path)
                .map_err(|err| {
                    ScanError::CameraUnavailable(format!(
                        "{}: {}",
                        path.display(),
                        err
                    ))
                })?
                .to_luma8();
            debug!(
                path = %path.display(),
                width = image.width(),
                height = image.height(),
                "frame loaded"
            );
            frames.push(Frame::from(image));
        }
        // Serve in capture order by popping from the back.
        frames.reverse();

        Ok(Box::new(StillStream {
            frames,
            last: None,
            stopped: false,
        }))
    }
}

struct StillStream {
    frames: Vec<Frame>,
    last: Option<Frame>,
    stopped: bool,
}

#[async_trait]
impl CameraStream for StillStream {
    async fn frame(&mut self) -> Option<Frame> {
        if self.stopped {
            return None;
        }
        if let Some(frame) = self.frames.pop() {
            self.last = Some(frame.clone());
            return Some(frame);
        }
        self.last.clone()
    }

    fn stop(&mut self) {
        self.stopped = true;
        self.frames.clear();
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use image::GrayImage;

    use super::*;

    fn write_test_image(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("frame.png");
        let image = GrayImage::from_fn(4, 4, |x, y| {
            image::Luma([((x + y) * 32) as u8])
        });
        image.save(&path).unwrap();
        path
    }

    #[tokio::test]
    async fn open_without_frames_is_camera_unavailable() {
        let camera = StillCamera::new(Vec::new());
        let err = camera
            .open(&CameraConstraints::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ScanError::CameraUnavailable(_)));
    }

    #[tokio::test]
    async fn stream_repeats_the_last_frame_until_stopped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_test_image(&dir);
        let camera = StillCamera::new(vec![path]);

        let mut stream =
            camera.open(&CameraConstraints::default()).await.unwrap();

        let first = stream.frame().await.unwrap();
        assert_eq!((first.width(), first.height()), (4, 4));

        // Exhausted list repeats the last frame.
        let again = stream.frame().await.unwrap();
        assert_eq!((again.width(), again.height()), (4, 4));

        stream.stop();
        assert!(stream.frame().await.is_none());
    }

    #[tokio::test]
    async fn missing_file_surfaces_as_camera_unavailable() {
        let camera = StillCamera::new(vec![PathBuf::from("/nonexistent.png")]);
        let err = camera
            .open(&CameraConstraints::default())
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ScanError::CameraUnavailable(_)));
    }
}
