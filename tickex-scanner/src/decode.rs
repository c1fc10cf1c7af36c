//! QR decode capability backed by rqrr.

use tickex_core::{Frame, FrameDecoder};
use tracing::debug;

/// Pure-Rust QR detector.
///
/// Frames are handed to rqrr straight from the luma buffer; a grid that
/// detects but fails to decode is skipped, not an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct QrDecoder;

impl FrameDecoder for QrDecoder {
    fn decode(&self, frame: &Frame) -> Vec<String> {
        let width = frame.width() as usize;
        let height = frame.height() as usize;
        let luma = frame.luma();

        let mut prepared = rqrr::PreparedImage::prepare_from_greyscale(
            width,
            height,
            |x, y| luma[y * width + x],
        );

        let mut payloads = Vec::new();
        for grid in prepared.detect_grids() {
            match grid.decode() {
                Ok((_meta, content)) => payloads.push(content),
                Err(err) => {
                    debug!(error = %err, "grid detected but failed to decode")
                }
            }
        }
        payloads
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featureless_frames_decode_to_nothing() {
        let frame = Frame::from_luma(32, 32, vec![255; 32 * 32]).unwrap();
        assert!(QrDecoder.decode(&frame).is_empty());
    }
}
