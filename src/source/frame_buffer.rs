//! Owned RGBA frame snapshot.

use ndarray::{Array3, s};
use thiserror::Error;

use super::PixelSource;

/// Error type for frame construction failures.
#[derive(Debug, Error)]
pub enum FrameError {
    #[error("buffer of {len} bytes does not hold a {width}x{height} RGBA frame")]
    BufferSize { len: usize, width: u32, height: u32 },
}

/// An in-memory RGBA frame implementing [`PixelSource`].
///
/// Suits callers that already hold decoded frames as flat byte buffers
/// (canvas readback, ffmpeg output) and the test harness.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    data: Array3<u8>,
}

impl FrameBuffer {
    /// Wrap a flat RGBA byte buffer, row-major, 4 bytes per pixel.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(FrameError::BufferSize {
                len: data.len(),
                width,
                height,
            });
        }
        let data = Array3::from_shape_vec((height as usize, width as usize, 4), data)
            .expect("shape verified against buffer length");
        Ok(Self { data })
    }

    /// Build a frame by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, f: impl Fn(u32, u32) -> [u8; 4]) -> Self {
        let data = Array3::from_shape_fn((height as usize, width as usize, 4), |(y, x, c)| {
            f(x as u32, y as u32)[c]
        });
        Self { data }
    }
}

impl PixelSource for FrameBuffer {
    fn dimensions(&self) -> (u32, u32) {
        (self.data.shape()[1] as u32, self.data.shape()[0] as u32)
    }

    fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Array3<u8> {
        self.data
            .slice(s![
                y as usize..(y + height) as usize,
                x as usize..(x + width) as usize,
                ..
            ])
            .to_owned()
    }
}
