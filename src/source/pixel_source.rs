//! Traits for frame and pixel access.

use ndarray::Array3;

/// Pixel access into one frame snapshot.
///
/// All reads within a tick go through the same `PixelSource` value, so the
/// engine never observes a frame advancing mid-iteration. Implementations
/// must return consistent data for the lifetime of the snapshot.
///
/// # Example
///
/// ```ignore
/// use annotrack_rs::PixelSource;
/// use ndarray::Array3;
///
/// struct MyFrame {
///     // Your decoded frame here
/// }
///
/// impl PixelSource for MyFrame {
///     fn dimensions(&self) -> (u32, u32) {
///         (1920, 1080)
///     }
///
///     fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Array3<u8> {
///         // Copy the requested RGBA rectangle out of the frame
///         Array3::zeros((height as usize, width as usize, 4))
///     }
/// }
/// ```
pub trait PixelSource {
    /// Frame extent in pixels. `(0, 0)` signals an unavailable frame and
    /// makes the engine skip the tick.
    fn dimensions(&self) -> (u32, u32);

    /// Copy out the RGBA rectangle at `(x, y)` with the given extent, as an
    /// array of shape `(height, width, 4)`. The engine only requests regions
    /// that lie fully inside `dimensions()`.
    fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Array3<u8>;
}

/// Provider of the current frame snapshot, implemented by the playback side.
///
/// `Ok(None)` means no new frame is ready (paused, still decoding); the
/// pipeline then leaves every annotation holding its last state.
pub trait FrameSource {
    /// Snapshot type handed to the engine for one tick.
    type Frame: PixelSource;
    /// Error type for frame acquisition failures.
    type Error;

    /// Pull the current frame, if one is ready.
    fn current_frame(&mut self) -> Result<Option<Self::Frame>, Self::Error>;
}
