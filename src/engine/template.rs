//! Template capture around an annotation anchor.

use nalgebra::Point2;
use ndarray::Array3;

use crate::source::PixelSource;

/// Captured appearance snapshot for one tracked annotation.
///
/// `data` is RGBA with shape `(height, width, 4)`; `x`/`y` are the clamped
/// frame coordinates of the region's top-left at capture time.
#[derive(Debug, Clone)]
pub struct Template {
    pub data: Array3<u8>,
    pub x: u32,
    pub y: u32,
}

impl Template {
    /// Snapshot a `region_size` square centered on `anchor`, shrunk to the
    /// frame extent and shifted so it never runs past the frame bounds.
    ///
    /// Returns `None` when the frame is unavailable (zero dimensions) or the
    /// clamped region degenerates; the caller simply retries on a later tick.
    pub fn capture<S: PixelSource>(
        source: &S,
        anchor: Point2<f32>,
        region_size: u32,
    ) -> Option<Template> {
        let (frame_width, frame_height) = source.dimensions();
        if frame_width == 0 || frame_height == 0 {
            return None;
        }

        let width = region_size.min(frame_width);
        let height = region_size.min(frame_height);
        if width == 0 || height == 0 {
            return None;
        }

        let half = (region_size / 2) as i64;
        let x = (anchor.x.floor() as i64 - half).clamp(0, (frame_width - width) as i64) as u32;
        let y = (anchor.y.floor() as i64 - half).clamp(0, (frame_height - height) as i64) as u32;

        Some(Template {
            data: source.region(x, y, width, height),
            x,
            y,
        })
    }

    pub fn width(&self) -> u32 {
        self.data.shape()[1] as u32
    }

    pub fn height(&self) -> u32 {
        self.data.shape()[0] as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FrameBuffer;

    fn frame(width: u32, height: u32) -> FrameBuffer {
        FrameBuffer::from_fn(width, height, |x, y| {
            [(x % 251) as u8, (y % 251) as u8, ((x + y) % 251) as u8, 255]
        })
    }

    #[test]
    fn test_capture_interior() {
        let f = frame(200, 200);
        let t = Template::capture(&f, Point2::new(100.0, 100.0), 60).unwrap();
        assert_eq!((t.x, t.y), (70, 70));
        assert_eq!((t.width(), t.height()), (60, 60));
    }

    #[test]
    fn test_capture_clamps_to_origin() {
        let f = frame(200, 200);
        let t = Template::capture(&f, Point2::new(5.0, 5.0), 60).unwrap();
        assert_eq!((t.x, t.y), (0, 0));
        assert_eq!((t.width(), t.height()), (60, 60));
    }

    #[test]
    fn test_capture_clamps_to_far_edge() {
        let f = frame(200, 200);
        let t = Template::capture(&f, Point2::new(195.0, 195.0), 60).unwrap();
        assert_eq!((t.x, t.y), (140, 140));
        assert_eq!((t.width(), t.height()), (60, 60));
    }

    #[test]
    fn test_capture_shrinks_on_small_frame() {
        let f = frame(40, 30);
        let t = Template::capture(&f, Point2::new(20.0, 15.0), 60).unwrap();
        assert_eq!((t.x, t.y), (0, 0));
        assert_eq!((t.width(), t.height()), (40, 30));
    }

    #[test]
    fn test_capture_fails_without_frame() {
        let f = frame(0, 0);
        assert!(Template::capture(&f, Point2::new(10.0, 10.0), 60).is_none());
    }

    #[test]
    fn test_capture_is_deterministic() {
        let f = frame(200, 200);
        let a = Template::capture(&f, Point2::new(100.0, 100.0), 60).unwrap();
        let b = Template::capture(&f, Point2::new(100.0, 100.0), 60).unwrap();
        assert_eq!(a.data, b.data);
        assert_eq!((a.x, a.y), (b.x, b.y));
    }
}
