//! Motion tracking for hand-drawn video annotations.
//!
//! An operator draws freehand paths, rectangles, or circles over a paused or
//! playing video; the [`MotionTracker`] then keeps each annotation attached
//! to the underlying image content as frames advance, using template capture
//! and windowed SSD matching. The crate never decodes or displays video
//! itself: callers feed it one frame snapshot per tick through the
//! [`PixelSource`] seam and receive updated geometry plus a per-annotation
//! [`TrackingStatus`].

pub mod engine;
pub mod source;

pub use engine::{
    Annotation, Match, MotionTracker, Shape, Template, TrackState, TrackerConfig, TrackingStatus,
};
pub use source::{FrameBuffer, FrameError, FrameSource, PixelSource, TrackingPipeline};
