//! Collaborator seam between the engine and the surrounding application.
//!
//! The engine is passive: it pulls exactly one frame snapshot per tick and
//! reads pixels through [`PixelSource`]. This module provides the traits the
//! application implements plus an owned RGBA [`FrameBuffer`] and a
//! [`TrackingPipeline`] that bundles a frame source with the tracker.

mod frame_buffer;
mod pipeline;
mod pixel_source;

pub use frame_buffer::{FrameBuffer, FrameError};
pub use pipeline::TrackingPipeline;
pub use pixel_source::{FrameSource, PixelSource};
