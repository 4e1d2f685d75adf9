//! Per-annotation tracking state.

use nalgebra::Point2;

use crate::engine::template::Template;
use crate::source::PixelSource;

/// Mutable tracking record for one annotation, keyed by annotation id and
/// owned exclusively by the engine.
///
/// `last_position` is the most recently *accepted* match center. It can
/// diverge from the live annotation anchor: the jitter-suppression branch
/// leaves the annotation in place, and uncertain/lost ticks update status
/// without moving geometry.
#[derive(Debug, Clone)]
pub struct TrackState {
    pub last_position: Point2<f32>,
    pub template: Template,
    /// Match confidence in [0, 1]
    pub confidence: f32,
    /// Consecutive low-confidence ticks
    pub lost_frames: u32,
}

impl TrackState {
    /// Capture a fresh state at `anchor`, with full confidence and a zeroed
    /// loss counter. Returns `None` when the template capture fails.
    pub fn capture<S: PixelSource>(
        source: &S,
        anchor: Point2<f32>,
        region_size: u32,
    ) -> Option<TrackState> {
        let template = Template::capture(source, anchor, region_size)?;
        Some(TrackState {
            last_position: anchor,
            template,
            confidence: 1.0,
            lost_frames: 0,
        })
    }
}
