//! TrackingPipeline for combining frame acquisition with tracking.

use crate::engine::{Annotation, MotionTracker, TrackerConfig};

use super::FrameSource;

/// A combined tracker that bundles a frame source with the motion tracker.
///
/// The caller drives the cadence: one [`run_tick`](Self::run_tick) per
/// animation callback while playback is active. When the source reports no
/// frame, annotations simply hold their last state.
pub struct TrackingPipeline<F: FrameSource> {
    source: F,
    tracker: MotionTracker,
}

impl<F: FrameSource> TrackingPipeline<F> {
    /// Create a new tracking pipeline with the given source and tracker config.
    pub fn new(source: F, config: TrackerConfig) -> Self {
        Self {
            source,
            tracker: MotionTracker::new(config),
        }
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(source: F) -> Self {
        Self::new(source, TrackerConfig::default())
    }

    /// Pull the current frame and advance tracking by one tick.
    ///
    /// Returns `Ok(true)` when a frame was processed, `Ok(false)` when no
    /// frame was ready and the tick was skipped.
    pub fn run_tick(&mut self, annotations: &mut [Annotation]) -> Result<bool, F::Error> {
        match self.source.current_frame()? {
            Some(frame) => {
                self.tracker.run_tick(&frame, annotations);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Discard all tracking history and recapture at the currently displayed
    /// anchors. Without a ready frame the history is still discarded;
    /// capture then happens lazily on the next tick.
    pub fn reinitialize(&mut self, annotations: &[Annotation]) -> Result<(), F::Error> {
        match self.source.current_frame()? {
            Some(frame) => self.tracker.reinitialize(&frame, annotations),
            None => self.tracker.clear(),
        }
        Ok(())
    }

    /// Get a reference to the underlying frame source.
    pub fn source(&self) -> &F {
        &self.source
    }

    /// Get a mutable reference to the underlying frame source.
    pub fn source_mut(&mut self) -> &mut F {
        &mut self.source
    }

    /// Get a reference to the underlying tracker.
    pub fn tracker(&self) -> &MotionTracker {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker.
    pub fn tracker_mut(&mut self) -> &mut MotionTracker {
        &mut self.tracker
    }
}
