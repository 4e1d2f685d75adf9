//! Main motion tracking engine: per-tick orchestration and update policy.

use std::collections::HashMap;

use log::{debug, trace};

use crate::engine::annotation::{Annotation, TrackingStatus};
use crate::engine::matching::{self, Match};
use crate::engine::track_state::TrackState;
use crate::source::PixelSource;

/// Configuration for the motion tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// Side length of the square template captured around an anchor
    pub region_size: u32,
    /// Search window half-extent around the last accepted position
    pub search_radius: u32,
    /// Candidate grid stride; coarser is faster, less precise
    pub sample_stride: u32,
    /// Minimum per-axis displacement treated as real motion
    pub movement_thresh: f32,
    /// Confidence below which a tick counts toward loss
    pub confidence_thresh: f32,
    /// Confidence below which status degrades to uncertain
    pub uncertain_thresh: f32,
    /// Consecutive low-confidence ticks tolerated before a track is lost
    pub lost_buffer: u32,
    /// Divisor mapping raw SSD scores onto [0, 1] confidence. A calibration
    /// constant, not a physical unit; lower it to make loss more sensitive.
    pub score_normalization: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            region_size: 60,
            search_radius: 40,
            sample_stride: 4,
            movement_thresh: 2.0,
            confidence_thresh: 0.3,
            uncertain_thresh: 0.5,
            lost_buffer: 30,
            score_normalization: 1_000_000.0,
        }
    }
}

/// Tick-driven tracking engine.
///
/// Holds the only reference to every [`TrackState`]; callers interact purely
/// through annotations and the tick/reinitialize/clear/remove operations.
/// The cadence is the caller's concern: one `run_tick` per displayed frame
/// while playback is active, no ticks while paused.
pub struct MotionTracker {
    states: HashMap<u64, TrackState>,
    config: TrackerConfig,
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl MotionTracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            states: HashMap::new(),
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Read-only view of the state for one annotation, if tracking has
    /// started for it.
    pub fn state(&self, annotation_id: u64) -> Option<&TrackState> {
        self.states.get(&annotation_id)
    }

    /// Advance tracking by one tick against a single frame snapshot.
    ///
    /// Annotations with tracking disabled pass through untouched. An
    /// annotation seen for the first time only gets its template captured;
    /// it starts moving on the next tick. An unavailable frame (zero
    /// dimensions) skips the whole tick with no state mutated.
    pub fn run_tick<S: PixelSource>(&mut self, frame: &S, annotations: &mut [Annotation]) {
        let (frame_width, frame_height) = frame.dimensions();
        if frame_width == 0 || frame_height == 0 {
            debug!("frame unavailable, skipping tracking tick");
            return;
        }

        for annotation in annotations.iter_mut() {
            if !annotation.tracking_enabled {
                continue;
            }

            match self.states.get_mut(&annotation.id) {
                Some(state) => {
                    let best = matching::find_best_match(frame, state, &self.config);
                    apply_match(state, &best, &self.config);
                    write_back(annotation, state, &self.config);
                }
                // First tick after tracking is enabled: capture only, the
                // annotation starts moving on the next tick.
                None => match TrackState::capture(
                    frame,
                    annotation.position,
                    self.config.region_size,
                ) {
                    Some(state) => {
                        self.states.insert(annotation.id, state);
                    }
                    None => {
                        debug!("template capture failed for annotation {}", annotation.id);
                    }
                },
            }
        }
    }

    /// Discard all tracking history and recapture every tracking-enabled
    /// annotation at its currently displayed anchor. Used to recover from
    /// drift or loss.
    pub fn reinitialize<S: PixelSource>(&mut self, frame: &S, annotations: &[Annotation]) {
        self.states.clear();
        for annotation in annotations.iter().filter(|a| a.tracking_enabled) {
            if let Some(state) =
                TrackState::capture(frame, annotation.position, self.config.region_size)
            {
                self.states.insert(annotation.id, state);
            }
        }
    }

    /// Drop all tracking state, e.g. alongside clearing the annotation set.
    pub fn clear(&mut self) {
        self.states.clear();
    }

    /// Purge the state of a deleted annotation so a reused id can never pick
    /// up a stale template.
    pub fn remove(&mut self, annotation_id: u64) {
        self.states.remove(&annotation_id);
    }
}

/// The per-tick update policy.
///
/// Three branches: accept real motion with confidence above the threshold,
/// count a low-confidence tick toward loss, or freeze entirely when the
/// match is good but displacement stays under the movement threshold. The
/// freeze branch deliberately leaves confidence at its prior value, so a
/// still object keeps whatever confidence it last earned.
fn apply_match(state: &mut TrackState, best: &Match, config: &TrackerConfig) {
    let confidence = (1.0 - best.score / config.score_normalization).max(0.0) as f32;
    let moved = (best.center.x - state.last_position.x).abs() > config.movement_thresh
        || (best.center.y - state.last_position.y).abs() > config.movement_thresh;

    if confidence > config.confidence_thresh && moved {
        state.last_position = best.center;
        state.confidence = confidence;
        state.lost_frames = 0;
    } else if confidence < config.confidence_thresh {
        state.confidence = confidence;
        state.lost_frames += 1;
        trace!(
            "low-confidence match (score {:.0}), lost for {} frames",
            best.score, state.lost_frames
        );
    }
}

/// Classify the track and write status and geometry back to the annotation.
///
/// Status is recomputed fresh from the current counters every tick. Geometry
/// only moves on an active track; uncertain and lost ticks change the
/// displayed status and nothing else.
fn write_back(annotation: &mut Annotation, state: &TrackState, config: &TrackerConfig) {
    if state.lost_frames > config.lost_buffer {
        annotation.status = TrackingStatus::Lost;
    } else if state.confidence < config.uncertain_thresh {
        annotation.status = TrackingStatus::Uncertain;
    } else {
        annotation.translate(state.last_position - annotation.position);
        annotation.status = TrackingStatus::Active;
    }
}
