//! Windowed SSD template matching.

use nalgebra::Point2;
use ndarray::Array3;

use crate::engine::motion_tracker::TrackerConfig;
use crate::engine::track_state::TrackState;
use crate::source::PixelSource;

/// Best candidate found by a search, as a region center plus its raw score.
#[derive(Debug, Clone, Copy)]
pub struct Match {
    pub center: Point2<f32>,
    pub score: f64,
}

/// Sum of squared per-channel differences over the red, green, and blue
/// channels (alpha ignored), normalized by the number of compared pixels.
/// Identical regions score exactly 0.
pub fn ssd(template: &Array3<u8>, candidate: &Array3<u8>) -> f64 {
    let rows = template.shape()[0].min(candidate.shape()[0]);
    let cols = template.shape()[1].min(candidate.shape()[1]);
    if rows == 0 || cols == 0 {
        return f64::INFINITY;
    }

    let mut sum: u64 = 0;
    for y in 0..rows {
        for x in 0..cols {
            for channel in 0..3 {
                let d = template[[y, x, channel]] as i64 - candidate[[y, x, channel]] as i64;
                sum += (d * d) as u64;
            }
        }
    }
    sum as f64 / (rows * cols) as f64
}

/// Scan a `±search_radius` window around the track's last position on a
/// `sample_stride` grid and return the lowest-scoring candidate, converted
/// from region top-left to region center. Ties keep the first candidate in
/// row-major scan order. When the window collapses (template larger than the
/// frame, or the clamped range is empty) the last position is returned with
/// an infinite score, which the update policy treats as a lost frame.
pub fn find_best_match<S: PixelSource>(
    source: &S,
    state: &TrackState,
    config: &TrackerConfig,
) -> Match {
    let (frame_width, frame_height) = source.dimensions();
    let template = &state.template;
    let tw = template.width();
    let th = template.height();

    let mut best = Match {
        center: state.last_position,
        score: f64::INFINITY,
    };
    if tw > frame_width || th > frame_height {
        return best;
    }

    let radius = config.search_radius as i64;
    let last_x = state.last_position.x.floor() as i64;
    let last_y = state.last_position.y.floor() as i64;

    let start_x = (last_x - radius).max(0);
    let start_y = (last_y - radius).max(0);
    let end_x = (last_x + radius).min((frame_width - tw) as i64);
    let end_y = (last_y + radius).min((frame_height - th) as i64);

    let stride = config.sample_stride.max(1) as usize;
    for y in (start_y..end_y).step_by(stride) {
        for x in (start_x..end_x).step_by(stride) {
            let candidate = source.region(x as u32, y as u32, tw, th);
            let score = ssd(&template.data, &candidate);
            if score < best.score {
                best = Match {
                    center: Point2::new(
                        x as f32 + tw as f32 / 2.0,
                        y as f32 + th as f32 / 2.0,
                    ),
                    score,
                };
            }
        }
    }

    best
}
