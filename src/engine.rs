mod annotation;
mod matching;
mod motion_tracker;
mod template;
mod track_state;

pub use annotation::{Annotation, Shape, TrackingStatus, reset_annotation_id_counter};
pub use matching::Match;
pub use motion_tracker::{MotionTracker, TrackerConfig};
pub use template::Template;
pub use track_state::TrackState;
