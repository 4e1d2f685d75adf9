//! Annotation shapes drawn by the operator.

use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::{Point2, Vector2};

/// Global annotation ID counter for unique ID generation.
static ANNOTATION_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Reset the global annotation ID counter (useful for testing).
pub fn reset_annotation_id_counter() {
    ANNOTATION_ID_COUNTER.store(0, Ordering::SeqCst);
}

/// Get the next unique annotation ID.
fn next_annotation_id() -> u64 {
    ANNOTATION_ID_COUNTER.fetch_add(1, Ordering::SeqCst) + 1
}

/// Tracking status displayed for an annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingStatus {
    /// Confident lock on the annotated content
    #[default]
    Active,
    /// Match quality degraded below the display threshold
    Uncertain,
    /// Too many consecutive low-confidence frames
    Lost,
}

/// Geometry variant of an annotation.
///
/// Rectangle dimensions are signed: during interactive creation the drag can
/// run up or left of the origin, and the raw values are kept as-is. Only
/// renderers normalize them; tracking never does.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Freehand stroke, points in insertion order (never empty)
    Path { points: Vec<Point2<f32>> },
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
}

/// A drawn annotation with its tracking metadata.
///
/// `position` is the anchor the tracker locks onto. For a path it is the
/// first captured point at creation time and is never recomputed from the
/// stroke; for rectangles it is the drag origin, for circles the center.
#[derive(Debug, Clone)]
pub struct Annotation {
    /// Unique annotation identifier
    pub id: u64,
    /// Display color, e.g. "#FF0000"
    pub color: String,
    /// Whether the motion tracker should follow this annotation
    pub tracking_enabled: bool,
    /// Last classification written back by the tracker
    pub status: TrackingStatus,
    /// Anchor position in frame coordinates
    pub position: Point2<f32>,
    pub shape: Shape,
}

impl Annotation {
    /// Start a freehand path at its first point. The anchor is fixed to that
    /// point for the lifetime of the annotation.
    pub fn path(first: Point2<f32>, color: impl Into<String>, tracking_enabled: bool) -> Self {
        Self {
            id: next_annotation_id(),
            color: color.into(),
            tracking_enabled,
            status: TrackingStatus::Active,
            position: first,
            shape: Shape::Path {
                points: vec![first],
            },
        }
    }

    pub fn rectangle(
        origin: Point2<f32>,
        width: f32,
        height: f32,
        color: impl Into<String>,
        tracking_enabled: bool,
    ) -> Self {
        Self {
            id: next_annotation_id(),
            color: color.into(),
            tracking_enabled,
            status: TrackingStatus::Active,
            position: origin,
            shape: Shape::Rectangle { width, height },
        }
    }

    pub fn circle(
        center: Point2<f32>,
        radius: f32,
        color: impl Into<String>,
        tracking_enabled: bool,
    ) -> Self {
        Self {
            id: next_annotation_id(),
            color: color.into(),
            tracking_enabled,
            status: TrackingStatus::Active,
            position: center,
            shape: Shape::Circle { radius },
        }
    }

    /// Append a point while a path is being drawn. Ignored for other shapes.
    pub fn add_point(&mut self, point: Point2<f32>) {
        if let Shape::Path { points } = &mut self.shape {
            points.push(point);
        }
    }

    /// Update rectangle dimensions during an interactive drag. Values stay
    /// signed. Ignored for other shapes.
    pub fn set_size(&mut self, new_width: f32, new_height: f32) {
        if let Shape::Rectangle { width, height } = &mut self.shape {
            *width = new_width;
            *height = new_height;
        }
    }

    /// Update circle radius during an interactive drag. Ignored for other
    /// shapes.
    pub fn set_radius(&mut self, new_radius: f32) {
        if let Shape::Circle { radius } = &mut self.shape {
            *radius = new_radius;
        }
    }

    /// Rigidly translate the annotation: the anchor moves by `delta`, and a
    /// path moves every point by the same delta so pairwise distances are
    /// preserved. Dimensions are never altered.
    pub fn translate(&mut self, delta: Vector2<f32>) {
        self.position += delta;
        if let Shape::Path { points } = &mut self.shape {
            for p in points.iter_mut() {
                *p += delta;
            }
        }
    }
}
