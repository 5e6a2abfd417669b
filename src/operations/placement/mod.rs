mod endpoint;
mod label;

pub use endpoint::{HeadPlacement, TailPlacement};
pub use label::LabelPlacement;

use crate::error::{GeometryError, Result};
use crate::math::Point2;

/// Position and rotation (radians) of a node attached to the polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedPlacement {
    pub position: Point2,
    pub rotation: f64,
}

impl OrientedPlacement {
    #[must_use]
    pub fn new(position: Point2, rotation: f64) -> Self {
        Self { position, rotation }
    }
}

/// Fails unless `points` holds at least two vertices.
fn require_segment(points: &[Point2]) -> Result<()> {
    if points.len() < 2 {
        return Err(GeometryError::InsufficientPoints {
            required: 2,
            actual: points.len(),
        }
        .into());
    }
    Ok(())
}
