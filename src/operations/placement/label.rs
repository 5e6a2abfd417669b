use crate::error::Result;
use crate::geometry::segments;
use crate::math::vector_2d::point_at_offset;
use crate::math::Point2;

use super::{require_segment, OrientedPlacement};

/// Places a label at half the arc length of a polyline.
///
/// The target distance is `ceil(total / 2)`. The label lands on the first
/// segment whose cumulative length strictly exceeds the target, measured
/// back from that segment's end, and takes the segment's tangent angle.
pub struct LabelPlacement<'a> {
    points: &'a [Point2],
}

impl<'a> LabelPlacement<'a> {
    /// Creates a new `LabelPlacement` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query.
    ///
    /// Returns `Ok(None)` when no segment ends beyond the target, which
    /// happens when rounding pushes the target onto the last vertex (for
    /// example a single segment of length 1).
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are provided.
    pub fn execute(&self) -> Result<Option<OrientedPlacement>> {
        require_segment(self.points)?;

        let total: f64 = segments(self.points).map(|s| s.length()).sum();
        let target = (total / 2.0).ceil();

        let mut cumulative = 0.0;
        for segment in segments(self.points) {
            cumulative += segment.length();
            if target < cumulative {
                let overshoot = cumulative - target;
                let position = point_at_offset(segment.end(), segment.start(), overshoot);
                return Ok(Some(OrientedPlacement::new(
                    position,
                    segment.tangent_angle(),
                )));
            }
        }
        Ok(None)
    }
}
