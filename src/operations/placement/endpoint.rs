use crate::error::Result;
use crate::math::vector_2d::rotation_angle;
use crate::math::Point2;

use super::{require_segment, OrientedPlacement};

/// Orients the tail marker on the first segment of a polyline.
pub struct TailPlacement<'a> {
    points: &'a [Point2],
}

impl<'a> TailPlacement<'a> {
    /// Creates a new `TailPlacement` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query: position `points[0]`, rotation along
    /// `points[0] → points[1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are provided.
    pub fn execute(&self) -> Result<OrientedPlacement> {
        require_segment(self.points)?;
        let (from, to) = (&self.points[0], &self.points[1]);
        Ok(OrientedPlacement::new(*from, rotation_angle(from, to)))
    }
}

/// Orients the head marker on the last segment of a polyline.
pub struct HeadPlacement<'a> {
    points: &'a [Point2],
}

impl<'a> HeadPlacement<'a> {
    /// Creates a new `HeadPlacement` query.
    #[must_use]
    pub fn new(points: &'a [Point2]) -> Self {
        Self { points }
    }

    /// Executes the query: position `points[n-1]`, rotation along
    /// `points[n-2] → points[n-1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 points are provided.
    pub fn execute(&self) -> Result<OrientedPlacement> {
        require_segment(self.points)?;
        let n = self.points.len();
        let (from, to) = (&self.points[n - 2], &self.points[n - 1]);
        Ok(OrientedPlacement::new(*to, rotation_angle(from, to)))
    }
}
