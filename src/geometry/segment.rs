use crate::math::vector_2d::{point_at_offset, reverse_heading, rotation_angle, segment_length};
use crate::math::{Point2, Vector2, TOLERANCE};

/// A straight segment between two consecutive polyline vertices.
///
/// The parametric form is `P(s) = start + s * direction` with `s` measured
/// in arc length, so `P(length) = end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point2,
    end: Point2,
    length: f64,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self {
            start,
            end,
            length: segment_length(&start, &end),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns the Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Returns `true` if start and end coincide within [`TOLERANCE`].
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.length < TOLERANCE
    }

    /// Returns the unit direction, or the zero vector for a degenerate segment.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        if self.is_degenerate() {
            return Vector2::zeros();
        }
        (self.end - self.start) / self.length
    }

    /// Returns the marker rotation for travel along this segment.
    #[must_use]
    pub fn rotation(&self) -> f64 {
        rotation_angle(&self.start, &self.end)
    }

    /// Returns the tangent angle used for labels (no `π` flip).
    #[must_use]
    pub fn tangent_angle(&self) -> f64 {
        reverse_heading(&self.start, &self.end)
    }

    /// Returns the point at arc length `s` from the start.
    #[must_use]
    pub fn point_at(&self, s: f64) -> Point2 {
        point_at_offset(&self.start, &self.end, s)
    }
}

/// Iterates over the consecutive segments of a point sequence.
pub fn segments(points: &[Point2]) -> impl Iterator<Item = Segment> + '_ {
    points.windows(2).map(|pair| Segment::new(pair[0], pair[1]))
}
