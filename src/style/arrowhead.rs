use crate::error::{Result, StyleError};
use crate::math::{Point2, Vector2};

/// Default arrowhead length along the direction of travel.
pub const DEFAULT_ARROW_LENGTH: f64 = 5.0;

/// Default arrowhead width across the direction of travel.
pub const DEFAULT_ARROW_WIDTH: f64 = 6.0;

/// Default arrowhead fill.
pub const DEFAULT_ARROW_FILL: &str = "#ffffff";

/// Triangle marker drawn at either end of an edge.
///
/// Vertices are in marker-local coordinates with the tip on +x. The surface
/// positions the marker so that `pivot` lands on the edge endpoint, then
/// applies `scale` and the placement rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowheadShape {
    vertices: [Point2; 3],
    pivot: Point2,
    scale: Vector2,
    fill: String,
}

impl ArrowheadShape {
    /// Creates the marker for the head (last point) of an edge.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` or `width` is not finite and positive.
    pub fn head(length: f64, width: f64) -> Result<Self> {
        Self::triangle(length, width, Vector2::new(1.0, 1.0))
    }

    /// Creates the marker for the tail (first point) of an edge, mirrored on x.
    ///
    /// # Errors
    ///
    /// Returns an error if `length` or `width` is not finite and positive.
    pub fn tail(length: f64, width: f64) -> Result<Self> {
        Self::triangle(length, width, Vector2::new(-1.0, 1.0))
    }

    /// Returns the head marker with the default 5 × 6 dimensions.
    #[must_use]
    pub fn default_head() -> Self {
        Self::build(DEFAULT_ARROW_LENGTH, DEFAULT_ARROW_WIDTH, Vector2::new(1.0, 1.0))
    }

    /// Returns the tail marker with the default 5 × 6 dimensions.
    #[must_use]
    pub fn default_tail() -> Self {
        Self::build(DEFAULT_ARROW_LENGTH, DEFAULT_ARROW_WIDTH, Vector2::new(-1.0, 1.0))
    }

    fn triangle(length: f64, width: f64, scale: Vector2) -> Result<Self> {
        if !length.is_finite() || !width.is_finite() || length <= 0.0 || width <= 0.0 {
            return Err(StyleError::InvalidParameters(format!(
                "arrowhead dimensions must be positive: length={length}, width={width}"
            ))
            .into());
        }
        Ok(Self::build(length, width, scale))
    }

    fn build(length: f64, width: f64, scale: Vector2) -> Self {
        let tip = Point2::new(length, width * 0.5);
        Self {
            vertices: [Point2::new(0.0, 0.0), tip, Point2::new(0.0, width)],
            pivot: tip,
            scale,
            fill: DEFAULT_ARROW_FILL.to_owned(),
        }
    }

    /// Returns a copy with a different fill colour.
    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Returns the triangle vertices in marker-local coordinates.
    #[must_use]
    pub fn vertices(&self) -> &[Point2; 3] {
        &self.vertices
    }

    /// Returns the local point that is pinned to the edge endpoint.
    #[must_use]
    pub fn pivot(&self) -> &Point2 {
        &self.pivot
    }

    /// Returns the local scale (x is `-1` for the mirrored tail marker).
    #[must_use]
    pub fn scale(&self) -> &Vector2 {
        &self.scale
    }

    /// Returns the fill colour.
    #[must_use]
    pub fn fill(&self) -> &str {
        &self.fill
    }
}
