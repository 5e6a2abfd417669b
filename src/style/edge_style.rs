use crate::error::{Result, StyleError};

use super::arrowhead::ArrowheadShape;
use super::dash_pattern::DashPattern;

/// Shape applied to the ends of each stroked span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    Butt,
    #[default]
    Round,
    Square,
}

/// Shape applied where two stroked spans meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineJoin {
    Miter,
    #[default]
    Round,
    Bevel,
}

/// Visual parameters of a polyline edge.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeStyle {
    width: f64,
    color: String,
    cap: LineCap,
    join: LineJoin,
    dash: DashPattern,
    head: ArrowheadShape,
    tail: ArrowheadShape,
}

impl EdgeStyle {
    /// Creates a new edge style with round caps and joins, the default
    /// `[10, 10]` dash pattern and default arrowheads.
    ///
    /// `color` is passed to the surface unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not finite and positive.
    pub fn new(width: f64, color: impl Into<String>) -> Result<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(StyleError::InvalidParameters(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self {
            width,
            color: color.into(),
            cap: LineCap::default(),
            join: LineJoin::default(),
            dash: DashPattern::default(),
            head: ArrowheadShape::default_head(),
            tail: ArrowheadShape::default_tail(),
        })
    }

    /// Replaces the dash pattern.
    #[must_use]
    pub fn with_dash_pattern(mut self, dash: DashPattern) -> Self {
        self.dash = dash;
        self
    }

    /// Replaces both arrowhead markers.
    #[must_use]
    pub fn with_arrowheads(mut self, head: ArrowheadShape, tail: ArrowheadShape) -> Self {
        self.head = head;
        self.tail = tail;
        self
    }

    /// Replaces the cap and join shapes.
    #[must_use]
    pub fn with_line_shape(mut self, cap: LineCap, join: LineJoin) -> Self {
        self.cap = cap;
        self.join = join;
        self
    }

    /// Returns the stroke width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the stroke colour.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    #[must_use]
    pub fn cap(&self) -> LineCap {
        self.cap
    }

    #[must_use]
    pub fn join(&self) -> LineJoin {
        self.join
    }

    /// Returns the dash pattern.
    #[must_use]
    pub fn dash_pattern(&self) -> &DashPattern {
        &self.dash
    }

    /// Returns the marker drawn at the last point.
    #[must_use]
    pub fn head(&self) -> &ArrowheadShape {
        &self.head
    }

    /// Returns the marker drawn at the first point.
    #[must_use]
    pub fn tail(&self) -> &ArrowheadShape {
        &self.tail
    }
}
