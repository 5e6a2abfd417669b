mod arrowhead;
mod dash_pattern;
mod edge_style;

pub use arrowhead::{
    ArrowheadShape, DEFAULT_ARROW_FILL, DEFAULT_ARROW_LENGTH, DEFAULT_ARROW_WIDTH,
};
pub use dash_pattern::DashPattern;
pub use edge_style::{EdgeStyle, LineCap, LineJoin};

use crate::error::{Result, StyleError};

/// Parameters controlling the dash animation speed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationParams {
    /// Frames needed to advance the dash phase by one unit of arc length.
    time_constant: f64,
}

impl AnimationParams {
    /// Creates animation parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `time_constant` is not finite and positive.
    pub fn new(time_constant: f64) -> Result<Self> {
        if !time_constant.is_finite() || time_constant <= 0.0 {
            return Err(StyleError::InvalidParameters(
                "animation time constant must be positive".to_owned(),
            )
            .into());
        }
        Ok(Self { time_constant })
    }

    #[must_use]
    pub fn time_constant(&self) -> f64 {
        self.time_constant
    }

    /// Returns the dash phase advance per frame, `1 / time_constant`.
    #[must_use]
    pub fn step(&self) -> f64 {
        1.0 / self.time_constant
    }
}

impl Default for AnimationParams {
    fn default() -> Self {
        Self { time_constant: 5.0 }
    }
}
