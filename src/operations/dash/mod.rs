mod cursor;

pub use cursor::DashCursor;

use crate::math::{Point2, TOLERANCE};
use crate::style::DashPattern;

/// Dash phase threaded from one segment to the next and across frames.
///
/// `offset_remaining` is the unwalked part of the entry just before
/// `pattern_index`. `pattern_index` counts walked entries; it is reduced
/// modulo the pattern length on lookup and its parity selects draw or gap.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DashCarry {
    pub offset_remaining: f64,
    pub pattern_index: usize,
}

impl DashCarry {
    /// Returns the carry that starts a walk `phase` units into the pattern.
    ///
    /// `phase` may be negative or exceed one cycle; it is wrapped into
    /// `[0, total_length)`. A solid pattern always yields the default carry.
    #[must_use]
    pub fn at_phase(pattern: &DashPattern, phase: f64) -> Self {
        let total = pattern.total_length();
        if pattern.is_solid() || !phase.is_finite() {
            return Self::default();
        }
        let phase = phase.rem_euclid(total);

        let mut start = 0.0;
        for (index, &length) in pattern.entries().iter().enumerate() {
            let end = start + length;
            if phase < end {
                if phase - start < TOLERANCE {
                    return Self {
                        offset_remaining: 0.0,
                        pattern_index: index,
                    };
                }
                return Self {
                    offset_remaining: end - phase,
                    pattern_index: index + 1,
                };
            }
            start = end;
        }
        Self::default()
    }
}

/// One walked piece of a segment: drawn when `visible`, skipped otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashSpan {
    pub from: Point2,
    pub to: Point2,
    pub visible: bool,
}

impl DashSpan {
    #[must_use]
    pub fn new(from: Point2, to: Point2, visible: bool) -> Self {
        Self { from, to, visible }
    }
}
