use crate::error::{DashError, Result};
use crate::math::TOLERANCE;

/// Alternating draw and gap lengths applied cyclically along a path.
///
/// Even indices are draw lengths, odd indices are gap lengths. An empty
/// pattern means a solid line. An odd-length list is repeated once, so
/// `[5]` behaves as `[5, 5]` and `[20, 10, 5]` as `[20, 10, 5, 20, 10, 5]`.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    entries: Vec<f64>,
    total: f64,
}

impl DashPattern {
    /// Creates a dash pattern from draw/gap lengths.
    ///
    /// # Errors
    ///
    /// Returns [`DashError::InvalidEntry`] if an entry is not finite or not
    /// positive, and [`DashError::DegeneratePattern`] if one cycle is shorter
    /// than [`TOLERANCE`].
    pub fn new(lengths: &[f64]) -> Result<Self> {
        if let Some((index, &value)) = lengths
            .iter()
            .enumerate()
            .find(|(_, v)| !v.is_finite() || **v < 0.0)
        {
            return Err(DashError::InvalidEntry { index, value }.into());
        }

        let mut entries = lengths.to_vec();
        if entries.len() % 2 == 1 {
            entries.extend_from_slice(lengths);
        }

        let total: f64 = entries.iter().sum();
        if !entries.is_empty() && total < TOLERANCE {
            return Err(DashError::DegeneratePattern.into());
        }
        if let Some((index, &value)) = lengths.iter().enumerate().find(|(_, v)| **v <= 0.0) {
            return Err(DashError::InvalidEntry { index, value }.into());
        }

        Ok(Self { entries, total })
    }

    /// Returns a pattern that draws a solid line.
    #[must_use]
    pub fn solid() -> Self {
        Self {
            entries: Vec::new(),
            total: 0.0,
        }
    }

    /// Returns `true` if the pattern has no entries.
    #[must_use]
    pub fn is_solid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the normalized entries (always of even length).
    #[must_use]
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// Returns the number of normalized entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the pattern has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the length of one full pattern cycle.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total
    }

    /// Returns the entry for a walk counter, wrapping around the pattern.
    ///
    /// Returns `None` for a solid pattern.
    #[must_use]
    pub fn entry(&self, index: usize) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        self.entries.get(index % self.entries.len()).copied()
    }

    /// Returns `true` if the entry at `index` draws rather than skips.
    #[must_use]
    pub fn is_draw(index: usize) -> bool {
        index % 2 == 0
    }
}

impl Default for DashPattern {
    fn default() -> Self {
        Self {
            entries: vec![10.0, 10.0],
            total: 20.0,
        }
    }
}
