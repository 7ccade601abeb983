//! Scan configuration and output groups.

use crate::geom::{Line, Point};

/// Scan configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanCfg {
    /// Minimum number of points on a line for it to be reported. Clamped to
    /// at least 3: two points always share a line.
    pub min_points: usize,
}

impl Default for ScanCfg {
    fn default() -> Self {
        Self { min_points: 3 }
    }
}

impl ScanCfg {
    #[inline]
    pub fn threshold(&self) -> usize {
        self.min_points.max(3)
    }
}

/// One reported line and every input point lying on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollinearGroup {
    /// Sequential label, starting at 1.
    pub label: usize,
    pub line: Line,
    /// Sorted ascending; at least `ScanCfg::threshold()` entries.
    pub points: Vec<Point>,
}

impl CollinearGroup {
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
