//! Collinearity engine: all-pairs scan and grouping by shared line.
//!
//! Purpose
//! - For every unordered pair of points, compute the exact line through them
//!   and accumulate both points under that line. Lines that collect at least
//!   `ScanCfg::min_points` points are reported as groups.
//!
//! Why this design
//! - Collinearity is pairwise, so the scan is `n·(n-1)/2` pairs; no geometric
//!   index is used.
//! - Vertical pairs never build a `SlopedLine`; they are keyed by their shared
//!   x-coordinate in a separate map, so no division by zero is reachable.
//! - All accumulation lives in a `LineAccumulator` created per call. The
//!   engine is a pure function of its input.
//!
//! Output order
//! - Sloped groups first, in the order their lines first reached the
//!   threshold; then vertical groups by ascending x. Points inside a group are
//!   sorted ascending. Labels run 1..=k in that order.
//!
//! Code cross-refs: `geom::{Point, SlopedLine, Line, PointSet}`, `report::build_records`

mod accum;
mod types;

pub use accum::LineAccumulator;
pub use types::{CollinearGroup, ScanCfg};

use crate::geom::PointSet;

/// Find all maximal collinear groups of three or more points.
pub fn find_collinear_groups(points: &PointSet) -> Vec<CollinearGroup> {
    find_collinear_groups_with(points, ScanCfg::default())
}

/// As `find_collinear_groups`, with an explicit threshold.
pub fn find_collinear_groups_with(points: &PointSet, cfg: ScanCfg) -> Vec<CollinearGroup> {
    let pts = points.as_slice();
    let mut acc = LineAccumulator::new(cfg.threshold());
    for (i, p) in pts.iter().enumerate() {
        for q in &pts[i + 1..] {
            acc.add_pair(p, q);
        }
    }
    let (sloped, vertical) = (acc.sloped_lines(), acc.vertical_lines());
    let groups = acc.into_groups();
    tracing::debug!(
        points = pts.len(),
        pairs = pts.len() * pts.len().saturating_sub(1) / 2,
        sloped,
        vertical,
        groups = groups.len(),
        "collinear scan complete"
    );
    groups
}

#[cfg(test)]
mod tests;
