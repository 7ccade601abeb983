//! Per-call line → points accumulation.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use super::types::CollinearGroup;
use crate::geom::{Coord, Line, Point, SlopedLine};

/// Accumulation state for one scan.
///
/// Invariants:
/// - A point enters a line's set only together with another point on it.
/// - `qualified` holds each sloped line at most once, in the order its set
///   first reached `threshold`; it never shrinks.
#[derive(Clone, Debug)]
pub struct LineAccumulator {
    threshold: usize,
    sloped: HashMap<SlopedLine, HashSet<Point>>,
    vertical: BTreeMap<Coord, BTreeSet<Coord>>,
    qualified: Vec<SlopedLine>,
}

impl LineAccumulator {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            sloped: HashMap::new(),
            vertical: BTreeMap::new(),
            qualified: Vec::new(),
        }
    }

    /// Record the pair `{p, q}` under the line through them.
    pub fn add_pair(&mut self, p: &Point, q: &Point) {
        if p.x == q.x {
            let ys = self.vertical.entry(p.x.clone()).or_default();
            ys.insert(p.y.clone());
            ys.insert(q.y.clone());
            return;
        }
        let line = SlopedLine::through_distinct_x(p, q);
        let members = self.sloped.entry(line.clone()).or_default();
        let before = members.len();
        members.insert(p.clone());
        members.insert(q.clone());
        if before < self.threshold && members.len() >= self.threshold {
            self.qualified.push(line);
        }
    }

    /// Number of distinct sloped lines seen so far.
    pub fn sloped_lines(&self) -> usize {
        self.sloped.len()
    }

    /// Number of distinct vertical lines seen so far.
    pub fn vertical_lines(&self) -> usize {
        self.vertical.len()
    }

    /// Freeze the scan and emit labeled groups.
    pub fn into_groups(mut self) -> Vec<CollinearGroup> {
        let mut groups = Vec::with_capacity(self.qualified.len());
        for line in self.qualified {
            let Some(members) = self.sloped.remove(&line) else {
                continue;
            };
            let mut points: Vec<Point> = members.into_iter().collect();
            points.sort();
            groups.push((Line::Sloped(line), points));
        }
        for (x, ys) in self.vertical {
            if ys.len() < self.threshold {
                continue;
            }
            let points = ys
                .into_iter()
                .map(|y| Point::new(x.clone(), y))
                .collect();
            groups.push((Line::Vertical { x }, points));
        }
        groups
            .into_iter()
            .enumerate()
            .map(|(i, (line, points))| CollinearGroup {
                label: i + 1,
                line,
                points,
            })
            .collect()
    }
}
