use std::fmt;

use super::point::{Coord, Point};
use crate::error::{GeomError, Result};

/// Non-vertical line `y = m·x + b` with exact slope and intercept.
///
/// Equal lines compare and hash equal regardless of which pair of points they
/// were built from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlopedLine {
    pub m: Coord,
    pub b: Coord,
}

impl SlopedLine {
    /// Line through `p` and `q`.
    ///
    /// Pre: `p.x != q.x`. A shared x-coordinate is reported as
    /// `GeomError::VerticalPair`; callers that expect vertical pairs should
    /// go through `Line::through` instead.
    pub fn through(p: &Point, q: &Point) -> Result<Self> {
        if p.x == q.x {
            return Err(GeomError::VerticalPair { x: p.x.to_string() });
        }
        Ok(Self::through_distinct_x(p, q))
    }

    /// Pre: `p.x != q.x`, checked by the caller.
    pub(crate) fn through_distinct_x(p: &Point, q: &Point) -> Self {
        debug_assert!(p.x != q.x, "vertical pair reached SlopedLine");
        let m = (&p.y - &q.y) / (&p.x - &q.x);
        let b = &p.y - &m * &p.x;
        Self { m, b }
    }

    #[inline]
    pub fn y_at(&self, x: &Coord) -> Coord {
        &self.m * x + &self.b
    }

    #[inline]
    pub fn contains(&self, p: &Point) -> bool {
        self.y_at(&p.x) == p.y
    }
}

impl fmt::Display for SlopedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {} x + {}", self.m, self.b)
    }
}

/// Line identity: sloped or vertical.
///
/// Vertical lines have no finite slope, so they get their own variant rather
/// than a sentinel slope value.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Line {
    Sloped(SlopedLine),
    Vertical { x: Coord },
}

impl Line {
    /// Unique line through two distinct points.
    pub fn through(p: &Point, q: &Point) -> Result<Self> {
        if p == q {
            return Err(GeomError::CoincidentPoints {
                x: p.x.to_string(),
                y: p.y.to_string(),
            });
        }
        if p.x == q.x {
            return Ok(Line::Vertical { x: p.x.clone() });
        }
        SlopedLine::through(p, q).map(Line::Sloped)
    }

    pub fn contains(&self, p: &Point) -> bool {
        match self {
            Line::Sloped(l) => l.contains(p),
            Line::Vertical { x } => &p.x == x,
        }
    }

    #[inline]
    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Line::Sloped(l) => l.fmt(f),
            Line::Vertical { x } => write!(f, "x = {x}"),
        }
    }
}

impl From<SlopedLine> for Line {
    fn from(l: SlopedLine) -> Self {
        Line::Sloped(l)
    }
}
