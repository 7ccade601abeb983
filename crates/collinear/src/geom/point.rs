use std::collections::HashSet;
use std::fmt;

use nalgebra::Vector2;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::ToPrimitive;

use super::parse::parse_coord;
use crate::error::Result;

/// Exact coordinate type (numerator/denominator in lowest terms).
pub type Coord = BigRational;

/// 2D point with exact coordinates.
///
/// Ordering is lexicographic (x, then y); used to give groups a stable order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    #[inline]
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self {
            x: Coord::from_integer(BigInt::from(x)),
            y: Coord::from_integer(BigInt::from(y)),
        }
    }

    /// Parse both coordinates from decimal or `num/den` text.
    pub fn parse(x: &str, y: &str) -> Result<Self> {
        Ok(Self {
            x: parse_coord(x)?,
            y: parse_coord(y)?,
        })
    }

    /// Nearest-float view. Lossy; only for display.
    pub fn to_vec2(&self) -> Vector2<f64> {
        Vector2::new(
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
        )
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Deduplicated points in first-insertion order.
///
/// Duplicates carry no information for collinearity, so they are dropped on
/// insert. The order only affects output labels, never which groups exist.
#[derive(Clone, Debug, Default)]
pub struct PointSet {
    seen: HashSet<Point>,
    order: Vec<Point>,
}

impl PointSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point; returns `false` if it was already present.
    pub fn insert(&mut self, p: Point) -> bool {
        if self.seen.contains(&p) {
            return false;
        }
        self.seen.insert(p.clone());
        self.order.push(p);
        true
    }

    pub fn contains(&self, p: &Point) -> bool {
        self.seen.contains(p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.order.iter()
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.order
    }
}

impl FromIterator<Point> for PointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let mut set = PointSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Point> for PointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.order.iter()
    }
}
