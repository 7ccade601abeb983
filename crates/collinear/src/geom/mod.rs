//! Exact 2D value types.
//!
//! Purpose
//! - `Point`: immutable point with rational coordinates; structural `Eq`/`Hash`.
//! - `SlopedLine` / `Line`: canonical line identity used as a map key. Two
//!   pairs of points on the same line always produce equal keys because
//!   slope and intercept are computed without rounding.
//! - `PointSet`: deduplicated, insertion-ordered input to the engine.
//!
//! Why rationals
//! - Decimal input such as `0.1` has no exact binary float. Parsing straight
//!   to `BigRational` keeps collinear inputs collinear.
//!
//! Code cross-refs: `engine::find_collinear_groups`, `report::format_record`

mod line;
mod parse;
mod point;

pub use line::{Line, SlopedLine};
pub use parse::parse_coord;
pub use point::{Coord, Point, PointSet};
