//! Exact collinearity detection for 2D point sets.
//!
//! Given a deduplicated set of points with rational coordinates, find every
//! maximal set of three or more points that share a line, and report each set
//! as a labeled group.
//!
//! Layout
//! - `geom`: exact value types (`Point`, `SlopedLine`, `Line`, `PointSet`) and
//!   decimal-to-rational parsing.
//! - `engine`: the all-pairs scan and grouping (`find_collinear_groups`).
//! - `report`: turns groups into ordered text records.
//! - `gen`: seeded point sets with planted lines for benches and property tests.
//!
//! All coordinate arithmetic is exact (`num_rational::BigRational`). Floats
//! appear only in `report` and `Point::to_vec2`.

pub mod engine;
pub mod error;
pub mod gen;
pub mod geom;
pub mod report;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use engine::{find_collinear_groups, find_collinear_groups_with, CollinearGroup, ScanCfg};
pub use error::{GeomError, Result};
pub use geom::{parse_coord, Coord, Line, Point, PointSet, SlopedLine};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::engine::{
        find_collinear_groups, find_collinear_groups_with, CollinearGroup, ScanCfg,
    };
    pub use crate::gen::{draw_planted, PlantedCfg};
    pub use crate::geom::{parse_coord, Coord, Line, Point, PointSet, SlopedLine};
    pub use crate::report::{build_records, format_record, RecordFormat};
}
