//! CSV adapters: point input and record output.
//!
//! Input is a headerless two-column `x,y` file. Columns are read as strings
//! and parsed straight to rationals; going through a float column would lose
//! exactness before the engine ever sees the points.

use anyhow::{bail, Context, Result};
use collinear::{Point, PointSet};
use polars::prelude::*;
use std::fs;
use std::path::Path;

/// Read and deduplicate points. Blank or whitespace-only rows are skipped;
/// a file with no points at all yields an empty set.
pub fn read_points(path: &Path) -> Result<PointSet> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    if text.trim().is_empty() {
        return Ok(PointSet::new());
    }
    let df = LazyCsvReader::new(path)
        .with_has_header(false)
        .with_infer_schema_length(Some(0))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("parsing CSV {}", path.display()))?;
    if df.width() != 2 {
        bail!(
            "{}: expected 2 columns (x,y), found {}",
            path.display(),
            df.width()
        );
    }
    let cols = df.get_columns();
    let xs = cols[0].str()?;
    let ys = cols[1].str()?;

    let mut points = PointSet::new();
    let mut rows = 0usize;
    for (row, (x, y)) in xs.into_iter().zip(ys).enumerate() {
        let (x, y) = match (non_blank(x), non_blank(y)) {
            (None, None) => continue,
            (Some(x), Some(y)) => (x, y),
            _ => bail!("{}: row {}: missing coordinate", path.display(), row + 1),
        };
        let p = Point::parse(x, y)
            .with_context(|| format!("{}: row {}", path.display(), row + 1))?;
        points.insert(p);
        rows += 1;
    }
    tracing::debug!(rows, unique = points.len(), "read_points");
    Ok(points)
}

fn non_blank(field: Option<&str>) -> Option<&str> {
    field.filter(|f| !f.trim().is_empty())
}

/// Write one record per line, creating parent directories as needed.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut body = String::new();
    for line in lines {
        body.push_str(line.as_ref());
        body.push('\n');
    }
    fs::write(path, body).with_context(|| format!("writing {}", path.display()))
}

/// Write points as exact `x,y` rows (`1/3` for non-terminating values).
pub fn write_points(path: &Path, points: &PointSet) -> Result<()> {
    let rows: Vec<String> = points.iter().map(|p| format!("{},{}", p.x, p.y)).collect();
    write_lines(path, &rows)
}
