//! Text records for collinear groups.
//!
//! One record per group: `label,x1,y1,x2,y2,...`. Coordinates are printed as
//! decimal floats (`RecordFormat::Float`) or as exact rationals
//! (`RecordFormat::Exact`, e.g. `1/3`).
//!
//! Float text follows the shortest round-trip form with a signed, at least
//! two-digit exponent: `0.1`, `2.0`, `1e+16`, `1e-05`.

use crate::engine::CollinearGroup;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordFormat {
    #[default]
    Float,
    Exact,
}

/// Format a single group as a comma-delimited record.
pub fn format_record(group: &CollinearGroup, format: RecordFormat) -> String {
    let mut out = group.label.to_string();
    for p in &group.points {
        let (x, y) = match format {
            RecordFormat::Float => {
                let v = p.to_vec2();
                (float_text(v.x), float_text(v.y))
            }
            RecordFormat::Exact => (p.x.to_string(), p.y.to_string()),
        };
        out.push(',');
        out.push_str(&x);
        out.push(',');
        out.push_str(&y);
    }
    out
}

/// Shortest round-trip decimal text for `v`, exponent written as `e+16` / `e-05`.
pub fn float_text(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    let s = format!("{v:?}");
    let Some((mantissa, exp)) = s.split_once('e') else {
        return s;
    };
    let (sign, digits) = match exp.strip_prefix('-') {
        Some(d) => ('-', d),
        None => ('+', exp),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Records for all groups, in label order.
pub fn build_records(groups: &[CollinearGroup], format: RecordFormat) -> Vec<String> {
    groups.iter().map(|g| format_record(g, format)).collect()
}
