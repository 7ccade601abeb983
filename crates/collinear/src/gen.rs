//! Seeded point sets with planted lines.
//!
//! Purpose
//! - Reproducible inputs for benches, property tests and the CLI `generate`
//!   command. Each planted line carries `points_per_line` distinct points;
//!   noise points are uniform integers in `[-coord_bound, coord_bound]²`.
//!
//! Model
//! - Sloped lines get a rational slope `p/q` with `p ∈ [-3, 3]`, `q ∈ [1, 3]`
//!   and an integer intercept, so planted points have non-integer coordinates
//!   whenever `q ∤ x`.
//! - Every `vertical_every`-th line is vertical (0 disables vertical lines).
//! - Same `(cfg, seed)` → same point set, in the same order.

use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Coord, Line, Point, PointSet, SlopedLine};

/// Largest accepted `coord_bound`; larger values are clamped so planted
/// coordinates stay far from `i64` overflow.
pub const MAX_COORD_BOUND: i64 = 1_000_000_000_000;

/// Planted-lines sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PlantedCfg {
    pub noise_points: usize,
    pub lines: usize,
    pub points_per_line: usize,
    /// Coordinate range for noise points and line anchors, clamped to
    /// `[1, MAX_COORD_BOUND]`.
    pub coord_bound: i64,
    pub vertical_every: usize,
}

impl Default for PlantedCfg {
    fn default() -> Self {
        Self {
            noise_points: 40,
            lines: 4,
            points_per_line: 4,
            coord_bound: 50,
            vertical_every: 3,
        }
    }
}

/// Draw a point set and the lines that were planted in it.
pub fn draw_planted_with_lines(cfg: &PlantedCfg, seed: u64) -> (PointSet, Vec<Line>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let bound = cfg.coord_bound.clamp(1, MAX_COORD_BOUND);
    let mut points = PointSet::new();
    let mut lines = Vec::with_capacity(cfg.lines);

    for k in 0..cfg.lines {
        let x0 = rng.gen_range(-bound..=bound);
        let step = rng.gen_range(1..=3i64);
        let vertical = cfg.vertical_every > 0 && k % cfg.vertical_every == cfg.vertical_every - 1;
        if vertical {
            let x = int(x0);
            let y0 = rng.gen_range(-bound..=bound);
            for i in 0..cfg.points_per_line as i64 {
                points.insert(Point::new(x.clone(), int(y0 + i * step)));
            }
            lines.push(Line::Vertical { x });
        } else {
            let m = Coord::new(
                BigInt::from(rng.gen_range(-3..=3i64)),
                BigInt::from(rng.gen_range(1..=3i64)),
            );
            let line = SlopedLine {
                m,
                b: int(rng.gen_range(-bound..=bound)),
            };
            for i in 0..cfg.points_per_line as i64 {
                let x = int(x0 + i * step);
                let y = line.y_at(&x);
                points.insert(Point::new(x, y));
            }
            lines.push(Line::Sloped(line));
        }
    }

    for _ in 0..cfg.noise_points {
        points.insert(Point::from_ints(
            rng.gen_range(-bound..=bound),
            rng.gen_range(-bound..=bound),
        ));
    }
    (points, lines)
}

/// Draw a point set with planted lines.
pub fn draw_planted(cfg: &PlantedCfg, seed: u64) -> PointSet {
    draw_planted_with_lines(cfg, seed).0
}

fn int(v: i64) -> Coord {
    Coord::from_integer(BigInt::from(v))
}
