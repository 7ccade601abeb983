//! `collinear`: find every line through three or more points of a CSV file.
//!
//! Usage:
//!     collinear find --input points.csv --out groups.csv
//!     collinear generate --points 100 --lines 5 --seed 7 --out points.csv
//!     collinear report

mod io;
mod provenance;

use anyhow::Result;
use clap::{Parser, Subcommand};
use collinear::gen::{draw_planted, PlantedCfg};
use collinear::report::{build_records, RecordFormat};
use collinear::{find_collinear_groups_with, ScanCfg};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "collinear")]
#[command(version)]
#[command(about = "Exact detection of collinear point groups")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Detect collinear groups and write one `label,x1,y1,...` record per group
    Find {
        /// Headerless CSV with one `x,y` point per line
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Report only lines with at least this many points (minimum 3)
        #[arg(long, default_value_t = 3)]
        min_points: usize,
        /// Print exact rationals instead of decimal floats
        #[arg(long)]
        exact: bool,
        /// Also print records to stdout
        #[arg(long)]
        stdout: bool,
    },
    /// Write a seeded point set with planted lines
    Generate {
        /// Noise points in addition to the planted ones
        #[arg(long, default_value_t = 40)]
        points: usize,
        #[arg(long, default_value_t = 4)]
        lines: usize,
        #[arg(long, default_value_t = 4)]
        per_line: usize,
        #[arg(long, default_value_t = 50)]
        bound: i64,
        /// Every n-th planted line is vertical (0 = none)
        #[arg(long, default_value_t = 3)]
        vertical_every: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct FindSummary {
    input: String,
    min_points: usize,
    exact: bool,
    points: usize,
    groups: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Find {
            input,
            out,
            min_points,
            exact,
            stdout,
        } => {
            let records = find(&input, &out, ScanCfg { min_points }, exact)?;
            if stdout {
                for r in records {
                    println!("{r}");
                }
            }
            Ok(())
        }
        Action::Generate {
            points,
            lines,
            per_line,
            bound,
            vertical_every,
            seed,
            out,
        } => {
            let cfg = PlantedCfg {
                noise_points: points,
                lines,
                points_per_line: per_line,
                coord_bound: bound,
                vertical_every,
            };
            generate(&cfg, seed, &out)
        }
        Action::Report => report(),
    }
}

fn find(input: &Path, out: &Path, cfg: ScanCfg, exact: bool) -> Result<Vec<String>> {
    let points = io::read_points(input)?;
    let groups = find_collinear_groups_with(&points, cfg);
    let format = if exact {
        RecordFormat::Exact
    } else {
        RecordFormat::Float
    };
    let records = build_records(&groups, format);
    io::write_lines(out, &records)?;
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        points = points.len(),
        groups = groups.len(),
        "find"
    );

    let summary = FindSummary {
        input: input.to_string_lossy().into_owned(),
        min_points: cfg.threshold(),
        exact,
        points: points.len(),
        groups: groups.len(),
    };
    provenance::write_sidecar(out, &summary)?;
    Ok(records)
}

fn generate(cfg: &PlantedCfg, seed: u64, out: &Path) -> Result<()> {
    let points = draw_planted(cfg, seed);
    io::write_points(out, &points)?;
    tracing::info!(seed, points = points.len(), out = %out.display(), "generate");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": collinear::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
