//! Command-line runner for turnkit turning jobs.
//!
//! Reads a TOML job description (stock, part, parameters), executes
//! the turning operation, and prints the extracted outline as a table
//! or JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use turnkit::{
    chain_segments, LatheProfile, PartOutline, ProfileSegment, RevolvedSolid, Sectionable,
    StockEnvelope, TurnJob, TurnParameters, TurnProfile,
};

#[derive(Parser)]
#[command(name = "turnkit", about = "Lathe turning toolpath kernel", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Extract the turning outline for a job file.
    Outline {
        /// Path to the TOML job description.
        job: PathBuf,
        /// Print the outline as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
}

/// A turning job description loaded from TOML.
#[derive(Debug, Deserialize)]
struct JobFile {
    stock: StockSpec,
    part: PartSpec,
    #[serde(default)]
    params: TurnParameters,
}

/// Cylindrical stock blank on the spindle axis.
#[derive(Debug, Deserialize)]
struct StockSpec {
    radius: f64,
    z_min: f64,
    z_max: f64,
}

/// The part model, as a primitive or an explicit lathe profile.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
enum PartSpec {
    Cylinder {
        radius: f64,
        z_min: f64,
        z_max: f64,
    },
    Frustum {
        radius_start: f64,
        radius_end: f64,
        z_min: f64,
        z_max: f64,
    },
    Ball {
        radius: f64,
        center_z: f64,
    },
    Profile {
        segments: Vec<SegmentSpec>,
    },
}

/// One profile segment in (z, r) coordinates.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum SegmentSpec {
    Line {
        start: [f64; 2],
        end: [f64; 2],
    },
    Arc {
        start: [f64; 2],
        end: [f64; 2],
        center: [f64; 2],
        ccw: bool,
    },
}

impl PartSpec {
    fn build(&self) -> Result<RevolvedSolid> {
        let solid = match self {
            PartSpec::Cylinder {
                radius,
                z_min,
                z_max,
            } => RevolvedSolid::cylinder(*radius, *z_min, *z_max)?,
            PartSpec::Frustum {
                radius_start,
                radius_end,
                z_min,
                z_max,
            } => RevolvedSolid::frustum(*radius_start, *radius_end, *z_min, *z_max)?,
            PartSpec::Ball { radius, center_z } => RevolvedSolid::ball(*radius, *center_z)?,
            PartSpec::Profile { segments } => {
                let segments = segments
                    .iter()
                    .map(|s| match s {
                        SegmentSpec::Line { start, end } => ProfileSegment::Line {
                            start: turnkit::Point2::new(start[0], start[1]),
                            end: turnkit::Point2::new(end[0], end[1]),
                        },
                        SegmentSpec::Arc {
                            start,
                            end,
                            center,
                            ccw,
                        } => ProfileSegment::Arc {
                            start: turnkit::Point2::new(start[0], start[1]),
                            end: turnkit::Point2::new(end[0], end[1]),
                            center: turnkit::Point2::new(center[0], center[1]),
                            ccw: *ccw,
                        },
                    })
                    .collect();
                RevolvedSolid::new(LatheProfile::from_segments(segments)?)
            }
        };
        Ok(solid)
    }
}

/// Serializable view of an extracted outline.
#[derive(Debug, Serialize)]
struct OutlineReport {
    segments: Vec<SegmentReport>,
    chains: usize,
}

#[derive(Debug, Serialize)]
struct SegmentReport {
    start: [f64; 3],
    end: [f64; 3],
    bulge: f64,
}

impl OutlineReport {
    fn from_outline(outline: &PartOutline) -> Self {
        let segments = outline
            .segments
            .iter()
            .map(|s| SegmentReport {
                start: [s.start.x, s.start.y, s.start.z],
                end: [s.end.x, s.end.y, s.end.z],
                bulge: s.bulge,
            })
            .collect();
        let chains = chain_segments(&outline.segments, 1e-6).len();
        Self { segments, chains }
    }
}

fn run_outline(job_path: &PathBuf, json: bool) -> Result<()> {
    let text = std::fs::read_to_string(job_path)
        .with_context(|| format!("reading job file {}", job_path.display()))?;
    let job_file: JobFile = toml::from_str(&text)
        .with_context(|| format!("parsing job file {}", job_path.display()))?;

    let stock = StockEnvelope::from_radius(
        job_file.stock.radius,
        job_file.stock.z_min,
        job_file.stock.z_max,
    );
    let part = job_file.part.build().context("building part model")?;

    if !part.aabb().overlaps(stock.bounds()) {
        anyhow::bail!("part lies entirely outside the stock envelope");
    }

    let job = TurnJob::new(stock, &part);
    let outline = TurnProfile::new(job_file.params)
        .execute(&job)
        .context("executing turning operation")?;

    let report = OutlineReport::from_outline(&outline);
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} segments in {} chain(s)",
            report.segments.len(),
            report.chains
        );
        for (i, s) in report.segments.iter().enumerate() {
            let kind = if s.bulge == 0.0 { "line" } else { "arc " };
            println!(
                "{i:3}  {kind}  ({:8.3}, {:8.3}) -> ({:8.3}, {:8.3})  bulge {:7.4}",
                s.start[0], s.start[2], s.end[0], s.end[2], s.bulge
            );
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match &cli.command {
        Command::Outline { job, json } => run_outline(job, *json),
    }
}
