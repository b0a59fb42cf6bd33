use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dchull::hull::convex_hull;
use dchull::sample::{SampleCfg, DEFAULT_SEED};
use serde::Serialize;
use tracing_subscriber::fmt::SubscriberBuilder;

mod bench;
mod points_io;
mod provenance;

use bench::{BenchParams, DEFAULT_SIZES};
use points_io::PointSet;
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "dchull")]
#[command(about = "Divide-and-conquer convex hull: timing harness and CSV front-end")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Time the hull on seeded random point sets and write `n,nanoseconds` rows
    Bench {
        #[arg(long, value_delimiter = ',', default_values_t = DEFAULT_SIZES)]
        sizes: Vec<usize>,
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,
        /// Inclusive coordinate lower bound
        #[arg(long, default_value_t = SampleCfg::default().min_coord, allow_negative_numbers = true)]
        min: i64,
        /// Inclusive coordinate upper bound
        #[arg(long, default_value_t = SampleCfg::default().max_coord, allow_negative_numbers = true)]
        max: i64,
        #[arg(long, default_value = "results.csv")]
        out: PathBuf,
        /// Append to `out` instead of replacing it
        #[arg(long)]
        append: bool,
    },
    /// Hull of the `x,y` points in a CSV file, written as ccw `x,y` rows
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Serialize)]
struct HullParams<'a> {
    input: &'a PathBuf,
    points: usize,
    vertices: usize,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Bench {
            sizes,
            seed,
            min,
            max,
            out,
            append,
        } => run_bench(
            BenchParams {
                sizes,
                seed,
                min_coord: min,
                max_coord: max,
            },
            out,
            append,
        ),
        Action::Hull { input, out } => run_hull(input, out),
        Action::Report => report(),
    }
}

fn run_bench(params: BenchParams, out: PathBuf, append: bool) -> Result<()> {
    tracing::info!(
        sizes = ?params.sizes,
        seed = params.seed,
        min = params.min_coord,
        max = params.max_coord,
        out = %out.display(),
        "bench"
    );
    let rows = bench::run(&params)?;
    println!("n, nanoseconds");
    for r in &rows {
        println!("{}, {} ns", r.n, r.nanoseconds);
    }
    points_io::write_timings(&out, &rows, append)?;
    let prov = write_sidecar(&out, Payload::new("bench", &params)?)?;
    tracing::info!(rows = rows.len(), provenance = %prov.display(), "results saved");
    Ok(())
}

fn run_hull(input: PathBuf, out: PathBuf) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), "hull");
    let points = points_io::read_points(&input)?;
    let result = match &points {
        PointSet::Int(p) => PointSet::Int(convex_hull(p)?.into_vertices()),
        PointSet::Float(p) => PointSet::Float(convex_hull(p)?.into_vertices()),
    };
    points_io::write_points(&out, &result)?;
    let params = HullParams {
        input: &input,
        points: points.len(),
        vertices: result.len(),
    };
    write_sidecar(&out, Payload::new("hull", &params)?)?;
    tracing::info!(points = params.points, vertices = params.vertices, "hull written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": dchull::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
