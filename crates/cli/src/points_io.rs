//! CSV input/output for point sets and timing rows (polars).
//!
//! - Point files have columns `x`, `y`. Integer columns stay `i64`; anything
//!   else is read as `f64`.
//! - Timing files have columns `n`, `nanoseconds`; append mode writes the
//!   header only into an empty file.

use std::fs::{self, File, OpenOptions};
use std::path::Path;

use anyhow::{bail, Context, Result};
use dchull::hull::{Coord, Point};
use polars::prelude::*;

/// Points read from a CSV file, in the file's numeric domain.
#[derive(Clone, Debug, PartialEq)]
pub enum PointSet {
    Int(Vec<Point<i64>>),
    Float(Vec<Point<f64>>),
}

impl PointSet {
    pub fn len(&self) -> usize {
        match self {
            PointSet::Int(p) => p.len(),
            PointSet::Float(p) => p.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One timed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub n: usize,
    pub nanoseconds: u128,
}

pub fn read_points(path: &Path) -> Result<PointSet> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(None)
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    let x = df
        .column("x")
        .with_context(|| format!("{}: missing column `x`", path.display()))?;
    let y = df
        .column("y")
        .with_context(|| format!("{}: missing column `y`", path.display()))?;
    if x.dtype().is_integer() && y.dtype().is_integer() {
        let xs = x.cast(&DataType::Int64)?;
        let ys = y.cast(&DataType::Int64)?;
        Ok(PointSet::Int(zip_points(xs.i64()?.into_iter(), ys.i64()?.into_iter())?))
    } else {
        let xs = x.cast(&DataType::Float64)?;
        let ys = y.cast(&DataType::Float64)?;
        Ok(PointSet::Float(zip_points(xs.f64()?.into_iter(), ys.f64()?.into_iter())?))
    }
}

fn zip_points<T: Coord>(
    xs: impl Iterator<Item = Option<T>>,
    ys: impl Iterator<Item = Option<T>>,
) -> Result<Vec<Point<T>>> {
    xs.zip(ys)
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Point::new(x, y)),
            _ => bail!("row {}: empty or non-numeric coordinate", row),
        })
        .collect()
}

pub fn write_points(path: &Path, points: &PointSet) -> Result<()> {
    let mut df = match points {
        PointSet::Int(p) => df!(
            "x" => p.iter().map(|q| q.x).collect::<Vec<_>>(),
            "y" => p.iter().map(|q| q.y).collect::<Vec<_>>()
        )?,
        PointSet::Float(p) => df!(
            "x" => p.iter().map(|q| q.x).collect::<Vec<_>>(),
            "y" => p.iter().map(|q| q.y).collect::<Vec<_>>()
        )?,
    };
    create_parent(path)?;
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn write_timings(path: &Path, rows: &[Timing], append: bool) -> Result<()> {
    let n: Vec<i64> = rows.iter().map(|r| r.n as i64).collect();
    let ns: Vec<i64> = rows
        .iter()
        .map(|r| i64::try_from(r.nanoseconds).unwrap_or(i64::MAX))
        .collect();
    let mut df = df!("n" => n, "nanoseconds" => ns)?;
    create_parent(path)?;
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let header = !append || file.metadata()?.len() == 0;
    CsvWriter::new(file)
        .include_header(header)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}
