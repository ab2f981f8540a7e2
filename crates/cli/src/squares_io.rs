//! Square sets on disk: CSV (columns `x,y,side`, via polars) or JSON
//! (array of `{x, y, side}` objects). The format follows the file extension.

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use squaresplit::Square;
use std::fs::{self, File};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
struct SquareRow {
    x: f64,
    y: f64,
    side: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Csv,
    Json,
}

fn format_of(path: &Path) -> Result<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(Format::Csv),
        Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Format::Json),
        _ => bail!("unsupported square file {} (expected .csv or .json)", path.display()),
    }
}

pub fn read_squares(path: &Path) -> Result<Vec<Square>> {
    match format_of(path)? {
        Format::Csv => read_csv(path),
        Format::Json => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            let rows: Vec<SquareRow> = serde_json::from_slice(&bytes)
                .with_context(|| format!("parsing {}", path.display()))?;
            Ok(rows
                .into_iter()
                .map(|r| Square::new(r.x, r.y, r.side))
                .collect())
        }
    }
}

pub fn write_squares(path: &Path, squares: &[Square]) -> Result<()> {
    ensure_parent(path)?;
    match format_of(path)? {
        Format::Csv => write_csv(path, squares),
        Format::Json => {
            let rows: Vec<SquareRow> = squares
                .iter()
                .map(|s| SquareRow {
                    x: s.x,
                    y: s.y,
                    side: s.side,
                })
                .collect();
            fs::write(path, serde_json::to_vec_pretty(&rows)?)
                .with_context(|| format!("writing {}", path.display()))
        }
    }
}

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn read_csv(path: &Path) -> Result<Vec<Square>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::debug!(rows = df.height(), cols = df.width(), "input_csv_shape");
    let xs = column_f64(&df, "x")?;
    let ys = column_f64(&df, "y")?;
    let sides = column_f64(&df, "side")?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .zip(sides)
        .map(|((x, y), side)| Square::new(x, y, side))
        .collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column `{name}`"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.ok_or_else(|| anyhow!("row {row}: null in column `{name}`")))
        .collect()
}

fn write_csv(path: &Path, squares: &[Square]) -> Result<()> {
    let xs: Vec<f64> = squares.iter().map(|s| s.x).collect();
    let ys: Vec<f64> = squares.iter().map(|s| s.y).collect();
    let sides: Vec<f64> = squares.iter().map(|s| s.side).collect();
    let mut df = df!("x" => xs, "y" => ys, "side" => sides)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
