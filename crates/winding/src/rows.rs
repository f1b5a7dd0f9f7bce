//! Numeric-row text format for inputs and results.
//!
//! Input files hold one row per line. Numbers are separated by commas and/or
//! whitespace. Blank lines and lines starting with `#` are skipped. Point files
//! carry rows of 2 numbers (`x, y`), polygon files rows of 4 (`x, y, w, h`).
//!
//! Result files start with a `# Results` header followed by one code per line.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::classify::ResultCode;
use crate::geom::{Point, Polygon};

/// Numbers per point row.
pub const POINT_ARITY: usize = 2;
/// Numbers per polygon row.
pub const POLYGON_ARITY: usize = 4;
/// First line of every results file.
pub const RESULTS_HEADER: &str = "# Results";

#[derive(Debug, Error)]
pub enum RowError {
    #[error("{op} {shown}: {source}", shown = path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: cannot parse {token:?} as a number")]
    BadNumber { line: usize, token: String },
    #[error("line {line}: expected {expected} numbers, found {found}")]
    BadArity {
        line: usize,
        expected: usize,
        found: usize,
    },
}

/// Parse `text` into rows of exactly `arity` finite numbers.
///
/// Line numbers in errors are 1-based and count skipped lines too. `NaN` and
/// infinities are rejected as `BadNumber`.
pub fn parse_rows(text: &str, arity: usize) -> Result<Vec<Vec<f64>>, RowError> {
    let mut rows = Vec::new();
    for (k, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let row = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| match tok.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(RowError::BadNumber {
                    line: k + 1,
                    token: tok.to_string(),
                }),
            })
            .collect::<Result<Vec<f64>, _>>()?;
        if row.len() != arity {
            return Err(RowError::BadArity {
                line: k + 1,
                expected: arity,
                found: row.len(),
            });
        }
        rows.push(row);
    }
    Ok(rows)
}

/// Fixed-size view of each row; `line` in the error is the 1-based row index.
fn fixed_rows<const N: usize>(rows: &[Vec<f64>]) -> Result<Vec<[f64; N]>, RowError> {
    rows.iter()
        .enumerate()
        .map(|(k, r)| {
            <[f64; N]>::try_from(r.as_slice()).map_err(|_| RowError::BadArity {
                line: k + 1,
                expected: N,
                found: r.len(),
            })
        })
        .collect()
}

/// Build points from rows of arity 2.
pub fn points_from_rows(rows: &[Vec<f64>]) -> Result<Vec<Point>, RowError> {
    Ok(fixed_rows::<POINT_ARITY>(rows)?
        .into_iter()
        .map(|[x, y]| Point::new(x, y))
        .collect())
}

/// Build rectangles from rows of arity 4.
pub fn polygons_from_rows(rows: &[Vec<f64>]) -> Result<Vec<Polygon>, RowError> {
    Ok(fixed_rows::<POLYGON_ARITY>(rows)?
        .into_iter()
        .map(|[x, y, w, h]| Polygon::rectangle(x, y, w, h))
        .collect())
}

fn read_text(path: &Path) -> Result<String, RowError> {
    fs::read_to_string(path).map_err(|source| RowError::Io {
        op: "reading",
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, RowError> {
    let rows = parse_rows(&read_text(path.as_ref())?, POINT_ARITY)?;
    points_from_rows(&rows)
}

pub fn read_polygons<P: AsRef<Path>>(path: P) -> Result<Vec<Polygon>, RowError> {
    let rows = parse_rows(&read_text(path.as_ref())?, POLYGON_ARITY)?;
    polygons_from_rows(&rows)
}

/// Header line, then each code on its own line.
pub fn format_results(results: &[ResultCode]) -> String {
    let mut out = String::with_capacity(RESULTS_HEADER.len() + 2 * results.len() + 1);
    out.push_str(RESULTS_HEADER);
    out.push('\n');
    for r in results {
        out.push('\n');
        out.push(if r.is_inside() { '0' } else { '1' });
    }
    out
}

/// Write `format_results` output to `path`, creating parent directories.
pub fn write_results<P: AsRef<Path>>(path: P, results: &[ResultCode]) -> Result<(), RowError> {
    write_text(path.as_ref(), &format_results(results))
}

pub fn format_points(points: &[Point]) -> String {
    let mut out = String::from("# x, y\n");
    for p in points {
        out.push_str(&format!("{}, {}\n", p.x(), p.y()));
    }
    out
}

pub fn format_polygons(polygons: &[Polygon]) -> String {
    let mut out = String::from("# x, y, width, height\n");
    for poly in polygons {
        let o = poly.origin();
        out.push_str(&format!(
            "{}, {}, {}, {}\n",
            o.x(),
            o.y(),
            poly.width(),
            poly.height()
        ));
    }
    out
}

fn write_text(path: &Path, text: &str) -> Result<(), RowError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| RowError::Io {
                op: "creating",
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    fs::write(path, text).map_err(|source| RowError::Io {
        op: "writing",
        path: path.to_path_buf(),
        source,
    })
}

/// Write points in the input format.
pub fn write_points<P: AsRef<Path>>(path: P, points: &[Point]) -> Result<(), RowError> {
    write_text(path.as_ref(), &format_points(points))
}

/// Write rectangles in the input format.
pub fn write_polygons<P: AsRef<Path>>(path: P, polygons: &[Polygon]) -> Result<(), RowError> {
    write_text(path.as_ref(), &format_polygons(polygons))
}
