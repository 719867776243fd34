//! Point I/O for the runner: CSV/Parquet via polars, JSON via serde_json.
//!
//! Tabular inputs need numeric `x` and `y` columns (integers are widened).
//! JSON inputs are an array of `[x, y]` pairs.

use anyhow::{bail, Context, Result};
use graham::Vec2;
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load points from `path`, dispatching on the file extension.
pub fn read_points(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("csv") => {
            let lf = LazyCsvReader::new(path)
                .with_has_header(true)
                .with_infer_schema_length(Some(100))
                .finish()
                .with_context(|| format!("opening {}", path.display()))?;
            collect_xy(lf)
        }
        Some("parquet") => {
            let lf = LazyFrame::scan_parquet(path, ScanArgsParquet::default())
                .with_context(|| format!("opening {}", path.display()))?;
            collect_xy(lf)
        }
        Some("json") => read_json(path),
        _ => bail!(
            "unsupported input {} (expected .csv, .parquet or .json)",
            path.display()
        ),
    }
}

fn collect_xy(lf: LazyFrame) -> Result<Vec<Vec2<f64>>> {
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, xy)| match xy {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => bail!("row {row}: missing x or y"),
        })
        .collect()
}

fn read_json(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let raw: Vec<[f64; 2]> = serde_json::from_slice(&bytes)
        .with_context(|| format!("parsing {} as [[x, y], ...]", path.display()))?;
    Ok(raw.into_iter().map(|[x, y]| Vec2::new(x, y)).collect())
}

/// `[x, y]` pairs for JSON output.
pub fn to_pairs(points: &[Vec2<f64>]) -> Vec<[f64; 2]> {
    points.iter().map(|p| [p.x, p.y]).collect()
}

/// Pretty-print `value` to `path`, creating parent directories.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_json_pairs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.json");
        fs::write(&path, "[[0, 0], [2.5, 0], [1, 2]]").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![Vec2::new(0.0, 0.0), Vec2::new(2.5, 0.0), Vec2::new(1.0, 2.0)]
        );
    }

    #[test]
    fn reads_csv_columns_and_widens_ints() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "id,x,y\na,0,0\nb,4,0\nc,4.5,4\n").unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(4.5, 4.0)]
        );
    }

    #[test]
    fn reads_parquet_columns() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.parquet");
        let mut df = df!("x" => [0.0, 4.0, 4.0], "y" => [0i64, 0, 3]).unwrap();
        ParquetWriter::new(fs::File::create(&path).unwrap())
            .finish(&mut df)
            .unwrap();
        let pts = read_points(&path).unwrap();
        assert_eq!(
            pts,
            vec![Vec2::new(0.0, 0.0), Vec2::new(4.0, 0.0), Vec2::new(4.0, 3.0)]
        );
    }

    #[test]
    fn csv_missing_value_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n1,\n").unwrap();
        let err = read_points(&path).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{err:#}");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = read_points(Path::new("points.txt")).unwrap_err();
        assert!(err.to_string().contains("unsupported input"));
    }

    #[test]
    fn write_json_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out.json");
        write_json(&path, &to_pairs(&[Vec2::new(1.0, 2.0)])).unwrap();
        let back = read_points(&path).unwrap();
        assert_eq!(back, vec![Vec2::new(1.0, 2.0)]);
    }
}
