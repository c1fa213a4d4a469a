use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::bounds::BoundingBox;
use crate::error::IndexError;

/// A point in D-dimensional Euclidean space.
pub type Point<const D: usize> = [f64; D];

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_sq<const D: usize>(a: &Point<D>, b: &Point<D>) -> f64 {
    let mut d2 = 0.0;
    for i in 0..D {
        let d = a[i] - b[i];
        d2 += d * d;
    }
    d2
}

/// Euclidean distance between two points.
#[inline]
pub fn distance<const D: usize>(a: &Point<D>, b: &Point<D>) -> f64 {
    distance_sq(a, b).sqrt()
}

/// Converts a dynamically sized coordinate slice into a point.
///
/// Fails unless the slice has exactly `D` entries, all of them finite.
pub fn point_from_slice<const D: usize>(coords: &[f64]) -> Result<Point<D>, IndexError> {
    let point: Point<D> = coords.try_into().map_err(|_| IndexError::DimensionMismatch {
        expected: D,
        found: coords.len(),
    })?;
    if let Some((index, &value)) = point.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(IndexError::NonFinite { index, value });
    }
    Ok(point)
}

/// Splits interleaved coordinates `[x0, y0, x1, y1, ...]` into points.
pub fn points_from_flat<const D: usize>(coords: &[f64]) -> Result<Vec<Point<D>>, IndexError> {
    if D == 0 || coords.len() % D != 0 {
        return Err(IndexError::RaggedCoordinates { dims: D, len: coords.len() });
    }
    coords.chunks_exact(D).map(point_from_slice::<D>).collect()
}

/// Parses one point per line.
///
/// Coordinates are separated by whitespace and/or commas. Blank lines and lines
/// starting with `#` are skipped. Line numbers in errors are 1-based.
pub fn parse_points<const D: usize, R: BufRead>(reader: R) -> Result<Vec<Point<D>>, IndexError> {
    let mut points = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let coords = line
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<f64>().map_err(|e| IndexError::InvalidLine {
                    line: i + 1,
                    reason: format!("{:?}: {}", s, e),
                })
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let point = point_from_slice(&coords).map_err(|e| IndexError::InvalidLine {
            line: i + 1,
            reason: e.to_string(),
        })?;
        points.push(point);
    }
    Ok(points)
}

/// Reads a point file, see [`parse_points`] for the format.
pub fn read_points<const D: usize, P: AsRef<Path>>(path: P) -> Result<Vec<Point<D>>, IndexError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let points = parse_points(BufReader::new(file))?;
    debug!(path = %path.display(), count = points.len(), "read points");
    Ok(points)
}

/// Generates `count` uniformly distributed points inside `bounds`.
///
/// The same seed always yields the same points.
pub fn random_points<const D: usize>(count: usize, bounds: &BoundingBox<D>, seed: u64) -> Vec<Point<D>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut p = [0.0; D];
            for i in 0..D {
                p[i] = bounds.min[i] + rng.r#gen::<f64>() * bounds.extent(i);
            }
            p
        })
        .collect()
}
