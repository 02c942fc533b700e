use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::collection::TrackCollection;
use crate::error::Error;
use crate::point::Point;

const COLUMNS: usize = 5;

/// Writes one row per point: `direction,track_id,time,y,x`, comma-delimited,
/// no header. Floats use the shortest representation that parses back to the
/// same value, so `decode(encode(c)) == c` exactly.
pub fn encode<W: Write>(points: &[Point], directions: &[u32], mut out: W) -> Result<(), Error> {
    if points.len() != directions.len() {
        return Err(Error::ShapeMismatch {
            points: points.len(),
            directions: directions.len(),
        });
    }

    for (p, d) in points.iter().zip(directions) {
        writeln!(out, "{},{},{},{},{}", d, p.track_id, p.time, p.y, p.x)?;
    }

    Ok(())
}

/// Parses rows of exactly 5 numeric columns back into points and labels.
///
/// Every column is parsed as `f64`, which holds the whole `u32` id range
/// exactly and still accepts files written by other tools in scientific
/// notation (`%.18e`). The label and id columns must fall inside the `u32`
/// range; coordinates narrow to `f32`. Blank lines are skipped.
pub fn decode<R: BufRead>(input: R) -> Result<(Vec<Point>, Vec<u32>), Error> {
    let mut points = Vec::new();
    let mut directions = Vec::new();

    for (idx, line) in input.lines().enumerate() {
        let line = line?;
        let row = line.trim();
        if row.is_empty() {
            continue;
        }
        let line_no = idx + 1;

        let fields: Vec<&str> = row.split(',').collect();
        if fields.len() != COLUMNS {
            return Err(Error::MalformedRow {
                line: line_no,
                reason: format!("expected {COLUMNS} columns, found {}", fields.len()),
            });
        }

        let mut values = [0.0f64; COLUMNS];
        for (value, field) in values.iter_mut().zip(&fields) {
            *value = field.trim().parse().map_err(|_| Error::MalformedRow {
                line: line_no,
                reason: format!("non-numeric field `{}`", field.trim()),
            })?;
        }

        for (name, value) in [("direction", values[0]), ("track id", values[1])] {
            if !(0.0..=u32::MAX as f64).contains(&value) {
                return Err(Error::MalformedRow {
                    line: line_no,
                    reason: format!("{name} {value} outside the u32 range"),
                });
            }
        }

        directions.push(values[0] as u32);
        points.push(Point::new(
            values[1] as u32,
            values[2] as f32,
            values[3] as f32,
            values[4] as f32,
        ));
    }

    Ok((points, directions))
}

/// Writes the collection to `path` and returns the written path, mirroring
/// the single-file writer contract of the host plugin API. No extension is
/// enforced here.
pub fn save<P: AsRef<Path>>(path: P, collection: &TrackCollection) -> Result<Vec<PathBuf>, Error> {
    let path = path.as_ref();

    let mut out = BufWriter::new(File::create(path)?);
    encode(collection.points(), collection.directions(), &mut out)?;
    out.flush()?;

    info!(path = %path.display(), rows = collection.len(), "saved track collection");

    Ok(vec![path.to_path_buf()])
}

pub fn load<P: AsRef<Path>>(path: P) -> Result<TrackCollection, Error> {
    let path = path.as_ref();
    let (points, directions) = decode(BufReader::new(File::open(path)?))?;

    info!(path = %path.display(), rows = points.len(), "loaded track collection");

    TrackCollection::from_parts(points, directions)
}

/// Path sniffing for the host's open dialog: only `.csv` paths are
/// recognized as track stores.
pub fn reader_for<P: AsRef<Path>>(path: P) -> Option<fn(&Path) -> Result<TrackCollection, Error>> {
    let recognized = path
        .as_ref()
        .extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("csv"));

    if recognized {
        Some(load_by_path)
    } else {
        None
    }
}

fn load_by_path(path: &Path) -> Result<TrackCollection, Error> {
    load(path)
}
