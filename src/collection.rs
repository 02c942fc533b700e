use nalgebra as na;
use ndarray::{Array1, Array2};

use crate::error::Error;
use crate::point::Point;

/// In-memory store for one annotation session: point records plus a
/// parallel per-point direction label.
///
/// Invariant: `points.len() == directions.len()` and `directions[i]` is the
/// label of `points[i]`'s track. Tracks are only added or removed wholesale,
/// so both arrays always move in lockstep.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackCollection {
    points: Vec<Point>,
    directions: Vec<u32>,
}

impl TrackCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collection seeded with the background placeholder point of track 0,
    /// so the first synthesized track receives id 1.
    pub fn seeded() -> Self {
        Self {
            points: vec![Point::new(0, 0.0, 0.0, 0.0)],
            directions: vec![0],
        }
    }

    pub fn from_parts(points: Vec<Point>, directions: Vec<u32>) -> Result<Self, Error> {
        if points.len() != directions.len() {
            return Err(Error::ShapeMismatch {
                points: points.len(),
                directions: directions.len(),
            });
        }

        Ok(Self { points, directions })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn directions(&self) -> &[u32] {
        &self.directions
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&Point, u32)> {
        self.points.iter().zip(self.directions.iter().copied())
    }

    #[inline]
    pub fn max_track_id(&self) -> Option<u32> {
        self.points.iter().map(|p| p.track_id).max()
    }

    pub fn track_count(&self) -> usize {
        let mut ids: Vec<u32> = self.points.iter().map(|p| p.track_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    /// Appends one whole track: every point carries the same track id and
    /// `direction` is replicated once per point.
    pub(crate) fn push_track(&mut self, points: Vec<Point>, direction: u32) {
        self.directions
            .extend(std::iter::repeat(direction).take(points.len()));
        self.points.extend(points);
    }

    /// Drops every point (and its label) of `track_id`; returns how many
    /// points were removed.
    pub(crate) fn remove_track(&mut self, track_id: u32) -> usize {
        let before = self.points.len();
        let points = std::mem::take(&mut self.points);
        let directions = std::mem::take(&mut self.directions);

        for (point, direction) in points.into_iter().zip(directions) {
            if point.track_id != track_id {
                self.points.push(point);
                self.directions.push(direction);
            }
        }

        before - self.points.len()
    }

    /// Point nearest to `position` over the full (time, y, x) vector.
    /// Temporal distance participates: a click on the current frame prefers
    /// tracks whose points are close in time as well as space.
    pub fn nearest_point(&self, position: &na::Point3<f32>) -> Result<&Point, Error> {
        self.points
            .iter()
            .min_by(|a, b| {
                let da = na::distance(&a.position(), position);
                let db = na::distance(&b.position(), position);
                da.total_cmp(&db)
            })
            .ok_or(Error::EmptyCollection)
    }

    /// Nx4 snapshot of the point data, rows `[track_id, time, y, x]`, in the
    /// shape the host display layer consumes.
    pub fn data(&self) -> Array2<f32> {
        let mut out = Array2::zeros((self.points.len(), 4));
        for (mut row, p) in out.outer_iter_mut().zip(&self.points) {
            row[0] = p.track_id as f32;
            row[1] = p.time;
            row[2] = p.y;
            row[3] = p.x;
        }
        out
    }

    pub fn direction_array(&self) -> Array1<u32> {
        Array1::from_iter(self.directions.iter().copied())
    }
}
