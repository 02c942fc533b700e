use nalgebra as na;
use serde_derive::{Deserialize, Serialize};
use tracing::debug;

use crate::collection::TrackCollection;
use crate::error::Error;
use crate::point::Point;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Annotation parameters owned by the host configuration surface.
///
/// `orientation` is the raw selection set of the host's multi-select widget;
/// exactly one choice must be selected whenever a track is inserted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnnotatorConfig {
    pub orientation: Vec<Orientation>,
    pub temporal_spread: u32,
    pub spatial_spread: u32,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            orientation: vec![Orientation::Vertical],
            temporal_spread: 10,
            spatial_spread: 10,
        }
    }
}

impl AnnotatorConfig {
    pub fn orientation(&self) -> Result<Orientation, Error> {
        match self.orientation.as_slice() {
            [single] => Ok(*single),
            other => Err(Error::InvalidConfiguration {
                selected: other.len(),
            }),
        }
    }
}

/// Synthesizes one track of `2k + 1` points around the click origin, where
/// `k = temporal_spread`. Times are clamped to be non-negative; the spatial
/// offset varies linearly from `-spatial_spread` to `+spatial_spread` along
/// the configured axis, with its sign flipped for direction label 1.
///
/// `k == 0` degenerates to a single point at the clamped origin.
fn synthesize(
    track_id: u32,
    origin: [f32; 3],
    direction: u32,
    orientation: Orientation,
    temporal_spread: u32,
    spatial_spread: u32,
) -> Vec<Point> {
    let [origin_t, origin_y, origin_x] = origin;
    let k = temporal_spread as i64;

    if k == 0 {
        return vec![Point::new(track_id, origin_t.max(0.0), origin_y, origin_x)];
    }

    let mut points = Vec::with_capacity(2 * temporal_spread as usize + 1);
    for dt in -k..=k {
        let t = (origin_t + dt as f32).max(0.0);
        let mut offset = spatial_spread as f32 * dt as f32 / k as f32;
        if direction == 1 {
            offset = -offset;
        }

        let (y, x) = match orientation {
            Orientation::Vertical => (origin_y + offset, origin_x),
            Orientation::Horizontal => (origin_y, origin_x + offset),
        };

        points.push(Point::new(track_id, t, y, x));
    }

    points
}

/// Inserts one synthesized track at the click origin and returns its id.
///
/// The direction label is 0 when Shift was held, 1 otherwise. The new id is
/// `max(existing ids) + 1`; ids are never reused after deletion. Validation
/// happens before any mutation, so a failed insert leaves the collection
/// untouched.
pub fn insert_track(
    collection: &mut TrackCollection,
    origin: [f32; 3],
    shift_held: bool,
    config: &AnnotatorConfig,
) -> Result<u32, Error> {
    let orientation = config.orientation()?;

    let direction = if shift_held { 0 } else { 1 };
    let new_id = collection.max_track_id().map_or(0, |id| id + 1);

    let points = synthesize(
        new_id,
        origin,
        direction,
        orientation,
        config.temporal_spread,
        config.spatial_spread,
    );

    debug!(
        track_id = new_id,
        direction,
        n_points = points.len(),
        "inserting synthesized track"
    );
    collection.push_track(points, direction);

    Ok(new_id)
}

/// Removes the whole track owning the point nearest to `position` (joint
/// distance over time and space) and returns its id. Whole-track removal is
/// atomic: either every point of the track goes, or none does.
pub fn remove_track_at(
    collection: &mut TrackCollection,
    position: [f32; 3],
) -> Result<u32, Error> {
    let target = na::Point3::new(position[0], position[1], position[2]);
    let track_id = collection.nearest_point(&target)?.track_id;
    let dropped = collection.remove_track(track_id);

    debug!(track_id, dropped, "removed track nearest to click");

    Ok(track_id)
}
