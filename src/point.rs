use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// One sample of a synthetic trajectory. All points of a track share
/// `track_id` and are only ever added or removed as a whole track.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub track_id: u32,
    pub time: f32,
    pub y: f32,
    pub x: f32,
}

impl Point {
    #[inline]
    pub fn new(track_id: u32, time: f32, y: f32, x: f32) -> Self {
        Self { track_id, time, y, x }
    }

    /// Full (time, y, x) coordinate vector. Track removal measures
    /// distance over this vector, time included.
    #[inline]
    pub fn position(&self) -> na::Point3<f32> {
        na::Point3::new(self.time, self.y, self.x)
    }
}
