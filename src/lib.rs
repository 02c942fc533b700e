pub mod codec;
pub mod collection;
pub mod error;
pub mod event;
pub mod point;
pub mod synth;

pub use collection::TrackCollection;
pub use error::Error;
pub use event::{ClickEvent, Modifier, MouseButton};
pub use point::Point;
pub use synth::{AnnotatorConfig, Orientation};

use std::path::{Path, PathBuf};

use ndarray::{Array1, Array2};
use tracing::debug;

/// Render seam to the host GUI: after every successful mutation the session
/// hands the full collection over as plain arrays and the host draws them.
/// The core never holds a reference into host-owned UI state.
pub trait TrackView {
    fn render(&mut self, data: Array2<f32>, directions: Array1<u32>);
}

/// One annotation session: the owned track collection plus the current
/// configuration surface. The host dispatcher feeds it click events and a
/// view to re-render through.
pub struct Annotator {
    config: AnnotatorConfig,
    collection: TrackCollection,
}

impl Annotator {
    pub fn new(config: AnnotatorConfig) -> Self {
        Self {
            config,
            collection: TrackCollection::seeded(),
        }
    }

    #[inline]
    pub fn collection(&self) -> &TrackCollection {
        &self.collection
    }

    #[inline]
    pub fn config(&self) -> &AnnotatorConfig {
        &self.config
    }

    #[inline]
    pub fn config_mut(&mut self) -> &mut AnnotatorConfig {
        &mut self.config
    }

    /// Primary button inserts a track at the click origin, Secondary removes
    /// the track nearest to it. Returns the inserted or removed track id.
    /// On error the collection is left untouched and nothing is re-rendered.
    pub fn on_click(&mut self, event: &ClickEvent, view: &mut dyn TrackView) -> Result<u32, Error> {
        let track_id = match event.button {
            MouseButton::Primary => synth::insert_track(
                &mut self.collection,
                event.position,
                event.shift_held(),
                &self.config,
            )?,
            MouseButton::Secondary => {
                synth::remove_track_at(&mut self.collection, event.position)?
            }
        };

        debug!(
            button = ?event.button,
            track_id,
            tracks = self.collection.track_count(),
            "click handled"
        );
        view.render(self.collection.data(), self.collection.direction_array());

        Ok(track_id)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<Vec<PathBuf>, Error> {
        codec::save(path, &self.collection)
    }

    /// Replaces the session collection with the contents of `path` and
    /// re-renders.
    pub fn load<P: AsRef<Path>>(&mut self, path: P, view: &mut dyn TrackView) -> Result<(), Error> {
        self.collection = codec::load(path)?;
        view.render(self.collection.data(), self.collection.direction_array());

        Ok(())
    }
}

impl Default for Annotator {
    fn default() -> Self {
        Self::new(AnnotatorConfig::default())
    }
}
