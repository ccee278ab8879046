use crate::domain::collection::{CameraCollection, FilmCollection};

/// The unit of persistence: one camera collection and one film collection.
#[derive(Debug, Clone, Default)]
pub struct Archive {
    cameras: CameraCollection,
    films: FilmCollection,
}

impl Archive {
    pub fn new(cameras: CameraCollection, films: FilmCollection) -> Self {
        Self { cameras, films }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn cameras(&self) -> &CameraCollection {
        &self.cameras
    }

    pub fn cameras_mut(&mut self) -> &mut CameraCollection {
        &mut self.cameras
    }

    pub fn films(&self) -> &FilmCollection {
        &self.films
    }

    pub fn films_mut(&mut self) -> &mut FilmCollection {
        &mut self.films
    }

    pub fn is_empty(&self) -> bool {
        self.cameras.is_empty() && self.films.is_empty()
    }

    pub fn into_parts(self) -> (CameraCollection, FilmCollection) {
        (self.cameras, self.films)
    }
}
