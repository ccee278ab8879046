// Domain layer: entities, collections and the persistence port. No I/O here.

pub mod archive;
pub mod camera;
pub mod collection;
pub mod film;
pub mod ids;
pub mod ports;

pub use archive::Archive;
pub use camera::Camera;
pub use collection::{CameraCollection, Collection, Entity, FilmCollection};
pub use film::Film;
pub use ids::{CameraId, FilmId};
pub use ports::ArchiveStore;
