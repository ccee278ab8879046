use crate::domain::ids::CameraId;
use std::fmt;

/// A camera body in the archive.
///
/// `film_type` is an open-ended format label ("35mm", "medium format",
/// "Instant Film", ...) that a [`Film`](crate::domain::Film) must match
/// before it can be shot in this camera.
#[derive(Debug, Clone)]
pub struct Camera {
    id: CameraId,
    name: String,
    film_type: String,
    manufacturer: String,
}

impl Camera {
    pub fn new(
        name: impl Into<String>,
        film_type: impl Into<String>,
        manufacturer: impl Into<String>,
    ) -> Self {
        Self {
            id: CameraId::new(),
            name: name.into(),
            film_type: film_type.into(),
            manufacturer: manufacturer.into(),
        }
    }

    pub fn id(&self) -> CameraId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn film_type(&self) -> &str {
        &self.film_type
    }

    pub fn set_film_type(&mut self, film_type: impl Into<String>) {
        self.film_type = film_type.into();
    }

    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    pub fn set_manufacturer(&mut self, manufacturer: impl Into<String>) {
        self.manufacturer = manufacturer.into();
    }

    /// Field-for-field comparison, ignoring identity.
    pub fn same_fields(&self, other: &Camera) -> bool {
        self.name == other.name
            && self.film_type == other.film_type
            && self.manufacturer == other.manufacturer
    }
}

impl fmt::Display for Camera {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.manufacturer, self.name)
    }
}
