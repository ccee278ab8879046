use crate::domain::camera::Camera;
use crate::domain::ids::FilmId;
use chrono::NaiveDate;
use std::fmt;

/// One roll or pack of film.
///
/// The film owns a copy of the camera it was shot in. That copy is not linked
/// to any entry of a [`CameraCollection`](crate::domain::CameraCollection):
/// renaming a camera in the collection leaves existing films untouched, the
/// same way the archive file stores the camera inline with every roll.
#[derive(Debug, Clone)]
pub struct Film {
    id: FilmId,
    name: String,
    iso: u32,
    film_type: String,
    camera: Camera,
    brand: String,
    expiry: Option<NaiveDate>,
    develop_date: Option<NaiveDate>,
    develop_location: Option<String>,
    directory: Option<String>,
}

impl Film {
    pub fn new(
        name: impl Into<String>,
        iso: u32,
        film_type: impl Into<String>,
        camera: Camera,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            id: FilmId::new(),
            name: name.into(),
            iso,
            film_type: film_type.into(),
            camera,
            brand: brand.into(),
            expiry: None,
            develop_date: None,
            develop_location: None,
            directory: None,
        }
    }

    pub fn id(&self) -> FilmId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn iso(&self) -> u32 {
        self.iso
    }

    pub fn set_iso(&mut self, iso: u32) {
        self.iso = iso;
    }

    pub fn film_type(&self) -> &str {
        &self.film_type
    }

    pub fn set_film_type(&mut self, film_type: impl Into<String>) {
        self.film_type = film_type.into();
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Replaces the camera only when it shoots this film's type.
    ///
    /// Returns `false` and keeps the current camera otherwise.
    pub fn set_camera(&mut self, camera: Camera) -> bool {
        if !self.accepts(&camera) {
            tracing::debug!(
                film = %self.name,
                camera = %camera,
                "camera rejected: takes {} film, roll is {}",
                camera.film_type(),
                self.film_type
            );
            return false;
        }
        self.camera = camera;
        true
    }

    pub fn accepts(&self, camera: &Camera) -> bool {
        camera.film_type() == self.film_type
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn set_brand(&mut self, brand: impl Into<String>) {
        self.brand = brand.into();
    }

    pub fn expiry(&self) -> Option<NaiveDate> {
        self.expiry
    }

    pub fn set_expiry(&mut self, date: NaiveDate) {
        self.expiry = Some(date);
    }

    pub fn clear_expiry(&mut self) {
        self.expiry = None;
    }

    pub fn develop_date(&self) -> Option<NaiveDate> {
        self.develop_date
    }

    pub fn set_develop_date(&mut self, date: NaiveDate) {
        self.develop_date = Some(date);
    }

    pub fn clear_develop_date(&mut self) {
        self.develop_date = None;
    }

    pub fn develop_location(&self) -> Option<&str> {
        self.develop_location.as_deref()
    }

    pub fn set_develop_location(&mut self, location: impl Into<String>) {
        self.develop_location = Some(location.into());
    }

    pub fn clear_develop_location(&mut self) {
        self.develop_location = None;
    }

    /// Folder holding the scans of this roll. Never checked against the disk.
    pub fn directory(&self) -> Option<&str> {
        self.directory.as_deref()
    }

    pub fn set_directory(&mut self, directory: impl Into<String>) {
        self.directory = Some(directory.into());
    }

    pub fn clear_directory(&mut self) {
        self.directory = None;
    }

    /// Whether the roll was past its expiry date when it was developed.
    ///
    /// `None` unless both dates are known.
    pub fn is_expired(&self) -> Option<bool> {
        match (self.expiry, self.develop_date) {
            (Some(expiry), Some(developed)) => Some(expiry < developed),
            _ => None,
        }
    }

    /// Field-for-field comparison (including the embedded camera), ignoring identity.
    pub fn same_fields(&self, other: &Film) -> bool {
        self.name == other.name
            && self.iso == other.iso
            && self.film_type == other.film_type
            && self.camera.same_fields(&other.camera)
            && self.brand == other.brand
            && self.expiry == other.expiry
            && self.develop_date == other.develop_date
            && self.develop_location == other.develop_location
            && self.directory == other.directory
    }
}

impl fmt::Display for Film {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.brand, self.film_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ultramax() -> Film {
        let camera = Camera::new("Program Plus", "35mm", "Pentax");
        Film::new("UltraMax", 400, "35mm", camera, "Kodak")
    }

    #[test]
    fn test_is_expired_true() {
        let mut f = ultramax();
        f.set_develop_date(date(2019, 9, 22));
        f.set_expiry(date(2001, 6, 30));
        assert_eq!(f.is_expired(), Some(true));
    }

    #[test]
    fn test_is_expired_false() {
        let mut f = ultramax();
        f.set_develop_date(date(2019, 9, 22));
        f.set_expiry(date(2020, 6, 30));
        assert_eq!(f.is_expired(), Some(false));
    }

    #[test]
    fn test_is_expired_same_day_is_not_expired() {
        let mut f = ultramax();
        f.set_develop_date(date(2020, 6, 30));
        f.set_expiry(date(2020, 6, 30));
        assert_eq!(f.is_expired(), Some(false));
    }

    #[test]
    fn test_is_expired_needs_both_dates() {
        let mut f = ultramax();
        assert_eq!(f.is_expired(), None);
        f.set_expiry(date(2001, 6, 30));
        assert_eq!(f.is_expired(), None);
        f.clear_expiry();
        f.set_develop_date(date(2019, 9, 22));
        assert_eq!(f.is_expired(), None);
    }

    #[test]
    fn test_set_camera_same_type() {
        let mut f = ultramax();
        let c = Camera::new("Impulse AF", "35mm", "Polaroid");
        let id = c.id();
        assert!(f.set_camera(c));
        assert_eq!(f.camera().id(), id);
    }

    #[test]
    fn test_set_camera_different_type() {
        let mut f = ultramax();
        let before = f.camera().id();
        let c = Camera::new("Impulse AF", "medium format", "Polaroid");
        assert!(!f.set_camera(c));
        assert_eq!(f.camera().id(), before);
        assert_eq!(f.camera().name(), "Program Plus");
    }

    #[test]
    fn test_set_camera_is_case_sensitive() {
        let mut f = ultramax();
        assert!(!f.set_camera(Camera::new("Nikon FM2", "35MM", "Nikon")));
    }

    #[test]
    fn test_optional_fields() {
        let mut f = ultramax();
        assert_eq!(f.develop_location(), None);
        assert_eq!(f.directory(), None);

        f.set_develop_location("Kerrisdale Camera");
        f.set_directory("C:\\Users\\nandp\\Downloads");
        assert_eq!(f.develop_location(), Some("Kerrisdale Camera"));
        assert_eq!(f.directory(), Some("C:\\Users\\nandp\\Downloads"));

        f.clear_develop_location();
        f.clear_directory();
        assert_eq!(f.develop_location(), None);
        assert_eq!(f.directory(), None);
    }

    #[test]
    fn test_scalar_setters() {
        let mut f = ultramax();
        f.set_name("Superia");
        f.set_iso(200);
        f.set_film_type("medium format");
        f.set_brand("Fujifilm");
        assert_eq!(f.name(), "Superia");
        assert_eq!(f.iso(), 200);
        assert_eq!(f.film_type(), "medium format");
        assert_eq!(f.brand(), "Fujifilm");
    }

    #[test]
    fn test_display() {
        assert_eq!(ultramax().to_string(), "UltraMax, Kodak, 35mm");
    }
}
