use crate::domain::camera::Camera;
use crate::domain::film::Film;
use crate::domain::ids::{CameraId, FilmId};
use crate::utils::error::{ArchiveError, Result};
use chrono::NaiveDate;

/// Something a [`Collection`] can hold: it only needs a stable identity.
pub trait Entity {
    type Id: Copy + Eq;

    fn entity_id(&self) -> Self::Id;
}

impl Entity for Camera {
    type Id = CameraId;

    fn entity_id(&self) -> CameraId {
        self.id()
    }
}

impl Entity for Film {
    type Id = FilmId;

    fn entity_id(&self) -> FilmId {
        self.id()
    }
}

/// Insertion-ordered list of entities with no duplicate ids.
///
/// Filters are linear scans that return borrowed entries in insertion order.
#[derive(Debug, Clone)]
pub struct Collection<T: Entity> {
    items: Vec<T>,
}

pub type CameraCollection = Collection<Camera>;
pub type FilmCollection = Collection<Film>;

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `item` unless an entry with the same id is already present.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(item.entity_id()) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Removes the entry with `id`. Absent ids are a no-op and yield `None`.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(ArchiveError::IndexOutOfRange { index, len })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ArchiveError::IndexOutOfRange { index, len })
    }

    pub fn find(&self, id: T::Id) -> Option<&T> {
        self.items.iter().find(|item| item.entity_id() == id)
    }

    pub fn find_mut(&mut self, id: T::Id) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.entity_id() == id)
    }

    pub fn contains(&self, id: T::Id) -> bool {
        self.position(id).is_some()
    }

    pub fn position(&self, id: T::Id) -> Option<usize> {
        self.items.iter().position(|item| item.entity_id() == id)
    }

    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn filter_by(&self, predicate: impl Fn(&T) -> bool) -> Vec<&T> {
        self.items.iter().filter(|item| predicate(*item)).collect()
    }
}

impl<'a, T: Entity> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Entity> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut collection = Self::new();
        for item in iter {
            collection.add(item);
        }
        collection
    }
}

impl Collection<Camera> {
    pub fn filter_by_name(&self, name: &str) -> Vec<&Camera> {
        self.filter_by(|c| c.name() == name)
    }

    pub fn filter_by_film_type(&self, film_type: &str) -> Vec<&Camera> {
        self.filter_by(|c| c.film_type() == film_type)
    }

    pub fn filter_by_manufacturer(&self, manufacturer: &str) -> Vec<&Camera> {
        self.filter_by(|c| c.manufacturer() == manufacturer)
    }
}

impl Collection<Film> {
    /// Films whose camera has the same *name* as `camera`.
    ///
    /// Matches by name rather than id: films loaded from disk carry their own
    /// camera copies, so ids never line up with the camera collection.
    pub fn filter_by_camera(&self, camera: &Camera) -> Vec<&Film> {
        self.filter_by(|f| f.camera().name() == camera.name())
    }

    pub fn filter_by_name(&self, name: &str) -> Vec<&Film> {
        self.filter_by(|f| f.name() == name)
    }

    pub fn filter_by_iso(&self, iso: u32) -> Vec<&Film> {
        self.filter_by(|f| f.iso() == iso)
    }

    pub fn filter_by_type(&self, film_type: &str) -> Vec<&Film> {
        self.filter_by(|f| f.film_type() == film_type)
    }

    pub fn filter_by_brand(&self, brand: &str) -> Vec<&Film> {
        self.filter_by(|f| f.brand() == brand)
    }

    /// Films with an expiry equal to `date`. Films without an expiry never
    /// match, not even when `date` is `None`.
    pub fn filter_by_expiry(&self, date: Option<NaiveDate>) -> Vec<&Film> {
        self.filter_by(|f| f.expiry().is_some() && f.expiry() == date)
    }

    pub fn filter_by_develop_date(&self, date: Option<NaiveDate>) -> Vec<&Film> {
        self.filter_by(|f| f.develop_date().is_some() && f.develop_date() == date)
    }

    pub fn filter_by_develop_location(&self, location: &str) -> Vec<&Film> {
        self.filter_by(|f| f.develop_location() == Some(location))
    }

    /// Films that have an images directory recorded, whether or not it exists.
    pub fn filter_by_photos_path_exist(&self) -> Vec<&Film> {
        self.filter_by(|f| f.directory().is_some())
    }

    /// Films developed after their expiry date.
    pub fn filter_expired(&self) -> Vec<&Film> {
        self.filter_by(|f| f.is_expired() == Some(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn pentax() -> Camera {
        Camera::new("Program Plus", "35mm", "Pentax")
    }

    fn polaroid() -> Camera {
        Camera::new("Impulse AF", "Instant Film", "Polaroid")
    }

    #[test]
    fn test_add_camera() {
        let mut cc = CameraCollection::new();
        assert!(cc.add(pentax()));
        assert_eq!(cc.size(), 1);
    }

    #[test]
    fn test_add_camera_duplicate() {
        let mut cc = CameraCollection::new();
        let c = pentax();
        assert!(cc.add(c.clone()));
        assert!(!cc.add(c));
        assert_eq!(cc.size(), 1);
    }

    #[test]
    fn test_equal_fields_are_distinct_entries() {
        let mut cc = CameraCollection::new();
        assert!(cc.add(pentax()));
        assert!(cc.add(pentax()));
        assert_eq!(cc.size(), 2);
    }

    #[test]
    fn test_remove_camera() {
        let mut cc = CameraCollection::new();
        let c = pentax();
        let id = c.id();
        cc.add(c);
        let removed = cc.remove(id).unwrap();
        assert_eq!(removed.id(), id);
        assert!(cc.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cc = CameraCollection::new();
        cc.add(pentax());
        assert!(cc.remove(CameraId::new()).is_none());
        assert_eq!(cc.size(), 1);
    }

    #[test]
    fn test_get_in_and_out_of_range() {
        let mut cc = CameraCollection::new();
        let c = pentax();
        let id = c.id();
        cc.add(c);
        assert_eq!(cc.get(0).unwrap().id(), id);
        assert!(matches!(
            cc.get(1),
            Err(ArchiveError::IndexOutOfRange { index: 1, len: 1 })
        ));
    }

    #[test]
    fn test_get_mut_edits_in_place() {
        let mut cc = CameraCollection::new();
        cc.add(pentax());
        cc.get_mut(0).unwrap().set_name("Super Program");
        assert_eq!(cc.get(0).unwrap().name(), "Super Program");
    }

    #[test]
    fn test_camera_filters() {
        let mut cc = CameraCollection::new();
        cc.add(pentax());
        cc.add(polaroid());
        cc.add(Camera::new("K1000", "35mm", "Pentax"));

        let by_maker: Vec<_> = cc
            .filter_by_manufacturer("Pentax")
            .iter()
            .map(|c| c.name())
            .collect();
        assert_eq!(by_maker, vec!["Program Plus", "K1000"]);
        assert_eq!(cc.filter_by_film_type("35mm").len(), 2);
        assert_eq!(cc.filter_by_name("Impulse AF").len(), 1);
        assert!(cc.filter_by_manufacturer("pentax").is_empty());
        assert!(cc.filter_by_name("Impulse").is_empty());
        assert_eq!(cc.size(), 3);
    }

    #[test]
    fn test_add_film_duplicate() {
        let mut fc = FilmCollection::new();
        let f = Film::new("UltraMax", 400, "35mm", pentax(), "Kodak");
        fc.add(f.clone());
        fc.add(f);
        assert_eq!(fc.size(), 1);
    }

    #[test]
    fn test_filter_by_iso_keeps_order() {
        let mut fc = FilmCollection::new();
        let c = pentax();
        let isos = [400, 200, 400, 400, 200, 400, 200, 400, 400, 200, 400, 400, 200, 400];
        for (x, iso) in isos.iter().enumerate() {
            fc.add(Film::new(x.to_string(), *iso, "35mm", c.clone(), "Kodak"));
        }

        let filtered = fc.filter_by_iso(400);
        assert_eq!(filtered.len(), 9);
        assert_eq!(fc.filter_by_iso(200).len(), 5);

        let names: Vec<&str> = filtered.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["0", "2", "3", "5", "7", "8", "10", "11", "13"]);
    }

    #[test]
    fn test_filter_by_camera_matches_name() {
        let mut fc = FilmCollection::new();
        let c = pentax();
        for x in 0..9 {
            fc.add(Film::new(x.to_string(), 400, "35mm", c.clone(), "Kodak"));
        }
        let p = Camera::new("Impulse AF", "instant film", "Polaroid");
        for x in 0..5 {
            fc.add(Film::new(x.to_string(), 600, "instant film", p.clone(), "Polaroid"));
        }

        assert_eq!(fc.filter_by_camera(&p).len(), 5);
        // Same name, different instance and maker still matches.
        let lookalike = Camera::new("Program Plus", "35mm", "Someone Else");
        assert_eq!(fc.filter_by_camera(&lookalike).len(), 9);
    }

    #[test]
    fn test_filter_by_expiry_excludes_unset() {
        let mut fc = FilmCollection::new();
        let mut dated = Film::new("dated", 400, "35mm", pentax(), "Kodak");
        dated.set_expiry(date(2020, 12, 30));
        fc.add(dated);
        fc.add(Film::new("undated", 400, "35mm", pentax(), "Kodak"));

        assert_eq!(fc.filter_by_expiry(Some(date(2020, 12, 30))).len(), 1);
        assert!(fc.filter_by_expiry(Some(date(2021, 1, 1))).is_empty());
        assert!(fc.filter_by_expiry(None).is_empty());
    }

    #[test]
    fn test_filter_by_develop_date_excludes_unset() {
        let mut fc = FilmCollection::new();
        let mut developed = Film::new("developed", 400, "35mm", pentax(), "Kodak");
        developed.set_develop_date(date(2020, 7, 12));
        fc.add(developed);
        fc.add(Film::new("fresh", 400, "35mm", pentax(), "Kodak"));

        assert_eq!(fc.filter_by_develop_date(Some(date(2020, 7, 12))).len(), 1);
        assert!(fc.filter_by_develop_date(None).is_empty());
    }

    #[test]
    fn test_filter_by_develop_location_and_photos_path() {
        let mut fc = FilmCollection::new();
        let mut a = Film::new("a", 400, "35mm", pentax(), "Kodak");
        a.set_develop_location("Natural Color Lab");
        a.set_directory("/photos/a");
        let mut b = Film::new("b", 400, "35mm", pentax(), "Kodak");
        b.set_directory("/does/not/exist");
        fc.add(a);
        fc.add(b);
        fc.add(Film::new("c", 400, "35mm", pentax(), "Kodak"));

        assert_eq!(fc.filter_by_develop_location("Natural Color Lab").len(), 1);
        assert!(fc.filter_by_develop_location("").is_empty());
        assert_eq!(fc.filter_by_photos_path_exist().len(), 2);
    }

    #[test]
    fn test_filter_by_name_type_brand() {
        let mut fc = FilmCollection::new();
        fc.add(Film::new("UltraMax", 400, "35mm", pentax(), "Kodak"));
        fc.add(Film::new("600", 640, "Instant Film", polaroid(), "Polaroid"));

        assert_eq!(fc.filter_by_name("UltraMax").len(), 1);
        assert_eq!(fc.filter_by_type("Instant Film").len(), 1);
        assert_eq!(fc.filter_by_brand("Kodak").len(), 1);
        assert!(fc.filter_by_brand("kodak").is_empty());
    }

    #[test]
    fn test_filter_expired() {
        let mut fc = FilmCollection::new();
        let mut old = Film::new("old", 400, "35mm", pentax(), "Kodak");
        old.set_expiry(date(2001, 6, 30));
        old.set_develop_date(date(2019, 9, 22));
        let mut fresh = Film::new("fresh", 400, "35mm", pentax(), "Kodak");
        fresh.set_expiry(date(2022, 6, 30));
        fresh.set_develop_date(date(2019, 9, 22));
        fc.add(old);
        fc.add(fresh);
        fc.add(Film::new("unknown", 400, "35mm", pentax(), "Kodak"));

        let expired = fc.filter_expired();
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].name(), "old");
    }
}
