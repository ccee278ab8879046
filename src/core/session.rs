use crate::core::photos;
use crate::domain::{Archive, ArchiveStore, Film, FilmId};
use crate::utils::error::Result;
use std::path::PathBuf;

/// Working state of one user session: the archive being edited, the film
/// currently selected, and the store it is saved to.
pub struct ArchiveSession<S: ArchiveStore> {
    store: S,
    archive: Archive,
    active_film: Option<FilmId>,
}

impl<S: ArchiveStore> ArchiveSession<S> {
    /// Starts with an empty archive; nothing is read from the store.
    pub fn new(store: S) -> Self {
        Self {
            store,
            archive: Archive::empty(),
            active_film: None,
        }
    }

    pub fn open(store: S) -> Result<Self> {
        let archive = store.load()?;
        Ok(Self {
            store,
            archive,
            active_film: None,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn archive(&self) -> &Archive {
        &self.archive
    }

    pub fn archive_mut(&mut self) -> &mut Archive {
        &mut self.archive
    }

    pub fn active_film(&self) -> Option<&Film> {
        self.active_film.and_then(|id| self.archive.films().find(id))
    }

    pub fn active_film_mut(&mut self) -> Option<&mut Film> {
        let id = self.active_film?;
        self.archive.films_mut().find_mut(id)
    }

    /// Selects a film. Ids not in the film collection are refused.
    pub fn set_active_film(&mut self, id: FilmId) -> bool {
        if !self.archive.films().contains(id) {
            return false;
        }
        self.active_film = Some(id);
        true
    }

    pub fn clear_active_film(&mut self) {
        self.active_film = None;
    }

    /// Removes a film, dropping the selection if it pointed at it.
    pub fn remove_film(&mut self, id: FilmId) -> Option<Film> {
        let removed = self.archive.films_mut().remove(id)?;
        if self.active_film == Some(id) {
            self.active_film = None;
        }
        Some(removed)
    }

    pub fn save(&self) -> Result<()> {
        self.store.save(&self.archive)
    }

    /// Replaces the in-memory archive with the stored one. On error the
    /// current archive and selection are kept.
    pub fn reload(&mut self) -> Result<()> {
        self.archive = self.store.load()?;
        self.active_film = None;
        Ok(())
    }

    /// Images in the active film's directory; empty without a selection or
    /// without a recorded directory.
    pub fn active_film_images<E: AsRef<str>>(&self, extensions: &[E]) -> Result<Vec<PathBuf>> {
        match self.active_film().and_then(Film::directory) {
            Some(dir) => photos::list_images(dir, extensions),
            None => Ok(Vec::new()),
        }
    }

    pub fn into_archive(self) -> Archive {
        self.archive
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Camera;
    use crate::persistence::writer::render;
    use crate::persistence::ArchiveReader;
    use crate::utils::error::ArchiveError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockStore {
        saved: RefCell<Option<Vec<u8>>>,
        fail_load: bool,
    }

    impl ArchiveStore for MockStore {
        fn load(&self) -> Result<Archive> {
            if self.fail_load {
                return Err(ArchiveError::NotFound {
                    what: "mock archive".to_string(),
                });
            }
            match self.saved.borrow().as_ref() {
                Some(data) => ArchiveReader::new("mock.json")
                    .parse(std::str::from_utf8(data).expect("utf-8")),
                None => Ok(Archive::empty()),
            }
        }

        fn save(&self, archive: &Archive) -> Result<()> {
            *self.saved.borrow_mut() = Some(render(archive)?);
            Ok(())
        }
    }

    fn session_with_film() -> (ArchiveSession<MockStore>, FilmId) {
        let mut session = ArchiveSession::new(MockStore::default());
        let camera = Camera::new("Program Plus", "35mm", "Pentax");
        let film = Film::new("UltraMax", 400, "35mm", camera.clone(), "Kodak");
        let id = film.id();
        session.archive_mut().cameras_mut().add(camera);
        session.archive_mut().films_mut().add(film);
        (session, id)
    }

    #[test]
    fn test_active_film_selection() {
        let (mut session, id) = session_with_film();
        assert!(session.active_film().is_none());
        assert!(!session.set_active_film(FilmId::new()));
        assert!(session.set_active_film(id));
        assert_eq!(session.active_film().unwrap().name(), "UltraMax");

        session.active_film_mut().unwrap().set_iso(800);
        assert_eq!(session.archive().films().get(0).unwrap().iso(), 800);

        session.clear_active_film();
        assert!(session.active_film().is_none());
    }

    #[test]
    fn test_removing_active_film_clears_selection() {
        let (mut session, id) = session_with_film();
        session.set_active_film(id);
        assert!(session.remove_film(id).is_some());
        assert!(session.active_film().is_none());
        assert!(session.remove_film(id).is_none());
    }

    #[test]
    fn test_save_and_reload() {
        let (mut session, id) = session_with_film();
        session.set_active_film(id);
        session.save().unwrap();

        session.archive_mut().films_mut().remove(id);
        assert!(session.archive().films().is_empty());

        session.reload().unwrap();
        assert_eq!(session.archive().films().size(), 1);
        assert_eq!(session.archive().cameras().size(), 1);
        // Reloaded films are new entities, so the old selection is gone.
        assert!(session.active_film().is_none());
    }

    #[test]
    fn test_failed_reload_keeps_state() {
        let store = MockStore {
            fail_load: true,
            ..Default::default()
        };
        assert!(ArchiveSession::open(MockStore {
            fail_load: true,
            ..Default::default()
        })
        .is_err());

        let mut session = ArchiveSession::new(store);
        session
            .archive_mut()
            .cameras_mut()
            .add(Camera::new("FM2", "35mm", "Nikon"));
        assert!(session.reload().is_err());
        assert_eq!(session.archive().cameras().size(), 1);
    }

    #[test]
    fn test_active_film_images_without_directory() {
        let (mut session, id) = session_with_film();
        assert!(session.active_film_images(&["jpg"]).unwrap().is_empty());
        session.set_active_film(id);
        assert!(session.active_film_images(&["jpg"]).unwrap().is_empty());
    }
}
