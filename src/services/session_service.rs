// src/services/session_service.rs
//
// Session Service - Moves the whole Library in and out of its store
//
// RULES:
// - Load replaces every collection at once, nothing is merged
// - Save writes a snapshot taken under the read lock
// - Store failures end up in the OperationResult, never panic

use std::sync::Arc;

use log::info;

use crate::error::{AppResult, OperationResult};
use crate::events::{EventBus, LibraryLoaded, LibrarySaved};
use crate::repositories::{LibrarySnapshot, LibraryStore, SharedLibrary};

const SUBJECT: &str = "Biblioteca";

pub struct SessionService {
    store: Arc<dyn LibraryStore>,
    library: SharedLibrary,
    event_bus: Arc<EventBus>,
}

impl SessionService {
    pub fn new(store: Arc<dyn LibraryStore>, library: SharedLibrary, event_bus: Arc<EventBus>) -> Self {
        Self {
            store,
            library,
            event_bus,
        }
    }

    pub fn load(&self) -> OperationResult {
        OperationResult::from_result(SUBJECT, self.try_load())
    }

    pub fn save(&self) -> OperationResult {
        OperationResult::from_result(SUBJECT, self.try_save())
    }

    fn try_load(&self) -> AppResult<String> {
        let snapshot = self.store.load()?;
        let (books, movies, series) = (
            snapshot.books.len(),
            snapshot.movies.len(),
            snapshot.series.len(),
        );

        {
            let mut library = self.library.write()?;
            snapshot.apply_to(&mut library);
        }

        info!("Session: library loaded ({} books, {} movies, {} series)", books, movies, series);
        self.event_bus.emit(LibraryLoaded::new(books, movies, series));
        Ok(format!(
            "Loaded {} books, {} movies and {} series",
            books, movies, series
        ))
    }

    fn try_save(&self) -> AppResult<String> {
        let snapshot = {
            let library = self.library.read()?;
            LibrarySnapshot::capture(&library)
        };
        self.store.save(&snapshot)?;

        info!("Session: library saved");
        self.event_bus.emit(LibrarySaved::new());
        Ok("Library saved".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Genre, Movie};
    use crate::error::{AppError, ErrorKind};
    use crate::repositories::{Library, MockLibraryStore};
    use mockall::predicate::*;

    fn snapshot_with_movie() -> LibrarySnapshot {
        let mut snapshot = LibrarySnapshot::default();
        snapshot
            .movies
            .push(Movie::new("Heat".to_string(), 1995, Genre::Thriller));
        snapshot.years.insert(1995, 1);
        snapshot
    }

    fn session(store: MockLibraryStore, library: SharedLibrary) -> (SessionService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let service = SessionService::new(Arc::new(store), library, Arc::clone(&bus));
        (service, bus)
    }

    #[test]
    fn test_load_replaces_library_contents() {
        let mut store = MockLibraryStore::new();
        store
            .expect_load()
            .times(1)
            .returning(|| Ok(snapshot_with_movie()));

        let mut existing = Library::new();
        existing.add(Movie::new("Old".to_string(), 1980, Genre::Drama));
        existing.add_year(1980);
        let library = existing.shared();

        let (service, bus) = session(store, library.clone());
        let result = service.load();

        assert!(result.is_success(), "{}", result);
        let library = library.read().unwrap();
        assert_eq!(library.movies().len(), 1);
        assert_eq!(library.movies()[0].title, "Heat");
        assert_eq!(library.year_count(1980), 0);
        assert_eq!(library.year_count(1995), 1);
        assert_eq!(bus.emitted_types(), vec!["LibraryLoaded"]);
    }

    #[test]
    fn test_load_failure_keeps_library_untouched() {
        let mut store = MockLibraryStore::new();
        store
            .expect_load()
            .returning(|| Err(AppError::Io(std::io::Error::other("disk gone"))));

        let mut existing = Library::new();
        existing.add(Movie::new("Old".to_string(), 1980, Genre::Drama));
        let library = existing.shared();

        let (service, bus) = session(store, library.clone());
        let result = service.load();

        assert_eq!(result.error_kind, Some(ErrorKind::Storage));
        assert_eq!(library.read().unwrap().movies().len(), 1);
        assert!(bus.emitted_types().is_empty());
    }

    #[test]
    fn test_save_passes_current_snapshot() {
        let library = Library::new().shared();
        snapshot_with_movie().apply_to(&mut library.write().unwrap());

        let expected = LibrarySnapshot::capture(&library.read().unwrap());

        let mut store = MockLibraryStore::new();
        store
            .expect_save()
            .with(eq(expected))
            .times(1)
            .returning(|_| Ok(()));

        let (service, bus) = session(store, library);
        assert!(service.save().is_success());
        assert_eq!(bus.emitted_types(), vec!["LibrarySaved"]);
    }

    #[test]
    fn test_save_failure_is_reported() {
        let mut store = MockLibraryStore::new();
        store
            .expect_save()
            .returning(|_| Err(AppError::Other("read-only".to_string())));

        let (service, bus) = session(store, Library::new().shared());
        let result = service.save();

        assert!(result.is_failure());
        assert_eq!(result.error_kind, Some(ErrorKind::Internal));
        assert!(bus.emitted_types().is_empty());
    }
}
