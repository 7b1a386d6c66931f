// src/application/state.rs

use std::sync::Arc;

use crate::config::Config;
use crate::events::EventBus;
use crate::repositories::{JsonLibraryStore, Library, LibraryStore, SharedLibrary};
use crate::services::{BookService, MovieService, SeriesService, SessionService, StatisticsService};

/// Everything a UI layer needs to drive the journal.
/// All services share one Library and one EventBus.
pub struct AppState {
    pub library: SharedLibrary,
    pub event_bus: Arc<EventBus>,
    pub book_service: Arc<BookService>,
    pub movie_service: Arc<MovieService>,
    pub series_service: Arc<SeriesService>,
    pub statistics_service: Arc<StatisticsService>,
    pub session_service: Arc<SessionService>,
}

impl AppState {
    /// State backed by the JSON documents configured in `config`
    pub fn new(config: &Config) -> Self {
        let store: Arc<dyn LibraryStore> = Arc::new(JsonLibraryStore::new(config.storage.clone()));
        Self::from_store(store)
    }

    /// State backed by any store, starting from an empty Library
    pub fn from_store(store: Arc<dyn LibraryStore>) -> Self {
        let library = Library::new().shared();
        let event_bus = Arc::new(EventBus::new());

        Self {
            book_service: Arc::new(BookService::new(library.clone(), event_bus.clone())),
            movie_service: Arc::new(MovieService::new(library.clone(), event_bus.clone())),
            series_service: Arc::new(SeriesService::new(library.clone(), event_bus.clone())),
            statistics_service: Arc::new(StatisticsService::new(library.clone())),
            session_service: Arc::new(SessionService::new(store, library.clone(), event_bus.clone())),
            library,
            event_bus,
        }
    }
}
