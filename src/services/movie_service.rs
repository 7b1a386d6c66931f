// src/services/movie_service.rs
//
// Movie Service - Movie registration, viewing state and cast/director searches

use std::sync::Arc;

use chrono::Month;

use crate::domain::{validate_movie, Genre, MediaId, MediaKind, Movie};
use crate::error::{AppError, AppResult, OperationResult};
use crate::events::EventBus;
use crate::repositories::SharedLibrary;
use crate::services::catalog_ops;
use crate::services::common_service::CommonService;
use crate::services::media_queries::{list_query, MediaQueries};

/// Request to register a new movie
#[derive(Debug, Clone)]
pub struct RegisterMovieRequest {
    pub title: String,
    pub release_year: i32,
    pub genre: Genre,
    pub cast: Vec<String>,
    pub duration: u32,
    pub director: String,
    pub synopsis: String,
    /// Falls back to `title` when empty
    pub original_title: String,
    pub where_to_watch: Vec<String>,
}

pub struct MovieService {
    library: SharedLibrary,
    event_bus: Arc<EventBus>,
}

impl MovieService {
    pub fn new(library: SharedLibrary, event_bus: Arc<EventBus>) -> Self {
        Self { library, event_bus }
    }

    fn subject() -> &'static str {
        MediaKind::Movie.label()
    }

    pub fn register(&self, request: RegisterMovieRequest) -> OperationResult {
        let mut movie = Movie::new(request.title, request.release_year, request.genre);
        movie.cast = request.cast;
        movie.duration = request.duration;
        movie.director = request.director;
        movie.synopsis = request.synopsis;
        movie.where_to_watch = request.where_to_watch;
        if !request.original_title.trim().is_empty() {
            movie.original_title = request.original_title;
        }
        let title = movie.title.clone();

        let result = validate_movie(&movie)
            .map_err(AppError::from)
            .and_then(|_| catalog_ops::register(&self.library, &self.event_bus, movie));

        match result {
            Ok(id) => OperationResult::success(
                Self::subject(),
                format!("'{}' registered successfully", title),
            )
            .with_media_id(id),
            Err(e) => OperationResult::from_app_error(Self::subject(), e),
        }
    }

    pub fn mark_as_seen(&self, id: MediaId, year: i32, month: Month) -> OperationResult {
        let result = catalog_ops::mark_as_seen::<Movie>(&self.library, &self.event_bus, id, year, month)
            .map(|seen_date| format!("Marked as seen in {}", seen_date));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn rate(&self, id: MediaId, value: u8) -> OperationResult {
        let result = catalog_ops::rate::<Movie>(&self.library, &self.event_bus, id, value)
            .map(|_| format!("Rated {}", CommonService::format_rating(value)));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn write_review(&self, id: MediaId, text: String) -> OperationResult {
        let result = catalog_ops::write_review::<Movie>(&self.library, &self.event_bus, id, text)
            .map(|_| "Review saved".to_string());
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn read_review(&self, id: MediaId) -> OperationResult {
        let result = catalog_ops::inspect(&self.library, id, |movie: &Movie| CommonService::read_review(movie));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn show_rating(&self, id: MediaId) -> OperationResult {
        let result = catalog_ops::inspect(&self.library, id, |movie: &Movie| CommonService::show_rating(movie));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn delete(&self, id: MediaId) -> OperationResult {
        let result = catalog_ops::delete::<Movie>(&self.library, &self.event_bus, id)
            .map(|movie| format!("'{}' deleted", movie.title));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn search_by_director(&self, query: &str) -> AppResult<Vec<Movie>> {
        let query = query.to_lowercase();
        list_query(&self.library, |library| {
            CommonService::filter_sorted(library.movies(), |movie| {
                movie.director.to_lowercase().contains(&query)
            })
        })
    }

    pub fn search_by_actor(&self, query: &str) -> AppResult<Vec<Movie>> {
        list_query(&self.library, |library| {
            CommonService::filter_sorted(library.movies(), |movie| movie.features_actor(query))
        })
    }
}

impl MediaQueries for MovieService {
    type Record = Movie;

    fn library(&self) -> &SharedLibrary {
        &self.library
    }
}
