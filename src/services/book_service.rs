// src/services/book_service.rs
//
// Book Service - Book registration, reading state and book-only searches
//
// RULES:
// - Every mutation returns an OperationResult, errors never escape
// - A book's identity is its ISBN

use std::sync::Arc;

use chrono::Month;

use crate::domain::{validate_book, Book, Genre, MediaId, MediaKind};
use crate::error::{AppError, AppResult, OperationResult};
use crate::events::EventBus;
use crate::repositories::SharedLibrary;
use crate::services::catalog_ops;
use crate::services::common_service::CommonService;
use crate::services::media_queries::{list_query, MediaQueries};

/// Request to register a new book
#[derive(Debug, Clone)]
pub struct RegisterBookRequest {
    pub title: String,
    pub release_year: i32,
    pub genre: Genre,
    pub isbn: String,
    pub author: String,
    pub publisher: String,
    pub owned: bool,
}

pub struct BookService {
    library: SharedLibrary,
    event_bus: Arc<EventBus>,
}

impl BookService {
    pub fn new(library: SharedLibrary, event_bus: Arc<EventBus>) -> Self {
        Self { library, event_bus }
    }

    fn subject() -> &'static str {
        MediaKind::Book.label()
    }

    pub fn register(&self, request: RegisterBookRequest) -> OperationResult {
        let book = Book::new(
            request.title,
            request.release_year,
            request.genre,
            request.isbn,
            request.author,
            request.publisher,
            request.owned,
        );
        let title = book.title.clone();

        let result = validate_book(&book)
            .map_err(AppError::from)
            .and_then(|_| catalog_ops::register(&self.library, &self.event_bus, book));

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
        let result = catalog_ops::mark_as_seen::<Book>(&self.library, &self.event_bus, id, year, month)
            .map(|seen_date| format!("Marked as read in {}", seen_date));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn rate(&self, id: MediaId, value: u8) -> OperationResult {
        let result = catalog_ops::rate::<Book>(&self.library, &self.event_bus, id, value)
            .map(|_| format!("Rated {}", CommonService::format_rating(value)));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn write_review(&self, id: MediaId, text: String) -> OperationResult {
        let result = catalog_ops::write_review::<Book>(&self.library, &self.event_bus, id, text)
            .map(|_| "Review saved".to_string());
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    /// The review text as message, or the placeholder when there is none
    pub fn read_review(&self, id: MediaId) -> OperationResult {
        let result = catalog_ops::inspect(&self.library, id, |book: &Book| CommonService::read_review(book));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn show_rating(&self, id: MediaId) -> OperationResult {
        let result = catalog_ops::inspect(&self.library, id, |book: &Book| CommonService::show_rating(book));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    pub fn delete(&self, id: MediaId) -> OperationResult {
        let result = catalog_ops::delete::<Book>(&self.library, &self.event_bus, id)
            .map(|book| format!("'{}' deleted", book.title));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    /// Case-insensitive substring match on the author
    pub fn search_by_author(&self, query: &str) -> AppResult<Vec<Book>> {
        let query = query.to_lowercase();
        list_query(&self.library, |library| {
            CommonService::filter_sorted(library.books(), |book| {
                book.author.to_lowercase().contains(&query)
            })
        })
    }

    /// Case-insensitive substring match on the ISBN as entered
    pub fn search_by_isbn(&self, query: &str) -> AppResult<Vec<Book>> {
        let query = query.to_lowercase();
        list_query(&self.library, |library| {
            CommonService::filter_sorted(library.books(), |book| {
                book.isbn.to_lowercase().contains(&query)
            })
        })
    }

    pub fn list_owned(&self) -> AppResult<Vec<Book>> {
        list_query(&self.library, |library| {
            CommonService::filter_sorted(library.books(), |book| book.owned)
        })
    }
}

impl MediaQueries for BookService {
    type Record = Book;

    fn library(&self) -> &SharedLibrary {
        &self.library
    }
}
