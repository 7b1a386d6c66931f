use serde::{Deserialize, Serialize};

use crate::domain::media::{Genre, MediaId, MediaKey, MediaKind, MediaRecord, Reviewable, ViewingState};

/// A book in the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Internal immutable identifier
    pub id: MediaId,

    pub title: String,

    /// First publication year
    pub release_year: i32,

    pub genre: Genre,

    /// Natural unique key of a book
    pub isbn: String,

    pub author: String,

    pub publisher: String,

    /// Whether the user owns a physical or digital copy
    pub owned: bool,

    #[serde(flatten)]
    pub viewing: ViewingState,
}

impl Book {
    pub fn new(
        title: String,
        release_year: i32,
        genre: Genre,
        isbn: String,
        author: String,
        publisher: String,
        owned: bool,
    ) -> Self {
        Self {
            id: MediaId::new(),
            title,
            release_year,
            genre,
            isbn,
            author,
            publisher,
            owned,
            viewing: ViewingState::default(),
        }
    }
}

impl MediaRecord for Book {
    const KIND: MediaKind = MediaKind::Book;

    fn id(&self) -> MediaId {
        self.id
    }

    fn key(&self) -> MediaKey {
        MediaKey::book(&self.isbn)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn release_year(&self) -> i32 {
        self.release_year
    }

    fn genre(&self) -> Genre {
        self.genre
    }

    fn rating(&self) -> u8 {
        self.viewing.rating
    }

    fn display_name(&self) -> String {
        format!("{} (ISBN {})", self.title, self.isbn)
    }
}

impl Reviewable for Book {
    fn viewing(&self) -> &ViewingState {
        &self.viewing
    }

    fn viewing_mut(&mut self) -> &mut ViewingState {
        &mut self.viewing
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) - {}", self.title, self.release_year, self.author)
    }
}
