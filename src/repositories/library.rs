// src/repositories/library.rs
//
// In-memory catalog
//
// The Library is the only owner of record instances. Everything else
// addresses records through their MediaId.

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use log::{debug, warn};

use crate::domain::{Book, DomainError, DomainResult, MediaId, MediaRecord, Movie, Series};

/// Library shared between services
pub type SharedLibrary = Arc<RwLock<Library>>;

/// Catalog of books, movies and series plus a year usage index.
///
/// Collections keep insertion order. The year index maps each release year
/// in use to the number of records using it and is ordered by year.
#[derive(Debug, Default)]
pub struct Library {
    books: Vec<Book>,
    movies: Vec<Movie>,
    series: Vec<Series>,
    years: BTreeMap<i32, u32>,
}

/// A record kind the Library stores in its own collection
pub trait LibraryEntry: MediaRecord + Sized {
    fn collection(library: &Library) -> &Vec<Self>;
    fn collection_mut(library: &mut Library) -> &mut Vec<Self>;
}

impl LibraryEntry for Book {
    fn collection(library: &Library) -> &Vec<Self> {
        &library.books
    }

    fn collection_mut(library: &mut Library) -> &mut Vec<Self> {
        &mut library.books
    }
}

impl LibraryEntry for Movie {
    fn collection(library: &Library) -> &Vec<Self> {
        &library.movies
    }

    fn collection_mut(library: &mut Library) -> &mut Vec<Self> {
        &mut library.movies
    }
}

impl LibraryEntry for Series {
    fn collection(library: &Library) -> &Vec<Self> {
        &library.series
    }

    fn collection_mut(library: &mut Library) -> &mut Vec<Self> {
        &mut library.series
    }
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared(self) -> SharedLibrary {
        Arc::new(RwLock::new(self))
    }

    /// Fails if a record of the same kind with the same identity is stored.
    /// `add` does not call this; callers must.
    pub fn exists<T: LibraryEntry>(&self, record: &T) -> DomainResult<()> {
        let key = record.key();
        if T::collection(self).iter().any(|stored| stored.key() == key) {
            return Err(DomainError::DuplicateMedia {
                kind: T::KIND,
                name: record.display_name(),
            });
        }
        Ok(())
    }

    pub fn add<T: LibraryEntry>(&mut self, record: T) {
        debug!("Library: adding {} {}", T::KIND, record.id());
        T::collection_mut(self).push(record);
    }

    /// Removes the record with this id, keeping the order of the rest.
    /// The year index is left to the caller.
    pub fn remove<T: LibraryEntry>(&mut self, id: MediaId) -> Option<T> {
        let collection = T::collection_mut(self);
        let idx = collection.iter().position(|r| r.id() == id)?;
        debug!("Library: removing {} {}", T::KIND, id);
        Some(collection.remove(idx))
    }

    pub fn get<T: LibraryEntry>(&self, id: MediaId) -> Option<&T> {
        T::collection(self).iter().find(|r| r.id() == id)
    }

    pub fn get_mut<T: LibraryEntry>(&mut self, id: MediaId) -> Option<&mut T> {
        T::collection_mut(self).iter_mut().find(|r| r.id() == id)
    }

    pub fn contains<T: LibraryEntry>(&self, id: MediaId) -> bool {
        self.get::<T>(id).is_some()
    }

    pub fn records<T: LibraryEntry>(&self) -> &[T] {
        T::collection(self)
    }

    pub fn add_year(&mut self, year: i32) {
        *self.years.entry(year).or_insert(0) += 1;
    }

    /// Decrements the year count, dropping the entry when it reaches zero.
    /// Unknown years are ignored.
    pub fn remove_year(&mut self, year: i32) {
        if let Some(count) = self.years.get_mut(&year) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.years.remove(&year);
            }
        }
    }

    /// Number of stored records released in `year`
    pub fn year_count(&self, year: i32) -> u32 {
        self.years.get(&year).copied().unwrap_or(0)
    }

    // ------------------------------------------------------------------------
    // Bulk accessors (persistence)
    // ------------------------------------------------------------------------

    pub fn books(&self) -> &Vec<Book> {
        &self.books
    }

    pub fn movies(&self) -> &Vec<Movie> {
        &self.movies
    }

    pub fn series(&self) -> &Vec<Series> {
        &self.series
    }

    pub fn years(&self) -> &BTreeMap<i32, u32> {
        &self.years
    }

    pub fn set_books(&mut self, books: Vec<Book>) {
        self.books = books;
    }

    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }

    /// Seasons are re-sorted by number; duplicate numbers keep the first
    /// season seen.
    pub fn set_series(&mut self, mut series: Vec<Series>) {
        for s in &mut series {
            let dropped = s.normalize_seasons();
            if !dropped.is_empty() {
                warn!("Library: '{}' had duplicate seasons {:?}, kept the first of each", s.title, dropped);
            }
        }
        self.series = series;
    }

    pub fn set_years(&mut self, years: BTreeMap<i32, u32>) {
        self.years = years;
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty() && self.movies.is_empty() && self.series.is_empty()
    }
}
