// src/repositories/library_store.rs
//
// Bulk persistence of the Library
//
// RULES:
// - Whole-library load and save only, at session boundaries
// - NO business logic, NO invariant enforcement
// - Field names are the serde names of the domain types

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::StorageConfig;
use crate::domain::{Book, Movie, Series};
use crate::error::AppResult;
use crate::repositories::library::Library;

/// Everything the Library holds, detached from it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibrarySnapshot {
    pub books: Vec<Book>,
    pub movies: Vec<Movie>,
    pub series: Vec<Series>,
    pub years: BTreeMap<i32, u32>,
}

impl LibrarySnapshot {
    pub fn capture(library: &Library) -> Self {
        Self {
            books: library.books().clone(),
            movies: library.movies().clone(),
            series: library.series().clone(),
            years: library.years().clone(),
        }
    }

    /// Replaces every collection of `library` wholesale
    pub fn apply_to(self, library: &mut Library) {
        library.set_books(self.books);
        library.set_movies(self.movies);
        library.set_series(self.series);
        library.set_years(self.years);
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait LibraryStore: Send + Sync {
    fn load(&self) -> AppResult<LibrarySnapshot>;
    fn save(&self, snapshot: &LibrarySnapshot) -> AppResult<()>;
}

/// Four JSON documents: books, movies, series (seasons inlined) and years
pub struct JsonLibraryStore {
    storage: StorageConfig,
}

impl JsonLibraryStore {
    pub fn new(storage: StorageConfig) -> Self {
        Self { storage }
    }

    /// Missing documents load as empty collections
    fn read_document<T>(path: &Path) -> AppResult<T>
    where
        T: DeserializeOwned + Default,
    {
        if !path.exists() {
            debug!("Store: {} not found, starting empty", path.display());
            return Ok(T::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_document<T: Serialize>(path: &Path, value: &T) -> AppResult<()> {
        let content = serde_json::to_string_pretty(value)?;
        fs::write(path, content)?;
        Ok(())
    }
}

impl LibraryStore for JsonLibraryStore {
    fn load(&self) -> AppResult<LibrarySnapshot> {
        let snapshot = LibrarySnapshot {
            books: Self::read_document(&self.storage.books_path())?,
            movies: Self::read_document(&self.storage.movies_path())?,
            series: Self::read_document(&self.storage.series_path())?,
            years: Self::read_document(&self.storage.years_path())?,
        };

        info!(
            "Store: loaded {} books, {} movies, {} series from {}",
            snapshot.books.len(),
            snapshot.movies.len(),
            snapshot.series.len(),
            self.storage.data_dir.display()
        );
        Ok(snapshot)
    }

    fn save(&self, snapshot: &LibrarySnapshot) -> AppResult<()> {
        fs::create_dir_all(&self.storage.data_dir)?;

        Self::write_document(&self.storage.books_path(), &snapshot.books)?;
        Self::write_document(&self.storage.movies_path(), &snapshot.movies)?;
        Self::write_document(&self.storage.series_path(), &snapshot.series)?;
        Self::write_document(&self.storage.years_path(), &snapshot.years)?;

        info!("Store: saved library to {}", self.storage.data_dir.display());
        Ok(())
    }
}
