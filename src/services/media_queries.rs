// src/services/media_queries.rs
//
// Read-only queries every per-kind service offers over its own collection.
//
// Results are clones: the Library keeps ownership, callers get a snapshot
// that does not hold the lock.

use crate::domain::{Genre, MediaId};
use crate::error::AppResult;
use crate::repositories::{Library, LibraryEntry, SharedLibrary};
use crate::services::common_service::{to_owned_groups, to_owned_list, CommonService, Grouping};
use crate::services::catalog_ops;

pub trait MediaQueries {
    type Record: LibraryEntry + Clone;

    fn library(&self) -> &SharedLibrary;

    fn get(&self, id: MediaId) -> AppResult<Self::Record> {
        catalog_ops::inspect(self.library(), id, |record: &Self::Record| record.clone())
    }

    /// Whole collection in insertion order
    fn list_all(&self) -> AppResult<Vec<Self::Record>> {
        Ok(self.library().read()?.records::<Self::Record>().to_vec())
    }

    fn search_by_title(&self, query: &str) -> AppResult<Vec<Self::Record>> {
        list_query(self.library(), |library| {
            CommonService::search_by_title(query, library.records::<Self::Record>())
        })
    }

    fn search_by_year(&self, year: i32) -> AppResult<Vec<Self::Record>> {
        list_query(self.library(), |library| {
            CommonService::search_by_year(year, library.records::<Self::Record>())
        })
    }

    fn search_by_genre(&self, genre: Genre) -> AppResult<Vec<Self::Record>> {
        list_query(self.library(), |library| {
            CommonService::search_by_genre(genre, library.records::<Self::Record>())
        })
    }

    fn sort_ascending(&self) -> AppResult<Vec<Self::Record>> {
        list_query(self.library(), |library| {
            CommonService::sort_ascending(library.records::<Self::Record>())
        })
    }

    fn sort_descending(&self) -> AppResult<Vec<Self::Record>> {
        list_query(self.library(), |library| {
            CommonService::sort_descending(library.records::<Self::Record>())
        })
    }

    fn group_by_year_ascending_rate(&self) -> AppResult<Vec<(i32, Vec<Self::Record>)>> {
        group_query(self.library(), |library| {
            CommonService::group_by_year_ascending_rate(
                library.records::<Self::Record>(),
                library.years().keys().copied(),
            )
        })
    }

    fn group_by_year_descending_rate(&self) -> AppResult<Vec<(i32, Vec<Self::Record>)>> {
        group_query(self.library(), |library| {
            CommonService::group_by_year_descending_rate(
                library.records::<Self::Record>(),
                library.years().keys().copied(),
            )
        })
    }

    fn group_by_year_desc_ascending_rate(&self) -> AppResult<Vec<(i32, Vec<Self::Record>)>> {
        group_query(self.library(), |library| {
            CommonService::group_by_year_desc_ascending_rate(
                library.records::<Self::Record>(),
                library.years().keys().copied(),
            )
        })
    }

    fn group_by_year_desc_descending_rate(&self) -> AppResult<Vec<(i32, Vec<Self::Record>)>> {
        group_query(self.library(), |library| {
            CommonService::group_by_year_desc_descending_rate(
                library.records::<Self::Record>(),
                library.years().keys().copied(),
            )
        })
    }

    fn group_by_genre_ascending_rate(&self) -> AppResult<Vec<(Genre, Vec<Self::Record>)>> {
        group_query(self.library(), |library| {
            CommonService::group_by_genre_ascending_rate(library.records::<Self::Record>())
        })
    }

    fn group_by_genre_descending_rate(&self) -> AppResult<Vec<(Genre, Vec<Self::Record>)>> {
        group_query(self.library(), |library| {
            CommonService::group_by_genre_descending_rate(library.records::<Self::Record>())
        })
    }
}

/// Runs a list-producing query under the read lock and clones the result
pub(crate) fn list_query<T, F>(library: &SharedLibrary, query: F) -> AppResult<Vec<T>>
where
    T: Clone,
    F: for<'a> FnOnce(&'a Library) -> Vec<&'a T>,
{
    let library = library.read()?;
    Ok(to_owned_list(query(&*library)))
}

/// Runs a grouping query under the read lock and clones the result
pub(crate) fn group_query<K, T, F>(library: &SharedLibrary, query: F) -> AppResult<Vec<(K, Vec<T>)>>
where
    K: Copy,
    T: Clone,
    F: for<'a> FnOnce(&'a Library) -> Grouping<'a, K, T>,
{
    let library = library.read()?;
    Ok(to_owned_groups(query(&*library)))
}
