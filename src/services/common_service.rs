// src/services/common_service.rs
//
// Common Service - Generic query and grouping engine
//
// RULES:
// - Works on one homogeneous slice of records at a time
// - Never touches the Library directly; callers pass the records and
//   the year index in
// - Every result is ordered by rating, ties keep their input order

use crate::domain::{DomainResult, Genre, MediaRecord, Reviewable, MAX_RATING};

/// Rating order of a result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Ordered key -> records mapping produced by the grouping operations.
/// Keys appear in iteration order, empty groups are left out.
pub type Grouping<'a, K, T> = Vec<(K, Vec<&'a T>)>;

pub const UNRATED_LABEL: &str = "Sin calificar";
pub const NO_REVIEW_LABEL: &str = "Sin reseña";

pub struct CommonService;

impl CommonService {
    // ------------------------------------------------------------------------
    // Viewing state
    // ------------------------------------------------------------------------

    pub fn rate<T: Reviewable>(record: &mut T, value: u8) -> DomainResult<()> {
        record.viewing_mut().set_rating(value)
    }

    pub fn write_review<T: Reviewable>(record: &mut T, text: String) -> DomainResult<()> {
        record.viewing_mut().set_review(text)
    }

    pub fn read_review<T: Reviewable>(record: &T) -> String {
        match record.viewing().review.as_deref() {
            Some(review) if !review.trim().is_empty() => review.to_string(),
            _ => NO_REVIEW_LABEL.to_string(),
        }
    }

    pub fn show_rating<T: Reviewable>(record: &T) -> String {
        Self::format_rating(record.viewing().rating)
    }

    /// "★★★☆☆ (3/5)", or the unrated placeholder for 0
    pub fn format_rating(rating: u8) -> String {
        if rating == 0 {
            return UNRATED_LABEL.to_string();
        }
        let filled = usize::from(rating.min(MAX_RATING));
        let empty = usize::from(MAX_RATING) - filled;
        format!("{}{} ({}/{})", "★".repeat(filled), "☆".repeat(empty), rating, MAX_RATING)
    }

    // ------------------------------------------------------------------------
    // Searches
    // ------------------------------------------------------------------------

    /// Case-insensitive substring match on the title
    pub fn search_by_title<'a, T: MediaRecord>(query: &str, list: &'a [T]) -> Vec<&'a T> {
        let query = query.to_lowercase();
        Self::filter_sorted(list, |r| r.title().to_lowercase().contains(&query))
    }

    pub fn search_by_year<T: MediaRecord>(year: i32, list: &[T]) -> Vec<&T> {
        Self::filter_sorted(list, |r| r.release_year() == year)
    }

    pub fn search_by_genre<T: MediaRecord>(genre: Genre, list: &[T]) -> Vec<&T> {
        Self::filter_sorted(list, |r| r.genre() == genre)
    }

    /// Records matching `predicate`, ascending by rating
    pub fn filter_sorted<'a, T, P>(list: &'a [T], predicate: P) -> Vec<&'a T>
    where
        T: MediaRecord,
        P: Fn(&T) -> bool,
    {
        let matches: Vec<&T> = list.iter().filter(|r| predicate(*r)).collect();
        Self::sort_refs(matches, SortDirection::Ascending)
    }

    // ------------------------------------------------------------------------
    // Sorting
    // ------------------------------------------------------------------------

    pub fn sort_ascending<T: MediaRecord>(list: &[T]) -> Vec<&T> {
        Self::sort_refs(list.iter().collect(), SortDirection::Ascending)
    }

    /// Exact reverse of [`CommonService::sort_ascending`]
    pub fn sort_descending<T: MediaRecord>(list: &[T]) -> Vec<&T> {
        Self::sort_refs(list.iter().collect(), SortDirection::Descending)
    }

    fn sort_refs<T: MediaRecord>(mut records: Vec<&T>, direction: SortDirection) -> Vec<&T> {
        records.sort_by_key(|r| r.rating());
        if direction == SortDirection::Descending {
            records.reverse();
        }
        records
    }

    // ------------------------------------------------------------------------
    // Grouping
    // ------------------------------------------------------------------------

    /// Groups `list` under each year of `years`, in the order given.
    /// `years` is normally the Library's year index, which may hold years
    /// without any record in `list`; those are skipped.
    pub fn group_by_year<'a, T, I>(list: &'a [T], years: I, direction: SortDirection) -> Grouping<'a, i32, T>
    where
        T: MediaRecord,
        I: IntoIterator<Item = i32>,
    {
        years
            .into_iter()
            .filter_map(|year| {
                let matches: Vec<&T> = list.iter().filter(|r| r.release_year() == year).collect();
                if matches.is_empty() {
                    None
                } else {
                    Some((year, Self::sort_refs(matches, direction)))
                }
            })
            .collect()
    }

    /// Groups `list` by genre in declaration order. Only the rating order
    /// inside each group follows `direction`.
    pub fn group_by_genre<T: MediaRecord>(list: &[T], direction: SortDirection) -> Grouping<'_, Genre, T> {
        Genre::ALL
            .iter()
            .filter_map(|&genre| {
                let matches: Vec<&T> = list.iter().filter(|r| r.genre() == genre).collect();
                if matches.is_empty() {
                    None
                } else {
                    Some((genre, Self::sort_refs(matches, direction)))
                }
            })
            .collect()
    }

    /// Years ascending, ratings ascending
    pub fn group_by_year_ascending_rate<'a, T, I>(list: &'a [T], years: I) -> Grouping<'a, i32, T>
    where
        T: MediaRecord,
        I: IntoIterator<Item = i32>,
    {
        Self::group_by_year(list, years, SortDirection::Ascending)
    }

    /// Years ascending, ratings descending
    pub fn group_by_year_descending_rate<'a, T, I>(list: &'a [T], years: I) -> Grouping<'a, i32, T>
    where
        T: MediaRecord,
        I: IntoIterator<Item = i32>,
    {
        Self::group_by_year(list, years, SortDirection::Descending)
    }

    /// Years descending, ratings ascending
    pub fn group_by_year_desc_ascending_rate<'a, T, I>(list: &'a [T], years: I) -> Grouping<'a, i32, T>
    where
        T: MediaRecord,
        I: IntoIterator<Item = i32>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self::group_by_year(list, years.into_iter().rev(), SortDirection::Ascending)
    }

    /// Years descending, ratings descending
    pub fn group_by_year_desc_descending_rate<'a, T, I>(list: &'a [T], years: I) -> Grouping<'a, i32, T>
    where
        T: MediaRecord,
        I: IntoIterator<Item = i32>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self::group_by_year(list, years.into_iter().rev(), SortDirection::Descending)
    }

    pub fn group_by_genre_ascending_rate<T: MediaRecord>(list: &[T]) -> Grouping<'_, Genre, T> {
        Self::group_by_genre(list, SortDirection::Ascending)
    }

    pub fn group_by_genre_descending_rate<T: MediaRecord>(list: &[T]) -> Grouping<'_, Genre, T> {
        Self::group_by_genre(list, SortDirection::Descending)
    }
}

/// Clones every grouped record so the result can outlive a Library lock
pub fn to_owned_groups<K: Copy, T: Clone>(groups: Grouping<'_, K, T>) -> Vec<(K, Vec<T>)> {
    groups
        .into_iter()
        .map(|(key, records)| (key, records.into_iter().cloned().collect()))
        .collect()
}

/// Clones a list of record references
pub fn to_owned_list<T: Clone>(records: Vec<&T>) -> Vec<T> {
    records.into_iter().cloned().collect()
}
