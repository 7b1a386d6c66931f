// src/services/statistics_service.rs
//
// Statistics Service - Read-only summary of the journal
//
// RULES:
// - Computed on demand from the Library, never stored
// - Unrated records (rating 0) do not count towards averages

use serde::{Deserialize, Serialize};

use crate::domain::{MediaRecord, Reviewable};
use crate::error::AppResult;
use crate::repositories::SharedLibrary;

/// Totals for one kind of record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KindStatistics {
    pub total: usize,
    pub seen: usize,
    pub rated: usize,
    /// Mean rating of the rated records, `None` when nothing is rated
    pub average_rating: Option<f64>,
}

/// Journal-wide summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LibraryStatistics {
    pub books: KindStatistics,
    pub movies: KindStatistics,
    /// `seen` counts series with at least one seen season
    pub series: KindStatistics,
    pub total_seasons: usize,
    pub seen_seasons: usize,
    /// Distinct release years in the year index
    pub distinct_years: usize,
}

impl LibraryStatistics {
    pub fn total_records(&self) -> usize {
        self.books.total + self.movies.total + self.series.total
    }
}

pub struct StatisticsService {
    library: SharedLibrary,
}

impl StatisticsService {
    pub fn new(library: SharedLibrary) -> Self {
        Self { library }
    }

    pub fn summary(&self) -> AppResult<LibraryStatistics> {
        let library = self.library.read()?;

        let series = library.series();
        let mut series_stats = rating_statistics(series);
        series_stats.seen = series
            .iter()
            .filter(|s| s.seasons.iter().any(|season| season.is_seen()))
            .count();

        let seasons = series.iter().flat_map(|s| s.seasons.iter());
        let total_seasons = seasons.clone().count();
        let seen_seasons = seasons.filter(|season| season.is_seen()).count();

        Ok(LibraryStatistics {
            books: viewing_statistics(library.books()),
            movies: viewing_statistics(library.movies()),
            series: series_stats,
            total_seasons,
            seen_seasons,
            distinct_years: library.years().len(),
        })
    }
}

fn rating_statistics<T: MediaRecord>(records: &[T]) -> KindStatistics {
    let ratings: Vec<u8> = records
        .iter()
        .map(MediaRecord::rating)
        .filter(|rating| *rating > 0)
        .collect();

    let average_rating = if ratings.is_empty() {
        None
    } else {
        let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
        Some(f64::from(sum) / ratings.len() as f64)
    };

    KindStatistics {
        total: records.len(),
        seen: 0,
        rated: ratings.len(),
        average_rating,
    }
}

fn viewing_statistics<T: MediaRecord + Reviewable>(records: &[T]) -> KindStatistics {
    KindStatistics {
        seen: records.iter().filter(|r| r.is_seen()).count(),
        ..rating_statistics(records)
    }
}
