use serde::{Deserialize, Serialize};

use crate::domain::media::{Genre, MediaId, MediaKey, MediaKind, MediaRecord, Reviewable, ViewingState};
use crate::domain::{DomainError, DomainResult};

/// Sentinel `year_of_ending` for a series still on air
pub const ONGOING_YEAR: i32 = 9999;

/// A TV series in the journal.
///
/// A series has no viewing state of its own: only its seasons can be seen,
/// rated and reviewed. `rating` is derived from the seasons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Internal immutable identifier
    pub id: MediaId,

    pub title: String,

    /// Year the first season aired
    pub release_year: i32,

    /// Year the last season aired, or [`ONGOING_YEAR`]
    pub year_of_ending: i32,

    pub genre: Genre,

    pub cast: Vec<String>,

    pub original_title: String,

    pub where_to_watch: Vec<String>,

    /// Integer mean of all season ratings (unrated counts as 0), 0 without
    /// seasons. Only refreshed when a season is rated.
    pub rating: u8,

    /// Always sorted by season number, numbers unique
    pub seasons: Vec<Season>,
}

/// One season of a series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub season_number: u32,

    pub episode_count: u32,

    /// Year the season aired
    pub year: i32,

    #[serde(flatten)]
    pub viewing: ViewingState,
}

impl Series {
    pub fn new(title: String, release_year: i32, year_of_ending: i32, genre: Genre) -> Self {
        Self {
            id: MediaId::new(),
            original_title: title.clone(),
            title,
            release_year,
            year_of_ending,
            genre,
            cast: Vec::new(),
            where_to_watch: Vec::new(),
            rating: 0,
            seasons: Vec::new(),
        }
    }

    pub fn is_ongoing(&self) -> bool {
        self.year_of_ending == ONGOING_YEAR
    }

    pub fn season(&self, number: u32) -> Option<&Season> {
        self.position(number).ok().map(|idx| &self.seasons[idx])
    }

    pub fn season_mut(&mut self, number: u32) -> Option<&mut Season> {
        match self.position(number) {
            Ok(idx) => Some(&mut self.seasons[idx]),
            Err(_) => None,
        }
    }

    /// Inserts a season keeping the list ordered by number.
    /// The aggregate rating is left untouched.
    pub fn add_season(&mut self, season: Season) -> DomainResult<()> {
        match self.position(season.season_number) {
            Ok(_) => Err(DomainError::DuplicateSeason(season.season_number)),
            Err(idx) => {
                self.seasons.insert(idx, season);
                Ok(())
            }
        }
    }

    /// Recomputes `rating` from every season and returns it
    pub fn recalculate_rating(&mut self) -> u8 {
        self.rating = if self.seasons.is_empty() {
            0
        } else {
            let sum: u32 = self.seasons.iter().map(|s| u32::from(s.viewing.rating)).sum();
            (sum / self.seasons.len() as u32) as u8
        };
        self.rating
    }

    /// Restores season order and uniqueness on seasons that did not come
    /// through `add_season`. The first season with a given number wins;
    /// the numbers of dropped duplicates are returned.
    pub fn normalize_seasons(&mut self) -> Vec<u32> {
        self.seasons.sort_by_key(|s| s.season_number);
        let mut dropped = Vec::new();
        self.seasons.dedup_by(|later, earlier| {
            let duplicate = later.season_number == earlier.season_number;
            if duplicate {
                dropped.push(later.season_number);
            }
            duplicate
        });
        dropped
    }

    /// Case-insensitive substring match against every cast entry
    pub fn features_actor(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.cast.iter().any(|actor| actor.to_lowercase().contains(&query))
    }

    fn position(&self, number: u32) -> Result<usize, usize> {
        self.seasons.binary_search_by_key(&number, |s| s.season_number)
    }
}

impl Season {
    pub fn new(season_number: u32, episode_count: u32, year: i32) -> Self {
        Self {
            season_number,
            episode_count,
            year,
            viewing: ViewingState::default(),
        }
    }
}

impl MediaRecord for Series {
    const KIND: MediaKind = MediaKind::Series;

    fn id(&self) -> MediaId {
        self.id
    }

    fn key(&self) -> MediaKey {
        MediaKey::series(&self.title, self.release_year)
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
        self.rating
    }
}

impl Reviewable for Season {
    fn viewing(&self) -> &ViewingState {
        &self.viewing
    }

    fn viewing_mut(&mut self) -> &mut ViewingState {
        &mut self.viewing
    }
}

impl std::fmt::Display for Series {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_ongoing() {
            write!(f, "{} ({}-)", self.title, self.release_year)
        } else {
            write!(f, "{} ({}-{})", self.title, self.release_year, self.year_of_ending)
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Temporada {} ({}, {} episodios)",
            self.season_number, self.year, self.episode_count
        )
    }
}
