use serde::{Deserialize, Serialize};

use crate::domain::media::{Genre, MediaId, MediaKey, MediaKind, MediaRecord, Reviewable, ViewingState};

/// A movie in the journal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Internal immutable identifier
    pub id: MediaId,

    pub title: String,

    pub release_year: i32,

    pub genre: Genre,

    /// Main cast, in billing order
    pub cast: Vec<String>,

    /// Running time in minutes
    pub duration: u32,

    pub director: String,

    pub synopsis: String,

    pub original_title: String,

    /// Streaming services or venues, in the order the user entered them
    pub where_to_watch: Vec<String>,

    #[serde(flatten)]
    pub viewing: ViewingState,
}

impl Movie {
    /// Create a new Movie with empty descriptive metadata
    pub fn new(title: String, release_year: i32, genre: Genre) -> Self {
        Self {
            id: MediaId::new(),
            original_title: title.clone(),
            title,
            release_year,
            genre,
            cast: Vec::new(),
            duration: 0,
            director: String::new(),
            synopsis: String::new(),
            where_to_watch: Vec::new(),
            viewing: ViewingState::default(),
        }
    }

    /// Case-insensitive substring match against every cast entry
    pub fn features_actor(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.cast.iter().any(|actor| actor.to_lowercase().contains(&query))
    }
}

impl MediaRecord for Movie {
    const KIND: MediaKind = MediaKind::Movie;

    fn id(&self) -> MediaId {
        self.id
    }

    fn key(&self) -> MediaKey {
        MediaKey::movie(&self.title, self.release_year)
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
}

impl Reviewable for Movie {
    fn viewing(&self) -> &ViewingState {
        &self.viewing
    }

    fn viewing_mut(&mut self) -> &mut ViewingState {
        &mut self.viewing
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.title, self.release_year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_actor_matches_substring() {
        let mut movie = Movie::new("The Matrix".to_string(), 1999, Genre::ScienceFiction);
        movie.cast = vec!["Keanu Reeves".to_string(), "Carrie-Anne Moss".to_string()];
        assert!(movie.features_actor("reeves"));
        assert!(movie.features_actor("ANNE"));
        assert!(!movie.features_actor("Fishburne"));
    }
}
