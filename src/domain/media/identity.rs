use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Handle to a record owned by the Library.
///
/// Assigned once at construction and never reused. It addresses a record,
/// it does not decide uniqueness (see [`MediaKey`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub Uuid);

impl MediaId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MediaId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MediaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The three kinds of record the Library keeps apart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Book,
    Movie,
    Series,
}

impl MediaKind {
    /// Subject label used in operation results
    pub fn label(&self) -> &'static str {
        match self {
            MediaKind::Book => "Libro",
            MediaKind::Movie => "Película",
            MediaKind::Series => "Serie",
        }
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Structural identity of a record.
///
/// Two records of the same kind with equal keys are the same work.
/// Books are keyed by ISBN alone; movies and series by title and release year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaKey {
    Book { isbn: String },
    Movie { title: String, year: i32 },
    Series { title: String, year: i32 },
}

impl MediaKey {
    pub fn book(isbn: &str) -> Self {
        Self::Book {
            isbn: normalize_isbn(isbn),
        }
    }

    pub fn movie(title: &str, year: i32) -> Self {
        Self::Movie {
            title: normalize_title(title),
            year,
        }
    }

    pub fn series(title: &str, year: i32) -> Self {
        Self::Series {
            title: normalize_title(title),
            year,
        }
    }
}

/// Uppercase, with whitespace and hyphens dropped
fn normalize_isbn(isbn: &str) -> String {
    isbn.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_uppercase)
        .collect()
}

fn normalize_title(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isbn_key_ignores_case_and_spacing() {
        assert_eq!(MediaKey::book("isbn-1"), MediaKey::book(" ISBN 1 "));
    }

    #[test]
    fn test_title_key_ignores_case_and_extra_spaces() {
        assert_eq!(
            MediaKey::movie("The  Matrix", 1999),
            MediaKey::movie("the matrix ", 1999)
        );
        assert_ne!(MediaKey::movie("The Matrix", 1999), MediaKey::movie("The Matrix", 2003));
    }

    #[test]
    fn test_kinds_never_collide() {
        assert_ne!(MediaKey::movie("Dark", 2017), MediaKey::series("Dark", 2017));
    }
}
