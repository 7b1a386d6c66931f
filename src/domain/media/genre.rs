use serde::{Deserialize, Serialize};

/// Fixed set of genres a record can be filed under.
///
/// Declaration order is meaningful: genre groupings always iterate in this
/// order, regardless of the requested rating direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Fiction,
    Horror,
    Mystery,
    Romance,
    ScienceFiction,
    Thriller,
    Documentary,
}

impl Genre {
    /// All genres in declaration order
    pub const ALL: [Genre; 12] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Comedy,
        Genre::Drama,
        Genre::Fantasy,
        Genre::Fiction,
        Genre::Horror,
        Genre::Mystery,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::Thriller,
        Genre::Documentary,
    ];
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genre::Action => write!(f, "Acción"),
            Genre::Adventure => write!(f, "Aventura"),
            Genre::Comedy => write!(f, "Comedia"),
            Genre::Drama => write!(f, "Drama"),
            Genre::Fantasy => write!(f, "Fantasía"),
            Genre::Fiction => write!(f, "Ficción"),
            Genre::Horror => write!(f, "Terror"),
            Genre::Mystery => write!(f, "Misterio"),
            Genre::Romance => write!(f, "Romance"),
            Genre::ScienceFiction => write!(f, "Ciencia ficción"),
            Genre::Thriller => write!(f, "Suspense"),
            Genre::Documentary => write!(f, "Documental"),
        }
    }
}
