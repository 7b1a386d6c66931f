// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod book;
pub mod media;
pub mod movie;
pub mod series;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Shared vocabulary
pub use media::{
    seen_date_label, validate_seen_year, Genre, MediaId, MediaKey, MediaKind, MediaRecord,
    Reviewable, ViewingState, MAX_RATING, MIN_RATING,
};

// Book Domain
pub use book::{validate_book, Book};

// Movie Domain
pub use movie::{validate_movie, Movie};

// Series Domain
pub use series::{validate_season_year, validate_series, Season, Series, ONGOING_YEAR};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{name} is already registered")]
    DuplicateMedia { kind: MediaKind, name: String },

    #[error("Season {0} already exists")]
    DuplicateSeason(u32),

    #[error("Season {0} not found")]
    SeasonNotFound(u32),

    #[error("Invalid rating {0}: must be between {min} and {max}", min = MIN_RATING, max = MAX_RATING)]
    InvalidRating(u8),

    #[error("Must be marked as seen first")]
    NotSeen,

    #[error("Already marked as seen")]
    AlreadySeen,

    #[error("Invalid year {year}: must be between {min} and {max}")]
    InvalidYear { year: i32, min: i32, max: i32 },

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),

    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
