//! Shared media vocabulary:
//!
//! 1. Genre is a closed set and its declaration order is the grouping order
//! 2. Identity is structural (MediaKey), handles are opaque (MediaId)
//! 3. Viewing state: seen is one-way, rating and review need seen

pub mod genre;
pub mod identity;
pub mod traits;
pub mod viewing;

pub use genre::Genre;
pub use identity::{MediaId, MediaKey, MediaKind};
pub use traits::{MediaRecord, Reviewable};
pub use viewing::{seen_date_label, validate_seen_year, ViewingState, MAX_RATING, MIN_RATING};
