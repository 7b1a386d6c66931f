pub mod entity;
pub mod invariants;

pub use entity::{Season, Series, ONGOING_YEAR};
pub use invariants::{validate_season_year, validate_series};
