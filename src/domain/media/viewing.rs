use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Lowest and highest accepted rating; 0 is reserved for "unrated"
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Viewing state shared by books, movies and seasons.
///
/// `seen` is a one-way switch. Rating and review are independent of each
/// other and may be overwritten, but only once `seen` is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewingState {
    pub seen: bool,
    pub rating: u8,
    pub review: Option<String>,
    pub seen_date: Option<String>,
}

impl ViewingState {
    pub fn mark_seen(&mut self, year: i32, month: Month) -> DomainResult<()> {
        if self.seen {
            return Err(DomainError::AlreadySeen);
        }
        self.seen = true;
        self.seen_date = Some(seen_date_label(year, month));
        Ok(())
    }

    /// Range is checked before the seen flag
    pub fn set_rating(&mut self, value: u8) -> DomainResult<()> {
        if !(MIN_RATING..=MAX_RATING).contains(&value) {
            return Err(DomainError::InvalidRating(value));
        }
        if !self.seen {
            return Err(DomainError::NotSeen);
        }
        self.rating = value;
        Ok(())
    }

    pub fn set_review(&mut self, text: String) -> DomainResult<()> {
        if !self.seen {
            return Err(DomainError::NotSeen);
        }
        self.review = Some(text);
        Ok(())
    }
}

/// A record can only be marked as seen between its own release year and
/// the current calendar year, both inclusive.
pub fn validate_seen_year(release_year: i32, seen_year: i32, current_year: i32) -> DomainResult<()> {
    if seen_year < release_year || seen_year > current_year {
        return Err(DomainError::InvalidYear {
            year: seen_year,
            min: release_year,
            max: current_year,
        });
    }
    Ok(())
}

/// Formats a seen date as "<Month> de <Year>", e.g. "Junio de 1966"
pub fn seen_date_label(year: i32, month: Month) -> String {
    format!("{} de {}", month_name(month), year)
}

fn month_name(month: Month) -> &'static str {
    match month {
        Month::January => "Enero",
        Month::February => "Febrero",
        Month::March => "Marzo",
        Month::April => "Abril",
        Month::May => "Mayo",
        Month::June => "Junio",
        Month::July => "Julio",
        Month::August => "Agosto",
        Month::September => "Septiembre",
        Month::October => "Octubre",
        Month::November => "Noviembre",
        Month::December => "Diciembre",
    }
}
