use super::entity::Series;
use crate::domain::{DomainError, DomainResult};

/// Validates all Series invariants
pub fn validate_series(series: &Series) -> DomainResult<()> {
    if series.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Series title cannot be empty".to_string(),
        ));
    }
    if series.year_of_ending < series.release_year {
        return Err(DomainError::InvariantViolation(format!(
            "Series cannot end ({}) before it starts ({})",
            series.year_of_ending, series.release_year
        )));
    }
    Ok(())
}

/// A season must air within the series run, both ends inclusive
pub fn validate_season_year(series: &Series, year: i32) -> DomainResult<()> {
    if year < series.release_year || year > series.year_of_ending {
        return Err(DomainError::InvalidYear {
            year,
            min: series.release_year,
            max: series.year_of_ending,
        });
    }
    Ok(())
}

/// Invariants that must hold true for the Series domain:
///
/// 1. Season numbers are unique within a series
/// 2. Seasons stay ordered by number
/// 3. Seasons are never removed
/// 4. Series rating = integer mean of all season ratings (0 without seasons),
///    refreshed when a season is rated
/// 5. A series itself is never rated or reviewed directly

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::Genre;
    use crate::domain::series::{Season, ONGOING_YEAR};
    use chrono::Month;

    fn dark() -> Series {
        Series::new("Dark".to_string(), 2017, 2020, Genre::ScienceFiction)
    }

    #[test]
    fn test_end_before_start_fails() {
        let series = Series::new("Dark".to_string(), 2017, 2010, Genre::Drama);
        assert!(validate_series(&series).is_err());
    }

    #[test]
    fn test_season_year_bounds() {
        let series = dark();
        assert!(validate_season_year(&series, 2017).is_ok());
        assert!(validate_season_year(&series, 2020).is_ok());
        assert!(validate_season_year(&series, 2016).is_err());
        assert!(validate_season_year(&series, 2021).is_err());

        let ongoing = Series::new("One Piece".to_string(), 1999, ONGOING_YEAR, Genre::Adventure);
        assert!(validate_season_year(&ongoing, 2024).is_ok());
    }

    #[test]
    fn test_seasons_stay_sorted_and_unique() {
        let mut series = dark();
        series.add_season(Season::new(3, 8, 2020)).unwrap();
        series.add_season(Season::new(1, 10, 2017)).unwrap();
        series.add_season(Season::new(2, 8, 2019)).unwrap();

        let numbers: Vec<u32> = series.seasons.iter().map(|s| s.season_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);

        let err = series.add_season(Season::new(2, 5, 2019)).unwrap_err();
        assert!(matches!(err, DomainError::DuplicateSeason(2)));
        assert_eq!(series.season(2).unwrap().episode_count, 8);
    }

    #[test]
    fn test_rating_is_integer_mean_of_all_seasons() {
        let mut series = dark();
        series.add_season(Season::new(1, 10, 2017)).unwrap();
        series.add_season(Season::new(2, 8, 2019)).unwrap();
        series.add_season(Season::new(3, 8, 2020)).unwrap();
        assert_eq!(series.recalculate_rating(), 0);

        for (number, rating) in [(1, 4), (2, 3)] {
            let season = series.season_mut(number).unwrap();
            season.viewing.mark_seen(2020, Month::May).unwrap();
            season.viewing.set_rating(rating).unwrap();
        }

        // (4 + 3 + 0) / 3, the unrated season counts as 0
        assert_eq!(series.recalculate_rating(), 2);
    }

    #[test]
    fn test_normalize_seasons_sorts_and_drops_duplicates() {
        let mut series = dark();
        series.seasons = vec![
            Season::new(3, 8, 2020),
            Season::new(1, 10, 2017),
            Season::new(3, 2, 2020),
            Season::new(2, 8, 2019),
        ];

        assert_eq!(series.normalize_seasons(), vec![3]);
        let numbers: Vec<u32> = series.seasons.iter().map(|s| s.season_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(series.season(3).unwrap().episode_count, 8);
        assert!(series.add_season(Season::new(3, 1, 2020)).is_err());
    }

    #[test]
    fn test_rating_without_seasons_is_zero() {
        let mut series = dark();
        assert_eq!(series.recalculate_rating(), 0);
    }
}
