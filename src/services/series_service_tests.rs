// src/services/series_service_tests.rs
//
// Series Service tests
//
// INVARIANTS TESTED:
// - Season numbers are unique and seasons stay ordered by number
// - Season years stay within the series run
// - Series rating is the integer mean of all season ratings, recomputed
//   only on a season rating change
// - Seasons replaced wholesale are re-sorted and deduplicated
// - Series identity is title + year
// - Whole-series rate/review calls always fail
// - Unknown season numbers fail with SeasonNotFound

#[cfg(test)]
mod series_service_tests {
    use std::sync::Arc;

    use chrono::Month;

    use crate::domain::{Genre, MediaId, Season, Series, ONGOING_YEAR};
    use crate::error::ErrorKind;
    use crate::events::EventBus;
    use crate::repositories::Library;
    use crate::services::media_queries::MediaQueries;
    use crate::services::series_service::{RegisterSeriesRequest, SeriesService};

    fn service() -> SeriesService {
        SeriesService::new(Library::new().shared(), Arc::new(EventBus::new()))
    }

    fn request(title: &str, start: i32, end: i32) -> RegisterSeriesRequest {
        RegisterSeriesRequest {
            title: title.to_string(),
            release_year: start,
            year_of_ending: end,
            genre: Genre::Drama,
            cast: vec!["Bryan Cranston".to_string(), "Aaron Paul".to_string()],
            original_title: String::new(),
            where_to_watch: vec!["Netflix".to_string()],
        }
    }

    fn breaking_bad(service: &SeriesService) -> MediaId {
        let result = service.register(request("Breaking Bad", 2008, 2013));
        assert!(result.is_success(), "{}", result);
        result.media_id.unwrap()
    }

    fn seen_season(service: &SeriesService, id: MediaId, number: u32, year: i32) {
        assert!(service.register_season(id, number, 10, year).is_success());
        assert!(service
            .mark_as_seen_season(id, number, year, Month::March)
            .is_success());
    }

    #[test]
    fn test_series_rating_is_mean_of_all_seasons() {
        let service = service();
        let id = breaking_bad(&service);
        seen_season(&service, id, 1, 2008);
        seen_season(&service, id, 2, 2009);

        assert!(service.rate_season(id, 1, 4).is_success());
        assert!(service.rate_season(id, 2, 2).is_success());
        assert_eq!(service.get(id).unwrap().rating, 3);
        assert_eq!(service.show_rating(id).message, "★★★☆☆ (3/5)");

        // registering a season does not touch the rating
        assert!(service.register_season(id, 3, 13, 2010).is_success());
        assert_eq!(service.get(id).unwrap().rating, 3);
    }

    #[test]
    fn test_unrated_season_counts_as_zero_on_next_rating() {
        let service = service();
        let id = breaking_bad(&service);
        seen_season(&service, id, 1, 2008);
        assert!(service.register_season(id, 2, 13, 2009).is_success());

        assert!(service.rate_season(id, 1, 5).is_success());
        // (5 + 0) / 2
        assert_eq!(service.get(id).unwrap().rating, 2);
    }

    #[test]
    fn test_same_title_and_year_is_duplicate() {
        let service = service();
        breaking_bad(&service);

        let dup = service.register(request("breaking  BAD", 2008, 2013));
        assert_eq!(dup.error_kind, Some(ErrorKind::DuplicateMedia));
        assert_eq!(dup.message, "breaking  BAD (2008) is already registered");

        let reboot = service.register(request("Breaking Bad", 2019, 2020));
        assert!(reboot.is_success());
        assert_eq!(service.list_all().unwrap().len(), 2);
    }

    #[test]
    fn test_unordered_seasons_from_storage_stay_unique() {
        let library = Library::new().shared();
        let mut series = Series::new("Dark".to_string(), 2017, 2020, Genre::Mystery);
        series.seasons = vec![
            Season::new(3, 8, 2020),
            Season::new(1, 10, 2017),
            Season::new(2, 8, 2019),
        ];
        let id = series.id;
        library.write().unwrap().set_series(vec![series]);

        let service = SeriesService::new(library, Arc::new(EventBus::new()));
        let again = service.register_season(id, 3, 1, 2020);
        assert_eq!(again.error_kind, Some(ErrorKind::DuplicateSeason));

        let numbers: Vec<u32> = service
            .list_seasons(id)
            .unwrap()
            .iter()
            .map(|s| s.season_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_new_series_is_unrated() {
        let service = service();
        let id = breaking_bad(&service);
        assert_eq!(service.get(id).unwrap().rating, 0);
        assert_eq!(service.show_rating(id).message, "Sin calificar");
    }

    #[test]
    fn test_duplicate_season_number_fails() {
        let service = service();
        let id = breaking_bad(&service);

        assert!(service.register_season(id, 1, 10, 2008).is_success());
        let again = service.register_season(id, 1, 8, 2008);
        assert_eq!(again.error_kind, Some(ErrorKind::DuplicateSeason));
        assert!(again.message.contains("already exists"));

        let seasons = service.list_seasons(id).unwrap();
        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].episode_count, 10);
    }

    #[test]
    fn test_seasons_are_kept_in_number_order() {
        let service = service();
        let id = breaking_bad(&service);
        for number in [3, 1, 5, 2] {
            assert!(service.register_season(id, number, 10, 2010).is_success());
        }

        let numbers: Vec<u32> = service
            .list_seasons(id)
            .unwrap()
            .iter()
            .map(|s| s.season_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_season_year_must_fall_within_the_run() {
        let service = service();
        let id = breaking_bad(&service);

        assert!(service.register_season(id, 1, 7, 2008).is_success());
        assert!(service.register_season(id, 5, 16, 2013).is_success());

        let early = service.register_season(id, 2, 13, 2007);
        assert_eq!(early.error_kind, Some(ErrorKind::InvalidYear));
        let late = service.register_season(id, 6, 10, 2014);
        assert_eq!(late.error_kind, Some(ErrorKind::InvalidYear));
    }

    #[test]
    fn test_ongoing_series_accepts_recent_seasons() {
        let service = service();
        let id = service
            .register(request("Slow Horses", 2022, ONGOING_YEAR))
            .media_id
            .unwrap();

        assert!(service.register_season(id, 4, 6, 2024).is_success());
        assert_eq!(service.list_ongoing().unwrap().len(), 1);
    }

    #[test]
    fn test_whole_series_review_and_rating_are_unsupported() {
        let service = service();
        let id = breaking_bad(&service);

        for result in [
            service.rate(id, 5),
            service.write_review(id, "Say my name".to_string()),
            service.read_review(id),
        ] {
            assert!(result.is_failure());
            assert_eq!(result.error_kind, Some(ErrorKind::UnsupportedOperation));
        }
        assert_eq!(service.get(id).unwrap().rating, 0);
    }

    #[test]
    fn test_unknown_season_fails_with_season_not_found() {
        let service = service();
        let id = breaking_bad(&service);

        let results = [
            service.mark_as_seen_season(id, 9, 2010, Month::May),
            service.rate_season(id, 9, 3),
            service.write_review_season(id, 9, "?".to_string()),
            service.read_review_season(id, 9),
            service.show_rating_season(id, 9),
        ];
        for result in results {
            assert_eq!(result.error_kind, Some(ErrorKind::SeasonNotFound));
        }
    }

    #[test]
    fn test_rate_unseen_season_fails_and_keeps_series_rating() {
        let service = service();
        let id = breaking_bad(&service);
        assert!(service.register_season(id, 1, 7, 2008).is_success());

        let result = service.rate_season(id, 1, 4);
        assert_eq!(result.error_kind, Some(ErrorKind::NotSeen));
        assert_eq!(service.get(id).unwrap().rating, 0);
        assert_eq!(service.show_rating_season(id, 1).message, "Sin calificar");
    }

    #[test]
    fn test_season_seen_year_bounds() {
        let service = service();
        let id = breaking_bad(&service);
        assert!(service.register_season(id, 2, 13, 2009).is_success());

        let before_air = service.mark_as_seen_season(id, 2, 2008, Month::May);
        assert_eq!(before_air.error_kind, Some(ErrorKind::InvalidYear));

        let seen = service.mark_as_seen_season(id, 2, 2009, Month::August);
        assert!(seen.message.contains("Agosto de 2009"));

        let again = service.mark_as_seen_season(id, 2, 2010, Month::May);
        assert_eq!(again.error_kind, Some(ErrorKind::AlreadySeen));
    }

    #[test]
    fn test_season_review_round_trip() {
        let service = service();
        let id = breaking_bad(&service);
        seen_season(&service, id, 1, 2008);

        assert_eq!(service.read_review_season(id, 1).message, "Sin reseña");
        assert!(service
            .write_review_season(id, 1, "A slow burn".to_string())
            .is_success());
        assert_eq!(service.read_review_season(id, 1).message, "A slow burn");
    }

    #[test]
    fn test_rate_season_emits_recalculation() {
        let bus = Arc::new(EventBus::new());
        let service = SeriesService::new(Library::new().shared(), Arc::clone(&bus));
        let id = breaking_bad(&service);
        seen_season(&service, id, 1, 2008);
        bus.clear_event_log();

        service.rate_season(id, 1, 5);
        assert_eq!(
            bus.emitted_types(),
            vec!["MediaRated", "SeriesRatingRecalculated"]
        );
    }

    #[test]
    fn test_search_by_actor_and_title() {
        let service = service();
        breaking_bad(&service);
        let mut other = request("Better Call Saul", 2015, 2022);
        other.cast = vec!["Bob Odenkirk".to_string()];
        service.register(other);

        assert_eq!(service.search_by_actor("cranston").unwrap().len(), 1);
        assert_eq!(service.search_by_title("saul").unwrap().len(), 1);
        assert_eq!(service.search_by_year(2015).unwrap().len(), 1);
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let service = service();
        let result = service.register(request("Backwards", 2020, 2010));
        assert_eq!(result.error_kind, Some(ErrorKind::Validation));
    }
}
