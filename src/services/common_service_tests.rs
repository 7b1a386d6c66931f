// src/services/common_service_tests.rs
//
// Query engine tests
//
// INVARIANTS TESTED:
// - Descending order is the exact reverse of ascending order
// - Ties keep their insertion order (ascending)
// - Year groupings skip years without matches, whatever the year index holds
// - Genre groupings follow Genre declaration order in both directions
// - Empty input gives empty results

#[cfg(test)]
mod query_engine_tests {
    use std::collections::BTreeMap;

    use crate::domain::{Genre, Movie};
    use crate::services::common_service::{CommonService, UNRATED_LABEL};

    fn movie(title: &str, year: i32, genre: Genre, rating: u8) -> Movie {
        let mut movie = Movie::new(title.to_string(), year, genre);
        movie.viewing.seen = rating > 0;
        movie.viewing.rating = rating;
        movie
    }

    fn titles(list: &[&Movie]) -> Vec<String> {
        list.iter().map(|m| m.title.clone()).collect()
    }

    fn catalog() -> Vec<Movie> {
        vec![
            movie("Alien", 1979, Genre::Horror, 5),
            movie("Heat", 1995, Genre::Thriller, 4),
            movie("Jumanji", 1995, Genre::Adventure, 2),
            movie("Se7en", 1995, Genre::Thriller, 4),
            movie("The Thing", 1982, Genre::Horror, 0),
            movie("Twister", 1996, Genre::Action, 3),
        ]
    }

    fn year_index(list: &[Movie]) -> BTreeMap<i32, u32> {
        let mut years = BTreeMap::new();
        for m in list {
            *years.entry(m.release_year).or_insert(0) += 1;
        }
        years
    }

    #[test]
    fn test_sort_ascending_is_stable_by_rating() {
        let list = catalog();
        let sorted = CommonService::sort_ascending(&list);
        assert_eq!(
            titles(&sorted),
            vec!["The Thing", "Jumanji", "Twister", "Heat", "Se7en", "Alien"]
        );
    }

    #[test]
    fn test_sort_descending_is_reverse_of_ascending() {
        let list = catalog();
        let mut ascending = CommonService::sort_ascending(&list);
        ascending.reverse();
        assert_eq!(titles(&CommonService::sort_descending(&list)), titles(&ascending));

        let single = vec![movie("Solo", 2018, Genre::Action, 3)];
        assert_eq!(titles(&CommonService::sort_descending(&single)), vec!["Solo"]);

        let empty: Vec<Movie> = Vec::new();
        assert!(CommonService::sort_descending(&empty).is_empty());
    }

    #[test]
    fn test_searches_filter_and_sort() {
        let list = catalog();

        let by_year = CommonService::search_by_year(1995, &list);
        assert_eq!(titles(&by_year), vec!["Jumanji", "Heat", "Se7en"]);

        let by_title = CommonService::search_by_title("THE", &list);
        assert_eq!(titles(&by_title), vec!["The Thing"]);

        let by_genre = CommonService::search_by_genre(Genre::Horror, &list);
        assert_eq!(titles(&by_genre), vec!["The Thing", "Alien"]);

        assert!(CommonService::search_by_genre(Genre::Romance, &list).is_empty());
    }

    #[test]
    fn test_group_by_year_orders() {
        let list = catalog();
        let years = year_index(&list);

        let asc_asc = CommonService::group_by_year_ascending_rate(&list, years.keys().copied());
        let keys: Vec<i32> = asc_asc.iter().map(|(year, _)| *year).collect();
        assert_eq!(keys, vec![1979, 1982, 1995, 1996]);
        assert_eq!(titles(&asc_asc[2].1), vec!["Jumanji", "Heat", "Se7en"]);

        let asc_desc = CommonService::group_by_year_descending_rate(&list, years.keys().copied());
        assert_eq!(titles(&asc_desc[2].1), vec!["Se7en", "Heat", "Jumanji"]);

        let desc_asc = CommonService::group_by_year_desc_ascending_rate(&list, years.keys().copied());
        let keys: Vec<i32> = desc_asc.iter().map(|(year, _)| *year).collect();
        assert_eq!(keys, vec![1996, 1995, 1982, 1979]);
        assert_eq!(titles(&desc_asc[1].1), vec!["Jumanji", "Heat", "Se7en"]);

        let desc_desc = CommonService::group_by_year_desc_descending_rate(&list, years.keys().copied());
        assert_eq!(desc_desc[0].0, 1996);
        assert_eq!(titles(&desc_desc[1].1), vec!["Se7en", "Heat", "Jumanji"]);
    }

    #[test]
    fn test_group_by_year_skips_years_without_records() {
        let list = catalog();
        // the index is shared by every kind, so it can name years this list lacks
        let mut years = year_index(&list);
        years.insert(1965, 1);
        years.insert(2001, 2);

        let groups = CommonService::group_by_year_ascending_rate(&list, years.keys().copied());
        assert!(groups.iter().all(|(year, records)| {
            !records.is_empty() && records.iter().all(|m| m.release_year == *year)
        }));
        assert_eq!(groups.len(), 4);
    }

    #[test]
    fn test_ascending_year_grouping_takes_a_forward_only_iterator() {
        let list = catalog();
        // successors cannot run backwards
        let years = std::iter::successors(Some(1979), |year| (*year < 1996).then_some(year + 1));

        let groups = CommonService::group_by_year_descending_rate(&list, years);
        let keys: Vec<i32> = groups.iter().map(|(year, _)| *year).collect();
        assert_eq!(keys, vec![1979, 1982, 1995, 1996]);
        assert_eq!(titles(&groups[2].1), vec!["Se7en", "Heat", "Jumanji"]);
    }

    #[test]
    fn test_group_by_genre_follows_declaration_order() {
        let list = catalog();
        let expected = vec![Genre::Action, Genre::Adventure, Genre::Horror, Genre::Thriller];

        let ascending = CommonService::group_by_genre_ascending_rate(&list);
        let keys: Vec<Genre> = ascending.iter().map(|(genre, _)| *genre).collect();
        assert_eq!(keys, expected);
        assert_eq!(titles(&ascending[2].1), vec!["The Thing", "Alien"]);

        let descending = CommonService::group_by_genre_descending_rate(&list);
        let keys: Vec<Genre> = descending.iter().map(|(genre, _)| *genre).collect();
        assert_eq!(keys, expected);
        assert_eq!(titles(&descending[2].1), vec!["Alien", "The Thing"]);
    }

    #[test]
    fn test_empty_list_gives_empty_groupings() {
        let empty: Vec<Movie> = Vec::new();
        let years = [1990, 2000];

        assert!(CommonService::group_by_year_ascending_rate(&empty, years).is_empty());
        assert!(CommonService::group_by_year_desc_descending_rate(&empty, years).is_empty());
        assert!(CommonService::group_by_genre_ascending_rate(&empty).is_empty());
    }

    #[test]
    fn test_format_rating() {
        assert_eq!(CommonService::format_rating(0), UNRATED_LABEL);
        assert_eq!(CommonService::format_rating(1), "★☆☆☆☆ (1/5)");
        assert_eq!(CommonService::format_rating(5), "★★★★★ (5/5)");
    }
}
