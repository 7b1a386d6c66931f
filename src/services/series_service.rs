// src/services/series_service.rs
//
// Series Service - Series registration and season-level viewing state
//
// RULES:
// - A series is never seen, rated or reviewed as a whole; those calls
//   always fail with UnsupportedOperation
// - Seasons are addressed by number and never deleted
// - Only a season rating change recomputes the series rating

use std::sync::Arc;

use chrono::Month;
use log::{debug, info};

use crate::domain::{
    validate_season_year, validate_seen_year, validate_series, DomainError, DomainResult, Genre,
    MediaId, MediaKind, Season, Series,
};
use crate::error::{AppError, AppResult, OperationResult};
use crate::events::{
    EventBus, MediaMarkedSeen, MediaRated, MediaReviewed, SeasonRegistered,
    SeriesRatingRecalculated,
};
use crate::repositories::SharedLibrary;
use crate::services::catalog_ops;
use crate::services::common_service::CommonService;
use crate::services::media_queries::{list_query, MediaQueries};

/// Request to register a new series
#[derive(Debug, Clone)]
pub struct RegisterSeriesRequest {
    pub title: String,
    pub release_year: i32,
    /// [`crate::domain::ONGOING_YEAR`] for a series still on air
    pub year_of_ending: i32,
    pub genre: Genre,
    pub cast: Vec<String>,
    /// Falls back to `title` when empty
    pub original_title: String,
    pub where_to_watch: Vec<String>,
}

pub struct SeriesService {
    library: SharedLibrary,
    event_bus: Arc<EventBus>,
}

impl SeriesService {
    pub fn new(library: SharedLibrary, event_bus: Arc<EventBus>) -> Self {
        Self { library, event_bus }
    }

    fn subject() -> &'static str {
        MediaKind::Series.label()
    }

    fn season_subject(number: u32) -> String {
        format!("{} - Temporada {}", Self::subject(), number)
    }

    fn unsupported(id: MediaId, operation: &str) -> OperationResult {
        let error = DomainError::UnsupportedOperation(format!(
            "{} applies to seasons, not to a whole series",
            operation
        ));
        OperationResult::from_app_error(Self::subject(), error.into()).with_media_id(id)
    }

    // ------------------------------------------------------------------------
    // Series lifecycle
    // ------------------------------------------------------------------------

    pub fn register(&self, request: RegisterSeriesRequest) -> OperationResult {
        let mut series = Series::new(
            request.title,
            request.release_year,
            request.year_of_ending,
            request.genre,
        );
        series.cast = request.cast;
        series.where_to_watch = request.where_to_watch;
        if !request.original_title.trim().is_empty() {
            series.original_title = request.original_title;
        }
        let title = series.title.clone();

        let result = validate_series(&series)
            .map_err(AppError::from)
            .and_then(|_| catalog_ops::register(&self.library, &self.event_bus, series));

        match result {
            Ok(id) => OperationResult::success(
                Self::subject(),
                format!("'{}' registered successfully", title),
            )
            .with_media_id(id),
            Err(e) => OperationResult::from_app_error(Self::subject(), e),
        }
    }

    pub fn delete(&self, id: MediaId) -> OperationResult {
        let result = catalog_ops::delete::<Series>(&self.library, &self.event_bus, id)
            .map(|series| format!("'{}' deleted", series.title));
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    /// Always fails: only seasons can be rated
    pub fn rate(&self, id: MediaId, _value: u8) -> OperationResult {
        Self::unsupported(id, "Rating")
    }

    /// Always fails: only seasons can be reviewed
    pub fn write_review(&self, id: MediaId, _text: String) -> OperationResult {
        Self::unsupported(id, "Writing a review")
    }

    /// Always fails: only seasons carry a review
    pub fn read_review(&self, id: MediaId) -> OperationResult {
        Self::unsupported(id, "Reading a review")
    }

    /// The aggregate rating derived from the seasons
    pub fn show_rating(&self, id: MediaId) -> OperationResult {
        let result = catalog_ops::inspect(&self.library, id, |series: &Series| {
            CommonService::format_rating(series.rating)
        });
        OperationResult::from_result(Self::subject(), result).with_media_id(id)
    }

    // ------------------------------------------------------------------------
    // Seasons
    // ------------------------------------------------------------------------

    pub fn register_season(&self, id: MediaId, number: u32, episode_count: u32, year: i32) -> OperationResult {
        let result = self
            .with_series(id, |series| {
                validate_season_year(series, year)?;
                series.add_season(Season::new(number, episode_count, year))
            })
            .map(|_| {
                debug!("Season {} added to series {}", number, id);
                self.event_bus.emit(SeasonRegistered::new(id, number));
                format!("Season {} registered ({} episodes)", number, episode_count)
            });
        OperationResult::from_result(Self::season_subject(number), result).with_media_id(id)
    }

    /// A season can be seen from the year it aired up to the current year
    pub fn mark_as_seen_season(&self, id: MediaId, number: u32, year: i32, month: Month) -> OperationResult {
        let result = self
            .with_season(id, number, |season| {
                if season.viewing.seen {
                    return Err(DomainError::AlreadySeen);
                }
                validate_seen_year(season.year, year, catalog_ops::current_year())?;
                season.viewing.mark_seen(year, month)?;
                Ok(season.viewing.seen_date.clone().unwrap_or_default())
            })
            .map(|seen_date| {
                self.event_bus
                    .emit(MediaMarkedSeen::new(id, Some(number), seen_date.clone()));
                format!("Marked as seen in {}", seen_date)
            });
        OperationResult::from_result(Self::season_subject(number), result).with_media_id(id)
    }

    /// Rates a season and recomputes the series rating
    pub fn rate_season(&self, id: MediaId, number: u32, value: u8) -> OperationResult {
        let result = self
            .with_series(id, |series| {
                let season = series
                    .season_mut(number)
                    .ok_or(DomainError::SeasonNotFound(number))?;
                CommonService::rate(season, value)?;
                Ok(series.recalculate_rating())
            })
            .map(|series_rating| {
                info!("Series {} rating is now {}", id, series_rating);
                self.event_bus.emit(MediaRated::new(id, Some(number), value));
                self.event_bus
                    .emit(SeriesRatingRecalculated::new(id, series_rating));
                format!("Rated {}", CommonService::format_rating(value))
            });
        OperationResult::from_result(Self::season_subject(number), result).with_media_id(id)
    }

    pub fn write_review_season(&self, id: MediaId, number: u32, text: String) -> OperationResult {
        let result = self
            .with_season(id, number, |season| CommonService::write_review(season, text))
            .map(|_| {
                self.event_bus.emit(MediaReviewed::new(id, Some(number)));
                "Review saved".to_string()
            });
        OperationResult::from_result(Self::season_subject(number), result).with_media_id(id)
    }

    pub fn read_review_season(&self, id: MediaId, number: u32) -> OperationResult {
        let result = self.inspect_season(id, number, CommonService::read_review::<Season>);
        OperationResult::from_result(Self::season_subject(number), result).with_media_id(id)
    }

    pub fn show_rating_season(&self, id: MediaId, number: u32) -> OperationResult {
        let result = self.inspect_season(id, number, CommonService::show_rating::<Season>);
        OperationResult::from_result(Self::season_subject(number), result).with_media_id(id)
    }

    /// Seasons of a series, ordered by number
    pub fn list_seasons(&self, id: MediaId) -> AppResult<Vec<Season>> {
        catalog_ops::inspect(&self.library, id, |series: &Series| series.seasons.clone())
    }

    // ------------------------------------------------------------------------
    // Series-only queries
    // ------------------------------------------------------------------------

    pub fn search_by_actor(&self, query: &str) -> AppResult<Vec<Series>> {
        list_query(&self.library, |library| {
            CommonService::filter_sorted(library.series(), |series| series.features_actor(query))
        })
    }

    pub fn list_ongoing(&self) -> AppResult<Vec<Series>> {
        list_query(&self.library, |library| {
            CommonService::filter_sorted(library.series(), Series::is_ongoing)
        })
    }

    // ------------------------------------------------------------------------
    // Lock helpers
    // ------------------------------------------------------------------------

    /// Runs `f` on a series under the write lock. Events are emitted by the
    /// caller once this returns.
    fn with_series<R, F>(&self, id: MediaId, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Series) -> DomainResult<R>,
    {
        let mut library = self.library.write()?;
        let series = library
            .get_mut::<Series>(id)
            .ok_or_else(|| catalog_ops::not_found::<Series>(id))?;
        Ok(f(series)?)
    }

    fn with_season<R, F>(&self, id: MediaId, number: u32, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Season) -> DomainResult<R>,
    {
        self.with_series(id, |series| {
            let season = series
                .season_mut(number)
                .ok_or(DomainError::SeasonNotFound(number))?;
            f(season)
        })
    }

    fn inspect_season<R, F>(&self, id: MediaId, number: u32, f: F) -> AppResult<R>
    where
        F: FnOnce(&Season) -> R,
    {
        catalog_ops::inspect(&self.library, id, |series: &Series| {
            series.season(number).map(f)
        })?
        .ok_or_else(|| DomainError::SeasonNotFound(number).into())
    }
}

impl MediaQueries for SeriesService {
    type Record = Series;

    fn library(&self) -> &SharedLibrary {
        &self.library
    }
}
