// src/services/mod.rs
//
// Services Module - Façade Layer
//
// Per-kind services own the operations the UI calls; the query engine and
// the shared record operations sit underneath them.

pub mod book_service;
pub mod common_service;
pub mod media_queries;
pub mod movie_service;
pub mod series_service;
pub mod session_service;
pub mod statistics_service;

pub(crate) mod catalog_ops;

#[cfg(test)]
mod common_service_tests;
#[cfg(test)]
mod series_service_tests;

// Re-export all services and their types
pub use book_service::{BookService, RegisterBookRequest};

pub use movie_service::{MovieService, RegisterMovieRequest};

pub use series_service::{RegisterSeriesRequest, SeriesService};

pub use common_service::{CommonService, Grouping, SortDirection, NO_REVIEW_LABEL, UNRATED_LABEL};

pub use media_queries::MediaQueries;

pub use session_service::SessionService;

pub use statistics_service::{KindStatistics, LibraryStatistics, StatisticsService};
