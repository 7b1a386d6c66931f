// src/lib.rs
// MediaJournal - Personal journal of books, movies and TV series
//
// Architecture:
// - Domain-centric: records, identity and viewing rules live in domain
// - One in-memory Library owns every record; services address them by MediaId
// - Event-driven: services announce changes through the EventBus
// - Explicit: every façade operation returns an OperationResult
// - Local-first: the journal is a handful of JSON documents on disk

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_book,
    validate_movie,
    validate_season_year,
    validate_series,
    // Book
    Book,
    DomainError,
    DomainResult,
    // Shared vocabulary
    Genre,
    MediaId,
    MediaKey,
    MediaKind,
    MediaRecord,
    // Movie
    Movie,
    Reviewable,
    // Series
    Season,
    Series,
    ViewingState,
    MAX_RATING,
    MIN_RATING,
    ONGOING_YEAR,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult, ErrorKind, OperationResult};

// ============================================================================
// PUBLIC API - Configuration
// ============================================================================

pub use config::{Config, StorageConfig};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus,
    DomainEvent,
    EventBus,
    EventLogEntry,
    LibraryLoaded,
    LibrarySaved,
    MediaDeleted,
    MediaMarkedSeen,
    MediaRated,
    MediaRegistered,
    MediaReviewed,
    SeasonRegistered,
    SeriesRatingRecalculated,
};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{JsonLibraryStore, Library, LibraryEntry, LibrarySnapshot, LibraryStore, SharedLibrary};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{
    // Book Service
    BookService,
    // Query engine
    CommonService,
    Grouping,
    KindStatistics,
    LibraryStatistics,
    MediaQueries,
    // Movie Service
    MovieService,
    RegisterBookRequest,
    RegisterMovieRequest,
    RegisterSeriesRequest,
    // Series Service
    SeriesService,
    // Session Service
    SessionService,
    SortDirection,
    // Statistics Service
    StatisticsService,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;
