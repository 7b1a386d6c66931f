// src/events/types.rs
//
// All domain events in the journal.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{MediaId, MediaKind};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// RECORD LIFECYCLE EVENTS
// ============================================================================

/// Emitted when a record is added to the Library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub media_id: MediaId,
    pub kind: MediaKind,
    pub title: String,
    pub release_year: i32,
}

impl MediaRegistered {
    pub fn new(media_id: MediaId, kind: MediaKind, title: String, release_year: i32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            media_id,
            kind,
            title,
            release_year,
        }
    }
}

impl DomainEvent for MediaRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MediaRegistered" }
}

/// Emitted when a record leaves the Library
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub media_id: MediaId,
    pub kind: MediaKind,
    pub release_year: i32,
}

impl MediaDeleted {
    pub fn new(media_id: MediaId, kind: MediaKind, release_year: i32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            media_id,
            kind,
            release_year,
        }
    }
}

impl DomainEvent for MediaDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MediaDeleted" }
}

/// Emitted when a season is added to a series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub series_id: MediaId,
    pub season_number: u32,
}

impl SeasonRegistered {
    pub fn new(series_id: MediaId, season_number: u32) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            series_id,
            season_number,
        }
    }
}

impl DomainEvent for SeasonRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SeasonRegistered" }
}

// ============================================================================
// VIEWING EVENTS
// `season` is set when the event concerns one season of a series
// ============================================================================

/// Emitted when a record or season is marked as seen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaMarkedSeen {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub media_id: MediaId,
    pub season: Option<u32>,
    pub seen_date: String,
}

impl MediaMarkedSeen {
    pub fn new(media_id: MediaId, season: Option<u32>, seen_date: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            media_id,
            season,
            seen_date,
        }
    }
}

impl DomainEvent for MediaMarkedSeen {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MediaMarkedSeen" }
}

/// Emitted when a rating is set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub media_id: MediaId,
    pub season: Option<u32>,
    pub rating: u8,
}

impl MediaRated {
    pub fn new(media_id: MediaId, season: Option<u32>, rating: u8) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            media_id,
            season,
            rating,
        }
    }
}

impl DomainEvent for MediaRated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MediaRated" }
}

/// Emitted when a review is written or replaced
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaReviewed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub media_id: MediaId,
    pub season: Option<u32>,
}

impl MediaReviewed {
    pub fn new(media_id: MediaId, season: Option<u32>) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            media_id,
            season,
        }
    }
}

impl DomainEvent for MediaReviewed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "MediaReviewed" }
}

/// Emitted after a season rating changed the series aggregate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRatingRecalculated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub series_id: MediaId,
    pub rating: u8,
}

impl SeriesRatingRecalculated {
    pub fn new(series_id: MediaId, rating: u8) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            series_id,
            rating,
        }
    }
}

impl DomainEvent for SeriesRatingRecalculated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SeriesRatingRecalculated" }
}

// ============================================================================
// SESSION EVENTS
// ============================================================================

/// Emitted when a stored library replaced the in-memory one
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibraryLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub books: usize,
    pub movies: usize,
    pub series: usize,
}

impl LibraryLoaded {
    pub fn new(books: usize, movies: usize, series: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            books,
            movies,
            series,
        }
    }
}

impl DomainEvent for LibraryLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LibraryLoaded" }
}

/// Emitted when the in-memory library was written to the store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LibrarySaved {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl LibrarySaved {
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for LibrarySaved {
    fn default() -> Self {
        Self::new()
    }
}

impl DomainEvent for LibrarySaved {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "LibrarySaved" }
}
