// src/services/catalog_ops.rs
//
// Record operations shared by the per-kind services
//
// RULES:
// - Each operation takes the Library lock once and releases it before
//   emitting events
// - Existence is checked before insert, the year index follows every
//   insert and removal

use chrono::{Datelike, Local, Month};
use log::info;

use crate::domain::{validate_seen_year, DomainError, MediaId, Reviewable};
use crate::error::AppResult;
use crate::events::{
    EventBus, MediaDeleted, MediaMarkedSeen, MediaRated, MediaRegistered, MediaReviewed,
};
use crate::repositories::{LibraryEntry, SharedLibrary};
use crate::services::common_service::CommonService;

pub(crate) fn current_year() -> i32 {
    Local::now().year()
}

pub(crate) fn not_found<T: LibraryEntry>(id: MediaId) -> DomainError {
    DomainError::NotFound(format!("{} {}", T::KIND, id))
}

/// Inserts a new record and counts its release year
pub(crate) fn register<T: LibraryEntry>(
    library: &SharedLibrary,
    event_bus: &EventBus,
    record: T,
) -> AppResult<MediaId> {
    let id = record.id();
    let title = record.title().to_string();
    let year = record.release_year();

    {
        let mut library = library.write()?;
        library.exists(&record)?;
        library.add(record);
        library.add_year(year);
    }

    info!("Registered {} '{}' ({})", T::KIND, title, year);
    event_bus.emit(MediaRegistered::new(id, T::KIND, title, year));
    Ok(id)
}

/// Removes a record and releases its year
pub(crate) fn delete<T: LibraryEntry>(
    library: &SharedLibrary,
    event_bus: &EventBus,
    id: MediaId,
) -> AppResult<T> {
    let removed = {
        let mut library = library.write()?;
        let removed = library.remove::<T>(id).ok_or_else(|| not_found::<T>(id))?;
        library.remove_year(removed.release_year());
        removed
    };

    info!("Deleted {} '{}'", T::KIND, removed.title());
    event_bus.emit(MediaDeleted::new(id, T::KIND, removed.release_year()));
    Ok(removed)
}

/// Marks a record as seen in `month` of `year`, returning the seen date label
pub(crate) fn mark_as_seen<T: LibraryEntry + Reviewable>(
    library: &SharedLibrary,
    event_bus: &EventBus,
    id: MediaId,
    year: i32,
    month: Month,
) -> AppResult<String> {
    let seen_date = {
        let mut library = library.write()?;
        let record = library.get_mut::<T>(id).ok_or_else(|| not_found::<T>(id))?;
        if record.is_seen() {
            return Err(DomainError::AlreadySeen.into());
        }
        validate_seen_year(record.release_year(), year, current_year())?;
        record.viewing_mut().mark_seen(year, month)?;
        record.viewing().seen_date.clone().unwrap_or_default()
    };

    event_bus.emit(MediaMarkedSeen::new(id, None, seen_date.clone()));
    Ok(seen_date)
}

pub(crate) fn rate<T: LibraryEntry + Reviewable>(
    library: &SharedLibrary,
    event_bus: &EventBus,
    id: MediaId,
    value: u8,
) -> AppResult<()> {
    {
        let mut library = library.write()?;
        let record = library.get_mut::<T>(id).ok_or_else(|| not_found::<T>(id))?;
        CommonService::rate(record, value)?;
    }

    event_bus.emit(MediaRated::new(id, None, value));
    Ok(())
}

pub(crate) fn write_review<T: LibraryEntry + Reviewable>(
    library: &SharedLibrary,
    event_bus: &EventBus,
    id: MediaId,
    text: String,
) -> AppResult<()> {
    {
        let mut library = library.write()?;
        let record = library.get_mut::<T>(id).ok_or_else(|| not_found::<T>(id))?;
        CommonService::write_review(record, text)?;
    }

    event_bus.emit(MediaReviewed::new(id, None));
    Ok(())
}

/// Runs `f` against a stored record
pub(crate) fn inspect<T, R, F>(library: &SharedLibrary, id: MediaId, f: F) -> AppResult<R>
where
    T: LibraryEntry,
    F: FnOnce(&T) -> R,
{
    let library = library.read()?;
    let record = library.get::<T>(id).ok_or_else(|| not_found::<T>(id))?;
    Ok(f(record))
}
