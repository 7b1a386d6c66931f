use super::genre::Genre;
use super::identity::{MediaId, MediaKey, MediaKind};
use super::viewing::ViewingState;

/// Capabilities every catalogued record has: it can be identified, searched,
/// sorted by rating and grouped by year or genre.
pub trait MediaRecord {
    const KIND: MediaKind;

    fn id(&self) -> MediaId;
    fn key(&self) -> MediaKey;
    fn title(&self) -> &str;
    fn release_year(&self) -> i32;
    fn genre(&self) -> Genre;

    /// Current rating, 0 when unrated
    fn rating(&self) -> u8;

    /// How the record is named to the user, as entered
    fn display_name(&self) -> String {
        format!("{} ({})", self.title(), self.release_year())
    }
}

/// Anything that carries its own viewing state and can therefore be marked
/// as seen, rated and reviewed.
///
/// Series does not implement this: its rating is derived from its seasons.
pub trait Reviewable {
    fn viewing(&self) -> &ViewingState;
    fn viewing_mut(&mut self) -> &mut ViewingState;

    fn is_seen(&self) -> bool {
        self.viewing().seen
    }
}
