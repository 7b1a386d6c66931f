// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - The Library owns records, services only hold MediaIds
// - NO business logic beyond identity and year bookkeeping
// - NO event emission
// - Stores move whole libraries, never single records

pub mod library;
pub mod library_store;

pub use library::{Library, LibraryEntry, SharedLibrary};
pub use library_store::{JsonLibraryStore, LibrarySnapshot, LibraryStore};

#[cfg(test)]
pub use library_store::MockLibraryStore;
