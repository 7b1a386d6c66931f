use super::entity::Book;
use crate::domain::{DomainError, DomainResult};

/// Validates all Book invariants
pub fn validate_book(book: &Book) -> DomainResult<()> {
    if book.title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book title cannot be empty".to_string(),
        ));
    }
    if book.isbn.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Book ISBN cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Invariants that must hold true for the Book domain:
///
/// 1. Title and ISBN cannot be empty
/// 2. ISBN is the identity: two books with the same normalized ISBN are the same book
/// 3. Rating and review need the book to be marked as read first
