//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::DomainError;
use crate::models::book::Book;

/// One page of a title-prefix listing
#[derive(Debug)]
pub struct BookPage {
    pub books: Vec<Book>,
    /// Rows matching the prefix across all pages
    pub total: u64,
    /// Offset actually served, after clamping the requested one
    pub offset: u64,
}

/// Read-only repository over the book table
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Books whose title starts with `title_prefix`, ordered by title.
    ///
    /// The requested offset is clamped into range against the match count
    /// before the page is read.
    async fn find_page(
        &self,
        title_prefix: &str,
        requested_offset: i64,
        page_size: u64,
    ) -> Result<BookPage, DomainError>;

    /// Find a single book by ID
    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError>;
}
