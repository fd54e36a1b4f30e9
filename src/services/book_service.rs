//! Book Service - title-prefix paging and single-book lookup

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::pagination::{self, PAGE_SIZE};
use crate::domain::{BookRepository, DomainError};
use crate::models::Book;

/// Which page a request asks for, relative to the offset carried in its path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageStep {
    First,
    /// One page back from the page that started at this offset
    Previous(i64),
    /// One page forward from the page that started at this offset
    Next(i64),
}

impl PageStep {
    pub fn requested_offset(self, page_size: u64) -> i64 {
        let page_size = page_size as i64;
        match self {
            PageStep::First => 0,
            PageStep::Previous(from) => from.saturating_sub(page_size),
            PageStep::Next(from) => from.saturating_add(page_size),
        }
    }
}

/// Everything the book list page needs
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageView {
    pub title_prefix: String,
    pub offset: u64,
    pub previous_offset: i64,
    pub next_offset: u64,
    pub page_size: u64,
    pub total: u64,
    pub has_content: bool,
    pub has_previous: bool,
    pub has_next: bool,
    /// Navigation links step from the current offset
    pub previous_link: String,
    pub next_link: String,
    pub books: Vec<Book>,
}

pub async fn resolve_page(
    repo: &dyn BookRepository,
    title_prefix: &str,
    step: PageStep,
) -> Result<PageView, DomainError> {
    let requested = step.requested_offset(PAGE_SIZE);
    let page = repo.find_page(title_prefix, requested, PAGE_SIZE).await?;

    if page.offset as i64 != requested {
        tracing::debug!(
            "Offset {} for prefix {:?} clamped to {}",
            requested,
            title_prefix,
            page.offset
        );
    }

    let encoded = urlencoding::encode(title_prefix);

    Ok(PageView {
        title_prefix: title_prefix.to_string(),
        offset: page.offset,
        previous_offset: pagination::previous_offset(page.offset, PAGE_SIZE),
        next_offset: pagination::next_offset(page.offset, PAGE_SIZE),
        page_size: PAGE_SIZE,
        total: page.total,
        has_content: !page.books.is_empty(),
        has_previous: pagination::has_previous(page.offset),
        has_next: pagination::has_next(page.offset, page.total, PAGE_SIZE),
        previous_link: format!("/prev/{}/{}", encoded, page.offset),
        next_link: format!("/next/{}/{}", encoded, page.offset),
        books: page.books,
    })
}

/// Single book by identifier; a missing row is `DomainError::NotFound`.
pub async fn get_book_by_id(repo: &dyn BookRepository, id: &str) -> Result<Book, DomainError> {
    repo.find_by_id(id).await?.ok_or(DomainError::NotFound)
}
