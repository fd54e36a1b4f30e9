use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::api::negotiate::Representation;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::models::Book;
use crate::services::PageView;
use crate::services::book_service::{self, PageStep};

#[utoipa::path(
    get,
    path = "/book/{title_starts_with}",
    params(("title_starts_with" = String, Path, description = "Title prefix")),
    responses(
        (status = 200, description = "First page of matching books", body = PageView),
        (status = 406, description = "Neither HTML nor JSON is acceptable"),
        (status = 500, description = "Datastore failure")
    )
)]
pub async fn first_page(
    representation: Representation,
    State(state): State<AppState>,
    Path(title_starts_with): Path<String>,
) -> Result<Response, DomainError> {
    let view =
        book_service::resolve_page(state.book_repo.as_ref(), &title_starts_with, PageStep::First)
            .await?;
    Ok(representation.respond(&view))
}

#[utoipa::path(
    get,
    path = "/prev/{title_starts_with}/{offset}",
    params(
        ("title_starts_with" = String, Path, description = "Title prefix"),
        ("offset" = i64, Path, description = "Offset of the page the link was rendered on")
    ),
    responses(
        (status = 200, description = "The page before `offset`", body = PageView),
        (status = 406, description = "Neither HTML nor JSON is acceptable"),
        (status = 500, description = "Datastore failure")
    )
)]
pub async fn previous_page(
    representation: Representation,
    State(state): State<AppState>,
    Path((title_starts_with, offset)): Path<(String, i64)>,
) -> Result<Response, DomainError> {
    let view = book_service::resolve_page(
        state.book_repo.as_ref(),
        &title_starts_with,
        PageStep::Previous(offset),
    )
    .await?;
    Ok(representation.respond(&view))
}

#[utoipa::path(
    get,
    path = "/next/{title_starts_with}/{offset}",
    params(
        ("title_starts_with" = String, Path, description = "Title prefix"),
        ("offset" = i64, Path, description = "Offset of the page the link was rendered on")
    ),
    responses(
        (status = 200, description = "The page after `offset`", body = PageView),
        (status = 406, description = "Neither HTML nor JSON is acceptable"),
        (status = 500, description = "Datastore failure")
    )
)]
pub async fn next_page(
    representation: Representation,
    State(state): State<AppState>,
    Path((title_starts_with, offset)): Path<(String, i64)>,
) -> Result<Response, DomainError> {
    let view = book_service::resolve_page(
        state.book_repo.as_ref(),
        &title_starts_with,
        PageStep::Next(offset),
    )
    .await?;
    Ok(representation.respond(&view))
}

#[utoipa::path(
    get,
    path = "/bookdetails/{book_id}",
    params(("book_id" = String, Path, description = "Book identifier")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "No book with this identifier"),
        (status = 406, description = "Neither HTML nor JSON is acceptable"),
        (status = 500, description = "Datastore failure")
    )
)]
pub async fn book_details(
    representation: Representation,
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> Result<Response, DomainError> {
    // `?` ends the request on NotFound; nothing below runs for a missing row
    let book = book_service::get_book_by_id(state.book_repo.as_ref(), &book_id).await?;
    Ok(representation.respond(&book))
}
