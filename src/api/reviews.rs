use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::api::negotiate::Representation;
use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::services::{ReviewView, review_service};

#[utoipa::path(
    get,
    path = "/reviews/{book_title}",
    params(("book_title" = String, Path, description = "Exact book title")),
    responses(
        (status = 200, description = "Reviews from the New York Times Books API", body = ReviewView),
        (status = 406, description = "Neither HTML nor JSON is acceptable"),
        (status = 500, description = "Review API failure")
    )
)]
pub async fn get_reviews(
    representation: Representation,
    State(state): State<AppState>,
    Path(book_title): Path<String>,
) -> Result<Response, DomainError> {
    let view = review_service::get_reviews(&state.reviews, &book_title).await?;
    Ok(representation.respond(&view))
}
