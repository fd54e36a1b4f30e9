use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::DomainError;
use crate::modules::integrations::nyt_reviews::{Review, ReviewClient, ReviewsResponse};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ReviewView {
    /// Title the lookup was made for
    pub title: String,
    pub has_results: bool,
    pub first: Option<Review>,
    pub results: Vec<Review>,
    pub copyright: String,
}

impl ReviewView {
    pub fn from_response(title: &str, response: ReviewsResponse) -> Self {
        Self {
            title: title.to_string(),
            has_results: !response.results.is_empty(),
            first: response.results.first().cloned(),
            results: response.results,
            copyright: response.copyright,
        }
    }
}

pub async fn get_reviews(client: &ReviewClient, title: &str) -> Result<ReviewView, DomainError> {
    let response = client.fetch_reviews(title).await?;
    Ok(ReviewView::from_response(title, response))
}
