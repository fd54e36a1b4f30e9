use crate::api;
use crate::models::Book;
use crate::modules::integrations::nyt_reviews::Review;
use crate::services::{PageView, ReviewView};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::books::first_page,
        api::books::previous_page,
        api::books::next_page,
        api::books::book_details,
        api::reviews::get_reviews,
    ),
    components(schemas(Book, PageView, Review, ReviewView)),
    tags(
        (name = "bookbrowse", description = "Book catalogue browser")
    )
)]
pub struct ApiDoc;
