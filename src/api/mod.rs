pub mod books;
pub mod error;
pub mod health;
pub mod home;
pub mod negotiate;
pub mod reviews;

pub use home::redirect_home;
pub use negotiate::{NotAcceptable, Representation};

use axum::{Router, routing::get};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        // Health check
        .route("/health", get(health::health_check))
        // Paging by title prefix
        .route("/book/:title_starts_with", get(books::first_page))
        .route("/prev/:title_starts_with/:offset", get(books::previous_page))
        .route("/next/:title_starts_with/:offset", get(books::next_page))
        // Details and reviews
        .route("/bookdetails/:book_id", get(books::book_details))
        .route("/reviews/:book_title", get(reviews::get_reviews))
        .with_state(state)
}
