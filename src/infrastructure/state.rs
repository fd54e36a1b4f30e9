//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::BookRepository;
use crate::infrastructure::SeaOrmBookRepository;
use crate::modules::integrations::nyt_reviews::ReviewClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Connection pool (health checks)
    db: DatabaseConnection,
    /// Book repository
    pub book_repo: Arc<dyn BookRepository>,
    /// Review API client
    pub reviews: ReviewClient,
}

impl AppState {
    pub fn new(db: DatabaseConnection, reviews: ReviewClient) -> Self {
        let book_repo = Arc::new(SeaOrmBookRepository::new(db.clone()));

        Self {
            db,
            book_repo,
            reviews,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
