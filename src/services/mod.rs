//! Service layer - request logic without the HTTP layer

pub mod book_service;
pub mod review_service;

pub use book_service::{PageStep, PageView};
pub use review_service::ReviewView;
