pub mod nyt_reviews;
