use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Row of the Goodreads 2018 extract. The table is owned by the dataset
/// import; this application only reads it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book2018")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub book_id: String,
    pub title: String,
    pub authors: Option<String>, // pipe-separated
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub edition: Option<String>,
    pub format: Option<String>,
    pub pages: Option<i32>,
    pub rating: Option<f32>,
    pub rating_count: Option<i32>,
    pub review_count: Option<i32>,
    pub genres: Option<String>, // pipe-separated
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// DTO for views and JSON responses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    pub book_id: String,
    pub title: String,
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    pub pages: Option<i32>,
    pub rating: Option<f32>,
    pub rating_count: Option<i32>,
    pub review_count: Option<i32>,
    pub genres: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

fn split_pipes(value: Option<String>) -> Vec<String> {
    value
        .map(|v| {
            v.split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

impl From<Model> for Book {
    fn from(model: Model) -> Self {
        Self {
            book_id: model.book_id,
            title: model.title,
            authors: split_pipes(model.authors),
            description: model.description,
            edition: model.edition,
            format: model.format,
            pages: model.pages,
            rating: model.rating,
            rating_count: model.rating_count,
            review_count: model.review_count,
            genres: split_pipes(model.genres),
            image_url: model.image_url,
        }
    }
}
