//! Demo catalogue for running against an empty (usually SQLite) datastore.

use sea_orm::*;

use crate::models::book;

const CREATE_BOOK_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS book2018 (
        book_id VARCHAR(8) NOT NULL PRIMARY KEY,
        title VARCHAR(256) NOT NULL,
        authors VARCHAR(256),
        description TEXT,
        edition VARCHAR(64),
        format VARCHAR(64),
        pages INTEGER,
        rating FLOAT,
        rating_count INTEGER,
        review_count INTEGER,
        genres VARCHAR(256),
        image_url VARCHAR(256)
    )
"#;

/// Create the book table if the datastore does not have it yet
pub async fn ensure_schema(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute(Statement::from_string(
        db.get_database_backend(),
        CREATE_BOOK_TABLE.to_owned(),
    ))
    .await?;
    Ok(())
}

pub async fn insert_book(db: &DatabaseConnection, model: book::Model) -> Result<(), DbErr> {
    let row = book::ActiveModel {
        book_id: Set(model.book_id),
        title: Set(model.title),
        authors: Set(model.authors),
        description: Set(model.description),
        edition: Set(model.edition),
        format: Set(model.format),
        pages: Set(model.pages),
        rating: Set(model.rating),
        rating_count: Set(model.rating_count),
        review_count: Set(model.review_count),
        genres: Set(model.genres),
        image_url: Set(model.image_url),
    };
    book::Entity::insert(row).exec_without_returning(db).await?;
    Ok(())
}

fn demo_book(id: &str, title: &str, authors: &str, pages: i32, rating: f32, genres: &str) -> book::Model {
    book::Model {
        book_id: id.to_owned(),
        title: title.to_owned(),
        authors: Some(authors.to_owned()),
        description: None,
        edition: None,
        format: Some("Paperback".to_owned()),
        pages: Some(pages),
        rating: Some(rating),
        rating_count: None,
        review_count: None,
        genres: Some(genres.to_owned()),
        image_url: None,
    }
}

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    ensure_schema(db).await?;

    let books = vec![
        demo_book("d0000001", "Harry Potter and the Sorcerer's Stone", "J.K. Rowling|Mary GrandPré", 309, 4.47, "Fantasy|Young Adult|Fiction"),
        demo_book("d0000002", "Harry Potter and the Chamber of Secrets", "J.K. Rowling|Mary GrandPré", 341, 4.43, "Fantasy|Young Adult|Fiction"),
        demo_book("d0000003", "Harry Potter and the Prisoner of Azkaban", "J.K. Rowling|Mary GrandPré", 435, 4.57, "Fantasy|Young Adult|Fiction"),
        demo_book("d0000004", "The Hobbit", "J.R.R. Tolkien", 366, 4.27, "Fantasy|Classics"),
        demo_book("d0000005", "Dune", "Frank Herbert", 661, 4.25, "Science Fiction|Classics"),
        demo_book("d0000006", "Foundation", "Isaac Asimov", 255, 4.17, "Science Fiction|Classics"),
        demo_book("d0000007", "1984", "George Orwell", 328, 4.19, "Classics|Dystopia"),
    ];

    let mut inserted = 0;
    for model in books {
        if book::Entity::find_by_id(model.book_id.clone())
            .one(db)
            .await?
            .is_some()
        {
            continue;
        }
        insert_book(db, model).await?;
        inserted += 1;
    }

    tracing::info!("Seeded {} demo books", inserted);
    Ok(())
}
