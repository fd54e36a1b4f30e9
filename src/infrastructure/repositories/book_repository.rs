//! SeaORM implementation of BookRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::domain::pagination;
use crate::domain::{BookPage, BookRepository, DomainError};
use crate::models::Book;
use crate::models::book::{Column, Entity as BookEntity};

const LIKE_ESCAPE: char = '\\';

/// `LIKE` pattern matching titles that start with `prefix` literally
fn starts_with_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn title_starts_with(prefix: &str) -> SimpleExpr {
    Expr::col((Column::Title.entity_name(), Column::Title))
        .like(LikeExpr::new(starts_with_pattern(prefix)).escape(LIKE_ESCAPE))
}

/// SeaORM-based implementation of BookRepository
pub struct SeaOrmBookRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookRepository for SeaOrmBookRepository {
    async fn find_page(
        &self,
        title_prefix: &str,
        requested_offset: i64,
        page_size: u64,
    ) -> Result<BookPage, DomainError> {
        // Count and page read share one pooled connection. Any early return
        // drops the transaction, which rolls back and hands the connection
        // back to the pool.
        let txn = self.db.begin().await?;

        let total = BookEntity::find()
            .filter(title_starts_with(title_prefix))
            .count(&txn)
            .await?;

        let offset = pagination::clamp_offset(requested_offset, total, page_size);

        let books = BookEntity::find()
            .filter(title_starts_with(title_prefix))
            .order_by_asc(Column::Title)
            .order_by_asc(Column::BookId)
            .limit(page_size)
            .offset(offset)
            .all(&txn)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Page for prefix {:?}: offset={} rows={} total={}",
            title_prefix,
            offset,
            books.len(),
            total
        );

        Ok(BookPage {
            books: books.into_iter().map(Book::from).collect(),
            total,
            offset,
        })
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, DomainError> {
        let book_model = BookEntity::find_by_id(id.to_owned()).one(&self.db).await?;
        Ok(book_model.map(Book::from))
    }
}
