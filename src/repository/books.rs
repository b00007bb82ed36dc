//! Books repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>("SELECT * FROM books ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(books)
    }

    /// Find book by ID, returning None when absent
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(book)
    }

    /// Create a new book (available, not on loan)
    pub async fn create(&self, payload: &BookPayload) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (name, author, quantity) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.author)
        .bind(payload.quantity)
        .fetch_one(&self.pool)
        .await?;
        Ok(book)
    }

    /// Update an existing book
    pub async fn update(&self, id: i32, payload: &BookPayload) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "UPDATE books SET name = $1, author = $2, quantity = $3 WHERE id = $4 RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.author)
        .bind(payload.quantity)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))
    }

    /// Delete a book unless an open loan references it.
    ///
    /// One conditional statement, so a checkout landing concurrently cannot
    /// slip between a loan check and the delete. Returns None when the row
    /// was absent or still referenced; the caller disambiguates.
    pub async fn delete_if_no_loans(&self, id: i32) -> AppResult<Option<Book>> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            DELETE FROM books
            WHERE id = $1
              AND NOT EXISTS (SELECT 1 FROM loans WHERE book_id = $1)
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(book)
    }
}
