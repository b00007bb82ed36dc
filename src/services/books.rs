//! Book catalog service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct BooksService {
    repository: Repository,
}

impl BooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all books
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Create a new book
    pub async fn create(&self, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        self.repository.books.create(&payload).await
    }

    /// Update an existing book
    pub async fn update(&self, id: i32, payload: BookPayload) -> AppResult<Book> {
        payload.validate()?;
        self.repository.books.update(id, &payload).await
    }

    /// Delete a book. Rejected while an open loan references the book.
    pub async fn delete(&self, id: i32) -> AppResult<Book> {
        match self.repository.books.delete_if_no_loans(id).await? {
            Some(book) => Ok(book),
            // Conditional delete matched nothing: either the book is still
            // out on loan, or the id is unknown.
            None => {
                if self.repository.books.find_by_id(id).await?.is_some() {
                    Err(AppError::Conflict(format!(
                        "Book with id {} is out on loan",
                        id
                    )))
                } else {
                    Err(AppError::NotFound(format!("Book with id {} not found", id)))
                }
            }
        }
    }
}
