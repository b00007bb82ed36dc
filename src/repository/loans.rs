//! Loans repository for database operations
//!
//! Checkout and return each run inside a single transaction so the loan row
//! and the paired book status flip are applied together or not at all.

use chrono::{Duration, Utc};
use sqlx::{Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookStatus},
        loan::{Loan, LoanDetails},
        student::Student,
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

const LOAN_DETAILS_QUERY: &str = r#"
    SELECT l.id, l.student_id, l.book_id, l.loan_date, l.due_date,
           l.returned_date, l.notes,
           s.name AS student_name, s.email AS student_email,
           s.created_at AS student_created_at,
           b.name AS book_name, b.author AS book_author,
           b.quantity AS book_quantity, b.available AS book_available,
           b.status AS book_status, b.created_at AS book_created_at
    FROM loans l
    JOIN students s ON l.student_id = s.id
    JOIN books b ON l.book_id = b.id
"#;

fn loan_details_from_row(row: &sqlx::postgres::PgRow) -> LoanDetails {
    LoanDetails {
        loan: Loan {
            id: row.get("id"),
            student_id: row.get("student_id"),
            book_id: row.get("book_id"),
            loan_date: row.get("loan_date"),
            due_date: row.get("due_date"),
            returned_date: row.get("returned_date"),
            notes: row.get("notes"),
        },
        aluno: Student {
            id: row.get("student_id"),
            name: row.get("student_name"),
            email: row.get("student_email"),
            created_at: row.get("student_created_at"),
        },
        livro: Book {
            id: row.get("book_id"),
            name: row.get("book_name"),
            author: row.get("book_author"),
            quantity: row.get("book_quantity"),
            available: row.get("book_available"),
            status: row.get("book_status"),
            created_at: row.get("book_created_at"),
        },
    }
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all loans with their student and book records
    pub async fn list_with_details(&self) -> AppResult<Vec<LoanDetails>> {
        let rows = sqlx::query(&format!("{} ORDER BY l.id", LOAN_DETAILS_QUERY))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(loan_details_from_row).collect())
    }

    /// Get loans for a student, with book details (for the report)
    pub async fn get_student_loans(&self, student_id: i32) -> AppResult<Vec<LoanDetails>> {
        let rows = sqlx::query(&format!(
            "{} WHERE l.student_id = $1 ORDER BY l.loan_date",
            LOAN_DETAILS_QUERY
        ))
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(loan_details_from_row).collect())
    }

    /// Create a loan and flip the book to on-loan, atomically.
    ///
    /// The book update is conditional on `available = TRUE`, so two
    /// concurrent checkouts of the same book cannot both succeed: the loser
    /// matches zero rows and the transaction rolls back with a conflict.
    pub async fn checkout(
        &self,
        student_id: i32,
        book_id: i32,
        notes: Option<String>,
        period_days: i64,
    ) -> AppResult<Loan> {
        let now = Utc::now();
        let due_date = now + Duration::days(period_days);

        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            "UPDATE books SET status = $1, available = FALSE WHERE id = $2 AND available = TRUE",
        )
        .bind(BookStatus::Pendente)
        .bind(book_id)
        .execute(&mut *tx)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(AppError::Conflict(format!(
                "Book with id {} is not available",
                book_id
            )));
        }

        let loan = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (student_id, book_id, loan_date, due_date, notes)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(book_id)
        .bind(now)
        .bind(due_date)
        .bind(&notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(loan)
    }

    /// Delete a loan and flip its book back to the catalog, atomically.
    ///
    /// The book is resolved through the loan's book reference.
    pub async fn return_loan(&self, loan_id: i32) -> AppResult<(Loan, Book)> {
        let mut tx = self.pool.begin().await?;

        let loan = sqlx::query_as::<_, Loan>("DELETE FROM loans WHERE id = $1 RETURNING *")
            .bind(loan_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", loan_id)))?;

        let book = sqlx::query_as::<_, Book>(
            "UPDATE books SET status = $1, available = TRUE WHERE id = $2 RETURNING *",
        )
        .bind(BookStatus::Devolvido)
        .bind(loan.book_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok((loan, book))
    }
}
