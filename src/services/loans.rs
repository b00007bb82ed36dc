//! Loan ledger service

use crate::{
    config::LoanConfig,
    error::{AppError, AppResult},
    models::{
        book::Book,
        loan::{CreateLoan, Loan, LoanDetails},
        student::Student,
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
    config: LoanConfig,
}

impl LoansService {
    pub fn new(repository: Repository, config: LoanConfig) -> Self {
        Self { repository, config }
    }

    /// List all loans with student and book details
    pub async fn list(&self) -> AppResult<Vec<LoanDetails>> {
        self.repository.loans.list_with_details().await
    }

    /// Check out a book to a student.
    ///
    /// Preconditions, in order: the student must exist, the book must exist,
    /// the book must be available. The loan row and the book status flip are
    /// applied in one transaction.
    pub async fn checkout(&self, request: CreateLoan) -> AppResult<(Loan, Student)> {
        let student = self
            .repository
            .students
            .find_by_id(request.student_id)
            .await?
            .ok_or_else(|| AppError::Reference("invalid student id".to_string()))?;

        self.repository
            .books
            .find_by_id(request.book_id)
            .await?
            .ok_or_else(|| AppError::Reference("book not found".to_string()))?;

        let loan = self
            .repository
            .loans
            .checkout(
                request.student_id,
                request.book_id,
                request.notes,
                self.config.period_days,
            )
            .await?;

        tracing::info!(
            loan_id = loan.id,
            student_id = student.id,
            book_id = loan.book_id,
            "book checked out"
        );

        Ok((loan, student))
    }

    /// Close a loan: delete the row and put the book back in the catalog
    pub async fn close(&self, loan_id: i32) -> AppResult<(Loan, Book)> {
        let (loan, book) = self.repository.loans.return_loan(loan_id).await?;

        tracing::info!(loan_id = loan.id, book_id = book.id, "book returned");

        Ok((loan, book))
    }
}
