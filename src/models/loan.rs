//! Loan (emprestimo) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use super::book::Book;
use super::student::Student;

/// Loan record from database
///
/// A loan is open while its row exists and `returned_date` is null; closing
/// a loan deletes the row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub id: i32,
    #[serde(rename = "alunoId")]
    pub student_id: i32,
    #[serde(rename = "livroId")]
    pub book_id: i32,
    #[serde(rename = "data")]
    pub loan_date: DateTime<Utc>,
    #[serde(rename = "dataDevolucao")]
    pub due_date: DateTime<Utc>,
    #[serde(rename = "dataDevolvido")]
    pub returned_date: Option<DateTime<Utc>>,
    #[serde(rename = "obs")]
    pub notes: Option<String>,
}

/// Loan with its student and book records embedded, for listing and reports
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanDetails {
    #[serde(flatten)]
    pub loan: Loan,
    pub aluno: Student,
    pub livro: Book,
}

/// Checkout request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    #[serde(rename = "alunoId")]
    pub student_id: i32,
    #[serde(rename = "livroId")]
    pub book_id: i32,
    #[serde(rename = "obs")]
    pub notes: Option<String>,
}
