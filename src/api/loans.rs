//! Loan ledger endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::AppJson;
use crate::{
    error::AppResult,
    models::{
        book::Book,
        loan::{CreateLoan, Loan, LoanDetails},
        student::Student,
    },
};

/// Checkout response: the created loan and the borrowing student
#[derive(Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub emprestimo: Loan,
    pub aluno: Student,
}

/// Return response: the closed loan and the updated book
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    pub emprestimo: Loan,
    pub livro: Book,
}

/// List all loans with student and book details
#[utoipa::path(
    get,
    path = "/emprestimos",
    tag = "emprestimos",
    responses(
        (status = 200, description = "List of loans", body = Vec<LoanDetails>)
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let loans = state.services.loans.list().await?;
    Ok(Json(loans))
}

/// Check out a book to a student
#[utoipa::path(
    post,
    path = "/emprestimos",
    tag = "emprestimos",
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = CheckoutResponse),
        (status = 400, description = "Invalid student or book reference"),
        (status = 409, description = "Book is not available")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    AppJson(request): AppJson<CreateLoan>,
) -> AppResult<(StatusCode, Json<CheckoutResponse>)> {
    let (emprestimo, aluno) = state.services.loans.checkout(request).await?;
    Ok((StatusCode::CREATED, Json(CheckoutResponse { emprestimo, aluno })))
}

/// Return a borrowed book (closes the loan)
#[utoipa::path(
    delete,
    path = "/emprestimos/{id}",
    tag = "emprestimos",
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 404, description = "Loan not found")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Path(loan_id): Path<i32>,
) -> AppResult<Json<ReturnResponse>> {
    let (emprestimo, livro) = state.services.loans.close(loan_id).await?;
    Ok(Json(ReturnResponse { emprestimo, livro }))
}
