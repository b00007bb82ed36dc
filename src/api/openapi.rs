//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, reports, students};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Biblioteca Escolar API",
        version = "0.1.0",
        description = "School library record-keeping REST API"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Students
        students::list_students,
        students::create_student,
        students::update_student,
        students::delete_student,
        // Books
        books::list_books,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::return_loan,
        // Reports
        reports::email_student_report,
    ),
    components(
        schemas(
            crate::models::student::Student,
            crate::models::student::StudentPayload,
            crate::models::book::Book,
            crate::models::book::BookPayload,
            crate::models::book::BookStatus,
            crate::models::loan::Loan,
            crate::models::loan::LoanDetails,
            crate::models::loan::CreateLoan,
            loans::CheckoutResponse,
            loans::ReturnResponse,
            reports::ReportDispatchResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "alunos", description = "Student directory"),
        (name = "livros", description = "Book catalog"),
        (name = "emprestimos", description = "Loan ledger")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
