//! Loan report email endpoint

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, services::reports::render_report_html};

#[derive(Serialize, ToSchema)]
pub struct ReportDispatchResponse {
    pub mensagem: String,
}

/// Email a student's loan report to their address
#[utoipa::path(
    get,
    path = "/alunos/email/{id}",
    tag = "alunos",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Report dispatched", body = ReportDispatchResponse),
        (status = 404, description = "Student not found"),
        (status = 500, description = "Dispatch failed")
    )
)]
pub async fn email_student_report(
    State(state): State<crate::AppState>,
    Path(student_id): Path<i32>,
) -> AppResult<Json<ReportDispatchResponse>> {
    // Fetch first, then render, then dispatch. A dispatch failure surfaces
    // as ServiceError and cannot mask a fetch error.
    let report = state.services.reports.student_report(student_id).await?;
    let html = render_report_html(&report);

    state
        .services
        .email
        .send_report(&report.student.email, html)
        .await?;

    tracing::info!(student_id, "loan report dispatched");

    Ok(Json(ReportDispatchResponse {
        mensagem: "Relatório enviado para o e-mail do aluno.".to_string(),
    }))
}
