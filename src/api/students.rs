//! Student directory endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::student::{Student, StudentPayload},
};

use super::AppJson;

/// List all students
#[utoipa::path(
    get,
    path = "/alunos",
    tag = "alunos",
    responses(
        (status = 200, description = "List of students", body = Vec<Student>)
    )
)]
pub async fn list_students(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Student>>> {
    let students = state.services.students.list().await?;
    Ok(Json(students))
}

/// Create a new student
#[utoipa::path(
    post,
    path = "/alunos",
    tag = "alunos",
    request_body = StudentPayload,
    responses(
        (status = 201, description = "Student created", body = Student),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_student(
    State(state): State<crate::AppState>,
    AppJson(payload): AppJson<StudentPayload>,
) -> AppResult<(StatusCode, Json<Student>)> {
    let created = state.services.students.create(payload).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing student
#[utoipa::path(
    put,
    path = "/alunos/{id}",
    tag = "alunos",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student updated", body = Student),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Student not found")
    )
)]
pub async fn update_student(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    AppJson(payload): AppJson<StudentPayload>,
) -> AppResult<Json<Student>> {
    let updated = state.services.students.update(id, payload).await?;
    Ok(Json(updated))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/alunos/{id}",
    tag = "alunos",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = Student),
        (status = 404, description = "Student not found"),
        (status = 409, description = "Student has open loans")
    )
)]
pub async fn delete_student(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Student>> {
    let deleted = state.services.students.delete(id).await?;
    Ok(Json(deleted))
}
