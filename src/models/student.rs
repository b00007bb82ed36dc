//! Student (aluno) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Student record from database
///
/// JSON field names follow the Portuguese API contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

/// Create/update student request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StudentPayload {
    #[serde(rename = "nome")]
    #[validate(length(min = 8, message = "Nome deve possuir, no mínimo, 8 caracteres"))]
    pub name: String,
    #[validate(
        email(message = "E-mail inválido"),
        length(min = 10, message = "E-mail, no mínimo, 10 caracteres")
    )]
    pub email: String,
}
