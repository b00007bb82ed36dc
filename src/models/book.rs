//! Book (livro) model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book lifecycle status
///
/// `Devolvido` (in catalog) is the creation default; `Pendente` means the
/// book is out on loan. Invariant: `status == Devolvido` implies
/// `available == true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "book_status", rename_all = "UPPERCASE")]
pub enum BookStatus {
    Pendente,
    Devolvido,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Pendente => "PENDENTE",
            BookStatus::Devolvido => "DEVOLVIDO",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Book record from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "autor")]
    pub author: Option<String>,
    #[serde(rename = "quant")]
    pub quantity: i32,
    #[serde(rename = "disponivel")]
    pub available: bool,
    pub status: BookStatus,
    #[serde(rename = "criadoEm")]
    pub created_at: DateTime<Utc>,
}

/// Create/update book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct BookPayload {
    #[serde(rename = "nome")]
    #[validate(length(min = 4, message = "Nome do livro deve possuir, no mínimo, 4 caracteres"))]
    pub name: String,
    #[serde(rename = "autor")]
    pub author: Option<String>,
    #[serde(rename = "quant")]
    #[validate(range(min = 1, message = "Deve haver pelo menos 1 livro para cadastro"))]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_book_payload() {
        let payload = BookPayload {
            name: "Dom Casmurro".to_string(),
            author: Some("Machado de Assis".to_string()),
            quantity: 3,
        };
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn test_short_name_rejected() {
        let payload = BookPayload {
            name: "Dom".to_string(),
            author: None,
            quantity: 1,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let payload = BookPayload {
            name: "Dom Casmurro".to_string(),
            author: None,
            quantity: 0,
        };
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("quantity"));
    }

    #[test]
    fn test_status_serializes_uppercase() {
        assert_eq!(
            serde_json::to_string(&BookStatus::Pendente).unwrap(),
            "\"PENDENTE\""
        );
        assert_eq!(
            serde_json::to_string(&BookStatus::Devolvido).unwrap(),
            "\"DEVOLVIDO\""
        );
    }
}
