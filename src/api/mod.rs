//! API handlers for the biblioteca REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod openapi;
pub mod reports;
pub mod students;

use axum::extract::FromRequest;

use crate::error::AppError;

/// JSON body extractor whose rejection carries the application error shape.
///
/// A body that fails to deserialize (missing or non-numeric fields) becomes
/// a 400 ValidationError instead of axum's plain-text 422.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
