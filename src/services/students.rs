//! Student directory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::student::{Student, StudentPayload},
    repository::Repository,
};

#[derive(Clone)]
pub struct StudentsService {
    repository: Repository,
}

impl StudentsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all students
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        self.repository.students.list().await
    }

    /// Create a new student
    pub async fn create(&self, payload: StudentPayload) -> AppResult<Student> {
        payload.validate()?;
        self.repository.students.create(&payload).await
    }

    /// Update an existing student
    pub async fn update(&self, id: i32, payload: StudentPayload) -> AppResult<Student> {
        payload.validate()?;
        self.repository.students.update(id, &payload).await
    }

    /// Delete a student. Rejected while the student has open loans.
    pub async fn delete(&self, id: i32) -> AppResult<Student> {
        match self.repository.students.delete_if_no_loans(id).await? {
            Some(student) => Ok(student),
            // Conditional delete matched nothing: either the student is
            // still referenced by a loan, or the id is unknown.
            None => {
                if self.repository.students.find_by_id(id).await?.is_some() {
                    Err(AppError::Conflict(format!(
                        "Student with id {} has open loans",
                        id
                    )))
                } else {
                    Err(AppError::NotFound(format!(
                        "Student with id {} not found",
                        id
                    )))
                }
            }
        }
    }
}
