//! Students repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::student::{Student, StudentPayload},
};

#[derive(Clone)]
pub struct StudentsRepository {
    pool: Pool<Postgres>,
}

impl StudentsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all students
    pub async fn list(&self) -> AppResult<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(students)
    }

    /// Get student by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Student> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Student with id {} not found", id)))
    }

    /// Find student by ID, returning None when absent
    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(student)
    }

    /// Create a new student
    pub async fn create(&self, payload: &StudentPayload) -> AppResult<Student> {
        let student = sqlx::query_as::<_, Student>(
            "INSERT INTO students (name, email) VALUES ($1, $2) RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .fetch_one(&self.pool)
        .await?;
        Ok(student)
    }

    /// Update an existing student
    pub async fn update(&self, id: i32, payload: &StudentPayload) -> AppResult<Student> {
        sqlx::query_as::<_, Student>(
            "UPDATE students SET name = $1, email = $2 WHERE id = $3 RETURNING *",
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Student with id {} not found", id)))
    }

    /// Delete a student unless an open loan references them.
    ///
    /// One conditional statement, so a checkout landing concurrently cannot
    /// slip between a loan check and the delete. Returns None when the row
    /// was absent or still referenced; the caller disambiguates.
    pub async fn delete_if_no_loans(&self, id: i32) -> AppResult<Option<Student>> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            DELETE FROM students
            WHERE id = $1
              AND NOT EXISTS (SELECT 1 FROM loans WHERE student_id = $1)
            RETURNING *
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(student)
    }
}
