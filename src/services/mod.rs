//! Business logic services

pub mod books;
pub mod email;
pub mod loans;
pub mod reports;
pub mod students;

use crate::{
    config::{EmailConfig, LoanConfig},
    repository::Repository,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub students: students::StudentsService,
    pub books: books::BooksService,
    pub loans: loans::LoansService,
    pub reports: reports::ReportsService,
    pub email: email::EmailService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, email_config: EmailConfig, loan_config: LoanConfig) -> Self {
        Self {
            students: students::StudentsService::new(repository.clone()),
            books: books::BooksService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone(), loan_config),
            reports: reports::ReportsService::new(repository),
            email: email::EmailService::new(email_config),
        }
    }
}
