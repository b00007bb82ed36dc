//! Loan report aggregation and rendering
//!
//! Aggregation (query the student and their loans), rendering (format to an
//! HTML document) and dispatch (email service) are separate stages, so a
//! dispatch failure can never affect a successful fetch.

use chrono::{DateTime, Utc};

use crate::{
    error::AppResult,
    models::{loan::LoanDetails, student::Student},
    repository::Repository,
};

/// Data needed to render one student's loan report
#[derive(Debug)]
pub struct StudentReport {
    pub student: Student,
    pub loans: Vec<LoanDetails>,
}

#[derive(Clone)]
pub struct ReportsService {
    repository: Repository,
}

impl ReportsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Fetch a student and their loans for the report
    pub async fn student_report(&self, student_id: i32) -> AppResult<StudentReport> {
        let student = self.repository.students.get_by_id(student_id).await?;
        let loans = self.repository.loans.get_student_loans(student_id).await?;
        Ok(StudentReport { student, loans })
    }
}

/// Format a date for display (pt-BR, dd/mm/aaaa)
fn format_date(date: &DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Render a student's loan report as an HTML table
pub fn render_report_html(report: &StudentReport) -> String {
    let mut html = format!(
        r#"<html>
<body style="font-family: Helvetica, Arial, sans-serif;">
  <h2>Biblioteca Escolar: Relatório de Empréstimos</h2>
  <h3>Aluno: {}</h3>
  <table border="1" cellpadding="8" cellspacing="0" style="border-collapse: collapse; width: 100%;">
    <thead style="background-color: rgb(195, 191, 191);">
      <tr>
        <th>Livro</th>
        <th>Autor</th>
        <th>Data do Empréstimo</th>
        <th>Data para Devolução</th>
        <th>Data Devolvida</th>
        <th>Status</th>
        <th>Observações</th>
      </tr>
    </thead>
    <tbody>
"#,
        report.student.name
    );

    for details in &report.loans {
        let returned = details
            .loan
            .returned_date
            .as_ref()
            .map(format_date)
            .unwrap_or_else(|| "Não devolvido".to_string());

        html.push_str(&format!(
            r#"      <tr>
        <td>{}</td>
        <td>{}</td>
        <td>{}</td>
        <td>{}</td>
        <td>{}</td>
        <td>{}</td>
        <td>{}</td>
      </tr>
"#,
            details.livro.name,
            details.livro.author.as_deref().unwrap_or("-"),
            format_date(&details.loan.loan_date),
            format_date(&details.loan.due_date),
            returned,
            details.livro.status,
            details.loan.notes.as_deref().unwrap_or("-"),
        ));
    }

    html.push_str("    </tbody>\n  </table>\n</body>\n</html>\n");
    html
}
