//! API integration tests
//!
//! These run against a live server with a fresh database:
//! `cargo test -- --ignored`

use reqwest::Client;
use serde_json::{json, Value};

const BASE_URL: &str = "http://localhost:3000";

async fn create_student(client: &Client, name: &str, email: &str) -> Value {
    let response = client
        .post(format!("{}/alunos", BASE_URL))
        .json(&json!({ "nome": name, "email": email }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn create_book(client: &Client, name: &str, quantity: i32) -> Value {
    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&json!({ "nome": name, "quant": quantity }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

async fn get_book(client: &Client, id: i64) -> Value {
    let response = client
        .get(format!("{}/livros", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");
    let books: Vec<Value> = response.json().await.expect("Failed to parse response");
    books
        .into_iter()
        .find(|b| b["id"].as_i64() == Some(id))
        .expect("Book not in listing")
}

#[tokio::test]
#[ignore]
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_create_student_returns_assigned_id() {
    let client = Client::new();

    let student = create_student(&client, "Maria Silva", "maria@escola.com").await;
    assert!(student["id"].is_number());
    assert_eq!(student["nome"], "Maria Silva");
    assert_eq!(student["email"], "maria@escola.com");
}

#[tokio::test]
#[ignore]
async fn test_create_student_short_name_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/alunos", BASE_URL))
        .json(&json!({ "nome": "Maria S", "email": "maria@escola.com" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "ValidationError");
    assert!(body["details"].is_object());
}

#[tokio::test]
#[ignore]
async fn test_create_book_zero_quantity_rejected() {
    let client = Client::new();

    let response = client
        .post(format!("{}/livros", BASE_URL))
        .json(&json!({ "nome": "Dom Casmurro", "quant": 0 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "ValidationError");
}

#[tokio::test]
#[ignore]
async fn test_update_missing_student_is_404() {
    let client = Client::new();

    let response = client
        .put(format!("{}/alunos/999999", BASE_URL))
        .json(&json!({ "nome": "Maria Silva", "email": "maria@escola.com" }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "NotFoundError");
}

#[tokio::test]
#[ignore]
async fn test_checkout_invalid_student_rejected() {
    let client = Client::new();
    let book = create_book(&client, "Vidas Secas", 1).await;

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "alunoId": 999999, "livroId": book["id"] }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "ReferenceError");

    // No loan was created and the book stayed available
    let book = get_book(&client, book["id"].as_i64().unwrap()).await;
    assert_eq!(book["disponivel"], true);
}

#[tokio::test]
#[ignore]
async fn test_checkout_invalid_book_rejected() {
    let client = Client::new();
    let student = create_student(&client, "Joana Pereira", "joana@escola.com").await;

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "alunoId": student["id"], "livroId": 999999 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "ReferenceError");
}

#[tokio::test]
#[ignore]
async fn test_checkout_and_return_cycle() {
    let client = Client::new();
    let student = create_student(&client, "Carlos Andrade", "carlos@escola.com").await;
    let book = create_book(&client, "Dom Casmurro", 3).await;
    let book_id = book["id"].as_i64().unwrap();

    // New book starts available and in the catalog
    assert_eq!(book["disponivel"], true);
    assert_eq!(book["status"], "DEVOLVIDO");

    // Checkout flips the book to on-loan
    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "alunoId": student["id"], "livroId": book_id }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);

    let body: Value = response.json().await.expect("Failed to parse response");
    let loan = &body["emprestimo"];
    assert!(loan["id"].is_number());
    assert_eq!(loan["livroId"].as_i64(), Some(book_id));
    assert_eq!(body["aluno"]["id"], student["id"]);

    let on_loan = get_book(&client, book_id).await;
    assert_eq!(on_loan["disponivel"], false);
    assert_eq!(on_loan["status"], "PENDENTE");

    // Return closes the loan and updates the book referenced by the loan's
    // livroId (not its alunoId)
    let response = client
        .delete(format!("{}/emprestimos/{}", BASE_URL, loan["id"]))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 200);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["emprestimo"]["id"], loan["id"]);
    assert_eq!(body["livro"]["id"].as_i64(), Some(book_id));
    assert_eq!(body["livro"]["disponivel"], true);
    assert_eq!(body["livro"]["status"], "DEVOLVIDO");
}

#[tokio::test]
#[ignore]
async fn test_checkout_unavailable_book_conflicts() {
    let client = Client::new();
    let first = create_student(&client, "Paulo Henrique", "paulo@escola.com").await;
    let second = create_student(&client, "Fernanda Lima", "fernanda@escola.com").await;
    let book = create_book(&client, "Grande Sertão", 1).await;

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "alunoId": first["id"], "livroId": book["id"] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    // Second checkout of the same book must lose
    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "alunoId": second["id"], "livroId": book["id"] }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "ConflictError");
}

#[tokio::test]
#[ignore]
async fn test_checkout_non_numeric_id_is_validation_error() {
    let client = Client::new();

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "alunoId": "abc", "livroId": 1 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "ValidationError");
}

#[tokio::test]
#[ignore]
async fn test_checkout_missing_id_is_validation_error() {
    let client = Client::new();

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "livroId": 1 }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 400);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "ValidationError");
}

#[tokio::test]
#[ignore]
async fn test_return_missing_loan_is_404() {
    let client = Client::new();

    let response = client
        .delete(format!("{}/emprestimos/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "NotFoundError");
}

#[tokio::test]
#[ignore]
async fn test_delete_student_with_open_loan_conflicts() {
    let client = Client::new();
    let student = create_student(&client, "Beatriz Gomes", "beatriz@escola.com").await;
    let book = create_book(&client, "Quincas Borba", 1).await;

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "alunoId": student["id"], "livroId": book["id"] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .delete(format!("{}/alunos/{}", BASE_URL, student["id"]))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);
}

#[tokio::test]
#[ignore]
async fn test_delete_book_on_loan_conflicts() {
    let client = Client::new();
    let student = create_student(&client, "Ricardo Nunes", "ricardo@escola.com").await;
    let book = create_book(&client, "Memórias Póstumas", 1).await;

    let response = client
        .post(format!("{}/emprestimos", BASE_URL))
        .json(&json!({ "alunoId": student["id"], "livroId": book["id"] }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .delete(format!("{}/livros/{}", BASE_URL, book["id"]))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 409);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["kind"], "ConflictError");
}

#[tokio::test]
#[ignore]
async fn test_report_for_missing_student_is_404() {
    let client = Client::new();

    let response = client
        .get(format!("{}/alunos/email/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 404);
}
