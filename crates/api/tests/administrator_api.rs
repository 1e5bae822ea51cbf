//! HTTP-level integration tests for administrator account management.

mod common;

use axum::http::StatusCode;
use common::{body_bytes, body_json, get_auth, post_json, post_json_auth, test_token};
use sqlx::PgPool;

use frota_db::models::administrator::CreateAdministrator;
use frota_db::repositories::AdministratorRepo;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Seed one administrator row directly, returning its id.
async fn insert_administrator(pool: &PgPool, email: &str, role: &str) -> i64 {
    let input = CreateAdministrator {
        email: email.to_string(),
        password: "secret".to_string(),
        role: role.to_string(),
    };
    AdministratorRepo::create(pool, &input)
        .await
        .expect("administrator creation should succeed")
        .id
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Adm can create an account; the response is 201 with an empty body, and the
/// new credentials immediately work for login.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_administrator(pool: PgPool) {
    let token = test_token("adm@email.com", "Adm");

    let app = common::build_test_app(pool.clone());
    let body = serde_json::json!({
        "email": "novo@email.com",
        "password": "senha",
        "role": "Editor"
    });
    let response = post_json_auth(app, "/administrador", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(body_bytes(response).await.is_empty(), "201 carries no body");

    let app = common::build_test_app(pool);
    let login = serde_json::json!({ "email": "novo@email.com", "password": "senha" });
    let response = post_json(app, "/administrador/login", login).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["role"], "Editor");
}

/// Editors cannot create accounts.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_requires_adm_role(pool: PgPool) {
    let token = test_token("ed@email.com", "Editor");

    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "email": "novo@email.com",
        "password": "senha",
        "role": "Editor"
    });
    let response = post_json_auth(app, "/administrador", body, &token).await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// Listing pages by 10 and never exposes the password column.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_pages_by_ten_without_password(pool: PgPool) {
    // The seed row occupies one slot; add 12 more for 13 total.
    for i in 0..12 {
        insert_administrator(&pool, &format!("a{i}@email.com"), "Editor").await;
    }
    let token = test_token("adm@email.com", "Adm");

    let app = common::build_test_app(pool.clone());
    let response = get_auth(app, "/administrador", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let page1 = json.as_array().expect("body should be an array");
    assert_eq!(page1.len(), 10);
    assert_eq!(page1[0]["email"], "adm@email.com");
    assert!(
        page1[0].get("password").is_none(),
        "password must never be serialized"
    );

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/administrador?pagina=2", &token).await;
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Get by id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_by_id(pool: PgPool) {
    let id = insert_administrator(&pool, "ed@email.com", "Editor").await;
    let token = test_token("adm@email.com", "Adm");

    let app = common::build_test_app(pool);
    let response = get_auth(app, &format!("/administrador/{id}"), &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], id);
    assert_eq!(json["email"], "ed@email.com");
    assert_eq!(json["role"], "Editor");
    assert!(json.get("password").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_by_id_missing_returns_404(pool: PgPool) {
    let token = test_token("adm@email.com", "Adm");

    let app = common::build_test_app(pool);
    let response = get_auth(app, "/administrador/999999", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
