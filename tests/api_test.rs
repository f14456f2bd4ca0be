//! Integration tests for the HTTP surface.
//!
//! Mock services stand in for the business layer so the tests pin down
//! routing, status codes and wire formats without a real database or
//! Redis connection.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use hr_backend::api::{create_router, AppState};
use hr_backend::config::Config;
use hr_backend::domain::{Employee, User, UserRole};
use hr_backend::errors::{AppError, AppResult};
use hr_backend::infra::Database;
use hr_backend::services::{AuthService, Claims, EmployeeService, TokenResponse};

// =============================================================================
// Mock Services
// =============================================================================

/// Mock auth service with canned outcomes
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(&self, username: String, _password: String) -> AppResult<User> {
        if username == "taken" {
            return Err(AppError::DuplicateUsername);
        }

        Ok(User {
            id: 101,
            username,
            password_hash: "hashed".to_string(),
            role: UserRole::Employee,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        })
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        if password != "secret1" {
            return Err(AppError::InvalidCredentials);
        }

        Ok(TokenResponse {
            token: "mock-token".to_string(),
            id: 101,
            username,
            role: "ROLE_EMPLOYEE".to_string(),
        })
    }

    fn verify_token(&self, _token: &str) -> AppResult<Claims> {
        Err(AppError::Unauthorized)
    }
}

/// Mock employee service with canned outcomes
struct MockEmployeeService;

fn sample_employee(id: i64) -> Employee {
    Employee {
        id: Some(id),
        firstname: "Jane".to_string(),
        lastname: "Doe".to_string(),
        email: format!("jane{}@corp.test", id),
        department_id: "ENG".to_string(),
        role_id: "7".to_string(),
    }
}

#[async_trait]
impl EmployeeService for MockEmployeeService {
    async fn add_employee(&self, employee: Employee) -> AppResult<Employee> {
        if employee.email == "dup@corp.test" {
            return Err(AppError::DuplicateEmail(employee.email));
        }
        Ok(employee)
    }

    async fn get_all_employees(&self) -> AppResult<Vec<Employee>> {
        Ok(vec![sample_employee(1), sample_employee(2)])
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Employee> {
        if id == 404 {
            return Err(AppError::NotFound);
        }
        Ok(sample_employee(id))
    }

    async fn find_by_firstname(&self, firstname: &str) -> AppResult<Employee> {
        if firstname == "nobody" {
            return Err(AppError::NotFound);
        }
        Ok(sample_employee(1))
    }

    async fn get_all_by_department(&self, department_id: &str) -> AppResult<Vec<Employee>> {
        if department_id == "EMPTY" {
            return Ok(vec![]);
        }
        Ok(vec![sample_employee(1)])
    }

    async fn count_by_department(&self, department_id: &str) -> AppResult<u64> {
        Ok(if department_id == "ENG" { 3 } else { 0 })
    }

    async fn update_employee(&self, id: i64, employee: Employee) -> AppResult<Employee> {
        if id == 404 {
            return Err(AppError::NotFound);
        }
        Ok(employee)
    }

    async fn delete_employee(&self, id: i64) -> AppResult<()> {
        if id == 404 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

async fn test_router() -> axum::Router {
    let mut config = Config::default();
    config.database_url = "sqlite::memory:".to_string();

    let database = Database::connect_without_migrations(&config)
        .await
        .expect("sqlite connect");

    let state = AppState::new(
        Arc::new(MockAuthService),
        Arc::new(MockEmployeeService),
        Arc::new(database),
        config,
    );

    create_router(state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// Auth Endpoints
// =============================================================================

#[tokio::test]
async fn signup_returns_created_with_employee_id_message() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/signup",
            json!({"username": "alice", "password": "secret1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(
        body["message"],
        "User registered successfully. Employee record created with ID: 101"
    );
}

#[tokio::test]
async fn signup_with_taken_username_is_bad_request() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/signup",
            json!({"username": "taken", "password": "secret1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Username already exists");
}

#[tokio::test]
async fn signup_with_blank_username_is_rejected() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/signup",
            json!({"username": "", "password": "secret1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_returns_token_response() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"username": "alice", "password": "secret1"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["token"], "mock-token");
    assert_eq!(body["id"], 101);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["role"], "ROLE_EMPLOYEE");
}

#[tokio::test]
async fn login_with_bad_credentials_is_unauthorized() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/auth/login",
            json!({"username": "alice", "password": "wrong"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

// =============================================================================
// Employee Endpoints
// =============================================================================

#[tokio::test]
async fn add_employee_returns_created_with_empty_body() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/emp-controller/add-employee",
            json!({
                "id": 7,
                "firstname": "Jane",
                "lastname": "Doe",
                "email": "jane@corp.test",
                "department_Id": "ENG",
                "role_Id": "7"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn add_employee_with_duplicate_email_is_conflict() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/emp-controller/add-employee",
            json!({
                "id": 7,
                "firstname": "Jane",
                "lastname": "Doe",
                "email": "dup@corp.test",
                "department_Id": "ENG",
                "role_Id": "7"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn add_employee_with_invalid_email_is_rejected() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "POST",
            "/emp-controller/add-employee",
            json!({
                "id": 7,
                "firstname": "Jane",
                "lastname": "Doe",
                "email": "not-an-email",
                "department_Id": "ENG",
                "role_Id": "7"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_all_uses_exact_wire_field_names() {
    let app = test_router().await;

    let response = app
        .oneshot(get_request("/emp-controller/get-all"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let list = body.as_array().unwrap();
    assert_eq!(list.len(), 2);

    // Clients depend on the mixed-case names
    assert_eq!(list[0]["department_Id"], "ENG");
    assert_eq!(list[0]["role_Id"], "7");
    assert!(list[0].get("department_id").is_none());
}

#[tokio::test]
async fn find_by_id_returns_employee_or_404() {
    let app = test_router().await;

    let response = app
        .oneshot(get_request("/emp-controller/find-by-id/7"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], 7);

    let app = test_router().await;
    let response = app
        .oneshot(get_request("/emp-controller/find-by-id/404"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn find_by_name_routes_to_firstname_lookup() {
    let app = test_router().await;

    let response = app
        .oneshot(get_request("/emp-controller/find-by-name/Jane"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let app = test_router().await;
    let response = app
        .oneshot(get_request("/emp-controller/find-by-name/nobody"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn get_all_by_department_returns_array() {
    let app = test_router().await;

    let response = app
        .oneshot(get_request("/emp-controller/getAllByDepartment/ENG"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);

    let app = test_router().await;
    let response = app
        .oneshot(get_request("/emp-controller/getAllByDepartment/EMPTY"))
        .await
        .unwrap();
    let body = body_json(response).await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn count_endpoints_return_plain_number() {
    let app = test_router().await;
    let response = app
        .oneshot(get_request("/emp-controller/count-by-department/ENG"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(3));

    let app = test_router().await;
    let response = app
        .oneshot(get_request("/emp-controller/count?departmentId=ENG"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!(3));

    let app = test_router().await;
    let response = app
        .oneshot(get_request("/emp-controller/count?departmentId=NOPE"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await, json!(0));
}

#[tokio::test]
async fn update_employee_returns_no_content() {
    let app = test_router().await;

    let response = app
        .oneshot(json_request(
            "PUT",
            "/emp-controller/update-emp/7",
            json!({
                "firstname": "Jane",
                "lastname": "Smith",
                "email": "jane@corp.test",
                "department_Id": "ENG",
                "role_Id": "7"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = test_router().await;
    let response = app
        .oneshot(json_request(
            "PUT",
            "/emp-controller/update-emp/404",
            json!({
                "firstname": "Jane",
                "lastname": "Smith",
                "email": "jane@corp.test",
                "department_Id": "ENG",
                "role_Id": "7"
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_employee_returns_accepted() {
    let app = test_router().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/emp-controller/delete-emp/7")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let app = test_router().await;
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/emp-controller/delete-emp/404")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn employee_health_returns_routing_message() {
    let app = test_router().await;

    let response = app
        .oneshot(get_request("/emp-controller/health"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"User service routing is working!");
}

#[tokio::test]
async fn root_health_reports_database_status() {
    let app = test_router().await;

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "healthy");
}
