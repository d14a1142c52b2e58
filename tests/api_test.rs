//! Integration tests for API endpoints.
//!
//! These tests drive the router with a mock car service, so no
//! database connection is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use fleet_service::api::{create_router, AppState};
use fleet_service::domain::{Car, CarResponse, CreateCar, EngineType};
use fleet_service::errors::{AppError, AppResult};
use fleet_service::infra::Database;
use fleet_service::services::CarService;

// =============================================================================
// Mock Service for Testing
// =============================================================================

const KNOWN_ID: Uuid = Uuid::from_u128(0x11111111_1111_1111_1111_111111111111);
const IN_USE_ID: Uuid = Uuid::from_u128(0x22222222_2222_2222_2222_222222222222);

fn sample_car(id: Uuid, is_available: bool) -> Car {
    Car {
        id,
        license_plate: "B-FL 8213".to_string(),
        seat_count: 4,
        convertible: false,
        rating: Some(4.5),
        engine_type: EngineType::Electric,
        manufacturer: Some("Toyota".to_string()),
        is_available,
        deleted: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

/// Mock car service that returns predefined responses
struct MockCarService;

#[async_trait]
impl CarService for MockCarService {
    async fn find_car(&self, id: Uuid) -> AppResult<Car> {
        match id {
            KNOWN_ID => Ok(sample_car(id, true)),
            IN_USE_ID => Ok(sample_car(id, false)),
            _ => Err(AppError::EntityNotFound(id)),
        }
    }

    async fn create_car(&self, data: CreateCar) -> AppResult<Car> {
        let mut car = sample_car(Uuid::new_v4(), true);
        car.license_plate = data.license_plate;
        car.seat_count = data.seat_count;
        car.engine_type = data.engine_type;
        Ok(car)
    }

    async fn delete_car(&self, id: Uuid) -> AppResult<()> {
        self.find_car(id).await.map(|_| ())
    }

    async fn select_car(&self, id: Uuid) -> AppResult<()> {
        let car = self.find_car(id).await?;
        if car.is_in_use() {
            return Err(AppError::CarAlreadyInUse(id));
        }
        Ok(())
    }

    async fn deselect_car(&self, id: Uuid) -> AppResult<()> {
        self.find_car(id).await.map(|_| ())
    }

    async fn find_cars_by_availability(&self, is_available: bool) -> AppResult<Vec<Car>> {
        Ok(vec![
            sample_car(Uuid::new_v4(), is_available),
            sample_car(Uuid::new_v4(), is_available),
        ])
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn test_app() -> Router {
    let database = Arc::new(Database::from_connection(DatabaseConnection::default()));
    let state = AppState::new(Arc::new(MockCarService), database);
    create_router(state)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

// =============================================================================
// Endpoint Tests
// =============================================================================

#[tokio::test]
async fn test_root_endpoint() {
    let response = test_app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"]["/cars/{id}"].is_object());
    assert!(body["paths"]["/cars/{id}/select"].is_object());
}

#[tokio::test]
async fn test_get_car_success() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri(format!("/cars/{}", KNOWN_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["license_plate"], "B-FL 8213");
    assert_eq!(body["data"]["is_available"], true);
}

#[tokio::test]
async fn test_get_car_not_found() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri(format!("/cars/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "ENTITY_NOT_FOUND");
}

#[tokio::test]
async fn test_create_car_returns_created() {
    let payload = json!({
        "license_plate": "M-XY 401",
        "seat_count": 2,
        "convertible": true,
        "engine_type": "gas"
    });

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cars")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["data"]["license_plate"], "M-XY 401");
    assert_eq!(body["data"]["engine_type"], "gas");
}

#[tokio::test]
async fn test_create_car_rejects_invalid_seat_count() {
    let payload = json!({
        "license_plate": "M-XY 401",
        "seat_count": 0,
        "engine_type": "gas"
    });

    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/cars")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_select_car_already_in_use_conflicts() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/cars/{}/select", IN_USE_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CAR_ALREADY_IN_USE");
}

#[tokio::test]
async fn test_select_available_car_succeeds() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/cars/{}/select", KNOWN_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_deselect_in_use_car_succeeds() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(format!("/cars/{}/deselect", IN_USE_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_delete_car_returns_no_content() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/cars/{}", KNOWN_ID))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_list_cars_by_availability() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/cars?is_available=true")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_list_cars_requires_availability_flag() {
    let response = test_app()
        .oneshot(Request::builder().uri("/cars").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Domain Model Tests
// =============================================================================

#[tokio::test]
async fn test_engine_type_display() {
    assert_eq!(EngineType::Gas.to_string(), "gas");
    assert_eq!(EngineType::Electric.to_string(), "electric");
    assert_eq!(EngineType::Hybrid.to_string(), "hybrid");
}

#[tokio::test]
async fn test_engine_type_from_str() {
    assert_eq!(EngineType::from("electric"), EngineType::Electric);
    assert_eq!(EngineType::from("hybrid"), EngineType::Hybrid);
    // Unknown values default to Gas
    assert_eq!(EngineType::from("steam"), EngineType::Gas);
}

#[tokio::test]
async fn test_car_assignment_state() {
    let mut car = sample_car(Uuid::new_v4(), true);
    assert!(!car.is_in_use());

    car.assign();
    assert!(car.is_in_use());
    assert!(!car.is_available);

    car.release();
    assert!(car.is_available);
}

#[tokio::test]
async fn test_car_soft_delete_keeps_record() {
    let mut car = sample_car(Uuid::new_v4(), true);
    assert!(!car.deleted);

    car.mark_deleted();
    assert!(car.deleted);
    // Soft delete does not touch availability
    assert!(car.is_available);
}

#[tokio::test]
async fn test_car_response_from_car() {
    let car = sample_car(KNOWN_ID, false);
    let response = CarResponse::from(car);

    assert_eq!(response.id, KNOWN_ID);
    assert_eq!(response.license_plate, "B-FL 8213");
    assert!(!response.is_available);
}

// =============================================================================
// Error Type Tests
// =============================================================================

#[tokio::test]
async fn test_app_error_status_codes() {
    use axum::response::IntoResponse;

    let not_found = AppError::EntityNotFound(Uuid::new_v4());
    assert_eq!(
        not_found.into_response().status(),
        StatusCode::NOT_FOUND
    );

    let in_use = AppError::CarAlreadyInUse(Uuid::new_v4());
    assert_eq!(in_use.into_response().status(), StatusCode::CONFLICT);

    let constraints = AppError::ConstraintsViolation("duplicate".to_string());
    assert_eq!(constraints.into_response().status(), StatusCode::CONFLICT);

    let validation = AppError::validation("invalid field");
    assert_eq!(
        validation.into_response().status(),
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_constraint_violation_message_is_preserved() {
    let error = AppError::ConstraintsViolation(
        "duplicate key value violates unique constraint".to_string(),
    );

    assert!(error.to_string().contains("unique constraint"));
}
