//! Car handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CarResponse, CreateCar, EngineType};
use crate::errors::AppResult;
use crate::types::{ApiResponse, Created, NoContent};

/// Car registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCarRequest {
    /// License plate, unique across the fleet
    #[validate(length(min = 1, message = "License plate is required"))]
    #[schema(example = "B-FL 8213")]
    pub license_plate: String,
    /// Number of passenger seats
    #[validate(range(min = 1, message = "A car needs at least one seat"))]
    #[schema(example = 4)]
    pub seat_count: i16,
    /// Whether the car is a convertible
    #[serde(default)]
    pub convertible: bool,
    /// Driver-facing rating between 0 and 5
    #[validate(range(min = 0.0, max = 5.0, message = "Rating must be between 0 and 5"))]
    #[schema(example = 4.5)]
    pub rating: Option<f64>,
    /// Engine type
    pub engine_type: EngineType,
    /// Manufacturer name
    #[schema(example = "Toyota")]
    pub manufacturer: Option<String>,
}

impl From<CreateCarRequest> for CreateCar {
    fn from(request: CreateCarRequest) -> Self {
        Self {
            license_plate: request.license_plate,
            seat_count: request.seat_count,
            convertible: request.convertible,
            rating: request.rating,
            engine_type: request.engine_type,
            manufacturer: request.manufacturer,
        }
    }
}

/// Availability filter for car listings
#[derive(Debug, Deserialize, IntoParams)]
pub struct AvailabilityQuery {
    /// Availability flag the listed cars must match
    pub is_available: bool,
}

/// Create car routes
pub fn car_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cars).post(create_car))
        .route("/:id", get(get_car).delete(delete_car))
        .route("/:id/select", post(select_car))
        .route("/:id/deselect", post(deselect_car))
}

/// Register a new car
#[utoipa::path(
    post,
    path = "/cars",
    tag = "Cars",
    request_body = CreateCarRequest,
    responses(
        (status = 201, description = "Car registered successfully", body = CarResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "License plate already registered")
    )
)]
pub async fn create_car(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCarRequest>,
) -> AppResult<Created<CarResponse>> {
    let car = state.car_service.create_car(payload.into()).await?;

    Ok(Created(CarResponse::from(car)))
}

/// Get a car by ID
#[utoipa::path(
    get,
    path = "/cars/{id}",
    tag = "Cars",
    params(("id" = Uuid, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car found", body = CarResponse),
        (status = 404, description = "Car not found")
    )
)]
pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<CarResponse>>> {
    let car = state.car_service.find_car(id).await?;

    Ok(Json(ApiResponse::success(CarResponse::from(car))))
}

/// Soft delete a car
#[utoipa::path(
    delete,
    path = "/cars/{id}",
    tag = "Cars",
    params(("id" = Uuid, Path, description = "Car identifier")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 404, description = "Car not found")
    )
)]
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    state.car_service.delete_car(id).await?;

    Ok(NoContent)
}

/// Assign a car to a driver
#[utoipa::path(
    post,
    path = "/cars/{id}/select",
    tag = "Cars",
    params(("id" = Uuid, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car selected"),
        (status = 404, description = "Car not found"),
        (status = 409, description = "Car already in use")
    )
)]
pub async fn select_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.car_service.select_car(id).await?;

    Ok(Json(ApiResponse::message("Car selected")))
}

/// Release a car from its driver
#[utoipa::path(
    post,
    path = "/cars/{id}/deselect",
    tag = "Cars",
    params(("id" = Uuid, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car released"),
        (status = 404, description = "Car not found")
    )
)]
pub async fn deselect_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.car_service.deselect_car(id).await?;

    Ok(Json(ApiResponse::message("Car released")))
}

/// List cars by availability
#[utoipa::path(
    get,
    path = "/cars",
    tag = "Cars",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Cars matching the availability flag", body = [CarResponse])
    )
)]
pub async fn list_cars(
    State(state): State<AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<ApiResponse<Vec<CarResponse>>>> {
    let cars = state
        .car_service
        .find_cars_by_availability(query.is_available)
        .await?;

    let cars = cars.into_iter().map(CarResponse::from).collect();
    Ok(Json(ApiResponse::success(cars)))
}
