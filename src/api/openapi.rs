//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::car_handler;
use crate::domain::{CarResponse, EngineType};

/// OpenAPI documentation for the Fleet Service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fleet Service",
        version = "0.1.0",
        description = "Car management backend for a ride-hailing platform",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        car_handler::create_car,
        car_handler::get_car,
        car_handler::delete_car,
        car_handler::select_car,
        car_handler::deselect_car,
        car_handler::list_cars,
    ),
    components(
        schemas(
            EngineType,
            CarResponse,
            car_handler::CreateCarRequest,
        )
    ),
    tags(
        (name = "Cars", description = "Car management operations")
    )
)]
pub struct ApiDoc;
