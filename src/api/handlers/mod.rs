//! HTTP request handlers.

pub mod car_handler;

pub use car_handler::car_routes;
