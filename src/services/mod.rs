pub mod auth_service;
pub mod simulated_api;

pub use auth_service::authenticate;
