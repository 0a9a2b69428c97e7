pub mod axum_http;
pub mod payex;
pub mod postgres;
