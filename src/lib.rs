pub mod app;
pub mod config;
pub mod middlewares;
pub mod routes;
pub mod services;
pub mod types;
pub mod utils;
