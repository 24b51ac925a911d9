pub mod places_service;
pub mod point_types;
pub mod session_token;
pub mod types;
