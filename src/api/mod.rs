// API layer module (controllers and their axum adapters)
// Follows Hexagonal Architecture - API is an adapter

pub mod controllers;
pub mod errors;
pub mod handlers;
pub mod helpers;
pub mod protocols;
