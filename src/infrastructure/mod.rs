// Infrastructure layer module
// Contains database, hashing and validation adapters
// Follows Hexagonal Architecture

pub mod cryptography;
pub mod repositories;
pub mod validators;
