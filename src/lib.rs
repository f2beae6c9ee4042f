//! Sign up API library
//!
//! Layered account sign up: the presentation layer validates requests,
//! the data layer hashes and stores accounts through domain ports, and the
//! infrastructure layer provides bcrypt, email and persistence adapters.

pub mod api;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod infrastructure;
