// Domain layer module exports
// Domain is independent of transport and infrastructure concerns

pub mod account;
pub mod errors;
pub mod repositories;
pub mod usecases;
