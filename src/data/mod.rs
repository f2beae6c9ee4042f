// Data layer: use case implementations and the ports they depend on

pub mod protocols;
pub mod usecases;
