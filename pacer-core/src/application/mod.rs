//! Application services composed from the store, derivation and engine.

pub mod runner_service;

pub use runner_service::RunnerService;
