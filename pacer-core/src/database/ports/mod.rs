pub mod runners;

pub use runners::RunnerStore;
