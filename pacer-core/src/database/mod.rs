//! Runner persistence: the [`RunnerStore`] port and its adapters.

pub mod memory;
#[cfg(feature = "database")]
pub mod postgres;
pub mod ports;

pub use memory::InMemoryRunnerStore;
#[cfg(feature = "database")]
pub use postgres::PostgresRunnerStore;
pub use ports::RunnerStore;
