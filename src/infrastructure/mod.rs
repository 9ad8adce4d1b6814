//! Infrastructure layer: filesystem access, output errors and service wiring

pub mod di;
pub mod error;
pub mod traits;

pub use error::{InfraError, InfraResult};
