//! Application layer: entry sources and graph services
//!
//! This layer orchestrates domain logic and depends on I/O boundary traits.

pub mod error;
pub mod error_ext;
pub mod services;
pub mod source;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use source::{parse_entries, parse_line_entries, parse_toml_entries};
