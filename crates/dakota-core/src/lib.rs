#![deny(missing_docs)]
#![doc = "Core error types shared by the Dakota experiment crates."]

pub mod errors;

pub use errors::{DakotaError, ErrorInfo};
