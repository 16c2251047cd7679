//! Common types, protocol definitions, and errors shared across `ast-decrypt-svc` crates.

pub mod error;
pub mod protocol;

pub use error::ServiceError;
