//! Thin HTTP GET helper shared by every IP provider.

pub mod errors;
pub mod functions;

pub use errors::HttpError;
pub use functions::{create_client, http_get};
