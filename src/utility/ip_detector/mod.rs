//! Public IP detection with consensus.
//!
//! Providers are asked one at a time, in random order. Every answer is
//! tallied by its canonical string form and the run ends as soon as one
//! address has been reported `quorum` times. A provider that fails or
//! answers without an address is logged and skipped, never fatal on its own.
//!
//! Every attempted provider leaves exactly one record in the info log, so
//! `--verbose` can show which providers disagreed and why.
//!
//! # Example
//!
//! ```rust,ignore
//! let info_log = SharedInfoLog::new();
//! let detector = IpDetector::new(build_registry(&settings.providers, &client), info_log.clone());
//!
//! info_log.clear().await;
//! let ip = detector.resolve(3).await?;
//! println!("{}", ip);
//! ```

pub mod errors;
pub mod functions;
pub mod impls;
pub mod types;
