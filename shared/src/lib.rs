//! Shared brewing logic for Krafty Brew Coffee
//!
//! This crate holds the pure computations behind the brew planner: the
//! flavor estimator and the pour-over recipe planner. It is used by the
//! browser frontend (via WASM) and by the native command-line host.

pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
