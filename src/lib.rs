//! Deterministic logical-id and physical-name derivation for serverless
//! infrastructure templates.
//!
//! Every function here is a pure transformation of its arguments: the same
//! inputs always produce byte-identical outputs, so ids stay stable across
//! re-deployments and can be recognized again later.

pub mod config;
pub mod context;
pub mod error;
pub mod naming;

pub use context::{Context, Overrides};
pub use error::{Error, Result};
