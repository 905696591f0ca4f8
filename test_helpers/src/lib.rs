//! Test helpers shared across crates in the tryout workspace.
//!
//! Provides outcome assertions that report through `anyhow`, jail wrappers
//! for configuration tests and a scoped capture of `tracing` output.

pub mod figment;
pub mod logs;
pub mod outcome;
