//! Testing infrastructure for ctap integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Isolated temp directory plus a hermetic `ctap` invocation
//! - `assertions`: Checks on exit codes and rendered output
//! - `fixtures`: Sample TAP streams with their expected outcomes

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::Sample;
pub use world::{CliResult, TestWorld};
