//! Common test utilities for Lightbox CLI and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated library and home directories plus CLI helpers
//! - Assertion macros: `assert_exists!`, `assert_missing!`, `assert_output_contains!`
//! - Fixtures: the `2024-01-01 Trip` library and stand-in collaborator tools

#![allow(dead_code)]

pub mod assertions;
pub mod env;
pub mod fixtures;

pub use assertions::*;
pub use env::*;
pub use fixtures::*;
