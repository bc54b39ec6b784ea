//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! review scheduling test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `memory`: In-memory port adapters
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators
//! - `logging`: One-time tracing initialisation for tests

pub mod fixtures;
pub mod builders;
pub mod memory;
pub mod assertions;
pub mod generators;
pub mod logging;

pub use fixtures::*;
pub use builders::*;
pub use memory::*;
pub use assertions::*;
pub use generators::*;
pub use logging::*;
