//! Core Kernel - Foundational types and utilities for review scheduling
//!
//! This crate provides the fundamental building blocks used across the domain modules:
//! - Strongly-typed identifiers and the prison number value object
//! - Temporal types: inclusive date ranges, calendar arithmetic, and injectable clocks
//! - Port error type shared by every adapter

pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use temporal::{Clock, SystemClock, FixedClock, DateRange, TemporalError};
pub use identifiers::{ReviewScheduleId, EventId, PrisonNumber};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
