//! Ports and Adapters Infrastructure
//!
//! Domain crates define port traits for everything they need from the outside
//! world (persistence, event publishing). Adapters implement those traits and
//! report failures through the shared [`PortError`].
//!
//! ```text
//!        Domain service
//!              │
//!              ▼
//!   ReviewSchedulePort / ReviewEventPublisher
//!        ▲                       ▲
//!   database adapter      queue / in-memory adapter
//! ```

use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// All adapter implementations report failures through this type so that
/// domain services can handle them uniformly.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// Connection to the underlying system failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// Port traits extend this marker so they are thread-safe and usable
/// behind `Arc` in async services.
pub trait DomainPort: Send + Sync + 'static {}
