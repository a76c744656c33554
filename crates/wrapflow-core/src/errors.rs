//! Error types for wrapflow.

use crate::types::Px;
use thiserror::Error;

/// Errors reported by container configuration and the layout protocol.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Source cannot be absent")]
    InvalidSource,

    #[error("Layout state is stale: measured at generation {measured}, container is at {current}")]
    StaleLayout { measured: u64, current: u64 },

    #[error("Negative value for {name}: {value}")]
    NegativeDimension { name: &'static str, value: Px },
}
