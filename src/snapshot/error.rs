//! Snapshot error types.

use crate::core::InvariantViolation;
use thiserror::Error;

/// Errors that can occur while capturing or restoring a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Snapshot claims more disks than a run accepts
    #[error("Snapshot has {found} disks, maximum {max}")]
    TooManyDisks { found: u32, max: u32 },

    /// Replaying the recorded moves does not lead to the recorded pegs
    #[error("Snapshot history does not reproduce its pegs: {0}")]
    HistoryMismatch(String),

    /// Restored pegs break one or more invariants
    #[error("Snapshot validation failed: {}", join(.0))]
    ValidationFailed(Vec<InvariantViolation>),
}

fn join(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
