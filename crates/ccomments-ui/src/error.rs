//! # Design
//!
//! - Provide structured, constant-message errors for the overlay core.
//! - Capture context (sink names, field ids, operations) in fields instead of
//!   interpolating it into messages.
//! - None of these escape to the host page; callers log and continue.

use thiserror::Error;

use crate::core::attach::FieldId;

/// Failures raised by a persistence sink.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The sink's backing capability is not present in this environment.
    #[error("storage sink unavailable")]
    Unavailable {
        /// Sink that was queried.
        sink: &'static str,
    },
    /// The backend rejected a read.
    #[error("storage read failed")]
    Read {
        /// Sink that failed.
        sink: &'static str,
        /// Backend-provided detail.
        detail: String,
    },
    /// The backend rejected a write.
    #[error("storage write failed")]
    Write {
        /// Sink that failed.
        sink: &'static str,
        /// Backend-provided detail.
        detail: String,
    },
    /// Stored payload did not decode as a macro collection.
    #[error("stored macros could not be decoded")]
    Decode {
        /// Sink that returned the payload.
        sink: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
    /// Macro collection could not be encoded.
    #[error("macros could not be encoded")]
    Encode {
        /// Sink the payload was destined for.
        sink: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}

/// Failures raised by macro operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MacroError {
    /// Macro names must be non-empty after trimming.
    #[error("macro name is required")]
    EmptyName,
}

/// Failures raised while attaching to or editing host fields.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AttachError {
    /// Field is not known to the host or the manager.
    #[error("unknown field")]
    UnknownField {
        /// Field identity.
        field: FieldId,
    },
    /// No container ancestor was found for the field.
    #[error("field container missing")]
    MissingContainer {
        /// Field identity.
        field: FieldId,
    },
    /// No insertion point was found for the toolbar.
    #[error("toolbar anchor missing")]
    MissingAnchor {
        /// Field identity.
        field: FieldId,
    },
    /// A host document call failed.
    #[error("host operation failed")]
    Host {
        /// Operation that failed.
        operation: &'static str,
        /// Host-provided detail.
        detail: String,
    },
}

impl StorageError {
    /// Sink the failure originated from.
    #[must_use]
    pub fn sink(&self) -> &'static str {
        match self {
            Self::Unavailable { sink }
            | Self::Read { sink, .. }
            | Self::Write { sink, .. }
            | Self::Decode { sink, .. }
            | Self::Encode { sink, .. } => *sink,
        }
    }
}

impl AttachError {
    /// Build a host failure with detail text.
    #[must_use]
    pub fn host(operation: &'static str, detail: impl Into<String>) -> Self {
        Self::Host {
            operation,
            detail: detail.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn storage_errors_report_their_sink() {
        let err = StorageError::Write {
            sink: "local",
            detail: "quota".to_string(),
        };
        assert_eq!(err.sink(), "local");
        assert_eq!(err.to_string(), "storage write failed");
    }

    #[test]
    fn decode_errors_keep_source() {
        let Err(source) = serde_json::from_str::<Vec<u8>>("{") else {
            return;
        };
        let err = StorageError::Decode {
            sink: "userscript",
            source,
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn host_helper_builds_variant() {
        let err = AttachError::host("insert_before", "detached");
        assert!(matches!(
            err,
            AttachError::Host {
                operation: "insert_before",
                ..
            }
        ));
    }
}
