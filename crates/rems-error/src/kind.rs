//! Coarse-grained classification for programmatic handling of errors.
//!
//! Boundary layers match on [`ErrorKind`] instead of inspecting string
//! messages; the stable [`ErrorKind::code`] strings are what structured
//! logs and external response mappers key on.

use serde::{Deserialize, Serialize};

/// Discriminant for [`crate::DomainError`], one per variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Data,
    NotImplemented,
    PayloadTooLarge,
    TryAgain,
    UnsupportedMediaType,
    Unclassified,
}

impl ErrorKind {
    /// Stable code string for logs and host-boundary mapping.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Data => "DATA_ERROR",
            Self::NotImplemented => "NOT_IMPLEMENTED",
            Self::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            Self::TryAgain => "TRY_AGAIN",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::Unclassified => "UNCLASSIFIED",
        }
    }

    /// True when the failure is safe to retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::TryAgain)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
