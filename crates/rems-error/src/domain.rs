use serde_json::Value;

use crate::ErrorKind;

/// Boxed lower-level failure retained as a diagnostic cause.
pub type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The closed set of failure signals raised by the request-processing
/// layers. Values are immutable after construction and carry no state
/// beyond their fields; they propagate unchanged to the boundary that
/// consumes them.
///
/// The wrapped cause is reachable through [`DomainError::cause`] and
/// `std::error::Error::source`, never through `Display`.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Serious error in data, e.g. a referenced organization is missing.
    /// `data` identifies the implicated record and is stored as-is.
    #[error("{message}")]
    Data {
        message: String,
        data: Value,
        #[source]
        source: Option<Cause>,
    },

    /// Request method or target is recognized but has no handler in
    /// this version.
    #[error("{}", .message.as_deref().unwrap_or("request method or target not implemented"))]
    NotImplemented {
        message: Option<String>,
        #[source]
        source: Option<Cause>,
    },

    #[error("{}", .message.as_deref().unwrap_or("request payload too large"))]
    PayloadTooLarge {
        message: Option<String>,
        #[source]
        source: Option<Cause>,
    },

    /// Transient condition, e.g. an sql transaction conflict. The same
    /// operation may succeed if retried; retrying is the caller's job.
    #[error("{}", .message.as_deref().unwrap_or("transient failure, safe to retry"))]
    TryAgain {
        message: Option<String>,
        #[source]
        source: Option<Cause>,
    },

    #[error("{}", .message.as_deref().unwrap_or("unsupported media type"))]
    UnsupportedMediaType {
        message: Option<String>,
        #[source]
        source: Option<Cause>,
    },

    /// Residual category for failures not modeled above.
    #[error("{}", .message.as_deref().unwrap_or("unclassified error"))]
    Unclassified {
        message: Option<String>,
        #[source]
        source: Option<Cause>,
    },
}

impl DomainError {
    pub fn data_error(message: impl Into<String>, data: impl Into<Value>) -> Self {
        Self::Data {
            message: message.into(),
            data: data.into(),
            source: None,
        }
    }

    pub fn not_implemented() -> Self {
        Self::NotImplemented {
            message: None,
            source: None,
        }
    }

    pub fn payload_too_large() -> Self {
        Self::PayloadTooLarge {
            message: None,
            source: None,
        }
    }

    pub fn try_again() -> Self {
        Self::TryAgain {
            message: None,
            source: None,
        }
    }

    pub fn unsupported_media_type() -> Self {
        Self::UnsupportedMediaType {
            message: None,
            source: None,
        }
    }

    pub fn unclassified() -> Self {
        Self::Unclassified {
            message: None,
            source: None,
        }
    }

    /// Attach or replace the human-readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        let msg = message.into();
        match &mut self {
            Self::Data { message, .. } => *message = msg,
            Self::NotImplemented { message, .. }
            | Self::PayloadTooLarge { message, .. }
            | Self::TryAgain { message, .. }
            | Self::UnsupportedMediaType { message, .. }
            | Self::Unclassified { message, .. } => *message = Some(msg),
        }
        self
    }

    /// Attach the underlying failure that triggered this one.
    /// Accepts any error type as well as plain strings.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        let cause = cause.into();
        match &mut self {
            Self::Data { source, .. }
            | Self::NotImplemented { source, .. }
            | Self::PayloadTooLarge { source, .. }
            | Self::TryAgain { source, .. }
            | Self::UnsupportedMediaType { source, .. }
            | Self::Unclassified { source, .. } => *source = Some(cause),
        }
        self
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Data { .. } => ErrorKind::Data,
            Self::NotImplemented { .. } => ErrorKind::NotImplemented,
            Self::PayloadTooLarge { .. } => ErrorKind::PayloadTooLarge,
            Self::TryAgain { .. } => ErrorKind::TryAgain,
            Self::UnsupportedMediaType { .. } => ErrorKind::UnsupportedMediaType,
            Self::Unclassified { .. } => ErrorKind::Unclassified,
        }
    }

    /// The message supplied at construction, if any. `Data` always has
    /// one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Data { message, .. } => Some(message),
            Self::NotImplemented { message, .. }
            | Self::PayloadTooLarge { message, .. }
            | Self::TryAgain { message, .. }
            | Self::UnsupportedMediaType { message, .. }
            | Self::Unclassified { message, .. } => message.as_deref(),
        }
    }

    /// The opaque payload attached to a `Data` error, unexamined and
    /// unchanged since construction.
    pub fn data(&self) -> Option<&Value> {
        match self {
            Self::Data { data, .. } => Some(data),
            _ => None,
        }
    }

    /// The wrapped cause, for diagnostic chains.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Data { source, .. }
            | Self::NotImplemented { source, .. }
            | Self::PayloadTooLarge { source, .. }
            | Self::TryAgain { source, .. }
            | Self::UnsupportedMediaType { source, .. }
            | Self::Unclassified { source, .. } => {
                source.as_deref().map(|c| c as &(dyn std::error::Error + 'static))
            }
        }
    }

    /// True when the failure is safe to retry.
    pub fn is_transient(&self) -> bool {
        self.kind().is_transient()
    }
}

impl From<std::io::Error> for DomainError {
    fn from(err: std::io::Error) -> Self {
        Self::unclassified().with_cause(err)
    }
}

impl From<serde_json::Error> for DomainError {
    fn from(err: serde_json::Error) -> Self {
        Self::unclassified().with_cause(err)
    }
}
