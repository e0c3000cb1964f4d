//! Structured, log-friendly view of an error and its cause chain.
//!
//! This is the diagnostics surface: the catching layer (a logger or an
//! API-error serializer) reads the kind code, message, attached data,
//! and the stringified cause chain from here. `Display` on the error
//! itself never includes the chain.

use std::error::Error;

use serde::Serialize;
use serde_json::Value;

use crate::DomainError;

/// Serializable snapshot of a [`DomainError`].
#[derive(Debug, Serialize)]
pub struct ErrorReport<'a> {
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<&'a Value>,
    /// Causes outermost-first, rendered via `Display`.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub cause_chain: Vec<String>,
}

impl DomainError {
    pub fn report(&self) -> ErrorReport<'_> {
        let mut cause_chain = Vec::new();
        let mut next = self.cause();
        while let Some(err) = next {
            cause_chain.push(err.to_string());
            next = err.source();
        }
        ErrorReport {
            kind: self.kind().code(),
            message: self.message(),
            data: self.data(),
            cause_chain,
        }
    }

    /// Convert the report to a JSON value without pretty whitespace.
    pub fn to_value(&self) -> Option<Value> {
        serde_json::to_value(self.report()).ok()
    }

    /// Convert the report to a pretty JSON string (for logs or UI).
    pub fn pretty_json(&self) -> Option<String> {
        serde_json::to_string_pretty(&self.report()).ok()
    }
}
