//! Failure taxonomy for the rems request-processing stack.
//!
//! Collaborating layers construct a [`DomainError`] at the point of
//! failure and propagate it unchanged up to a single outer boundary,
//! which discriminates via [`ErrorKind`] and maps each kind to an
//! external response. Construction never logs and never fails; emission
//! is opt-in through [`ErrorPolicy`] at subsystem boundaries.

pub mod domain;
pub mod kind;
pub mod policy;
pub mod report;
pub mod result_ext;

// public exports
pub use domain::{Cause, DomainError};
pub use kind::ErrorKind;
#[cfg(feature = "tracing")]
pub use policy::TracingPolicy;
pub use policy::{CombinedPolicy, ErrorPolicy, NoopPolicy};
pub use report::ErrorReport;
pub use result_ext::{IterResultExt, ResultExt};

pub type Result<T> = std::result::Result<T, DomainError>;
