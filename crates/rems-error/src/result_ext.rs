use crate::{DomainError, Result, policy::ErrorPolicy};

/// Extension trait for `Result` enabling policy-driven emission without
/// contaminating core control-flow with side-effects.
///
/// Typical usage: at subsystem boundaries in applications, call
/// [`ResultExt::emit_event`] to emit errors via your chosen
/// [`ErrorPolicy`], while preserving the original result for further
/// handling.
pub trait ResultExt<T> {
    /// Emit the error using the provided policy and return the result unchanged
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self;
}

impl<T> ResultExt<T> for Result<T> {
    fn emit_event(self, policy: &impl ErrorPolicy) -> Self {
        if let Err(ref e) = self {
            policy.emit(e);
        }
        self
    }
}

/// Iterator helpers over `Result` to reduce boilerplate at boundaries.
///
/// - `collect_ok`: eagerly collects `Ok` items, returning the first error
///   (equivalent to `collect::<Result<Vec<_>>>()` but clearer at call sites).
/// - `first_error`: scans and returns the first error without allocation.
pub trait IterResultExt<T>: Sized {
    fn collect_ok(self) -> Result<Vec<T>>;
    fn first_error(self) -> Option<DomainError>;
}

impl<I, T> IterResultExt<T> for I
where
    I: IntoIterator<Item = Result<T>>,
{
    fn collect_ok(self) -> Result<Vec<T>> {
        let mut out = Vec::new();
        for r in self.into_iter() {
            out.push(r?);
        }
        Ok(out)
    }

    fn first_error(self) -> Option<DomainError> {
        for r in self.into_iter() {
            if let Err(e) = r {
                return Some(e);
            }
        }
        None
    }
}
