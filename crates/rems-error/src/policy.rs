use crate::DomainError;

/// A policy for emitting errors at subsystem boundaries.
///
/// Libraries should not log or print directly; instead, they return
/// [`crate::Result`] and let the application install an `ErrorPolicy`
/// to decide how to present or route errors. Emission can be anything:
/// tracing logs, a UI event bus, custom telemetry.
pub trait ErrorPolicy: Send + Sync {
    /// Emit the error according to the policy (e.g., log, send to UI, etc.)
    fn emit(&self, error: &DomainError);
}

/// A no-operation policy that does nothing
#[derive(Debug, Clone, Default)]
pub struct NoopPolicy;

impl ErrorPolicy for NoopPolicy {
    fn emit(&self, _error: &DomainError) {
        // Intentionally do nothing
    }
}

/// A policy that emits via tracing: transient errors at WARN, everything
/// else at ERROR, with the kind code as a structured field.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Default)]
pub struct TracingPolicy;

#[cfg(feature = "tracing")]
impl ErrorPolicy for TracingPolicy {
    fn emit(&self, error: &DomainError) {
        use tracing::{Level, event};

        if error.is_transient() {
            event!(Level::WARN, kind = error.kind().code(), error = %error);
        } else {
            event!(Level::ERROR, kind = error.kind().code(), error = %error);
        }
    }
}

/// A composite policy that delegates emission to multiple policies in
/// insertion order.
#[derive(Default)]
pub struct CombinedPolicy {
    policies: Vec<Box<dyn ErrorPolicy>>,
}

impl CombinedPolicy {
    /// Create an empty CombinedPolicy.
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    /// Add a policy by value (boxed internally). Consumes and returns Self for builder-style chaining.
    pub fn push<P: ErrorPolicy + 'static>(mut self, policy: P) -> Self {
        self.policies.push(Box::new(policy));
        self
    }

    /// Add an already boxed policy. Consumes and returns Self for builder-style chaining.
    pub fn add_boxed(mut self, policy: Box<dyn ErrorPolicy>) -> Self {
        self.policies.push(policy);
        self
    }
}

impl ErrorPolicy for CombinedPolicy {
    fn emit(&self, error: &DomainError) {
        for p in &self.policies {
            p.emit(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    struct RecordingPolicy {
        seen: Arc<Mutex<Vec<String>>>,
        tag: &'static str,
    }

    impl RecordingPolicy {
        fn new(seen: Arc<Mutex<Vec<String>>>, tag: &'static str) -> Self {
            Self { seen, tag }
        }
    }

    impl ErrorPolicy for RecordingPolicy {
        fn emit(&self, error: &DomainError) {
            self.seen
                .lock()
                .expect("recording lock")
                .push(format!("{}:{}", self.tag, error.kind().code()));
        }
    }

    #[test]
    fn combined_policy_delegates_in_insertion_order() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let policy = CombinedPolicy::new()
            .push(RecordingPolicy::new(Arc::clone(&seen), "a"))
            .push(RecordingPolicy::new(Arc::clone(&seen), "b"));

        policy.emit(&DomainError::try_again());

        let seen = seen.lock().expect("recording lock");
        assert_eq!(seen.as_slice(), ["a:TRY_AGAIN", "b:TRY_AGAIN"]);
    }

    #[test]
    fn noop_policy_accepts_every_kind() {
        let policy = NoopPolicy;
        policy.emit(&DomainError::not_implemented());
        policy.emit(&DomainError::data_error("m", serde_json::Value::Null));
    }

    #[cfg(feature = "tracing")]
    #[test]
    fn tracing_policy_emit_does_not_panic() {
        let _ = tracing_subscriber::fmt::try_init();
        TracingPolicy.emit(&DomainError::try_again().with_message("conflict"));
        TracingPolicy.emit(&DomainError::payload_too_large());
    }
}
