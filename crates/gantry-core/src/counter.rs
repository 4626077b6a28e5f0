use std::sync::atomic::{AtomicI64, Ordering};

/// Process-wide demo counter backing the `increment`/`status`/`reset`
/// tools. Atomic so concurrent `tools/call` invocations from different
/// requests cannot lose updates.
#[derive(Debug, Default)]
pub struct Counter(AtomicI64);

impl Counter {
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicI64::new(0))
    }

    /// Add one and return the new value.
    pub fn increment(&self) -> i64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Current value.
    pub fn value(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }

    /// Reset to zero. Returns the new value for symmetry with `increment`.
    pub fn reset(&self) -> i64 {
        self.0.store(0, Ordering::SeqCst);
        0
    }
}
