use alloc::sync::Arc;
use core::sync::atomic::{AtomicU64, Ordering};

/// A thread-safe floating point parameter.
///
/// Uses atomic operations to allow safe concurrent access from a control
/// thread and the audio thread. Cloning shares the underlying value, so a
/// host binding can keep a handle while the processor owns the original.
#[derive(Clone)]
pub struct Parameter {
    value: Arc<AtomicU64>,
}

impl Parameter {
    /// Creates a new Parameter with an initial value.
    pub fn new(value: f64) -> Self {
        Parameter {
            value: Arc::new(AtomicU64::new(value.to_bits())),
        }
    }

    /// Sets the parameter value. Last write wins.
    pub fn set(&self, value: f64) {
        self.value.store(value.to_bits(), Ordering::Relaxed);
    }

    /// Gets the current parameter value.
    pub fn get(&self) -> f64 {
        f64::from_bits(self.value.load(Ordering::Relaxed))
    }
}
