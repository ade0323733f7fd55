//! A call-recording function double.
//!
//! Wraps a behavior closure and records every argument tuple it is invoked
//! with, so a test can assert on the call log afterwards:
//!
//! ```
//! use microtest::{expect, MockFn};
//!
//! let double = MockFn::returning(4);
//! double.call((2, 2));
//! assert!(expect(double.calls()).to_be(vec![(2, 2)]).is_ok());
//! ```

use std::sync::{Mutex, PoisonError};

pub struct MockFn<A, R> {
    calls: Mutex<Vec<A>>,
    behavior: Box<dyn Fn(&A) -> R + Send + Sync>,
}

impl<A: Clone, R> MockFn<A, R> {
    /// A double driven by the given behavior.
    pub fn new(behavior: impl Fn(&A) -> R + Send + Sync + 'static) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            behavior: Box::new(behavior),
        }
    }

    /// A double that answers every call with the same value.
    pub fn returning(value: R) -> Self
    where
        R: Clone + Send + Sync + 'static,
    {
        Self::new(move |_| value.clone())
    }

    /// Invoke the double, recording the arguments.
    pub fn call(&self, args: A) -> R {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(args.clone());
        (self.behavior)(&args)
    }

    /// Every recorded call, in invocation order.
    pub fn calls(&self) -> Vec<A> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Clear the call log.
    pub fn reset(&self) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
