//! A minimal test-execution micro-framework.
//!
//! Register a test case with [`test`] (or [`test_async`] for a suspending
//! body), and the framework executes it on the spot, contains any failure,
//! and prints one pass/fail line. Assertions are written with
//! [`expect`]`(actual).to_be(expected)` and short-circuit with `?`.
//!
//! Tests can also be registered statically with the [`def_test`] attribute
//! and run in one batch with [`test_run`].

pub mod case;
pub mod exec;
pub mod expect;
pub mod mock;
pub mod outcome;
pub mod report;
pub mod runner;

// Re-export the def_test macro from the microtest-macros crate
pub use microtest_macros::def_test;

// Re-exported for the code generated by #[def_test]
#[doc(hidden)]
pub use linkme;

// Re-export commonly used types
pub use case::{TestCase, TestDescriptor, Testable};
pub use expect::{expect, AssertionError, Expectation};
pub use mock::MockFn;
pub use outcome::{Failure, IntoOutcome, Outcome, TestResult};
pub use report::{ConsoleReporter, Report};
pub use runner::{TestRunner, TestStats, TEST_CASES};

// Re-export the runner entry points
pub use runner::{test, test_async, test_run, test_run_ok, tests_failed};
