//! Test case types: the owned, eagerly-executed form and the `const`
//! descriptor form used by the static registry.

use std::fmt;
use std::future::Future;

use anyhow::anyhow;
use futures_util::future::BoxFuture;

use crate::exec;
use crate::outcome::{Failure, IntoOutcome, Outcome, TestResult};

/// A test body, already adapted for the execution engine.
pub enum TestFn {
    Sync(Box<dyn FnOnce() -> TestResult>),
    Async(BoxFuture<'static, TestResult>),
}

impl fmt::Debug for TestFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestFn::Sync(_) => f.write_str("TestFn::Sync"),
            TestFn::Async(_) => f.write_str("TestFn::Async"),
        }
    }
}

/// A named unit of verification: a title and a body. Immutable once built,
/// consumed by execution.
#[derive(Debug)]
pub struct TestCase {
    title: String,
    body: TestFn,
}

impl TestCase {
    /// A case with a synchronous body.
    pub fn sync<R, F>(title: impl Into<String>, callback: F) -> Self
    where
        R: IntoOutcome,
        F: FnOnce() -> R + 'static,
    {
        Self::build(
            title,
            TestFn::Sync(Box::new(move || callback().into_outcome())),
        )
    }

    /// A case whose body suspends; the engine awaits it before settling.
    pub fn future<Fut>(title: impl Into<String>, future: Fut) -> Self
    where
        Fut: Future + Send + 'static,
        Fut::Output: IntoOutcome,
    {
        Self::build(
            title,
            TestFn::Async(Box::pin(async move { future.await.into_outcome() })),
        )
    }

    fn build(title: impl Into<String>, body: TestFn) -> Self {
        let title = title.into();
        debug_assert!(!title.is_empty(), "test title must not be empty");
        TestCase { title, body }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub(crate) fn into_parts(self) -> (String, TestFn) {
        (self.title, self.body)
    }
}

// Testable trait
pub trait Testable {
    fn run(&self) -> Outcome;
    fn name(&self) -> &'static str;
    fn should_panic(&self) -> bool {
        false
    }
    fn ignore(&self) -> bool {
        false
    }
}

/// The registry form of a test case. `const`-constructible so `#[def_test]`
/// can emit one into the distributed slice.
#[derive(Clone, Copy)]
pub struct TestDescriptor {
    pub name: &'static str,
    pub module: &'static str,
    pub test_fn: fn() -> TestResult,
    pub should_panic: bool,
    pub ignore: bool,
}

impl TestDescriptor {
    pub const fn new(
        name: &'static str,
        module: &'static str,
        test_fn: fn() -> TestResult,
        should_panic: bool,
        ignore: bool,
    ) -> Self {
        Self {
            name,
            module,
            test_fn,
            should_panic,
            ignore,
        }
    }

    pub fn module(&self) -> &'static str {
        self.module
    }
}

impl Testable for TestDescriptor {
    fn run(&self) -> Outcome {
        if self.ignore {
            return Outcome::Ignored;
        }

        let outcome = exec::run_body(TestFn::Sync(Box::new(self.test_fn)));

        if self.should_panic {
            return match outcome {
                Outcome::Failed(Failure::Panic(_)) => Outcome::Passed,
                Outcome::Passed => {
                    Outcome::Failed(Failure::Callback(anyhow!("expected the body to panic")))
                }
                other => other,
            };
        }

        outcome
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn should_panic(&self) -> bool {
        self.should_panic
    }

    fn ignore(&self) -> bool {
        self.ignore
    }
}

#[cfg(test)]
mod tests {
    use super::{TestCase, TestDescriptor, Testable};
    use crate::outcome::TestResult;

    fn passing() -> TestResult {
        Ok(())
    }

    fn panicking() -> TestResult {
        panic!("expected explosion")
    }

    #[test]
    fn ignored_descriptors_never_execute() {
        fn unreachable_body() -> TestResult {
            panic!("must not run")
        }
        let descriptor =
            TestDescriptor::new("skipped", module_path!(), unreachable_body, false, true);
        assert!(descriptor.run().is_ignored());
    }

    #[test]
    fn should_panic_inverts_the_outcome() {
        let descriptor = TestDescriptor::new("panics", module_path!(), panicking, true, false);
        assert!(descriptor.run().is_passed());

        let descriptor = TestDescriptor::new("calm", module_path!(), passing, true, false);
        assert!(descriptor.run().is_failed());
    }

    #[test]
    fn titles_are_preserved() {
        let case = TestCase::sync("adds", || ());
        assert_eq!(case.title(), "adds");
    }
}
