//! The runner: eager entry points, the batching [`TestRunner`], and the
//! static registry populated by `#[def_test]`.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};

use linkme::distributed_slice;
use log::{debug, warn};

use crate::case::{TestCase, TestDescriptor, Testable};
use crate::exec;
use crate::outcome::{IntoOutcome, Outcome};
use crate::report::{ConsoleReporter, Report};

/// Sticky process-wide flag, set once any test fails.
pub static ANY_FAILED: AtomicBool = AtomicBool::new(false);

/// Every test registered with `#[def_test]`, collected at link time.
#[distributed_slice]
pub static TEST_CASES: [TestDescriptor];

// Test statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestStats {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub ignored: usize,
}

impl TestStats {
    pub const fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            ignored: 0,
        }
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Passed => self.passed += 1,
            Outcome::Failed(_) => self.failed += 1,
            Outcome::Ignored => self.ignored += 1,
        }
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

impl Default for TestStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Executes cases one at a time, reporting each and keeping statistics.
///
/// Construct one and pass it by reference to whatever needs to register
/// tests; the free [`test`]/[`test_async`] functions are the module-level
/// convenience layer over a throwaway runner.
pub struct TestRunner {
    reporter: Box<dyn Report>,
    stats: TestStats,
}

impl TestRunner {
    pub fn new() -> Self {
        Self::with_reporter(ConsoleReporter)
    }

    pub fn with_reporter(reporter: impl Report + 'static) -> Self {
        Self {
            reporter: Box::new(reporter),
            stats: TestStats::new(),
        }
    }

    /// Run one owned case. The failure of a case is contained and reported;
    /// this never raises, and the runner stays usable afterwards.
    pub fn run(&mut self, case: TestCase) -> Outcome {
        let (title, body) = case.into_parts();
        debug!("running test `{title}`");
        let outcome = exec::run_body(body);
        self.report(&title, &outcome);
        outcome
    }

    /// Run one registered descriptor.
    pub fn run_descriptor(&mut self, test: &TestDescriptor) -> Outcome {
        debug!("running test `{}:{}`", test.module(), test.name());
        let outcome = test.run();
        self.report(test.name(), &outcome);
        outcome
    }

    /// Run a whole suite of descriptors, with a header and a summary line.
    /// Statistics restart at the suite boundary.
    pub fn run_suite(&mut self, name: &str, tests: &[TestDescriptor]) {
        self.stats = TestStats::new();
        self.reporter.suite_started(name, tests.len());
        for test in tests {
            self.run_descriptor(test);
        }
        self.reporter.suite_finished(&self.stats);
    }

    pub fn stats(&self) -> TestStats {
        self.stats
    }

    fn report(&mut self, title: &str, outcome: &Outcome) {
        match outcome {
            Outcome::Passed => self.reporter.case_passed(title),
            Outcome::Failed(failure) => {
                ANY_FAILED.store(true, Ordering::Relaxed);
                self.reporter.case_failed(title, failure);
            }
            Outcome::Ignored => self.reporter.case_ignored(title),
        }
        self.stats.record(outcome);
    }
}

impl Default for TestRunner {
    fn default() -> Self {
        Self::new()
    }
}

/// Register and immediately execute one test case with a synchronous body.
///
/// Reports exactly one pass or fail line for `title` and returns the
/// settled [`Outcome`] for callers that want it.
pub fn test<R, F>(title: &str, callback: F) -> Outcome
where
    R: IntoOutcome,
    F: FnOnce() -> R + 'static,
{
    TestRunner::new().run(TestCase::sync(title, callback))
}

/// Register and immediately execute one test case whose body suspends.
///
/// The call does not return until the future settles; rejection is reported
/// exactly like a synchronous failure.
pub fn test_async<Fut>(title: &str, future: Fut) -> Outcome
where
    Fut: Future + Send + 'static,
    Fut::Output: IntoOutcome,
{
    TestRunner::new().run(TestCase::future(title, future))
}

/// Run every test registered with `#[def_test]`.
pub fn test_run() -> TestStats {
    ANY_FAILED.store(false, Ordering::Relaxed);

    let mut runner = TestRunner::new();
    let tests: &[TestDescriptor] = &TEST_CASES;

    if tests.is_empty() {
        warn!("no registered tests found");
        return TestStats::new();
    }

    runner.run_suite("registered", tests);
    runner.stats()
}

/// Run every registered test and report whether they all passed.
pub fn test_run_ok() -> bool {
    test_run().all_passed()
}

pub fn tests_failed() -> bool {
    ANY_FAILED.load(Ordering::Relaxed)
}

// Macros for manually registering test suites
#[macro_export]
macro_rules! suite {
    ($suite_name:ident; $($test_name:ident),* $(,)?) => {
        pub static $suite_name: &[$crate::TestDescriptor] = &[
            $(
                $crate::TestDescriptor::new(
                    stringify!($test_name),
                    module_path!(),
                    $test_name,
                    false, // should_panic
                    false, // ignore
                ),
            )*
        ];
    };
}

#[macro_export]
macro_rules! run_suites {
    // Multiple test suites
    ($runner:expr, [$($tests:expr),+ $(,)?]) => {
        $(
            $runner.run_suite(stringify!($tests), $tests);
        )+
    };
    // Single test suite
    ($runner:expr, $tests:expr) => {
        $runner.run_suite(stringify!($tests), $tests);
    };
}
