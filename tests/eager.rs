//! End-to-end behavior of the eager `test`/`test_async` entry points.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use microtest::{expect, test, test_async, Failure, Outcome, Report, TestCase, TestRunner};

#[derive(Default, Clone)]
struct Recording {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Recording {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl Report for Recording {
    fn case_passed(&mut self, title: &str) {
        self.lines.lock().unwrap().push(format!("PASS {title}"));
    }

    fn case_failed(&mut self, title: &str, failure: &Failure) {
        self.lines
            .lock()
            .unwrap()
            .push(format!("FAIL {title}: {failure}"));
    }

    fn case_ignored(&mut self, title: &str) {
        self.lines.lock().unwrap().push(format!("SKIP {title}"));
    }
}

#[test]
fn a_passing_sync_callback_reports_a_pass() {
    let outcome = test("adds", || expect(3 + 7).to_be(10));
    assert!(outcome.is_passed());
}

#[test]
fn a_failing_assertion_reports_both_values() {
    let outcome = test("bad math", || expect(3 - 7).to_be(10));
    match outcome {
        Outcome::Failed(Failure::Assertion(err)) => {
            assert!(err.message().contains("-4 is not equal to 10"));
        }
        other => panic!("expected an assertion failure, got {other:?}"),
    }
}

#[test]
fn a_resolving_async_callback_reports_a_pass() {
    let outcome = test_async("delayed", async {
        let result = async { 10 }.await;
        expect(result).to_be(10)
    });
    assert!(outcome.is_passed());
}

#[test]
fn the_runner_suspends_until_the_body_settles() {
    let outcome = test_async("sleeps then settles", async {
        tokio::time::sleep(Duration::from_millis(5)).await;
        expect(1).to_be(1)
    });
    assert!(outcome.is_passed());
}

#[test]
fn a_rejecting_async_callback_carries_its_message() {
    let outcome = test_async("delayed fail", async {
        Err::<(), _>(std::io::Error::other("boom"))
    });
    match outcome {
        Outcome::Failed(failure) => assert!(failure.to_string().contains("boom")),
        other => panic!("expected a failure, got {other:?}"),
    }
}

fn kaboom() {
    panic!("boom");
}

#[test]
fn a_panicking_callback_does_not_end_the_process() {
    let outcome = test("kaboom", kaboom);
    assert!(outcome.is_failed());

    // The process is still here, and the runner still works.
    let outcome = test("still alive", || ());
    assert!(outcome.is_passed());
}

#[test]
fn exactly_one_line_per_invocation() {
    let recording = Recording::default();
    let mut runner = TestRunner::with_reporter(recording.clone());

    runner.run(TestCase::sync("adds", || expect(3 + 7).to_be(10)));
    runner.run(TestCase::sync("bad math", || expect(3 - 7).to_be(10)));
    runner.run(TestCase::future("delayed", async {
        expect(async { 10 }.await).to_be(10)
    }));

    let lines = recording.lines();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "PASS adds");
    assert_eq!(lines[1], "FAIL bad math: -4 is not equal to 10");
    assert_eq!(lines[2], "PASS delayed");
}

#[test]
fn later_registrations_wait_for_earlier_awaited_bodies() {
    let order = Arc::new(Mutex::new(Vec::new()));

    let first = Arc::clone(&order);
    test_async("first", async move {
        tokio::time::sleep(Duration::from_millis(5)).await;
        first.lock().unwrap().push("first settled");
    });

    let second = Arc::clone(&order);
    test("second", move || {
        second.lock().unwrap().push("second ran");
    });

    let order = order.lock().unwrap();
    assert_eq!(*order, vec!["first settled", "second ran"]);
}
