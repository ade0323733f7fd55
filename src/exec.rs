//! The execution engine.
//!
//! Every test body is driven through one path: a synchronous body is adapted
//! into an already-ready future, an asynchronous one is awaited on the shared
//! current-thread runtime. Whatever the body raises, returns, or panics with
//! is contained here and mapped to an [`Outcome`]; nothing escapes to the
//! caller.
//!
//! No timeout wraps a body. A future that never settles hangs the runner.

use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::OnceLock;

use tokio::runtime::Runtime;

use crate::case::TestFn;
use crate::outcome::{Failure, Outcome};

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// The shared runtime test bodies are awaited on.
///
/// Built lazily on first use.
///
/// # Panics
/// Panics if the runtime fails to initialize.
pub fn runtime() -> &'static Runtime {
    RUNTIME.get_or_init(|| {
        tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()
            .expect("failed to build the test runtime")
    })
}

/// Block until a future completes and return its output.
pub fn block_on<F>(future: F) -> F::Output
where
    F: Future,
{
    runtime().block_on(future)
}

/// Run one test body to completion and settle it into an [`Outcome`].
pub(crate) fn run_body(body: TestFn) -> Outcome {
    let settled = panic::catch_unwind(AssertUnwindSafe(|| match body {
        TestFn::Sync(callback) => callback(),
        TestFn::Async(future) => block_on(future),
    }));

    match settled {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(failure)) => Outcome::Failed(failure),
        Err(payload) => Outcome::Failed(Failure::from_panic(payload)),
    }
}
