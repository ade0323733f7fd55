//! Test outcome and failure types.

use std::any::Any;

use crate::expect::AssertionError;

/// What a test body produces: success, or a contained failure.
pub type TestResult = Result<(), Failure>;

/// Why a test failed. The execution engine treats every variant the same
/// way; the split only survives into reporting.
#[derive(Debug, thiserror::Error)]
pub enum Failure {
    /// A comparison raised by the assertion engine.
    #[error("{0}")]
    Assertion(#[from] AssertionError),
    /// Any other error the body returned.
    #[error("{0}")]
    Callback(anyhow::Error),
    /// The body unwound instead of returning.
    #[error("test body panicked: {0}")]
    Panic(String),
}

impl Failure {
    /// Classify an error that travelled through the `anyhow` channel,
    /// recovering the assertion type if that is what it started as.
    pub fn from_error(err: anyhow::Error) -> Self {
        match err.downcast::<Failure>() {
            Ok(failure) => failure,
            Err(err) => match err.downcast::<AssertionError>() {
                Ok(assertion) => Failure::Assertion(assertion),
                Err(other) => Failure::Callback(other),
            },
        }
    }

    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = payload
            .downcast_ref::<&'static str>()
            .map(|s| (*s).to_owned())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_owned());
        Failure::Panic(message)
    }
}

/// The settled result of running one test case.
#[derive(Debug)]
pub enum Outcome {
    Passed,
    Failed(Failure),
    Ignored,
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Outcome::Failed(_))
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}

/// Conversion from what a test body returns to a [`TestResult`].
///
/// `()` passes; `Result<(), E>` carries the body's own error out through the
/// uniform `anyhow` channel.
pub trait IntoOutcome {
    fn into_outcome(self) -> TestResult;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> TestResult {
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> IntoOutcome for Result<(), E> {
    fn into_outcome(self) -> TestResult {
        self.map_err(|err| Failure::from_error(err.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Failure, IntoOutcome};
    use crate::expect::expect;

    #[test]
    fn unit_return_passes() {
        assert!(().into_outcome().is_ok());
    }

    #[test]
    fn assertion_errors_keep_their_classification() {
        let result = expect(1).to_be(2).into_outcome();
        assert!(matches!(result, Err(Failure::Assertion(_))));
    }

    #[test]
    fn other_errors_land_in_the_callback_variant() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::other("boom"));
        let failure = result.into_outcome().unwrap_err();
        assert!(matches!(failure, Failure::Callback(_)));
        assert_eq!(failure.to_string(), "boom");
    }

    #[test]
    fn a_failure_is_not_rewrapped() {
        let original: Failure = expect(1).to_be(2).unwrap_err().into();
        let round_tripped = Failure::from_error(anyhow::Error::new(original));
        assert!(matches!(round_tripped, Failure::Assertion(_)));
    }
}
