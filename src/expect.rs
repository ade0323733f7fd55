//! The assertion engine.
//!
//! [`expect`] wraps a value and [`Expectation::to_be`] compares it against an
//! expected one under strict `PartialEq` semantics. A mismatch produces an
//! [`AssertionError`] carrying both values in its message; callers propagate
//! it out of the test body with `?`.

use std::fmt;

use thiserror::Error;

/// A failed comparison. The message embeds both operands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AssertionError {
    message: String,
}

impl AssertionError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The value under scrutiny, alive for the duration of one comparison.
#[derive(Debug)]
pub struct Expectation<T> {
    actual: T,
}

/// Wrap a value for comparison.
pub fn expect<T>(actual: T) -> Expectation<T> {
    Expectation { actual }
}

impl<T: PartialEq + fmt::Debug> Expectation<T> {
    /// Strict equality. No coercion, no structural special cases: `NaN` is
    /// never equal to `NaN`.
    pub fn to_be(self, expected: T) -> Result<(), AssertionError> {
        if self.actual == expected {
            Ok(())
        } else {
            Err(AssertionError {
                message: format!("{:?} is not equal to {:?}", self.actual, expected),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::expect;

    #[test]
    fn equal_values_pass() {
        assert!(expect(3 + 7).to_be(10).is_ok());
        assert!(expect("team").to_be("team").is_ok());
        assert!(expect(vec![1, 2, 3]).to_be(vec![1, 2, 3]).is_ok());
    }

    #[test]
    fn mismatch_reports_both_values() {
        let err = expect(3 - 7).to_be(10).unwrap_err();
        assert_eq!(err.message(), "-4 is not equal to 10");
    }

    #[test]
    fn mismatch_on_strings_keeps_debug_rendering() {
        let err = expect("left").to_be("right").unwrap_err();
        assert_eq!(err.message(), "\"left\" is not equal to \"right\"");
    }

    #[test]
    fn nan_is_not_equal_to_itself() {
        assert!(expect(f64::NAN).to_be(f64::NAN).is_err());
    }

    #[test]
    fn operands_are_not_mutated() {
        let actual = vec![1, 2];
        let expected = vec![1, 2];
        let _ = expect(actual.clone()).to_be(expected.clone());
        assert_eq!(actual, vec![1, 2]);
        assert_eq!(expected, vec![1, 2]);
    }
}
