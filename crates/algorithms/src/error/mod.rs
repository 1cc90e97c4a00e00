//! Error handling for coding-theory primitives

use eccrypt_api::Error as CoreError;

pub mod validate;

/// The error type for coding-theory primitives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: &'static str,
        /// Reason why the parameter is invalid
        reason: &'static str,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bits
        expected: usize,
        /// Actual length in bits
        actual: usize,
    },

    /// Operand shapes incompatible for a matrix operation
    Dimension {
        /// Operation that received the mismatched operands
        operation: &'static str,
        /// Expected shape as (rows, cols)
        expected: (usize, usize),
        /// Actual shape as (rows, cols)
        actual: (usize, usize),
    },

    /// A square matrix has rank below its size over GF(2)
    Singular {
        /// Operation that required full rank
        operation: &'static str,
    },

    /// Rejection sampling failed to produce a value within its retry bound
    SamplingExhausted {
        /// Sampling operation that gave up
        operation: &'static str,
        /// Number of attempts made
        attempts: usize,
    },

    /// A syndrome decoder could not reconcile the received word with any
    /// correctable error pattern
    Uncorrectable {
        /// Code whose decoder failed
        code: &'static str,
    },
}

/// Result type for coding-theory primitives
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Parameter { name, reason } => {
                write!(f, "invalid parameter {}: {}", name, reason)
            }
            Self::Length {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {} bits, got {})",
                    context, expected, actual
                )
            }
            Self::Dimension {
                operation,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: dimension mismatch (expected {}x{}, got {}x{})",
                    operation, expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::Singular { operation } => {
                write!(f, "{}: matrix is singular over GF(2)", operation)
            }
            Self::SamplingExhausted {
                operation,
                attempts,
            } => {
                write!(
                    f,
                    "{}: rejection sampling exhausted after {} attempts",
                    operation, attempts
                )
            }
            Self::Uncorrectable { code } => {
                write!(f, "{}: uncorrectable error pattern", code)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl From<Error> for CoreError {
    fn from(err: Error) -> CoreError {
        match err {
            Error::Parameter { name, .. } => CoreError::InvalidParameter { context: name },
            Error::Length {
                context,
                expected,
                actual,
            } => CoreError::InvalidMessageLength {
                context,
                expected,
                actual,
            },
            Error::Dimension {
                operation,
                expected,
                actual,
            } => CoreError::DimensionMismatch {
                context: operation,
                expected,
                actual,
            },
            Error::Singular { operation } => CoreError::SingularMatrix { context: operation },
            Error::SamplingExhausted {
                operation,
                attempts,
            } => CoreError::RandomGenerationError {
                context: operation,
                attempts,
            },
            // A bare decoder failure has no multi-block context; callers
            // decoding one codeword are operating on block 0.
            Error::Uncorrectable { .. } => CoreError::Uncorrectable { block: 0 },
        }
    }
}
