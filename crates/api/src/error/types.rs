//! Error type definitions for code-based cryptographic operations

/// Primary error type for code-based cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand shapes incompatible for a matrix or vector operation.
    ///
    /// Always a programming or configuration error; never retried.
    DimensionMismatch {
        /// Operation that received the mismatched operands
        context: &'static str,
        /// Expected shape as (rows, cols)
        expected: (usize, usize),
        /// Actual shape as (rows, cols)
        actual: (usize, usize),
    },

    /// A square matrix over GF(2) has rank below its size.
    ///
    /// Key generation recovers from this internally by resampling; it only
    /// surfaces when a caller inverts a singular matrix directly.
    SingularMatrix {
        /// Operation that required an invertible matrix
        context: &'static str,
    },

    /// Message or ciphertext length is not the exact multiple of the block
    /// size required by the key.
    InvalidMessageLength {
        /// Operation that rejected the input
        context: &'static str,
        /// Required length in bits
        expected: usize,
        /// Provided length in bits
        actual: usize,
    },

    /// A decoder could not reconcile the syndrome with any correctable
    /// error pattern.
    Uncorrectable {
        /// Index of the ciphertext block that failed to decode
        block: usize,
    },

    /// Random sampling failed to produce a usable value within its retry
    /// bound.
    RandomGenerationError {
        /// Sampling operation that exhausted its retries
        context: &'static str,
        /// Number of attempts made before giving up
        attempts: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Parameter that was rejected
        context: &'static str,
    },

    /// Other error
    Other {
        /// Operation context
        context: &'static str,
    },
}

/// Result type for code-based cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::DimensionMismatch {
                expected, actual, ..
            } => Self::DimensionMismatch {
                context,
                expected,
                actual,
            },
            Self::SingularMatrix { .. } => Self::SingularMatrix { context },
            Self::InvalidMessageLength {
                expected, actual, ..
            } => Self::InvalidMessageLength {
                context,
                expected,
                actual,
            },
            Self::Uncorrectable { block } => Self::Uncorrectable { block },
            Self::RandomGenerationError { attempts, .. } => {
                Self::RandomGenerationError { context, attempts }
            }
            Self::InvalidParameter { .. } => Self::InvalidParameter { context },
            Self::Other { .. } => Self::Other { context },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::DimensionMismatch {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: dimension mismatch (expected {}x{}, got {}x{})",
                    context, expected.0, expected.1, actual.0, actual.1
                )
            }
            Self::SingularMatrix { context } => {
                write!(f, "{}: matrix is singular over GF(2)", context)
            }
            Self::InvalidMessageLength {
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
            Self::Uncorrectable { block } => {
                write!(f, "block {}: uncorrectable error pattern", block)
            }
            Self::RandomGenerationError { context, attempts } => {
                write!(
                    f,
                    "{}: random sampling exhausted after {} attempts",
                    context, attempts
                )
            }
            Self::InvalidParameter { context } => {
                write!(f, "invalid parameter: {}", context)
            }
            Self::Other { context } => {
                write!(f, "error: {}", context)
            }
        }
    }
}
