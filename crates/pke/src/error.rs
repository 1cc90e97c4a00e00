//! Error handling for McEliece PKE operations.

use core::fmt;
use eccrypt_algorithms::error::Error as PrimitiveError;
use eccrypt_api::error::Error as CoreError;

/// Error type for McEliece PKE operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error bubbled up from the coding-theory primitives.
    Primitive(PrimitiveError),
    /// Error bubbled up from the API layer.
    Api(CoreError),
    /// Message length is not exactly blocks * k bits.
    MessageLength {
        /// Required length in bits
        expected: usize,
        /// Provided length in bits
        actual: usize,
    },
    /// Ciphertext length is not exactly blocks * n bits.
    CiphertextLength {
        /// Required length in bits
        expected: usize,
        /// Provided length in bits
        actual: usize,
    },
    /// A ciphertext block failed syndrome decoding.
    BlockDecode {
        /// Index of the failing block
        block: usize,
    },
    /// Requested error weight exceeds the code's correction capability.
    ErrorWeight {
        /// Requested weight
        requested: usize,
        /// Maximum correctable weight t
        max: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Primitive(e) => write!(f, "PKE primitive error: {}", e),
            Error::Api(e) => write!(f, "PKE API error: {}", e),
            Error::MessageLength { expected, actual } => write!(
                f,
                "message length must be exactly {} bits, got {}",
                expected, actual
            ),
            Error::CiphertextLength { expected, actual } => write!(
                f,
                "ciphertext length must be exactly {} bits, got {}",
                expected, actual
            ),
            Error::BlockDecode { block } => {
                write!(f, "ciphertext block {} is uncorrectable", block)
            }
            Error::ErrorWeight { requested, max } => write!(
                f,
                "error weight {} exceeds correction capability {}",
                requested, max
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Primitive(e) => Some(e),
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<PrimitiveError> for Error {
    fn from(err: PrimitiveError) -> Self {
        Error::Primitive(err)
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

// Conversion from PKE Error to API Error
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Primitive(e) => e.into(),
            Error::Api(e) => e,
            Error::MessageLength { expected, actual } => CoreError::InvalidMessageLength {
                context: "McEliece encryption",
                expected,
                actual,
            },
            Error::CiphertextLength { expected, actual } => CoreError::InvalidMessageLength {
                context: "McEliece decryption",
                expected,
                actual,
            },
            Error::BlockDecode { block } => CoreError::Uncorrectable { block },
            Error::ErrorWeight { .. } => CoreError::InvalidParameter {
                context: "error weight exceeds correction capability",
            },
        }
    }
}

/// Result type for McEliece PKE operations.
pub type Result<T> = core::result::Result<T, Error>;
