/// Broad category of an [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed address string or format pattern.
    Format,
    /// Value or prefix outside what the requested width can hold.
    Range,
    /// Input of the wrong shape, including malformed serialized addresses.
    TypeMismatch,
    /// Ordering requested between addresses of different lengths.
    Comparability,
    /// Failure reported by a vendor store.
    Store,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid canonical address `{0}`")]
    InvalidCanonical(String),
    #[error("Expected {expected} byte groups but found {found}")]
    GroupCount { expected: usize, found: usize },
    #[error("Address has {found} bits but {expected} were requested")]
    LengthMismatch { expected: usize, found: usize },
    #[error("Invalid character '{0}' in format string")]
    InvalidFormatCharacter(char),
    #[error("Format mismatch: pattern has {pattern} hex digits but address has {address}")]
    FormatMismatch { pattern: usize, address: usize },
    #[error("Bit length must be a positive multiple of 8, got {0}")]
    InvalidLength(usize),
    #[error("Numeric address must not be negative")]
    NegativeNumeric,
    #[error("Numeric address does not fit in {0} bits")]
    NumericOutOfRange(usize),
    #[error("Invalid OUI prefix `{0}`: non-hex characters found")]
    InvalidPrefix(String),
    #[error("Invalid OUI prefix length {0}: expected 6, 7, or 9 hex nibbles")]
    InvalidPrefixLength(usize),
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),
    #[error("Invalid HardwareAddress JSON: {0}")]
    InvalidJson(String),
    #[error("Cannot compare addresses of different lengths: {0} vs {1}")]
    Incomparable(usize, usize),
    #[error("Failed to read vendor database `{0}`. `{1}`")]
    StoreIo(String, std::io::Error),
    #[error("Failed to parse vendor database `{0}`. `{1}`")]
    StoreParse(String, serde_json::Error),
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidCanonical(_)
            | Error::GroupCount { .. }
            | Error::LengthMismatch { .. }
            | Error::InvalidFormatCharacter(_)
            | Error::FormatMismatch { .. }
            | Error::InvalidPrefix(_) => ErrorKind::Format,
            Error::InvalidLength(_)
            | Error::NegativeNumeric
            | Error::NumericOutOfRange(_)
            | Error::InvalidPrefixLength(_) => ErrorKind::Range,
            Error::UnsupportedInput(_) | Error::InvalidJson(_) => ErrorKind::TypeMismatch,
            Error::Incomparable(..) => ErrorKind::Comparability,
            Error::StoreIo(..) | Error::StoreParse(..) => ErrorKind::Store,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
