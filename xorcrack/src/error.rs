use thiserror::Error;

/// Failure states reported by the analysis routines. All of them are plain
/// outcomes the caller can act on, typically by widening the search range or
/// lowering the score floor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    /// The buffer cannot supply the requested trial block pairs at the top
    /// of the key length search range.
    #[error("{len} ciphertext bytes where at least {needed} are needed")]
    InsufficientData { len: usize, needed: usize },

    /// No candidate key byte scored strictly above the floor.
    #[error("no key byte scored above {floor}")]
    NoKeyFound { floor: u64 },

    /// The estimated key length cannot be applied to the buffer.
    #[error("estimated key length {length} is unusable for {len} ciphertext bytes")]
    UndeterminableKeyLength { length: usize, len: usize },

    /// Degenerate search range or trial count.
    #[error("invalid key length range [{min}, {max}) or trial count {trials}")]
    InvalidParameters {
        min: usize,
        max: usize,
        trials: usize,
    },
}

/// Errors from the text codecs feeding raw bytes into the analysis.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("'{0}' is not a hex digit")]
    InvalidHexDigit(char),

    #[error("'{0}' is not a base64 character")]
    InvalidBase64Char(char),

    #[error("base64 input ends in the middle of a quantum")]
    TruncatedBase64,
}
