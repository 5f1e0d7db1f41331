//! Error types for wallet retrieval operations.

use thiserror::Error;

use crate::hdpath::ChildIndex;

/// Errors produced while validating a BIP-39 mnemonic phrase.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MnemonicError {
    /// The phrase was empty after trimming.
    #[error("mnemonic phrase is empty")]
    Empty,
    /// The phrase has a word count outside {12, 15, 18, 21, 24}.
    #[error("invalid word count {0}, must be 12, 15, 18, 21, or 24")]
    WordCount(usize),
    /// A word is not in the BIP-39 English wordlist.
    #[error("unknown word \"{word}\" at position {position}")]
    UnknownWord {
        /// The offending word.
        word: String,
        /// Zero-based position of the word in the phrase.
        position: usize,
    },
    /// The checksum encoded in the final word does not match the entropy.
    #[error("mnemonic checksum mismatch")]
    Checksum,
}

/// Errors produced during BIP-32 key derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DerivationError {
    /// The seed produced an out-of-range master key.
    ///
    /// Probability is negligible for honestly generated seeds.
    #[error("seed produced an invalid master key")]
    InvalidSeedKey,
    /// Child key derivation produced a zero or out-of-range scalar.
    ///
    /// BIP-32 permits retrying with the next index; this library treats
    /// it as fatal so the returned key always matches the requested path.
    #[error("derivation produced an invalid child key at {index}")]
    InvalidChildKey {
        /// The path element that failed.
        index: ChildIndex,
    },
    /// The derivation tree is already at maximum depth (255).
    #[error("maximum derivation depth exceeded")]
    MaxDepthExceeded,
    /// A child index does not fit in 31 bits (hardened bit reserved).
    #[error("child index {0} out of range, must be below 2^31")]
    IndexOutOfRange(u32),
    /// A derivation path string could not be parsed.
    #[error("invalid derivation path component \"{0}\"")]
    PathParse(String),
}

/// Top-level error type for the retrieval pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The address index is negative or does not fit in 31 bits.
    #[error("invalid address index {0}, must be between 0 and 2147483647")]
    InvalidIndex(i64),
    /// The mnemonic phrase failed validation.
    #[error("invalid mnemonic: {0}")]
    Mnemonic(#[from] MnemonicError),
    /// Key derivation failed.
    #[error("derivation failed: {0}")]
    Derivation(#[from] DerivationError),
    /// An address string is not 40 hex characters (with optional `0x`).
    #[error("invalid address string")]
    InvalidAddress,
    /// The derived private key could not produce a public key.
    ///
    /// Derivation already guarantees a valid scalar; this is a defensive
    /// check at the pipeline boundary.
    #[error("public key recovery failed")]
    KeyRecovery,
}
