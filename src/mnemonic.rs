//! BIP-39 mnemonic validation and seed derivation.
//!
//! Validates a phrase against the English wordlist and its embedded
//! checksum, then stretches it into a 64-byte seed with
//! PBKDF2-HMAC-SHA512 as specified by BIP-39.

use bip39::Language;
use pbkdf2::pbkdf2_hmac;
use sha2::{Digest, Sha256, Sha512};
use zeroize::Zeroizing;

use crate::error::MnemonicError;

/// Number of PBKDF2 rounds for seed derivation.
const PBKDF2_ROUNDS: u32 = 2048;

/// Bits encoded by each mnemonic word.
const BITS_PER_WORD: usize = 11;

/// A validated, whitespace-normalized BIP-39 mnemonic phrase.
///
/// Construction via [`NormalizedMnemonic::parse`] guarantees the word
/// count, wordlist membership, and checksum are all valid. The phrase
/// and decoded entropy are zeroized on drop.
#[derive(Clone)]
pub struct NormalizedMnemonic {
    /// Phrase with words joined by single spaces.
    phrase: Zeroizing<String>,
    /// Entropy decoded from the phrase (16-32 bytes).
    entropy: Zeroizing<Vec<u8>>,
}

impl NormalizedMnemonic {
    /// Validate a candidate mnemonic phrase.
    ///
    /// Leading/trailing whitespace is trimmed and internal runs of
    /// whitespace collapse to single spaces before validation. Word
    /// matching against the English wordlist is exact and
    /// case-sensitive.
    pub fn parse(phrase: &str) -> Result<Self, MnemonicError> {
        let words: Vec<&str> = phrase.split_whitespace().collect();

        if words.is_empty() {
            return Err(MnemonicError::Empty);
        }
        if !matches!(words.len(), 12 | 15 | 18 | 21 | 24) {
            return Err(MnemonicError::WordCount(words.len()));
        }

        // The English list is sorted, so binary search doubles as the
        // membership test and yields the 11-bit word index.
        let wordlist: &[&str] = Language::English.word_list();
        let mut bits = Vec::with_capacity(words.len() * BITS_PER_WORD);
        for (position, word) in words.iter().enumerate() {
            let index = wordlist
                .binary_search(word)
                .map_err(|_| MnemonicError::UnknownWord {
                    word: (*word).to_string(),
                    position,
                })?;

            for i in (0..BITS_PER_WORD).rev() {
                bits.push((index >> i) & 1 == 1);
            }
        }

        // Split the bit stream into entropy and checksum.
        let checksum_bits = bits.len() / 33;
        let entropy_bits = bits.len() - checksum_bits;

        let mut entropy = Zeroizing::new(vec![0u8; entropy_bits / 8]);
        for (i, bit) in bits[..entropy_bits].iter().enumerate() {
            if *bit {
                entropy[i / 8] |= 1 << (7 - (i % 8));
            }
        }

        // The checksum is the leading bits of SHA-256 of the entropy.
        let hash = Sha256::digest(entropy.as_slice());
        for (i, &expected) in bits[entropy_bits..].iter().enumerate() {
            let actual = (hash[i / 8] >> (7 - (i % 8))) & 1 == 1;
            if actual != expected {
                return Err(MnemonicError::Checksum);
            }
        }

        Ok(Self {
            phrase: Zeroizing::new(words.join(" ")),
            entropy,
        })
    }

    /// Derive the 64-byte BIP-39 seed.
    ///
    /// PBKDF2-HMAC-SHA512 with the normalized phrase as password and
    /// `"mnemonic" + passphrase` as salt, 2048 rounds. Total function;
    /// cannot fail for a validated mnemonic.
    pub fn to_seed(&self, passphrase: &str) -> Zeroizing<[u8; 64]> {
        let salt = Zeroizing::new(format!("mnemonic{passphrase}"));

        let mut seed = Zeroizing::new([0u8; 64]);
        pbkdf2_hmac::<Sha512>(
            self.phrase.as_bytes(),
            salt.as_bytes(),
            PBKDF2_ROUNDS,
            &mut seed[..],
        );

        seed
    }

    /// The normalized phrase, words joined by single spaces.
    ///
    /// **Security warning**: handle carefully, this value reconstructs
    /// every derived key.
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// The entropy bytes decoded from the phrase.
    pub fn entropy(&self) -> &[u8] {
        &self.entropy
    }

    /// The number of words in the phrase.
    pub fn word_count(&self) -> usize {
        (self.entropy.len() * 8 + self.entropy.len() / 4) / BITS_PER_WORD
    }
}

impl core::fmt::Debug for NormalizedMnemonic {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "NormalizedMnemonic({} words)", self.word_count())
    }
}
