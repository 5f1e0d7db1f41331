//! The wallet retrieval pipeline.
//!
//! Orchestrates mnemonic validation, seed stretching, BIP-32 path
//! derivation, and address encoding into a single entry point.

use k256::ecdsa::SigningKey;
use zeroize::Zeroizing;

use crate::error::Error;
use crate::extended_key::ExtendedPrivateKey;
use crate::hdpath::{ChildIndex, DerivationPath};
use crate::mnemonic::NormalizedMnemonic;

/// The result of a successful wallet retrieval.
#[derive(Debug, Clone)]
pub struct RetrievedWallet {
    /// Derivation path used, e.g. `m/44'/60'/0'/0/0`.
    pub path: String,
    /// Private key as lowercase hex without `0x` (zeroized on drop).
    pub private_key_hex: Zeroizing<String>,
    /// EIP-55 checksummed address with `0x` prefix.
    pub address: String,
}

/// Retrieve the wallet at `m/44'/60'/0'/0/{address_index}`.
///
/// The index is rejected before any derivation work when it is negative
/// or does not fit in 31 bits. Repeated calls with identical inputs are
/// deterministic; nothing is cached.
///
/// # Example
///
/// ```
/// use wallet_retriever::retrieve_wallet;
///
/// let wallet = retrieve_wallet(
///     "test test test test test test test test test test test junk",
///     0,
/// ).unwrap();
/// assert_eq!(wallet.path, "m/44'/60'/0'/0/0");
/// ```
pub fn retrieve_wallet(mnemonic: &str, address_index: i64) -> Result<RetrievedWallet, Error> {
    let index = u32::try_from(address_index)
        .ok()
        .filter(|i| *i < ChildIndex::HARDENED_OFFSET)
        .ok_or(Error::InvalidIndex(address_index))?;

    let path = DerivationPath::ethereum(index).map_err(Error::Derivation)?;
    retrieve(mnemonic, &path)
}

/// Retrieve the wallet at an explicit derivation path.
///
/// Accepts the same path syntax as [`DerivationPath::parse`], always
/// with an empty BIP-39 passphrase.
pub fn retrieve_at_path(mnemonic: &str, path: &str) -> Result<RetrievedWallet, Error> {
    let path = DerivationPath::parse(path).map_err(Error::Derivation)?;
    retrieve(mnemonic, &path)
}

fn retrieve(mnemonic: &str, path: &DerivationPath) -> Result<RetrievedWallet, Error> {
    let mnemonic = NormalizedMnemonic::parse(mnemonic)?;
    let seed = mnemonic.to_seed("");

    let derived = ExtendedPrivateKey::from_seed(seed.as_ref())?.derive_path(path)?;

    // Derivation already guarantees a valid scalar; re-parse the exported
    // bytes so the guarantee is enforced at the boundary too.
    let key_bytes: Zeroizing<[u8; 32]> =
        Zeroizing::new(derived.private_key().to_bytes().into());
    SigningKey::from_slice(&key_bytes[..]).map_err(|_| Error::KeyRecovery)?;

    Ok(RetrievedWallet {
        path: path.to_string(),
        private_key_hex: Zeroizing::new(hex::encode(&key_bytes[..])),
        address: derived.address().to_checksum_string(),
    })
}
