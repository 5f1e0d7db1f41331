//! # Wallet Retriever - Ethereum HD Wallet Recovery Library
//!
//! Derives an Ethereum private key and EIP-55 address from a BIP-39
//! mnemonic phrase and an address index, following the BIP-32/BIP-44
//! hierarchical deterministic wallet standards.
//!
//! The derivation path is fixed to the standard Ethereum external chain:
//! `m/44'/60'/0'/0/{index}`.
//!
//! ## Features
//!
//! - **Full pipeline**: mnemonic validation, PBKDF2 seed stretching,
//!   BIP-32 child key derivation, keccak-256 address encoding
//! - **Secure by design**: seeds, extended keys and exported key material
//!   are zeroized on drop; `Debug` impls never print secrets
//! - **Typed errors**: callers can distinguish a bad checksum from an
//!   unknown word from a derivation failure
//!
//! ## Usage
//!
//! ```
//! use wallet_retriever::retrieve_wallet;
//!
//! let wallet = retrieve_wallet(
//!     "test test test test test test test test test test test junk",
//!     0,
//! ).unwrap();
//!
//! assert_eq!(wallet.address, "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266");
//! ```

#![warn(missing_docs, rust_2018_idioms, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::doc_markdown,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#![forbid(unsafe_code)]

mod address;
mod error;
mod extended_key;
pub mod hash;
mod hdpath;
mod mnemonic;
mod retriever;

pub use address::Address;
pub use error::{DerivationError, Error, MnemonicError};
pub use extended_key::ExtendedPrivateKey;
pub use hdpath::{ChildIndex, DerivationPath};
pub use mnemonic::NormalizedMnemonic;
pub use retriever::{retrieve_at_path, retrieve_wallet, RetrievedWallet};

/// A convenient Result type alias for wallet retrieval operations.
pub type Result<T> = core::result::Result<T, Error>;
