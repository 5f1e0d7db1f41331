//! BIP-32 derivation path support.
//!
//! Structured parsing and construction of hierarchical deterministic
//! derivation paths like `m/44'/60'/0'/0/0`.

use core::fmt;

use crate::error::DerivationError;

/// A child index in a derivation path.
///
/// Can be either normal (non-hardened) or hardened. Hardened indices
/// carry the high bit (2^31) in their raw wire form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChildIndex {
    /// Normal (non-hardened) index: 0 to 2^31 - 1.
    Normal(u32),
    /// Hardened index: displayed as `n'`, stored without the offset.
    Hardened(u32),
}

impl ChildIndex {
    /// The offset for hardened indices (2^31).
    pub const HARDENED_OFFSET: u32 = 0x8000_0000;

    /// Create a normal (non-hardened) child index.
    pub const fn normal(index: u32) -> Result<Self, DerivationError> {
        if index >= Self::HARDENED_OFFSET {
            Err(DerivationError::IndexOutOfRange(index))
        } else {
            Ok(Self::Normal(index))
        }
    }

    /// Create a hardened child index.
    pub const fn hardened(index: u32) -> Result<Self, DerivationError> {
        if index >= Self::HARDENED_OFFSET {
            Err(DerivationError::IndexOutOfRange(index))
        } else {
            Ok(Self::Hardened(index))
        }
    }

    /// Check if this is a hardened index.
    pub const fn is_hardened(&self) -> bool {
        matches!(self, Self::Hardened(_))
    }

    /// Get the raw index value, without the hardened flag.
    pub const fn index(&self) -> u32 {
        match self {
            Self::Normal(i) | Self::Hardened(i) => *i,
        }
    }

    /// The raw u32 used in BIP-32 derivation, hardened offset included.
    pub const fn to_u32(self) -> u32 {
        match self {
            Self::Normal(i) => i,
            Self::Hardened(i) => i | Self::HARDENED_OFFSET,
        }
    }
}

impl fmt::Display for ChildIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal(i) => write!(f, "{i}"),
            Self::Hardened(i) => write!(f, "{i}'"),
        }
    }
}

impl core::str::FromStr for ChildIndex {
    type Err = DerivationError;

    fn from_str(s: &str) -> Result<Self, DerivationError> {
        let s = s.trim();
        let parse_err = || DerivationError::PathParse(s.to_string());

        if let Some(index_str) = s.strip_suffix('\'').or_else(|| s.strip_suffix('h')) {
            let index: u32 = index_str.parse().map_err(|_| parse_err())?;
            Self::hardened(index).map_err(|_| parse_err())
        } else {
            let index: u32 = s.parse().map_err(|_| parse_err())?;
            Self::normal(index).map_err(|_| parse_err())
        }
    }
}

/// A BIP-32 derivation path.
///
/// Represents paths like `m/44'/60'/0'/0/0` as a sequence of child
/// indices walked from the master key.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DerivationPath {
    indices: Vec<ChildIndex>,
}

impl DerivationPath {
    /// The BIP-44 purpose level.
    pub const PURPOSE: u32 = 44;
    /// The SLIP-44 coin type for Ethereum.
    pub const COIN_TYPE_ETH: u32 = 60;

    /// The empty path (master key).
    pub fn master() -> Self {
        Self { indices: Vec::new() }
    }

    /// Create a derivation path from a sequence of child indices.
    pub fn new(indices: Vec<ChildIndex>) -> Self {
        Self { indices }
    }

    /// Parse a derivation path from a string.
    ///
    /// Accepts `m/44'/60'/0'/0/0`, `m/44h/60h/0h/0/0`, and the same
    /// forms without the leading `m/`.
    pub fn parse(path: &str) -> Result<Self, DerivationError> {
        let path = path.trim();

        if path.is_empty() || path == "m" || path == "M" {
            return Ok(Self::master());
        }

        let path = path
            .strip_prefix("m/")
            .or_else(|| path.strip_prefix("M/"))
            .unwrap_or(path);

        let mut indices = Vec::new();
        for component in path.split('/') {
            if component.is_empty() {
                return Err(DerivationError::PathParse(path.to_string()));
            }
            indices.push(component.parse()?);
        }

        Ok(Self { indices })
    }

    /// The standard Ethereum external-chain path for an address index:
    /// `m/44'/60'/0'/0/{address_index}`.
    pub fn ethereum(address_index: u32) -> Result<Self, DerivationError> {
        Ok(Self {
            indices: vec![
                ChildIndex::hardened(Self::PURPOSE)?,
                ChildIndex::hardened(Self::COIN_TYPE_ETH)?,
                ChildIndex::hardened(0)?,
                ChildIndex::normal(0)?,
                ChildIndex::normal(address_index)?,
            ],
        })
    }

    /// The child indices in this path, in derivation order.
    pub fn indices(&self) -> &[ChildIndex] {
        &self.indices
    }

    /// The number of levels in this path.
    pub fn depth(&self) -> usize {
        self.indices.len()
    }

    /// Check if this path is empty (master key).
    pub fn is_master(&self) -> bool {
        self.indices.is_empty()
    }
}

impl fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m")?;
        for index in &self.indices {
            write!(f, "/{index}")?;
        }
        Ok(())
    }
}

impl core::str::FromStr for DerivationPath {
    type Err = DerivationError;

    fn from_str(s: &str) -> Result<Self, DerivationError> {
        Self::parse(s)
    }
}
