//! Ethereum address derivation and EIP-55 checksum encoding.

use k256::ecdsa::VerifyingKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;

use crate::error::Error;
use crate::hash::keccak256;

/// An Ethereum address (20 bytes).
///
/// Displays in EIP-55 mixed-case checksummed form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Create from raw 20-byte address.
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derive the address from a secp256k1 public key.
    ///
    /// Keccak-256 over the 64-byte uncompressed point (0x04 prefix
    /// stripped), last 20 bytes.
    pub fn from_public_key(public_key: &VerifyingKey) -> Self {
        let point = public_key.to_encoded_point(false);
        let hash = keccak256(&point.as_bytes()[1..]);

        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(&hash[12..]);
        Self(bytes)
    }

    /// Render as an EIP-55 checksummed string.
    ///
    /// A hex digit is uppercased iff the corresponding nibble of
    /// keccak-256 of the lowercase hex address (no `0x`) is >= 8.
    pub fn to_checksum_string(&self) -> String {
        let addr_hex = hex::encode(self.0);
        let hash = keccak256(addr_hex.as_bytes());

        let mut result = String::with_capacity(42);
        result.push_str("0x");

        for (i, c) in addr_hex.chars().enumerate() {
            if c.is_ascii_alphabetic() {
                let hash_nibble = (hash[i / 2] >> (4 * (1 - i % 2))) & 0xf;
                if hash_nibble >= 8 {
                    result.push(c.to_ascii_uppercase());
                } else {
                    result.push(c);
                }
            } else {
                result.push(c);
            }
        }

        result
    }

    /// The raw address bytes.
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.to_checksum_string())
    }
}

impl core::str::FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 40 {
            return Err(Error::InvalidAddress);
        }

        let mut bytes = [0u8; 20];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| Error::InvalidAddress)?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // EIP-55 reference addresses
    const EIP55_VECTORS: &[&str] = &[
        "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
        "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
        "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
        "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
    ];

    #[test]
    fn test_eip55_reference_vectors() {
        for vector in EIP55_VECTORS {
            let addr: Address = vector.to_lowercase().parse().unwrap();
            assert_eq!(addr.to_checksum_string(), *vector);
        }
    }

    #[test]
    fn test_checksum_round_trip() {
        let addr: Address = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed".parse().unwrap();
        let lowered = addr.to_checksum_string().to_lowercase();
        let reparsed: Address = lowered.parse().unwrap();
        assert_eq!(reparsed.to_checksum_string(), addr.to_checksum_string());
    }

    #[test]
    fn test_display_uses_checksum() {
        let addr: Address = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse().unwrap();
        assert_eq!(addr.to_string(), "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
    }

    #[test]
    fn test_from_public_key() {
        use k256::ecdsa::SigningKey;

        // Well-known test key and its address
        let key = SigningKey::from_slice(&hex_literal::hex!(
            "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318"
        ))
        .unwrap();
        let addr = Address::from_public_key(key.verifying_key());
        assert_eq!(
            addr.to_string().to_lowercase(),
            "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23"
        );
    }

    #[test]
    fn test_from_str_rejects_bad_length() {
        assert!("0x1234".parse::<Address>().is_err());
    }
}
