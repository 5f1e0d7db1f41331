//! BIP-32 hierarchical deterministic key derivation.
//!
//! Master key generation from a seed and hardened/normal child key
//! derivation on secp256k1, as used by BIP-44 Ethereum paths.

use hmac::{Hmac, Mac};
use k256::ecdsa::{SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::{Field, PrimeField};
use k256::{FieldBytes, Scalar};
use sha2::Sha512;
use zeroize::{Zeroize, Zeroizing};

use crate::address::Address;
use crate::error::DerivationError;
use crate::hash::hash160;
use crate::hdpath::{ChildIndex, DerivationPath};

type HmacSha512 = Hmac<Sha512>;

/// HMAC key for master key derivation, per BIP-32.
const MASTER_KEY_DOMAIN: &[u8] = b"Bitcoin seed";

/// A BIP-32 extended private key.
///
/// Key material is zeroized on drop and never printed by `Debug`.
#[derive(Clone)]
pub struct ExtendedPrivateKey {
    /// The underlying secp256k1 private key.
    private_key: SigningKey,
    /// Chain code for child key derivation.
    chain_code: [u8; 32],
    /// Depth in the derivation tree (0 for master).
    depth: u8,
    /// First 4 bytes of hash160 of the parent public key.
    parent_fingerprint: [u8; 4],
    /// Raw child index that produced this key (hardened bit included).
    child_index: u32,
}

impl Zeroize for ExtendedPrivateKey {
    fn zeroize(&mut self) {
        // SigningKey zeroizes its scalar on drop; swap in a dummy key to
        // trigger it.
        let zeroed = SigningKey::from_slice(&[1u8; 32]).unwrap();
        let _ = core::mem::replace(&mut self.private_key, zeroed);
        self.chain_code.zeroize();
        self.depth = 0;
        self.parent_fingerprint.zeroize();
        self.child_index = 0;
    }
}

impl Drop for ExtendedPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ExtendedPrivateKey {
    /// Derive the master extended key from a seed.
    ///
    /// HMAC-SHA512 keyed with `"Bitcoin seed"`; the left 32 bytes become
    /// the private key and the right 32 the chain code. Accepts seeds of
    /// 16 to 64 bytes (BIP-39 seeds are always 64).
    pub fn from_seed(seed: &[u8]) -> Result<Self, DerivationError> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(DerivationError::InvalidSeedKey);
        }

        let mut mac = HmacSha512::new_from_slice(MASTER_KEY_DOMAIN)
            .map_err(|_| DerivationError::InvalidSeedKey)?;
        mac.update(seed);
        let result = mac.finalize().into_bytes();

        let private_key = SigningKey::from_slice(&result[..32])
            .map_err(|_| DerivationError::InvalidSeedKey)?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&result[32..]);

        Ok(Self {
            private_key,
            chain_code,
            depth: 0,
            parent_fingerprint: [0u8; 4],
            child_index: 0,
        })
    }

    /// Derive the child key at the given index.
    ///
    /// Fails with [`DerivationError::InvalidChildKey`] if the derived
    /// scalar is zero or falls outside the curve order. That case has
    /// negligible probability; it is not retried with the next index
    /// because the result would no longer match the requested path.
    pub fn derive_child(&self, index: ChildIndex) -> Result<Self, DerivationError> {
        if self.depth == u8::MAX {
            return Err(DerivationError::MaxDepthExceeded);
        }

        let raw_index = index.to_u32();
        let invalid = || DerivationError::InvalidChildKey { index };

        let parent_public = self.private_key.verifying_key().to_encoded_point(true);

        let mut mac = HmacSha512::new_from_slice(&self.chain_code).map_err(|_| invalid())?;
        if index.is_hardened() {
            // HMAC-SHA512(Key = c_par, Data = 0x00 || ser256(k_par) || ser32(i))
            let parent_bytes = Zeroizing::new(<[u8; 32]>::from(self.private_key.to_bytes()));
            mac.update(&[0u8]);
            mac.update(parent_bytes.as_ref());
        } else {
            // HMAC-SHA512(Key = c_par, Data = serP(point(k_par)) || ser32(i))
            mac.update(parent_public.as_bytes());
        }
        mac.update(&raw_index.to_be_bytes());
        let result = mac.finalize().into_bytes();

        let (il, ir) = result.as_slice().split_at(32);

        // child = (parse256(IL) + k_par) mod n, invalid when IL >= n or
        // the sum is zero
        let il_scalar = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::clone_from_slice(il)))
            .ok_or_else(invalid)?;
        let parent_scalar: Scalar = *self.private_key.as_nonzero_scalar().as_ref();
        let child_scalar = il_scalar + parent_scalar;
        if bool::from(child_scalar.is_zero()) {
            return Err(invalid());
        }

        let child_key = SigningKey::from_bytes(&child_scalar.to_bytes()).map_err(|_| invalid())?;

        let parent_hash = hash160(parent_public.as_bytes());
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&parent_hash[..4]);

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(ir);

        Ok(Self {
            private_key: child_key,
            chain_code,
            depth: self.depth + 1,
            parent_fingerprint,
            child_index: raw_index,
        })
    }

    /// Walk a derivation path from this key, in order.
    ///
    /// Short-circuits on the first failing element; the error names the
    /// element that failed.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, DerivationError> {
        let mut current = self.clone();
        for index in path.indices() {
            current = current.derive_child(*index)?;
        }
        Ok(current)
    }

    /// The underlying secp256k1 private key.
    pub fn private_key(&self) -> &SigningKey {
        &self.private_key
    }

    /// The corresponding public key.
    #[must_use]
    pub fn public_key(&self) -> VerifyingKey {
        *self.private_key.verifying_key()
    }

    /// The Ethereum address of this key.
    #[must_use]
    pub fn address(&self) -> Address {
        Address::from_public_key(&self.public_key())
    }

    /// The chain code.
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    /// Depth in the derivation tree (0 for the master key).
    #[must_use]
    pub const fn depth(&self) -> u8 {
        self.depth
    }

    /// First 4 bytes of hash160 of the parent public key.
    #[must_use]
    pub const fn parent_fingerprint(&self) -> &[u8; 4] {
        &self.parent_fingerprint
    }

    /// Raw child index that produced this key, hardened bit included.
    #[must_use]
    pub const fn child_index(&self) -> u32 {
        self.child_index
    }
}

impl core::fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("depth", &self.depth)
            .field("child_index", &self.child_index)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
