// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//     http://www.apache.org/licenses/LICENSE-2.0
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! In-memory keystore of provisioned BLS key pairs.
//!
//! The keystore is a single owned value threaded through the handlers rather
//! than process-wide mutable state; callers (tests, the dev harness) own
//! fresh instances. Secret material is zeroized on drop and on
//! [`Keystore::reset`].

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

use crate::core::bls::{self, SecretScalar};
use crate::core::hex::{ct_eq, hex_encode};
use crate::error::SignerError;
use crate::rng::RandomSource;

/// A stored BLS12-381 key pair: secret scalar plus its derived G1 public key.
pub struct BlsKeyPair {
    secret: SecretScalar,
    public_key: [u8; 48],
}

impl BlsKeyPair {
    /// The 48-byte compressed G1 public key.
    pub fn public_key(&self) -> &[u8; 48] {
        &self.public_key
    }

    /// Public key rendered as a 96-char lowercase hex string, no `0x` prefix.
    pub fn public_key_hex(&self) -> String {
        hex_encode(&self.public_key)
    }
}

/// In-memory vault of up to `max_keys` [`BlsKeyPair`] entries.
///
/// Indices are stable for the lifetime of the value; [`Keystore::reset`]
/// zeroizes all secret material and empties the vault.
pub struct Keystore {
    entries: Vec<BlsKeyPair>,
    max_keys: usize,
}

impl Keystore {
    /// Create an empty keystore with the given capacity.
    pub fn new(max_keys: usize) -> Self {
        Self {
            entries: Vec::with_capacity(max_keys),
            max_keys,
        }
    }

    /// Number of stored key pairs.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    /// Capacity this keystore was created with.
    pub fn capacity(&self) -> usize {
        self.max_keys
    }

    /// Generate a fresh key pair from hardware randomness and store it.
    ///
    /// `info_bytes` is forwarded to BLS keygen as-is: a caller-supplied
    /// length-tagged slice, never a raw pointer/`sizeof`.
    pub fn insert_generated(
        &mut self,
        rng: &dyn RandomSource,
        info_bytes: &[u8],
    ) -> Result<usize, SignerError> {
        if self.entries.len() >= self.max_keys {
            return Err(SignerError::Full);
        }

        let mut seed = [0u8; 32];
        rng.fill(&mut seed).map_err(|_| SignerError::RngError)?;
        let mut ikm = [0u8; 32];
        ikm.copy_from_slice(&Sha256::digest(seed));
        seed.zeroize();

        let secret = bls::keygen(&ikm, info_bytes)?;
        ikm.zeroize();
        let public_key = bls::sk_to_pk_g1(&secret)?;

        self.entries.push(BlsKeyPair { secret, public_key });
        Ok(self.entries.len() - 1)
    }

    /// Insert a key pair recovered from an EIP-2335 import, deriving its
    /// public key. Rejects duplicate secrets and a full keystore.
    pub fn insert_from_secret(&mut self, sk_scalar: [u8; 32]) -> Result<usize, SignerError> {
        if self
            .entries
            .iter()
            .any(|e| ct_eq(&e.secret.0, &sk_scalar))
        {
            return Err(SignerError::DuplicateSecret);
        }
        if self.entries.len() >= self.max_keys {
            return Err(SignerError::Full);
        }

        let secret = SecretScalar(sk_scalar);
        let public_key = bls::sk_to_pk_g1(&secret)?;
        self.entries.push(BlsKeyPair { secret, public_key });
        Ok(self.entries.len() - 1)
    }

    /// Find the index of a stored key by its 96-char lowercase hex public key.
    pub fn lookup_by_pubkey_hex(&self, pk_hex_96: &str) -> Result<usize, SignerError> {
        self.entries
            .iter()
            .position(|e| ct_eq(e.public_key_hex().as_bytes(), pk_hex_96.as_bytes()))
            .ok_or(SignerError::NotFound)
    }

    /// All stored public keys, in insertion order.
    pub fn public_keys(&self) -> impl Iterator<Item = &[u8; 48]> {
        self.entries.iter().map(|e| e.public_key())
    }

    /// Sign a 32-byte hash (the signing root) with the key at `index`.
    pub fn sign(&self, index: usize, hash32: &[u8; 32]) -> Result<[u8; 96], SignerError> {
        let entry = self.entries.get(index).ok_or(SignerError::NotFound)?;
        bls::sign_g2(&entry.secret, hash32)
    }

    /// Remove and drop (zeroizing) every stored entry. Does not shrink capacity.
    pub fn reset(&mut self) {
        self.entries.clear();
    }

    /// Snapshot the keystore at a given length, for atomic rollback of a
    /// partially applied import batch.
    pub(crate) fn truncate(&mut self, len: usize) {
        self.entries.truncate(len);
    }
}
