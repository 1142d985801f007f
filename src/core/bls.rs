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

//! Thin facade over the BLS12-381 primitives.
//!
//! Scalar keygen, `sk -> pk` in G1, and `sign` in G2 are assumed-correct
//! external primitives; this module is only the seam that wires them to
//! the keystore with the Eth2 domain separation tag. It is backed by
//! `blst`'s `min_pk` variant (48-byte G1 public keys, 96-byte G2 signatures).

use blst::min_pk::{PublicKey, SecretKey, Signature};
use blst::BLST_ERROR;
use zeroize::Zeroize;

use crate::error::SignerError;

/// Eth2 "proof of possession" ciphersuite domain separation tag.
///
/// This is the DST real Eth2 signing services (and consensus-layer
/// verifiers) use for validator signatures.
pub const DST: &[u8] = b"BLS_SIG_BLS12381G2_XMD:SHA-256_SSWU_RO_POP_";

/// A BLS12-381 secret scalar, 32 bytes.
#[derive(Clone)]
pub struct SecretScalar(pub [u8; 32]);

impl Drop for SecretScalar {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

/// Derive a secret key from input keying material and optional `key_info`.
///
/// `info` is accepted as a caller-supplied length-tagged byte slice, not
/// derived from a pointer/`sizeof`.
pub fn keygen(ikm: &[u8; 32], info: &[u8]) -> Result<SecretScalar, SignerError> {
    let sk = SecretKey::key_gen(ikm, info).map_err(|_| SignerError::Internal)?;
    let mut out = [0u8; 32];
    out.copy_from_slice(&sk.to_bytes());
    Ok(SecretScalar(out))
}

/// Derive the compressed G1 public key (48 bytes) for a secret scalar.
pub fn sk_to_pk_g1(sk: &SecretScalar) -> Result<[u8; 48], SignerError> {
    let sk = SecretKey::from_bytes(&sk.0).map_err(|_| SignerError::Internal)?;
    Ok(sk.sk_to_pk().compress())
}

/// Sign a 32-byte message (the Eth2 signing root), producing a compressed
/// G2 signature (96 bytes). Hash-to-curve with [`DST`] happens inside `blst`.
pub fn sign_g2(sk: &SecretScalar, msg32: &[u8; 32]) -> Result<[u8; 96], SignerError> {
    let sk = SecretKey::from_bytes(&sk.0).map_err(|_| SignerError::Internal)?;
    let sig = sk.sign(msg32, DST, &[]);
    Ok(sig.compress())
}

/// Verify a compressed signature against a compressed public key and message.
/// Used only by tests (keygen/sign round trips); the production
/// sign path never verifies its own output.
pub fn verify(pk48: &[u8; 48], msg32: &[u8; 32], sig96: &[u8; 96]) -> bool {
    let Ok(pk) = PublicKey::uncompress(pk48) else {
        return false;
    };
    let Ok(sig) = Signature::uncompress(sig96) else {
        return false;
    };
    matches!(
        sig.verify(true, msg32, DST, &[], &pk, true),
        BLST_ERROR::BLST_SUCCESS
    )
}
