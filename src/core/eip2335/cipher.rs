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

//! EIP-2335 AES-128-CTR decryption.

use aes::Aes128;
use ctr::cipher::{KeyIvInit, StreamCipher};

use crate::core::hex::hex_decode;
use crate::error::SignerError;

type Aes128Ctr = ctr::Ctr128BE<Aes128>;

/// Decrypt `ciphertext` in place under AES-128-CTR with `key` (16 bytes)
/// and `iv` (16 bytes), returning the plaintext.
pub(super) fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>, SignerError> {
    let key: &[u8; 16] = key.try_into().map_err(|_| SignerError::BadJsonFormat)?;
    let iv: &[u8; 16] = iv.try_into().map_err(|_| SignerError::BadJsonFormat)?;

    let mut buf = ciphertext.to_vec();
    let mut cipher = Aes128Ctr::new(key.into(), iv.into());
    cipher.apply_keystream(&mut buf);
    Ok(buf)
}

/// Parse a hex-encoded 16-byte IV from the `crypto.cipher.params.iv` field.
pub(super) fn parse_iv(iv_hex: &str) -> Result<Vec<u8>, SignerError> {
    let iv = hex_decode(iv_hex).map_err(|_| SignerError::BadJsonFormat)?;
    if iv.len() != 16 {
        return Err(SignerError::BadJsonFormat);
    }
    Ok(iv)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decrypt_then_reencrypt_is_identity() {
        // CTR mode: decrypt and encrypt are the same keystream XOR operation.
        let key = [0x11u8; 16];
        let iv = [0x22u8; 16];
        let plaintext = b"0123456789abcdef0123456789abcdef";
        let ciphertext = decrypt(&key, &iv, plaintext).unwrap();
        let roundtrip = decrypt(&key, &iv, &ciphertext).unwrap();
        assert_eq!(roundtrip, plaintext);
    }

    #[test]
    fn rejects_wrong_iv_length() {
        assert!(parse_iv("aabb").is_err());
    }
}
