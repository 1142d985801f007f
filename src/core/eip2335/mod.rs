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

//! EIP-2335 keystore decryption pipeline.
//!
//! Submodule split mirrors the reference `eth2_keystore` implementation:
//! KDF selection/derivation, checksum verification, and AES-128-CTR decryption
//! each live in their own module, orchestrated by [`decrypt`].

mod checksum;
mod cipher;
mod kdf;

use serde::Deserialize;
use zeroize::Zeroize;

use crate::config::SignerConfig;
use crate::core::hex::hex_decode;
use crate::error::SignerError;
use kdf::Kdf;

#[derive(Debug, Deserialize)]
struct KdfModule {
    function: String,
    params: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ChecksumModule {
    function: String,
    message: String,
}

#[derive(Debug, Deserialize)]
struct CipherParams {
    iv: String,
}

#[derive(Debug, Deserialize)]
struct CipherModule {
    function: String,
    params: CipherParams,
    message: String,
}

#[derive(Debug, Deserialize)]
struct CryptoModule {
    kdf: KdfModule,
    checksum: ChecksumModule,
    cipher: CipherModule,
}

/// EIP-2335 Version 4 keystore shape.
///
/// Only the `crypto` object is required; `pubkey`/`uuid`/`path`/`version`
/// fields present in real keystore files are ignored rather than rejected.
#[derive(Debug, Deserialize)]
struct EncryptedKeystore {
    crypto: CryptoModule,
}

/// Decrypt an EIP-2335 keystore JSON document with `password`, returning the
/// 32-byte secret scalar on success.
///
/// Every step of the pipeline collapses unrecognized/malformed input to
/// [`SignerError::BadJsonFormat`] or, for checksum mismatch specifically, to
/// [`SignerError::BadPassword`] — the pipeline never reveals which step
/// failed beyond that distinction.
pub fn decrypt(keystore_json: &[u8], password: &[u8], cfg: &SignerConfig) -> Result<[u8; 32], SignerError> {
    let ks: EncryptedKeystore =
        serde_json::from_slice(keystore_json).map_err(|_| SignerError::BadJsonFormat)?;

    if ks.crypto.cipher.function != "aes-128-ctr" {
        return Err(SignerError::BadJsonFormat);
    }
    if ks.crypto.checksum.function != "sha256" {
        return Err(SignerError::BadJsonFormat);
    }

    let kdf = Kdf::parse(&ks.crypto.kdf.function, ks.crypto.kdf.params)?;
    let dk = kdf.derive(password, cfg)?;

    let mut cipher_message =
        hex_decode(&ks.crypto.cipher.message).map_err(|_| SignerError::BadJsonFormat)?;

    checksum::verify(dk.checksum_half(), &cipher_message, &ks.crypto.checksum.message)?;

    let iv = cipher::parse_iv(&ks.crypto.cipher.params.iv)?;
    let mut plaintext = cipher::decrypt(dk.aes_key(), &iv, &cipher_message)?;
    cipher_message.zeroize();

    if plaintext.len() != 32 {
        plaintext.zeroize();
        return Err(SignerError::BadJsonFormat);
    }
    let mut out = [0u8; 32];
    out.copy_from_slice(&plaintext);
    plaintext.zeroize();
    Ok(out)
}
