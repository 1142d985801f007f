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

//! EIP-2335 KDF selection: scrypt or PBKDF2-HMAC-SHA256, chosen by
//! `crypto.kdf.function`. Both paths are fully wired end to end.

use hmac::Hmac;
use serde::Deserialize;
use sha2::Sha256;
use zeroize::Zeroize;

use crate::config::SignerConfig;
use crate::core::hex::hex_decode;
use crate::error::SignerError;

/// Output of a KDF: 32 bytes, split `dk[0..16]` (AES key) / `dk[16..32]`
/// (checksum tag input). Zeroized on drop.
pub struct DerivedKey(pub [u8; 32]);

impl Drop for DerivedKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl DerivedKey {
    /// AES-128-CTR key half.
    pub fn aes_key(&self) -> &[u8] {
        &self.0[0..16]
    }
    /// Checksum tag-input half.
    pub fn checksum_half(&self) -> &[u8] {
        &self.0[16..32]
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct Pbkdf2Params {
    c: u32,
    dklen: u32,
    prf: String,
    salt: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ScryptParams {
    n: u64,
    r: u32,
    p: u32,
    dklen: u32,
    salt: String,
}

/// Parsed `crypto.kdf` module, parameterized by which function it names.
pub(super) enum Kdf {
    Pbkdf2(Pbkdf2Params),
    Scrypt(ScryptParams),
}

impl Kdf {
    pub(super) fn parse(function: &str, params: serde_json::Value) -> Result<Self, SignerError> {
        match function {
            "pbkdf2" => {
                let p: Pbkdf2Params =
                    serde_json::from_value(params).map_err(|_| SignerError::BadJsonFormat)?;
                Ok(Kdf::Pbkdf2(p))
            }
            "scrypt" => {
                let p: ScryptParams =
                    serde_json::from_value(params).map_err(|_| SignerError::BadJsonFormat)?;
                Ok(Kdf::Scrypt(p))
            }
            _ => Err(SignerError::BadJsonFormat),
        }
    }

    /// Derive the 32-byte key for `password` under this KDF's parameters.
    pub(super) fn derive(&self, password: &[u8], cfg: &SignerConfig) -> Result<DerivedKey, SignerError> {
        match self {
            Kdf::Pbkdf2(p) => derive_pbkdf2(password, p),
            Kdf::Scrypt(p) => derive_scrypt(password, p, cfg),
        }
    }
}

fn derive_pbkdf2(password: &[u8], p: &Pbkdf2Params) -> Result<DerivedKey, SignerError> {
    if p.dklen != 32 {
        return Err(SignerError::BadJsonFormat);
    }
    if p.prf != "hmac-sha256" {
        return Err(SignerError::BadJsonFormat);
    }
    let salt = hex_decode(&p.salt).map_err(|_| SignerError::BadJsonFormat)?;
    if p.c == 0 {
        return Err(SignerError::BadJsonFormat);
    }

    let mut out = [0u8; 32];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, &salt, p.c, &mut out)
        .map_err(|_| SignerError::Internal)?;
    Ok(DerivedKey(out))
}

fn derive_scrypt(password: &[u8], p: &ScryptParams, cfg: &SignerConfig) -> Result<DerivedKey, SignerError> {
    if p.dklen != 32 {
        return Err(SignerError::BadJsonFormat);
    }
    if p.n < 2 || !p.n.is_power_of_two() {
        return Err(SignerError::BadJsonFormat);
    }
    if p.r == 0 || p.p == 0 {
        return Err(SignerError::BadJsonFormat);
    }

    let approx_mem = 128u64
        .saturating_mul(p.r as u64)
        .saturating_mul(p.n)
        .saturating_mul(p.p as u64);
    if approx_mem > cfg.scrypt_max_mem_bytes {
        return Err(SignerError::KdfTooExpensive);
    }

    let salt = hex_decode(&p.salt).map_err(|_| SignerError::BadJsonFormat)?;
    let log_n = p.n.trailing_zeros() as u8;
    let params =
        scrypt::Params::new(log_n, p.r, p.p, 32).map_err(|_| SignerError::BadJsonFormat)?;

    let mut out = [0u8; 32];
    scrypt::scrypt(password, &salt, &params, &mut out).map_err(|_| SignerError::Internal)?;
    Ok(DerivedKey(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_key_zeroizes_on_demand() {
        let mut dk = DerivedKey([0x42; 32]);
        dk.0.zeroize();
        assert_eq!(dk.0, [0u8; 32]);
    }

    #[test]
    fn scrypt_over_ceiling_is_too_expensive() {
        let cfg = SignerConfig {
            scrypt_max_mem_bytes: 1024,
            ..SignerConfig::default()
        };
        let p = ScryptParams {
            n: 262_144,
            r: 8,
            p: 1,
            dklen: 32,
            salt: "00".repeat(32),
        };
        assert_eq!(
            derive_scrypt(b"pw", &p, &cfg).unwrap_err(),
            SignerError::KdfTooExpensive
        );
    }

    #[test]
    fn scrypt_rejects_non_power_of_two_n() {
        let cfg = SignerConfig::default();
        let p = ScryptParams {
            n: 3,
            r: 8,
            p: 1,
            dklen: 32,
            salt: "00".repeat(32),
        };
        assert_eq!(
            derive_scrypt(b"pw", &p, &cfg).unwrap_err(),
            SignerError::BadJsonFormat
        );
    }

    #[test]
    fn pbkdf2_rejects_wrong_prf() {
        let p = Pbkdf2Params {
            c: 10,
            dklen: 32,
            prf: "hmac-sha512".to_string(),
            salt: "00".repeat(32),
        };
        assert_eq!(
            derive_pbkdf2(b"pw", &p).unwrap_err(),
            SignerError::BadJsonFormat
        );
    }
}
