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

//! Build/deploy-time limits.
//!
//! The firmware image has no filesystem of its own, so [`SignerConfig::default`]
//! bakes in the deployment's fixed build-time constants. A host-side test
//! harness or integration runner may instead load overrides from a TOML file via
//! [`SignerConfig::from_toml`].

use serde::{Deserialize, Serialize};

/// Maximum number of key pairs the keystore can hold.
pub const DEFAULT_MAX_KEYS: usize = 10;
/// Maximum size of a single request buffer, in bytes.
pub const DEFAULT_MAX_REQUEST_BYTES: usize = 32_768;
/// Maximum number of headers accepted per request.
pub const DEFAULT_MAX_HEADERS: usize = 100;
/// Default scrypt memory ceiling (approx `128 * r * n * p` bytes), 1 GiB.
pub const DEFAULT_SCRYPT_MAX_MEM_BYTES: u64 = 1 << 30;

/// Runtime limits for the signer core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerConfig {
    /// Keystore capacity.
    #[serde(default = "default_max_keys")]
    pub max_keys: usize,
    /// Request buffer cap.
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
    /// Header count cap.
    #[serde(default = "default_max_headers")]
    pub max_headers: usize,
    /// Memory ceiling enforced against scrypt's `n * r * p` cost parameters.
    #[serde(default = "default_scrypt_max_mem_bytes")]
    pub scrypt_max_mem_bytes: u64,
}

fn default_max_keys() -> usize {
    DEFAULT_MAX_KEYS
}
fn default_max_request_bytes() -> usize {
    DEFAULT_MAX_REQUEST_BYTES
}
fn default_max_headers() -> usize {
    DEFAULT_MAX_HEADERS
}
fn default_scrypt_max_mem_bytes() -> u64 {
    DEFAULT_SCRYPT_MAX_MEM_BYTES
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            max_keys: DEFAULT_MAX_KEYS,
            max_request_bytes: DEFAULT_MAX_REQUEST_BYTES,
            max_headers: DEFAULT_MAX_HEADERS,
            scrypt_max_mem_bytes: DEFAULT_SCRYPT_MAX_MEM_BYTES,
        }
    }
}

impl SignerConfig {
    /// Parse overrides from a TOML document; unset fields fall back to defaults.
    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_constants() {
        let cfg = SignerConfig::default();
        assert_eq!(cfg.max_keys, 10);
        assert_eq!(cfg.max_request_bytes, 32_768);
        assert_eq!(cfg.max_headers, 100);
    }

    #[test]
    fn partial_toml_overrides_fall_back_to_defaults() {
        let cfg = SignerConfig::from_toml("max_keys = 4\n").expect("parse");
        assert_eq!(cfg.max_keys, 4);
        assert_eq!(cfg.max_request_bytes, DEFAULT_MAX_REQUEST_BYTES);
    }
}
