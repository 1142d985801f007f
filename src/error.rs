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

//! Crate-wide error taxonomy.
//!
//! The taxonomy is deliberately coarse at the HTTP boundary: every variant
//! below collapses to one of {200 unreachable, 400, 404} in
//! [`crate::protocol::response`], and the import pipeline in particular never
//! lets the network distinguish *why* a batch failed (no password/KDF oracle).

use thiserror::Error;

/// All failure modes the core can produce.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SignerError {
    /// More bytes are needed before the request can be parsed; not a true error.
    #[error("incomplete request")]
    Incomplete,
    /// Malformed HTTP, unknown POST path, malformed/oversized JSON body, too many keys.
    #[error("bad request")]
    BadRequest,
    /// Requested signing public key is not present in the keystore.
    #[error("not found")]
    NotFound,
    /// EIP-2335 checksum verification failed (wrong password).
    #[error("bad password")]
    BadPassword,
    /// A required EIP-2335 JSON field was missing or had the wrong type/value.
    #[error("bad keystore json")]
    BadJsonFormat,
    /// scrypt cost parameters exceed the configured memory ceiling.
    #[error("kdf too expensive")]
    KdfTooExpensive,
    /// Keystore is at capacity.
    #[error("keystore full")]
    Full,
    /// A secret scalar being imported already exists in the keystore.
    #[error("duplicate secret")]
    DuplicateSecret,
    /// Hardware RNG failed to produce randomness.
    #[error("rng error")]
    RngError,
    /// A primitive failed in a way that should not normally occur.
    #[error("internal error")]
    Internal,
}

/// HTTP-facing outcome of a [`SignerError`], used only by the response composer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpOutcome {
    /// 400 Bad Request, empty `application/json` body.
    BadRequest,
    /// 404 Not Found, empty `application/json` body.
    NotFound,
}

impl SignerError {
    /// Map an error to its HTTP-visible outcome.
    ///
    /// `Incomplete` has no HTTP outcome: the caller must keep reading bytes
    /// and never reaches the response composer for that case.
    pub fn to_http_outcome(self) -> HttpOutcome {
        match self {
            SignerError::NotFound => HttpOutcome::NotFound,
            _ => HttpOutcome::BadRequest,
        }
    }
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, SignerError>;
