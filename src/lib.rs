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

//! Remote BLS signing core for Eth2 validators.
//!
//! This crate is the part of a remote signer that is meant to run inside an
//! isolated secure environment (e.g. a TrustZone-M secure world) and expose a
//! Web3Signer-conformant surface to a non-secure consensus client. It owns:
//!
//! - The in-memory keystore of provisioned BLS key pairs.
//! - The EIP-2335 keystore decryption pipeline (scrypt/PBKDF2, AES-128-CTR).
//! - A byte-buffer-in/byte-buffer-out HTTP request parser and response
//!   composer, with no transport of its own.
//!
//! The raw transport, hardware RNG, BLS12-381 scalar arithmetic, and
//! cryptographic primitives are treated as correct external collaborators;
//! see [`rng`] and [`core::bls`] for the seams at which they are plugged in.

/// Build/deploy-time configuration (capacity, buffer, and KDF cost limits).
pub mod config;
/// Keystore state, EIP-2335 decryption pipeline, BLS facade, and hex utilities.
pub mod core;
/// Crate-wide error taxonomy.
pub mod error;
/// HTTP-over-bytes request parsing, endpoint handlers, and response composer.
pub mod protocol;
/// Hardware random number source seam.
pub mod rng;
