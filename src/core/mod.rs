#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Core protocol primitives: hex/buffer utilities, BLS facade, EIP-2335
//! decryption pipeline, and the keystore that ties them together.

/// BLS12-381 facade (keygen, pubkey derivation, signing).
pub mod bls;
/// EIP-2335 encrypted keystore decryption pipeline.
pub mod eip2335;
/// Hex encode/decode and constant-time comparison.
pub mod hex;
/// In-memory keystore of provisioned BLS key pairs.
pub mod keystore;
