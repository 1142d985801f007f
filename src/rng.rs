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

//! Hardware RNG seam.
//!
//! The secure-world hardware RNG driver is out of scope for this crate (§1);
//! [`RandomSource`] is the trait the keystore calls through, and
//! [`HostRandom`] is the non-secure-world stand-in used by tests and the dev
//! harness binary.

use crate::error::SignerError;

/// Source of cryptographically secure random bytes.
pub trait RandomSource {
    /// Fill `out` with random bytes, or fail with [`SignerError::RngError`].
    fn fill(&self, out: &mut [u8]) -> Result<(), SignerError>;
}

/// `rand`-backed RNG used outside the secure world (tests, dev harness).
#[derive(Debug, Default, Clone, Copy)]
pub struct HostRandom;

impl RandomSource for HostRandom {
    fn fill(&self, out: &mut [u8]) -> Result<(), SignerError> {
        use rand::RngCore;
        rand::rngs::OsRng.fill_bytes(out);
        Ok(())
    }
}
