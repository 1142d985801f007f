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

//! EIP-2335 checksum verification.

use sha2::{Digest, Sha256};

use crate::core::hex::{ct_eq, hex_decode};
use crate::error::SignerError;

/// Verify `SHA256(dk_second_half || cipher_message) == expected_hex`,
/// constant-time. Mismatch maps to [`SignerError::BadPassword`].
pub(super) fn verify(
    dk_second_half: &[u8],
    cipher_message: &[u8],
    expected_hex: &str,
) -> Result<(), SignerError> {
    let expected = hex_decode(expected_hex).map_err(|_| SignerError::BadJsonFormat)?;

    let mut hasher = Sha256::new();
    hasher.update(dk_second_half);
    hasher.update(cipher_message);
    let actual = hasher.finalize();

    if ct_eq(&actual, &expected) {
        Ok(())
    } else {
        Err(SignerError::BadPassword)
    }
}
