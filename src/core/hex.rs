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

//! Hex and buffer utilities.

use subtle::ConstantTimeEq;

/// Parse error: decode failed because of odd length or a non-hex character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexParseError;

/// Encode `bytes` as lowercase hex, no `0x` prefix.
pub fn hex_encode(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string (case-insensitive) into bytes.
///
/// Fails on odd length or a non-hex character; does not require/strip a `0x`
/// prefix (callers strip it explicitly where the wire format specifies one).
pub fn hex_decode(s: &str) -> Result<Vec<u8>, HexParseError> {
    hex::decode(s).map_err(|_| HexParseError)
}

/// Constant-time byte-slice equality.
///
/// Runs in time independent of the position of the first differing byte.
/// Slices of differing length are unequal but still compared in constant
/// time relative to the shorter slice's scan; length itself is not secret
/// here (all callers compare fixed-size hex/digest buffers).
pub fn ct_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.ct_eq(b).into()
}
