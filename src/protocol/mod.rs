#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Web3Signer-style HTTP-over-bytes surface.
//!
//! This is a byte-buffer-in/byte-buffer-out protocol core with no transport
//! of its own: the caller owns the socket/UART and hands complete request
//! buffers to [`dispatch`], which parses, classifies, runs the matching
//! handler against a [`crate::core::keystore::Keystore`], and composes the
//! response bytes.

/// Endpoint handlers (upcheck, list keys, sign, import).
pub mod handlers;
/// HTTP request parser and endpoint classification.
pub mod request;
/// Canonical HTTP response composer.
pub mod response;

use crate::config::SignerConfig;
use crate::core::keystore::Keystore;
use crate::error::SignerError;
use crate::rng::RandomSource;
use request::ParsedRequest;

/// Parse one request out of `buf` and run it to completion against `keystore`.
///
/// Returns:
/// - `Some(bytes)` — a complete response to write back, whether success or a
///   mapped 400/404 error.
/// - `None` — more bytes are needed; the caller should read more and call
///   again with the extended buffer.
pub fn dispatch(
    buf: &[u8],
    cfg: &SignerConfig,
    keystore: &mut Keystore,
    rng: &dyn RandomSource,
) -> Option<Vec<u8>> {
    let parsed: ParsedRequest = match request::parse(buf, cfg) {
        Ok(p) => p,
        Err(SignerError::Incomplete) => return None,
        Err(e) => return Some(response::render_error(e)),
    };

    let outcome = handlers::handle(&parsed, cfg, keystore, rng);
    Some(match outcome {
        Ok(body) => response::render_success(body),
        Err(e) => response::render_error(e),
    })
}
