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

//! HTTP request parser and endpoint classification.
//!
//! A [`ParsedRequest`] borrows byte ranges straight out of the caller's
//! buffer — no header is copied into its own allocation.

use crate::config::SignerConfig;
use crate::error::SignerError;

/// Request-line method. Only `GET` and `POST` are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET.
    Get,
    /// POST.
    Post,
}

/// Negotiated response content type, from the `Accept` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accept {
    /// `text/plain` (the default when `Accept` is absent or unrecognized).
    TextPlain,
    /// `application/json` (from `Accept: application/json` or `Accept: */*`).
    ApplicationJson,
}

/// The classified endpoint and any data the handler needs, borrowed from the
/// request buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    /// `GET /upcheck`.
    Upcheck,
    /// `GET /api/v1/eth2/publicKeys`.
    ListKeys,
    /// `POST /api/v1/eth2/sign/0x<96 lowercase hex chars>`.
    Sign {
        /// The 96-char lowercase hex public key from the path, no `0x`.
        pk_hex: &'a str,
        /// The raw JSON request body (`{"signingRoot": "0x..."}`).
        body: &'a [u8],
    },
    /// `POST /eth/v1/keystores`.
    Import {
        /// The raw JSON request body.
        body: &'a [u8],
    },
}

/// A fully parsed request, borrowed from the caller's buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRequest<'a> {
    /// HTTP method.
    pub method: Method,
    /// Classified endpoint with its borrowed payload.
    pub endpoint: Endpoint<'a>,
    /// Negotiated response content type.
    pub accept: Accept,
}

/// Below this many buffered bytes, an unterminated header block is treated
/// as still arriving (`Incomplete`); at or above it, as malformed.
const HEADER_INCOMPLETE_THRESHOLD: usize = 300;

const SIGN_PATH_PREFIX: &str = "/api/v1/eth2/sign/0x";
const PK_HEX_LEN: usize = 96;

fn is_tchar(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

fn is_lower_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

struct Header<'a> {
    name: &'a str,
    value: &'a str,
}

fn parse_header_line(line: &str) -> Result<Header<'_>, SignerError> {
    let colon = line.find(':').ok_or(SignerError::BadRequest)?;
    let name = &line[..colon];
    if name.is_empty() || !name.bytes().all(is_tchar) {
        return Err(SignerError::BadRequest);
    }
    let value = line[colon + 1..].trim_matches([' ', '\t']);
    Ok(Header { name, value })
}

/// Parse one request out of `buf`.
///
/// `Err(SignerError::Incomplete)` means more bytes are needed; any other
/// `Err` means the buffer, as it stands, can never become valid (caller
/// should respond with the mapped status and discard it).
pub fn parse(buf: &[u8], cfg: &SignerConfig) -> Result<ParsedRequest<'_>, SignerError> {
    if buf.len() > cfg.max_request_bytes {
        return Err(SignerError::BadRequest);
    }

    let headers_end = match find(buf, b"\r\n\r\n") {
        Some(pos) => pos,
        None => {
            return if buf.len() < HEADER_INCOMPLETE_THRESHOLD {
                Err(SignerError::Incomplete)
            } else {
                Err(SignerError::BadRequest)
            };
        }
    };
    let body_start = headers_end + 4;

    let header_block = std::str::from_utf8(&buf[..headers_end]).map_err(|_| SignerError::BadRequest)?;
    let mut lines = header_block.split("\r\n");

    let request_line = lines.next().ok_or(SignerError::BadRequest)?;
    let mut parts = request_line.split(' ');
    let method_str = parts.next().ok_or(SignerError::BadRequest)?;
    let path = parts.next().ok_or(SignerError::BadRequest)?;
    let _version = parts.next().ok_or(SignerError::BadRequest)?;
    if parts.next().is_some() {
        return Err(SignerError::BadRequest);
    }

    let method = match method_str {
        "GET" => Method::Get,
        "POST" => Method::Post,
        _ => return Err(SignerError::BadRequest),
    };

    let mut accept = Accept::TextPlain;
    let mut content_length: Option<usize> = None;
    let mut header_count = 0usize;
    for line in lines {
        header_count += 1;
        if header_count > cfg.max_headers {
            return Err(SignerError::BadRequest);
        }
        let h = parse_header_line(line)?;
        if h.name.eq_ignore_ascii_case("accept") {
            accept = match h.value {
                "application/json" | "*/*" => Accept::ApplicationJson,
                _ => Accept::TextPlain,
            };
        } else if h.name.eq_ignore_ascii_case("content-length") {
            let n: usize = h.value.parse().map_err(|_| SignerError::BadRequest)?;
            content_length = Some(n);
        }
    }

    let body_len = match method {
        Method::Get => 0,
        Method::Post => content_length.ok_or(SignerError::BadRequest)?,
    };
    let total_expected = body_start + body_len;
    if buf.len() < total_expected {
        return Err(SignerError::Incomplete);
    }
    if buf.len() > total_expected {
        return Err(SignerError::BadRequest);
    }
    let body = &buf[body_start..total_expected];

    let endpoint = match (method, path) {
        (Method::Get, "/upcheck") => Endpoint::Upcheck,
        (Method::Get, "/api/v1/eth2/publicKeys") => Endpoint::ListKeys,
        (Method::Post, p) if p.starts_with(SIGN_PATH_PREFIX) => {
            let pk_hex = &p[SIGN_PATH_PREFIX.len()..];
            if pk_hex.len() == PK_HEX_LEN && is_lower_hex(pk_hex) {
                Endpoint::Sign { pk_hex, body }
            } else {
                return Err(SignerError::BadRequest);
            }
        }
        (Method::Post, "/eth/v1/keystores") => Endpoint::Import { body },
        _ => return Err(SignerError::BadRequest),
    };

    Ok(ParsedRequest {
        method,
        endpoint,
        accept,
    })
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SignerConfig {
        SignerConfig::default()
    }

    #[test]
    fn upcheck_parses() {
        let req = b"GET /upcheck HTTP/1.1\r\nHost: x\r\n\r\n";
        let parsed = parse(req, &cfg()).expect("parses");
        assert_eq!(parsed.method, Method::Get);
        assert_eq!(parsed.endpoint, Endpoint::Upcheck);
    }

    #[test]
    fn list_keys_parses() {
        let req = b"GET /api/v1/eth2/publicKeys HTTP/1.1\r\n\r\n";
        let parsed = parse(req, &cfg()).expect("parses");
        assert_eq!(parsed.endpoint, Endpoint::ListKeys);
    }

    #[test]
    fn unknown_get_path_is_bad_request() {
        let req = b"GET /nope HTTP/1.1\r\n\r\n";
        assert_eq!(parse(req, &cfg()).unwrap_err(), SignerError::BadRequest);
    }

    #[test]
    fn sign_path_requires_exact_length_lowercase_hex() {
        let pk = "a".repeat(96);
        let req = format!(
            "POST /api/v1/eth2/sign/0x{pk} HTTP/1.1\r\nContent-Length: 2\r\n\r\n{{}}"
        );
        let parsed = parse(req.as_bytes(), &cfg()).expect("parses");
        assert_eq!(
            parsed.endpoint,
            Endpoint::Sign {
                pk_hex: &pk,
                body: b"{}"
            }
        );

        let bad = format!(
            "POST /api/v1/eth2/sign/0x{} HTTP/1.1\r\nContent-Length: 2\r\n\r\n{{}}",
            "A".repeat(96)
        );
        assert_eq!(parse(bad.as_bytes(), &cfg()).unwrap_err(), SignerError::BadRequest);
    }

    #[test]
    fn accept_header_is_case_insensitive() {
        let req = b"GET /upcheck HTTP/1.1\r\nACCEPT: application/json\r\n\r\n";
        let parsed = parse(req, &cfg()).expect("parses");
        assert_eq!(parsed.accept, Accept::ApplicationJson);
    }

    #[test]
    fn byte_at_a_time_framing_then_trailing_bytes_is_bad_request() {
        let full = b"POST /eth/v1/keystores HTTP/1.1\r\nContent-Length: 4\r\n\r\ntest";
        for n in 1..full.len() {
            assert_eq!(
                parse(&full[..n], &cfg()).unwrap_err(),
                SignerError::Incomplete,
                "prefix of length {n} should be incomplete"
            );
        }
        assert!(parse(full, &cfg()).is_ok());

        let mut with_trailer = full.to_vec();
        with_trailer.push(b'X');
        assert_eq!(parse(&with_trailer, &cfg()).unwrap_err(), SignerError::BadRequest);
    }

    #[test]
    fn missing_content_length_on_post_is_bad_request() {
        let req = b"POST /eth/v1/keystores HTTP/1.1\r\n\r\ntest";
        assert_eq!(parse(req, &cfg()).unwrap_err(), SignerError::BadRequest);
    }

    #[test]
    fn unterminated_headers_below_threshold_is_incomplete() {
        let req = b"GET /upcheck HTTP/1.1\r\nHost: x";
        assert_eq!(parse(req, &cfg()).unwrap_err(), SignerError::Incomplete);
    }

    #[test]
    fn unterminated_headers_past_threshold_is_bad_request() {
        let mut req = b"GET /upcheck HTTP/1.1\r\n".to_vec();
        req.extend(std::iter::repeat(b'a').take(HEADER_INCOMPLETE_THRESHOLD));
        assert_eq!(parse(&req, &cfg()).unwrap_err(), SignerError::BadRequest);
    }
}
