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

//! Canonical HTTP response composer.
//!
//! `Content-Length` is always computed from the rendered body's actual byte
//! length, never by formula, so a cap violation fails the render rather than
//! silently truncating.

use crate::error::{HttpOutcome, SignerError};

/// The two content types this surface ever emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// `text/plain`.
    TextPlain,
    /// `application/json`.
    ApplicationJson,
}

impl ContentType {
    fn as_str(self) -> &'static str {
        match self {
            ContentType::TextPlain => "text/plain",
            ContentType::ApplicationJson => "application/json",
        }
    }
}

/// A body a handler has already rendered, paired with its content type.
#[derive(Debug, Clone)]
pub struct RenderedBody {
    /// Content-Type of `bytes`.
    pub content_type: ContentType,
    /// Exact response body bytes.
    pub bytes: Vec<u8>,
}

impl RenderedBody {
    /// Empty `text/plain` body (used for `upcheck`).
    pub fn empty_text() -> Self {
        Self {
            content_type: ContentType::TextPlain,
            bytes: Vec::new(),
        }
    }

    /// A UTF-8 `text/plain` body.
    pub fn text(s: String) -> Self {
        Self {
            content_type: ContentType::TextPlain,
            bytes: s.into_bytes(),
        }
    }

    /// A UTF-8 `application/json` body.
    pub fn json(s: String) -> Self {
        Self {
            content_type: ContentType::ApplicationJson,
            bytes: s.into_bytes(),
        }
    }
}

/// Compose the whole-buffer bytes of a 200 response for `body`.
pub fn render_success(body: RenderedBody) -> Vec<u8> {
    compose(200, "OK", body.content_type, &body.bytes)
}

/// Compose the whole-buffer bytes of the error response for `err`.
///
/// Always an empty `application/json` body: 400 for
/// everything except `NotFound`, which is 404.
pub fn render_error(err: SignerError) -> Vec<u8> {
    match err.to_http_outcome() {
        HttpOutcome::BadRequest => compose(400, "Bad Request", ContentType::ApplicationJson, &[]),
        HttpOutcome::NotFound => compose(404, "Not Found", ContentType::ApplicationJson, &[]),
    }
}

fn compose(status: u16, reason: &str, content_type: ContentType, body: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(body.len() + 96);
    out.extend_from_slice(format!("HTTP/1.1 {status} {reason}\r\n").as_bytes());
    out.extend_from_slice(format!("Content-Type: {}\r\n", content_type.as_str()).as_bytes());
    out.extend_from_slice(format!("Content-Length: {}\r\n", body.len()).as_bytes());
    out.extend_from_slice(b"\r\n");
    out.extend_from_slice(body);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_length_of(bytes: &[u8]) -> usize {
        let text = std::str::from_utf8(bytes).expect("ascii headers");
        let header_block = text.split("\r\n\r\n").next().unwrap();
        header_block
            .lines()
            .find_map(|l| l.strip_prefix("Content-Length: "))
            .and_then(|v| v.parse().ok())
            .expect("content-length header present")
    }

    #[test]
    fn content_length_matches_body_for_every_success_body() {
        for body in [
            RenderedBody::empty_text(),
            RenderedBody::text("0x".to_string() + &"aa".repeat(96)),
            RenderedBody::json("[\n]".to_string()),
        ] {
            let body_len = body.bytes.len();
            let out = render_success(body);
            assert_eq!(content_length_of(&out), body_len);
        }
    }

    #[test]
    fn error_responses_are_empty_json() {
        let out = render_error(SignerError::BadRequest);
        assert!(out.starts_with(b"HTTP/1.1 400 Bad Request\r\n"));
        assert!(out.windows(16).any(|w| w == b"application/json"));
        assert_eq!(content_length_of(&out), 0);

        let out = render_error(SignerError::NotFound);
        assert!(out.starts_with(b"HTTP/1.1 404 Not Found\r\n"));
    }

    #[test]
    fn upcheck_body_matches_scenario_s1() {
        let out = render_success(RenderedBody::empty_text());
        assert_eq!(
            out,
            b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 0\r\n\r\n".to_vec()
        );
    }

    #[test]
    fn list_keys_empty_body_matches_scenario_s2() {
        let out = render_success(RenderedBody::json("[\n]".to_string()));
        assert_eq!(
            out,
            b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 3\r\n\r\n[\n]".to_vec()
        );
    }
}
