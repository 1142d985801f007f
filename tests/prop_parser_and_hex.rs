// Copyright (c) 2026 Amunchain
// Licensed under the Apache License, Version 2.0

#![forbid(unsafe_code)]

use proptest::prelude::*;

use bls_remote_signer::config::SignerConfig;
use bls_remote_signer::core::hex::{hex_decode, hex_encode};
use bls_remote_signer::error::SignerError;
use bls_remote_signer::protocol::request::{self, Endpoint};

proptest! {
    #[test]
    fn hex_roundtrips_for_any_bytes(bytes in proptest::collection::vec(any::<u8>(), 0..128)) {
        let encoded = hex_encode(&bytes);
        prop_assert_eq!(encoded.len(), bytes.len() * 2);
        prop_assert!(encoded.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        prop_assert_eq!(hex_decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn parser_framing_is_incomplete_until_the_last_byte_then_complete(
        body in proptest::collection::vec(any::<u8>().prop_filter("no control bytes", |b| *b >= 0x20), 1..64),
    ) {
        let cfg = SignerConfig::default();
        let mut req = format!(
            "POST /eth/v1/keystores HTTP/1.1\r\nContent-Length: {}\r\n\r\n",
            body.len()
        )
        .into_bytes();
        req.extend_from_slice(&body);

        for n in 1..req.len() {
            prop_assert_eq!(request::parse(&req[..n], &cfg).unwrap_err(), SignerError::Incomplete);
        }
        let parsed = request::parse(&req, &cfg).expect("full buffer parses");
        prop_assert!(matches!(parsed.endpoint, Endpoint::Import { .. }));

        let mut with_trailer = req.clone();
        with_trailer.push(b'X');
        prop_assert_eq!(request::parse(&with_trailer, &cfg).unwrap_err(), SignerError::BadRequest);
    }
}
