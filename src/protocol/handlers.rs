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

//! Endpoint handlers: upcheck, list keys, sign, and import.

use serde::Deserialize;
use tracing::{info, warn};
use zeroize::Zeroize;

use crate::config::SignerConfig;
use crate::core::eip2335;
use crate::core::hex::{hex_decode, hex_encode};
use crate::core::keystore::Keystore;
use crate::error::SignerError;
use crate::rng::RandomSource;

use super::request::{Accept, Endpoint, ParsedRequest};
use super::response::RenderedBody;

/// Run the handler matching `req.endpoint`, producing a rendered body.
pub fn handle(
    req: &ParsedRequest,
    cfg: &SignerConfig,
    keystore: &mut Keystore,
    rng: &dyn RandomSource,
) -> Result<RenderedBody, SignerError> {
    match req.endpoint {
        Endpoint::Upcheck => upcheck(),
        Endpoint::ListKeys => Ok(list_keys_body(keystore)),
        Endpoint::Sign { pk_hex, body } => sign(pk_hex, body, req.accept, keystore),
        Endpoint::Import { body } => import(body, cfg, keystore, rng),
    }
}

fn upcheck() -> Result<RenderedBody, SignerError> {
    Ok(RenderedBody::empty_text())
}

fn list_keys_json(keystore: &Keystore) -> String {
    if keystore.size() == 0 {
        return "[\n]".to_string();
    }
    let mut out = String::from("[\n");
    let entries: Vec<String> = keystore
        .public_keys()
        .map(|pk| format!("\"0x{}\"", hex_encode(pk)))
        .collect();
    out.push_str(&entries.join(",\n"));
    out.push_str("\n]");
    out
}

fn list_keys_body(keystore: &Keystore) -> RenderedBody {
    RenderedBody::json(list_keys_json(keystore))
}

#[derive(Deserialize)]
struct SignRequestBody {
    #[serde(rename = "signingRoot")]
    signing_root: String,
}

fn sign(
    pk_hex: &str,
    body: &[u8],
    accept: Accept,
    keystore: &Keystore,
) -> Result<RenderedBody, SignerError> {
    let index = keystore.lookup_by_pubkey_hex(pk_hex)?;

    let req: SignRequestBody = serde_json::from_slice(body).map_err(|_| SignerError::BadRequest)?;
    let root_hex = req
        .signing_root
        .strip_prefix("0x")
        .ok_or(SignerError::BadRequest)?;
    let root = hex_decode(root_hex).map_err(|_| SignerError::BadRequest)?;
    let root: [u8; 32] = root.try_into().map_err(|_| SignerError::BadRequest)?;

    let sig = keystore.sign(index, &root)?;
    let sig_hex = hex_encode(&sig);

    info!(pk = %pk_hex, "signed request");

    Ok(match accept {
        Accept::TextPlain => RenderedBody::text(format!("0x{sig_hex}")),
        Accept::ApplicationJson => {
            RenderedBody::json(format!("{{\"signature\": \"0x{sig_hex}\"}}"))
        }
    })
}

#[derive(Deserialize)]
struct ImportRequestBody {
    keystores: Vec<String>,
    passwords: Vec<String>,
}

fn import(
    body: &[u8],
    cfg: &SignerConfig,
    keystore: &mut Keystore,
    _rng: &dyn RandomSource,
) -> Result<RenderedBody, SignerError> {
    let req: ImportRequestBody = serde_json::from_slice(body).map_err(|_| SignerError::BadRequest)?;
    let ImportRequestBody { keystores, passwords } = req;

    if keystores.len() != passwords.len() {
        return Err(SignerError::BadRequest);
    }
    let remaining = cfg.max_keys.saturating_sub(keystore.size());
    if keystores.len() > remaining {
        return Err(SignerError::BadRequest);
    }

    let checkpoint = keystore.size();
    for (ks_json, mut password) in keystores.iter().zip(passwords.into_iter()) {
        let result = eip2335::decrypt(ks_json.as_bytes(), password.as_bytes(), cfg)
            .and_then(|mut secret| {
                let r = keystore.insert_from_secret(secret);
                secret.zeroize();
                r
            });
        password.zeroize();

        if let Err(e) = result {
            // Atomic batch: undo every insert made earlier in this request.
            keystore.truncate(checkpoint);
            warn!("import batch rejected, rolled back to pre-request size");
            return Err(e);
        }
    }

    Ok(list_keys_body(keystore))
}
