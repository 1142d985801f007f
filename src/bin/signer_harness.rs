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

//! Dev/test harness: feeds one HTTP request read from stdin through the
//! signer core and writes the response bytes to stdout.
//!
//! This stands in for the real transport (the raw TCP/UART link is an
//! external collaborator outside this crate); it is not part of the core
//! and starts a fresh, empty keystore on every run.

use std::io::{Read, Write};

use bls_remote_signer::config::SignerConfig;
use bls_remote_signer::core::keystore::Keystore;
use bls_remote_signer::protocol::dispatch;
use bls_remote_signer::rng::HostRandom;

fn main() {
    let _ = tracing_subscriber::fmt().with_target(false).compact().try_init();

    let cfg = SignerConfig::default();
    let mut keystore = Keystore::new(cfg.max_keys);

    let mut buf = Vec::new();
    if std::io::stdin().read_to_end(&mut buf).is_err() {
        eprintln!("failed to read request from stdin");
        std::process::exit(1);
    }

    match dispatch(&buf, &cfg, &mut keystore, &HostRandom) {
        Some(response) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let _ = out.write_all(&response);
        }
        None => {
            eprintln!("request is incomplete (need more bytes)");
            std::process::exit(1);
        }
    }
}
