// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for index parsing and degradation.
//!
//! Arbitrary bytes must either parse into an index or fail with a
//! `LoadError`; the degrade path must always leave a usable (possibly empty)
//! index behind. Never a panic.

#![no_main]

use fitsearch::{degrade, parse_index, rank, IndexStatus, NullSink};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let body = String::from_utf8_lossy(data);
    let parsed = parse_index(&body);
    let ok = parsed.is_ok();

    let outcome = degrade(parsed, &NullSink);
    match outcome.status {
        IndexStatus::Loaded { documents } => {
            assert!(ok);
            assert_eq!(documents, outcome.index.len());
        }
        IndexStatus::Degraded => {
            assert!(!ok);
            assert!(outcome.index.is_empty());
        }
    }

    // Whatever came out must be searchable
    let _ = rank(&outcome.index, "protein", 10);
});
