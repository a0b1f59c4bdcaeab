//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! The styled-run sink and the seeded insertion entry point.
//!
//! [`StyleSink`] is the seam between the pure scanner and whatever holds
//! styled text on the other side (a styled document, a render surface, a
//! plain buffer). The core only ever calls `insert`; it never depends on
//! the sink's concrete type.

use crate::code::EscapeCode;
use crate::parser::scan_runs;
use crate::result::{SgrError, SgrResult};
use crate::style::StyleState;
use tracing::instrument;

/// Capability accepting styled runs in scan order.
pub trait StyleSink {
    /// Accepts one run. `offset` is the character position the run starts
    /// at in the receiving document; consecutive calls from one insertion
    /// carry contiguous offsets.
    fn insert(&mut self, offset: usize, text: &str, style: &StyleState);
}

/// The reference sink: collects runs in memory.
///
/// Useful in tests and anywhere the runs are wanted as plain data rather
/// than streamed into a document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunBuffer {
    runs: Vec<(String, StyleState)>,
}

impl RunBuffer {
    /// Creates an empty buffer.
    pub fn new() -> RunBuffer {
        RunBuffer::default()
    }

    /// The collected runs, in insertion order.
    pub fn runs(&self) -> &[(String, StyleState)] {
        &self.runs
    }

    /// The concatenated plain text of every collected run.
    pub fn text(&self) -> String {
        self.runs.iter().map(|(text, _)| text.as_str()).collect()
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

impl StyleSink for RunBuffer {
    fn insert(&mut self, _offset: usize, text: &str, style: &StyleState) {
        self.runs.push((text.to_string(), *style));
    }
}

/// Parses `text` and streams its styled runs into `sink`, starting at
/// `offset`, seeded with the style already in effect at the insertion
/// point.
///
/// The seed is whatever the host document reports for the insertion point;
/// pass `StyleState::default()` for a fresh document. A seed whose
/// foreground channel was never set has the default-foreground code applied
/// once before scanning, so every emitted run carries a definite foreground.
/// This is an explicit check on [`ColorRef::Unset`](crate::ColorRef), never
/// a comparison of resolved colors.
///
/// Returns the style state in effect after the last code in `text`; feed it
/// back as the seed of the next insertion to compose incremental inserts.
///
/// # Errors
///
/// [`SgrError::NegativeOffset`] when `offset < 0` (raised before any sink
/// call), or [`SgrError::UnknownEscapeCode`] from the scan. On a scan error
/// the sink keeps the runs that preceded the bad sequence.
#[instrument(skip_all, fields(offset = offset, len = text.len()))]
pub fn insert_ansi<S: StyleSink>(
    sink: &mut S,
    offset: i64,
    text: &str,
    seed: StyleState,
) -> SgrResult<StyleState> {
    if offset < 0 {
        return Err(SgrError::NegativeOffset { offset });
    }

    let mut seed = seed;
    if seed.foreground.is_unset() {
        seed = seed.apply(EscapeCode::Default);
    }

    let mut cursor = offset as usize;
    let mut scanner = scan_runs(text, seed);
    for run in scanner.by_ref() {
        let run = run?;
        sink.insert(cursor, run.text, &run.style);
        cursor += run.text.len();
    }
    Ok(scanner.state())
}
