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

//! Shared helpers for the correctness suite.

use ansirun_sgrcodec::{AnsiTextBuilder, SgrResult, StyleState, scan_runs};

/// Scans `text` into owned `(text, style)` pairs, failing on the first
/// decode error.
pub fn scan_to_vec(text: &str, seed: StyleState) -> SgrResult<Vec<(String, StyleState)>> {
    scan_runs(text, seed)
        .map(|run| run.map(|r| (r.text.to_string(), r.style)))
        .collect()
}

/// Builds a piece of ANSI-annotated text with a fresh builder.
pub fn styled(build: impl FnOnce(&mut AnsiTextBuilder)) -> String {
    let mut builder = AnsiTextBuilder::new();
    build(&mut builder);
    builder.build()
}

/// The styled character stream of a run list: one `(char, style)` pair per
/// character, independent of where run boundaries happen to fall.
pub fn char_stream(runs: &[(String, StyleState)]) -> Vec<(char, StyleState)> {
    runs.iter()
        .flat_map(|(text, style)| text.chars().map(|ch| (ch, *style)).collect::<Vec<_>>())
        .collect()
}
