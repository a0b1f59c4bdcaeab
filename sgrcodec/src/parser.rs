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

//! The run scanner: raw ANSI text to styled text runs.
//!
//! [`scan_runs`] walks the input once, locating SGR escape sequences and
//! yielding the plain text between them tagged with the style in effect
//! when that text was scanned. Codes mutate the running state only for
//! text that follows them; nothing is restyled retroactively.
//!
//! Everything that is not the escape marker byte is opaque payload. The
//! scanner never interprets or re-encodes text content, so arbitrary
//! multi-byte Unicode passes through untouched. Slice boundaries always
//! fall on char boundaries because the escape pattern is pure ASCII.

use crate::code::EscapeCode;
use crate::result::{SgrError, SgrResult};
use crate::style::StyleState;
use tracing::trace;

/// A maximal span of plain text tagged with one unchanging style snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextRun<'a> {
    /// The plain text, with escape sequences removed
    pub text: &'a str,
    /// The style in effect when this text was scanned
    pub style: StyleState,
}

/// Scans `text` into styled runs, starting from the `seed` style.
///
/// The returned iterator is lazy and finite. Runs are yielded in input
/// order; empty gaps between consecutive escape sequences yield nothing
/// (but each sequence still advances the style state). An escape-looking
/// sequence with no catalog entry yields `Err(UnknownEscapeCode)` once,
/// after which the iterator is fused; runs yielded before the error stand.
pub fn scan_runs(text: &str, seed: StyleState) -> RunScanner<'_> {
    RunScanner {
        text,
        cursor: 0,
        state: seed,
        pending_error: None,
        done: false,
    }
}

/// Iterator over the styled runs of one piece of ANSI-annotated text.
///
/// Created by [`scan_runs`]. Not resumable across inputs; re-invoke
/// `scan_runs` to parse again.
#[derive(Clone, Debug)]
pub struct RunScanner<'a> {
    text: &'a str,
    cursor: usize,
    state: StyleState,
    pending_error: Option<SgrError>,
    done: bool,
}

impl<'a> RunScanner<'a> {
    /// The running style state, including every code applied so far.
    ///
    /// After the iterator is exhausted without error this is the state a
    /// subsequent parse should be seeded with to compose incrementally.
    pub fn state(&self) -> StyleState {
        self.state
    }
}

impl<'a> Iterator for RunScanner<'a> {
    type Item = SgrResult<TextRun<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(error) = self.pending_error.take() {
            self.done = true;
            return Some(Err(error));
        }

        while self.cursor < self.text.len() {
            let Some(found) = find_escape(self.text, self.cursor) else {
                // No further escape sequences; the rest is one final run.
                let run = TextRun {
                    text: &self.text[self.cursor..],
                    style: self.state,
                };
                self.cursor = self.text.len();
                self.done = true;
                return Some(Ok(run));
            };

            let before = &self.text[self.cursor..found.start];
            self.cursor = found.end;

            match EscapeCode::from_wire(found.sequence) {
                Ok(code) => {
                    trace!(?code, position = found.start, "applying escape code");
                    let style = self.state;
                    self.state = self.state.apply(code);
                    if !before.is_empty() {
                        // Text preceding the code keeps the pre-mutation style.
                        return Some(Ok(TextRun {
                            text: before,
                            style,
                        }));
                    }
                }
                Err(error) => {
                    if before.is_empty() {
                        self.done = true;
                        return Some(Err(error));
                    }
                    // Emit the text scanned so far, then fail on the next call.
                    self.pending_error = Some(error);
                    return Some(Ok(TextRun {
                        text: before,
                        style: self.state,
                    }));
                }
            }
        }

        self.done = true;
        None
    }
}

struct EscapeMatch<'a> {
    start: usize,
    end: usize,
    sequence: &'a str,
}

/// Finds the next complete SGR escape pattern at or after `from`.
///
/// The pattern is `ESC [` followed by semicolon-joined decimal groups and a
/// final `m`. An ESC byte that does not begin a complete pattern is treated
/// as ordinary text and skipped over.
fn find_escape(text: &str, from: usize) -> Option<EscapeMatch<'_>> {
    let bytes = text.as_bytes();
    let mut search = from;
    while search < bytes.len() {
        let Some(offset) = bytes[search..].iter().position(|&b| b == 0x1b) else {
            return None;
        };
        let start = search + offset;
        if let Some(end) = match_escape_at(bytes, start) {
            return Some(EscapeMatch {
                start,
                end,
                sequence: &text[start..end],
            });
        }
        search = start + 1;
    }
    None
}

/// Matches one escape pattern starting exactly at `start`, returning the
/// exclusive end index. Parameter groups are one or more digits with an
/// optional trailing semicolon; at least one digit is required.
fn match_escape_at(bytes: &[u8], start: usize) -> Option<usize> {
    if bytes.get(start + 1) != Some(&b'[') {
        return None;
    }
    let mut index = start + 2;
    let mut group_digits = 0usize;
    let mut any_digits = false;
    loop {
        match bytes.get(index)? {
            b'0'..=b'9' => {
                group_digits += 1;
                any_digits = true;
                index += 1;
            }
            b';' if group_digits > 0 => {
                group_digits = 0;
                index += 1;
            }
            b'm' if any_digits => return Some(index + 1),
            _ => return None,
        }
    }
}
