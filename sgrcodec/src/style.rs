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

//! The cumulative text style and its transition function.

use crate::code::EscapeCode;
use crate::color::ColorRef;

/// The decoration and color state in effect at a point in a text stream.
///
/// `StyleState` is an immutable-update value: [`apply`](StyleState::apply)
/// returns a new snapshot and never mutates in place, so a run tagged with
/// one snapshot is never retroactively restyled by later codes.
///
/// Bold and faint are independent flags, mirroring real SGR semantics where
/// `21` (not bold) and `22` (normal intensity) are distinct resets. Both may
/// be set at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    /// Bold intensity (SGR 1 / 21)
    pub bold: bool,
    /// Faint intensity (SGR 2 / 22)
    pub faint: bool,
    /// Italic (SGR 3 / 23)
    pub italic: bool,
    /// Underline (SGR 4 / 24)
    pub underline: bool,
    /// Foreground color channel (SGR 30-37, 39, 90-97)
    pub foreground: ColorRef,
    /// Background color channel (SGR 40-47, 49, 100-107)
    pub background: ColorRef,
}

impl StyleState {
    /// Applies one escape code, producing the successor state.
    ///
    /// Pure and total: `Reset` returns the all-default state, every other
    /// code changes exactly one field and copies the rest.
    pub fn apply(self, code: EscapeCode) -> StyleState {
        match code {
            EscapeCode::Reset => StyleState::default(),
            EscapeCode::Bold => StyleState { bold: true, ..self },
            EscapeCode::NotBold => StyleState { bold: false, ..self },
            EscapeCode::Faint => StyleState { faint: true, ..self },
            EscapeCode::Normal => StyleState { faint: false, ..self },
            EscapeCode::Italic => StyleState { italic: true, ..self },
            EscapeCode::NotItalic => StyleState {
                italic: false,
                ..self
            },
            EscapeCode::Underline => StyleState {
                underline: true,
                ..self
            },
            EscapeCode::NotUnderlined => StyleState {
                underline: false,
                ..self
            },
            code => match (code.foreground(), code.background()) {
                (Some(foreground), _) => StyleState { foreground, ..self },
                (_, Some(background)) => StyleState { background, ..self },
                // Unreachable in practice: every non-attribute catalog entry
                // classifies as a foreground or background selector.
                (None, None) => self,
            },
        }
    }
}
