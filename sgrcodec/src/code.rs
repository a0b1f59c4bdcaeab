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

//! The exhaustive catalog of recognized SGR escape codes.
//!
//! Each [`EscapeCode`] is one Select Graphic Rendition command, carrying a
//! single numeric parameter on the wire: `ESC [ <n> m`. The catalog is
//! fixed at compile time; decoding anything outside it is an error, never a
//! best guess. Compound sequences such as `ESC[1;31m` are not part of the
//! catalog and are rejected by [`EscapeCode::from_wire`].

use crate::color::{ColorRef, NamedColor};
use crate::result::{SgrError, SgrResult};

/// The escape marker byte, 0x1B.
pub const ESC: char = '\u{1b}';

/// A single Select Graphic Rendition command.
///
/// | Variant group | Codes |
/// |---|---|
/// | `Reset` | `0` |
/// | `Bold`, `Faint`, `Italic`, `Underline` | `1`-`4` |
/// | `NotBold`, `Normal`, `NotItalic`, `NotUnderlined` | `21`-`24` |
/// | `Black`..`White`, `Default` | `30`-`37`, `39` |
/// | `BlackBackground`..`WhiteBackground`, `DefaultBackground` | `40`-`47`, `49` |
/// | `BrightBlack`..`BrightWhite` | `90`-`97` |
/// | `BrightBlackBackground`..`BrightWhiteBackground` | `100`-`107` |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EscapeCode {
    /// Reset every attribute and color to its default (SGR 0)
    Reset,
    /// Bold intensity on (SGR 1)
    Bold,
    /// Faint intensity on (SGR 2)
    Faint,
    /// Italic on (SGR 3)
    Italic,
    /// Underline on (SGR 4)
    Underline,
    /// Bold intensity off (SGR 21; double underline on some terminals)
    NotBold,
    /// Faint intensity off (SGR 22; neither bold nor faint)
    Normal,
    /// Italic off (SGR 23)
    NotItalic,
    /// Underline off (SGR 24)
    NotUnderlined,
    /// Black foreground (SGR 30)
    Black,
    /// Red foreground (SGR 31)
    Red,
    /// Green foreground (SGR 32)
    Green,
    /// Yellow foreground (SGR 33)
    Yellow,
    /// Blue foreground (SGR 34)
    Blue,
    /// Magenta foreground (SGR 35)
    Magenta,
    /// Cyan foreground (SGR 36)
    Cyan,
    /// White foreground (SGR 37)
    White,
    /// Default foreground (SGR 39)
    Default,
    /// Bright black foreground (SGR 90)
    BrightBlack,
    /// Bright red foreground (SGR 91)
    BrightRed,
    /// Bright green foreground (SGR 92)
    BrightGreen,
    /// Bright yellow foreground (SGR 93)
    BrightYellow,
    /// Bright blue foreground (SGR 94)
    BrightBlue,
    /// Bright magenta foreground (SGR 95)
    BrightMagenta,
    /// Bright cyan foreground (SGR 96)
    BrightCyan,
    /// Bright white foreground (SGR 97)
    BrightWhite,
    /// Black background (SGR 40)
    BlackBackground,
    /// Red background (SGR 41)
    RedBackground,
    /// Green background (SGR 42)
    GreenBackground,
    /// Yellow background (SGR 43)
    YellowBackground,
    /// Blue background (SGR 44)
    BlueBackground,
    /// Magenta background (SGR 45)
    MagentaBackground,
    /// Cyan background (SGR 46)
    CyanBackground,
    /// White background (SGR 47)
    WhiteBackground,
    /// Default background (SGR 49)
    DefaultBackground,
    /// Bright black background (SGR 100)
    BrightBlackBackground,
    /// Bright red background (SGR 101)
    BrightRedBackground,
    /// Bright green background (SGR 102)
    BrightGreenBackground,
    /// Bright yellow background (SGR 103)
    BrightYellowBackground,
    /// Bright blue background (SGR 104)
    BrightBlueBackground,
    /// Bright magenta background (SGR 105)
    BrightMagentaBackground,
    /// Bright cyan background (SGR 106)
    BrightCyanBackground,
    /// Bright white background (SGR 107)
    BrightWhiteBackground,
}

impl EscapeCode {
    /// Every cataloged code, in numeric order per group.
    pub const ALL: [EscapeCode; 43] = [
        EscapeCode::Reset,
        EscapeCode::Bold,
        EscapeCode::Faint,
        EscapeCode::Italic,
        EscapeCode::Underline,
        EscapeCode::NotBold,
        EscapeCode::Normal,
        EscapeCode::NotItalic,
        EscapeCode::NotUnderlined,
        EscapeCode::Black,
        EscapeCode::Red,
        EscapeCode::Green,
        EscapeCode::Yellow,
        EscapeCode::Blue,
        EscapeCode::Magenta,
        EscapeCode::Cyan,
        EscapeCode::White,
        EscapeCode::Default,
        EscapeCode::BrightBlack,
        EscapeCode::BrightRed,
        EscapeCode::BrightGreen,
        EscapeCode::BrightYellow,
        EscapeCode::BrightBlue,
        EscapeCode::BrightMagenta,
        EscapeCode::BrightCyan,
        EscapeCode::BrightWhite,
        EscapeCode::BlackBackground,
        EscapeCode::RedBackground,
        EscapeCode::GreenBackground,
        EscapeCode::YellowBackground,
        EscapeCode::BlueBackground,
        EscapeCode::MagentaBackground,
        EscapeCode::CyanBackground,
        EscapeCode::WhiteBackground,
        EscapeCode::DefaultBackground,
        EscapeCode::BrightBlackBackground,
        EscapeCode::BrightRedBackground,
        EscapeCode::BrightGreenBackground,
        EscapeCode::BrightYellowBackground,
        EscapeCode::BrightBlueBackground,
        EscapeCode::BrightMagentaBackground,
        EscapeCode::BrightCyanBackground,
        EscapeCode::BrightWhiteBackground,
    ];

    /// The numeric SGR parameter of this code.
    pub const fn sgr(self) -> u16 {
        match self {
            EscapeCode::Reset => 0,
            EscapeCode::Bold => 1,
            EscapeCode::Faint => 2,
            EscapeCode::Italic => 3,
            EscapeCode::Underline => 4,
            EscapeCode::NotBold => 21,
            EscapeCode::Normal => 22,
            EscapeCode::NotItalic => 23,
            EscapeCode::NotUnderlined => 24,
            EscapeCode::Black => 30,
            EscapeCode::Red => 31,
            EscapeCode::Green => 32,
            EscapeCode::Yellow => 33,
            EscapeCode::Blue => 34,
            EscapeCode::Magenta => 35,
            EscapeCode::Cyan => 36,
            EscapeCode::White => 37,
            EscapeCode::Default => 39,
            EscapeCode::BrightBlack => 90,
            EscapeCode::BrightRed => 91,
            EscapeCode::BrightGreen => 92,
            EscapeCode::BrightYellow => 93,
            EscapeCode::BrightBlue => 94,
            EscapeCode::BrightMagenta => 95,
            EscapeCode::BrightCyan => 96,
            EscapeCode::BrightWhite => 97,
            EscapeCode::BlackBackground => 40,
            EscapeCode::RedBackground => 41,
            EscapeCode::GreenBackground => 42,
            EscapeCode::YellowBackground => 43,
            EscapeCode::BlueBackground => 44,
            EscapeCode::MagentaBackground => 45,
            EscapeCode::CyanBackground => 46,
            EscapeCode::WhiteBackground => 47,
            EscapeCode::DefaultBackground => 49,
            EscapeCode::BrightBlackBackground => 100,
            EscapeCode::BrightRedBackground => 101,
            EscapeCode::BrightGreenBackground => 102,
            EscapeCode::BrightYellowBackground => 103,
            EscapeCode::BrightBlueBackground => 104,
            EscapeCode::BrightMagentaBackground => 105,
            EscapeCode::BrightCyanBackground => 106,
            EscapeCode::BrightWhiteBackground => 107,
        }
    }

    /// Looks a code up by its numeric SGR parameter.
    pub const fn from_sgr(number: u16) -> Option<EscapeCode> {
        Some(match number {
            0 => EscapeCode::Reset,
            1 => EscapeCode::Bold,
            2 => EscapeCode::Faint,
            3 => EscapeCode::Italic,
            4 => EscapeCode::Underline,
            21 => EscapeCode::NotBold,
            22 => EscapeCode::Normal,
            23 => EscapeCode::NotItalic,
            24 => EscapeCode::NotUnderlined,
            30 => EscapeCode::Black,
            31 => EscapeCode::Red,
            32 => EscapeCode::Green,
            33 => EscapeCode::Yellow,
            34 => EscapeCode::Blue,
            35 => EscapeCode::Magenta,
            36 => EscapeCode::Cyan,
            37 => EscapeCode::White,
            39 => EscapeCode::Default,
            90 => EscapeCode::BrightBlack,
            91 => EscapeCode::BrightRed,
            92 => EscapeCode::BrightGreen,
            93 => EscapeCode::BrightYellow,
            94 => EscapeCode::BrightBlue,
            95 => EscapeCode::BrightMagenta,
            96 => EscapeCode::BrightCyan,
            97 => EscapeCode::BrightWhite,
            40 => EscapeCode::BlackBackground,
            41 => EscapeCode::RedBackground,
            42 => EscapeCode::GreenBackground,
            43 => EscapeCode::YellowBackground,
            44 => EscapeCode::BlueBackground,
            45 => EscapeCode::MagentaBackground,
            46 => EscapeCode::CyanBackground,
            47 => EscapeCode::WhiteBackground,
            49 => EscapeCode::DefaultBackground,
            100 => EscapeCode::BrightBlackBackground,
            101 => EscapeCode::BrightRedBackground,
            102 => EscapeCode::BrightGreenBackground,
            103 => EscapeCode::BrightYellowBackground,
            104 => EscapeCode::BrightBlueBackground,
            105 => EscapeCode::BrightMagentaBackground,
            106 => EscapeCode::BrightCyanBackground,
            107 => EscapeCode::BrightWhiteBackground,
            _ => return None,
        })
    }

    /// Decodes a full wire sequence (`ESC [ <n> m`) into its catalog entry.
    ///
    /// Fails with [`SgrError::UnknownEscapeCode`] for anything not cataloged:
    /// unknown numbers, compound multi-parameter sequences, or strings that
    /// are not an SGR sequence at all.
    pub fn from_wire(sequence: &str) -> SgrResult<EscapeCode> {
        sequence
            .strip_prefix(ESC)
            .and_then(|rest| rest.strip_prefix('['))
            .and_then(|rest| rest.strip_suffix('m'))
            .filter(|params| !params.is_empty() && params.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|params| params.parse::<u16>().ok())
            .and_then(EscapeCode::from_sgr)
            .ok_or_else(|| SgrError::UnknownEscapeCode {
                sequence: sequence.replace(ESC, ""),
            })
    }

    /// The color selected when this is a foreground code, `None` otherwise.
    pub const fn foreground(self) -> Option<ColorRef> {
        Some(match self {
            EscapeCode::Black => ColorRef::Named(NamedColor::Black),
            EscapeCode::Red => ColorRef::Named(NamedColor::Red),
            EscapeCode::Green => ColorRef::Named(NamedColor::Green),
            EscapeCode::Yellow => ColorRef::Named(NamedColor::Yellow),
            EscapeCode::Blue => ColorRef::Named(NamedColor::Blue),
            EscapeCode::Magenta => ColorRef::Named(NamedColor::Magenta),
            EscapeCode::Cyan => ColorRef::Named(NamedColor::Cyan),
            EscapeCode::White => ColorRef::Named(NamedColor::White),
            EscapeCode::Default => ColorRef::Default,
            EscapeCode::BrightBlack => ColorRef::Named(NamedColor::BrightBlack),
            EscapeCode::BrightRed => ColorRef::Named(NamedColor::BrightRed),
            EscapeCode::BrightGreen => ColorRef::Named(NamedColor::BrightGreen),
            EscapeCode::BrightYellow => ColorRef::Named(NamedColor::BrightYellow),
            EscapeCode::BrightBlue => ColorRef::Named(NamedColor::BrightBlue),
            EscapeCode::BrightMagenta => ColorRef::Named(NamedColor::BrightMagenta),
            EscapeCode::BrightCyan => ColorRef::Named(NamedColor::BrightCyan),
            EscapeCode::BrightWhite => ColorRef::Named(NamedColor::BrightWhite),
            _ => return None,
        })
    }

    /// The color selected when this is a background code, `None` otherwise.
    pub const fn background(self) -> Option<ColorRef> {
        Some(match self {
            EscapeCode::BlackBackground => ColorRef::Named(NamedColor::Black),
            EscapeCode::RedBackground => ColorRef::Named(NamedColor::Red),
            EscapeCode::GreenBackground => ColorRef::Named(NamedColor::Green),
            EscapeCode::YellowBackground => ColorRef::Named(NamedColor::Yellow),
            EscapeCode::BlueBackground => ColorRef::Named(NamedColor::Blue),
            EscapeCode::MagentaBackground => ColorRef::Named(NamedColor::Magenta),
            EscapeCode::CyanBackground => ColorRef::Named(NamedColor::Cyan),
            EscapeCode::WhiteBackground => ColorRef::Named(NamedColor::White),
            EscapeCode::DefaultBackground => ColorRef::Default,
            EscapeCode::BrightBlackBackground => ColorRef::Named(NamedColor::BrightBlack),
            EscapeCode::BrightRedBackground => ColorRef::Named(NamedColor::BrightRed),
            EscapeCode::BrightGreenBackground => ColorRef::Named(NamedColor::BrightGreen),
            EscapeCode::BrightYellowBackground => ColorRef::Named(NamedColor::BrightYellow),
            EscapeCode::BrightBlueBackground => ColorRef::Named(NamedColor::BrightBlue),
            EscapeCode::BrightMagentaBackground => ColorRef::Named(NamedColor::BrightMagenta),
            EscapeCode::BrightCyanBackground => ColorRef::Named(NamedColor::BrightCyan),
            EscapeCode::BrightWhiteBackground => ColorRef::Named(NamedColor::BrightWhite),
            _ => return None,
        })
    }
}

impl std::fmt::Display for EscapeCode {
    /// Writes the wire form, `ESC [ <n> m`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{ESC}[{}m", self.sgr())
    }
}
