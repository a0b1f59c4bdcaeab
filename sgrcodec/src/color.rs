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

//! Color references and the palette capability.
//!
//! Styled runs carry [`ColorRef`] values, not concrete colors. A sink
//! resolves them lazily through a [`Palette`], so swapping the palette
//! never rewrites runs that were already emitted.

/// One of the 16 base ANSI colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    /// SGR 30 / 40
    Black,
    /// SGR 31 / 41
    Red,
    /// SGR 32 / 42
    Green,
    /// SGR 33 / 43
    Yellow,
    /// SGR 34 / 44
    Blue,
    /// SGR 35 / 45
    Magenta,
    /// SGR 36 / 46
    Cyan,
    /// SGR 37 / 47
    White,
    /// SGR 90 / 100
    BrightBlack,
    /// SGR 91 / 101
    BrightRed,
    /// SGR 92 / 102
    BrightGreen,
    /// SGR 93 / 103
    BrightYellow,
    /// SGR 94 / 104
    BrightBlue,
    /// SGR 95 / 105
    BrightMagenta,
    /// SGR 96 / 106
    BrightCyan,
    /// SGR 97 / 107
    BrightWhite,
}

impl NamedColor {
    /// All 16 named colors in catalog order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::BrightBlack,
        NamedColor::BrightRed,
        NamedColor::BrightGreen,
        NamedColor::BrightYellow,
        NamedColor::BrightBlue,
        NamedColor::BrightMagenta,
        NamedColor::BrightCyan,
        NamedColor::BrightWhite,
    ];
}

/// A color channel of a [`StyleState`](crate::StyleState).
///
/// `Unset` means no color code has ever been applied to the channel. It is
/// deliberately distinct from `Default` (SGR 39/49 was applied) and from
/// `Named(NamedColor::Black)` (black was selected on purpose), so that the
/// "has a foreground ever been set" question is answered by this value and
/// never by comparing resolved colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorRef {
    /// No color code has been applied to this channel
    #[default]
    Unset,
    /// The explicit default color (SGR 39 for foreground, 49 for background)
    Default,
    /// One of the 16 base ANSI colors
    Named(NamedColor),
}

impl ColorRef {
    /// Returns `true` if no color code has ever been applied.
    pub fn is_unset(self) -> bool {
        self == ColorRef::Unset
    }
}

/// A concrete 24-bit color produced by palette resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Creates a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Capability mapping color references to concrete colors.
///
/// Exactly one implementation ships ([`VgaPalette`]); callers may substitute
/// their own. Resolution is total over every [`ColorRef`] value.
pub trait Palette {
    /// Resolves one of the 16 base ANSI colors.
    fn named(&self, color: NamedColor) -> Rgb;

    /// The color used for the default (and never-set) foreground.
    fn default_foreground(&self) -> Rgb {
        self.named(NamedColor::BrightWhite)
    }

    /// The color used for the default (and never-set) background, or `None`
    /// to leave the background to the rendering target.
    fn default_background(&self) -> Option<Rgb> {
        None
    }

    /// Resolves a foreground reference. `Unset` resolves like `Default`.
    fn foreground(&self, color: ColorRef) -> Rgb {
        match color {
            ColorRef::Unset | ColorRef::Default => self.default_foreground(),
            ColorRef::Named(named) => self.named(named),
        }
    }

    /// Resolves a background reference. `Unset` resolves like `Default`.
    fn background(&self, color: ColorRef) -> Option<Rgb> {
        match color {
            ColorRef::Unset | ColorRef::Default => self.default_background(),
            ColorRef::Named(named) => Some(self.named(named)),
        }
    }
}

/// The shipped palette: the classic VGA-style table, with normal colors on
/// the `0xaa` scale and bright colors on the `0x55`/`0xff` scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VgaPalette;

impl Palette for VgaPalette {
    fn named(&self, color: NamedColor) -> Rgb {
        match color {
            NamedColor::Black => Rgb::new(0x00, 0x00, 0x00),
            NamedColor::Red => Rgb::new(0xaa, 0x00, 0x00),
            NamedColor::Green => Rgb::new(0x00, 0xaa, 0x00),
            NamedColor::Yellow => Rgb::new(0xaa, 0xaa, 0x00),
            NamedColor::Blue => Rgb::new(0x00, 0x00, 0xaa),
            NamedColor::Magenta => Rgb::new(0xaa, 0x00, 0xaa),
            NamedColor::Cyan => Rgb::new(0x00, 0xaa, 0xaa),
            NamedColor::White => Rgb::new(0xaa, 0xaa, 0xaa),
            NamedColor::BrightBlack => Rgb::new(0x55, 0x55, 0x55),
            NamedColor::BrightRed => Rgb::new(0xff, 0x55, 0x55),
            NamedColor::BrightGreen => Rgb::new(0x55, 0xff, 0x55),
            NamedColor::BrightYellow => Rgb::new(0xff, 0xff, 0x55),
            NamedColor::BrightBlue => Rgb::new(0x55, 0x55, 0xff),
            NamedColor::BrightMagenta => Rgb::new(0xff, 0x55, 0xff),
            NamedColor::BrightCyan => Rgb::new(0x55, 0xff, 0xff),
            NamedColor::BrightWhite => Rgb::new(0xff, 0xff, 0xff),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_is_total() {
        let palette = VgaPalette;
        for color in NamedColor::ALL {
            let _ = palette.named(color);
        }
        assert_eq!(palette.foreground(ColorRef::Unset), Rgb::new(0xff, 0xff, 0xff));
        assert_eq!(palette.foreground(ColorRef::Default), Rgb::new(0xff, 0xff, 0xff));
        assert_eq!(palette.background(ColorRef::Unset), None);
        assert_eq!(palette.background(ColorRef::Default), None);
    }

    #[test]
    fn named_black_is_distinct_from_unset() {
        let palette = VgaPalette;
        let black = ColorRef::Named(NamedColor::Black);

        // Both exist as distinct references even though one resolves to a
        // color and the other to the default.
        assert_ne!(black, ColorRef::Unset);
        assert!(!black.is_unset());
        assert!(ColorRef::Unset.is_unset());
        assert_eq!(palette.foreground(black), Rgb::new(0x00, 0x00, 0x00));
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb::new(0xaa, 0x00, 0xff).to_string(), "#aa00ff");
    }
}
