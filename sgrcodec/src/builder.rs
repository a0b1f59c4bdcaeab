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

//! Fluent construction of ANSI-annotated text.
//!
//! [`AnsiTextBuilder`] is the encoder counterpart of the run scanner: each
//! styling method appends exactly one catalog escape sequence, so anything
//! it produces parses back without error. It is an owned-buffer value with
//! `&mut self` chaining; it is not resettable and not meant to be shared
//! across writers.

use crate::code::EscapeCode;
use crate::result::{SgrError, SgrResult};
use bytes::BufMut;
use std::fmt::Display;

/// Fluent accumulator for ANSI SGR annotated text.
///
/// ```
/// use ansirun_sgrcodec::AnsiTextBuilder;
///
/// let text = AnsiTextBuilder::new()
///     .bold()
///     .red()
///     .text("error:")
///     .reset()
///     .space()
///     .text("disk full")
///     .build();
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnsiTextBuilder {
    buffer: String,
}

impl AnsiTextBuilder {
    /// Creates an empty builder.
    pub fn new() -> AnsiTextBuilder {
        AnsiTextBuilder::default()
    }

    /// Returns a copy of the accumulated text. The builder stays usable;
    /// appending continues where it left off.
    pub fn build(&self) -> String {
        self.buffer.clone()
    }

    /// The accumulated text so far.
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Writes the accumulated text into a byte buffer.
    pub fn write_to(&self, buffer: &mut impl BufMut) {
        buffer.put_slice(self.buffer.as_bytes());
    }

    /// Appends plain text. The text is not inspected; embedding the escape
    /// marker byte here is the caller's own affair.
    pub fn text(&mut self, plain: impl Display) -> &mut Self {
        use std::fmt::Write;
        let _ = write!(self.buffer, "{plain}");
        self
    }

    /// Appends a newline.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Appends one tab.
    pub fn tab(&mut self) -> &mut Self {
        self.buffer.push('\t');
        self
    }

    /// Appends one space.
    pub fn space(&mut self) -> &mut Self {
        self.buffer.push(' ');
        self
    }

    /// Appends `count` tabs. Fails with [`SgrError::InvalidArgument`] when
    /// `count` is negative, before touching the buffer.
    pub fn tabs(&mut self, count: isize) -> SgrResult<&mut Self> {
        self.repeat('\t', count)
    }

    /// Appends `count` spaces. Fails with [`SgrError::InvalidArgument`] when
    /// `count` is negative, before touching the buffer.
    pub fn spaces(&mut self, count: isize) -> SgrResult<&mut Self> {
        self.repeat(' ', count)
    }

    fn repeat(&mut self, fragment: char, count: isize) -> SgrResult<&mut Self> {
        if count < 0 {
            return Err(SgrError::InvalidArgument { count });
        }
        for _ in 0..count {
            self.buffer.push(fragment);
        }
        Ok(self)
    }

    /// Appends one catalog escape sequence.
    pub fn esc(&mut self, code: EscapeCode) -> &mut Self {
        use std::fmt::Write;
        let _ = write!(self.buffer, "{code}");
        self
    }

    /// Appends the reset sequence (SGR 0).
    pub fn reset(&mut self) -> &mut Self {
        self.esc(EscapeCode::Reset)
    }

    /// Appends bold-on (SGR 1).
    pub fn bold(&mut self) -> &mut Self {
        self.esc(EscapeCode::Bold)
    }

    /// Appends bold-off (SGR 21).
    pub fn not_bold(&mut self) -> &mut Self {
        self.esc(EscapeCode::NotBold)
    }

    /// Appends faint-on (SGR 2).
    pub fn faint(&mut self) -> &mut Self {
        self.esc(EscapeCode::Faint)
    }

    /// Appends normal intensity, faint-off (SGR 22).
    pub fn normal(&mut self) -> &mut Self {
        self.esc(EscapeCode::Normal)
    }

    /// Appends italic-on (SGR 3).
    pub fn italic(&mut self) -> &mut Self {
        self.esc(EscapeCode::Italic)
    }

    /// Appends italic-off (SGR 23).
    pub fn not_italic(&mut self) -> &mut Self {
        self.esc(EscapeCode::NotItalic)
    }

    /// Appends underline-on (SGR 4).
    pub fn underline(&mut self) -> &mut Self {
        self.esc(EscapeCode::Underline)
    }

    /// Appends underline-off (SGR 24).
    pub fn not_underlined(&mut self) -> &mut Self {
        self.esc(EscapeCode::NotUnderlined)
    }

    /// Appends the black foreground code.
    pub fn black(&mut self) -> &mut Self {
        self.esc(EscapeCode::Black)
    }

    /// Appends the red foreground code.
    pub fn red(&mut self) -> &mut Self {
        self.esc(EscapeCode::Red)
    }

    /// Appends the green foreground code.
    pub fn green(&mut self) -> &mut Self {
        self.esc(EscapeCode::Green)
    }

    /// Appends the yellow foreground code.
    pub fn yellow(&mut self) -> &mut Self {
        self.esc(EscapeCode::Yellow)
    }

    /// Appends the blue foreground code.
    pub fn blue(&mut self) -> &mut Self {
        self.esc(EscapeCode::Blue)
    }

    /// Appends the magenta foreground code.
    pub fn magenta(&mut self) -> &mut Self {
        self.esc(EscapeCode::Magenta)
    }

    /// Appends the cyan foreground code.
    pub fn cyan(&mut self) -> &mut Self {
        self.esc(EscapeCode::Cyan)
    }

    /// Appends the white foreground code.
    pub fn white(&mut self) -> &mut Self {
        self.esc(EscapeCode::White)
    }

    /// Appends the default foreground code (SGR 39).
    pub fn default_color(&mut self) -> &mut Self {
        self.esc(EscapeCode::Default)
    }

    /// Appends the bright black foreground code.
    pub fn bright_black(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightBlack)
    }

    /// Appends the bright red foreground code.
    pub fn bright_red(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightRed)
    }

    /// Appends the bright green foreground code.
    pub fn bright_green(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightGreen)
    }

    /// Appends the bright yellow foreground code.
    pub fn bright_yellow(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightYellow)
    }

    /// Appends the bright blue foreground code.
    pub fn bright_blue(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightBlue)
    }

    /// Appends the bright magenta foreground code.
    pub fn bright_magenta(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightMagenta)
    }

    /// Appends the bright cyan foreground code.
    pub fn bright_cyan(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightCyan)
    }

    /// Appends the bright white foreground code.
    pub fn bright_white(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightWhite)
    }

    /// Appends the black background code.
    pub fn black_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BlackBackground)
    }

    /// Appends the red background code.
    pub fn red_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::RedBackground)
    }

    /// Appends the green background code.
    pub fn green_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::GreenBackground)
    }

    /// Appends the yellow background code.
    pub fn yellow_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::YellowBackground)
    }

    /// Appends the blue background code.
    pub fn blue_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BlueBackground)
    }

    /// Appends the magenta background code.
    pub fn magenta_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::MagentaBackground)
    }

    /// Appends the cyan background code.
    pub fn cyan_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::CyanBackground)
    }

    /// Appends the white background code.
    pub fn white_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::WhiteBackground)
    }

    /// Appends the default background code (SGR 49).
    pub fn default_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::DefaultBackground)
    }

    /// Appends the bright black background code.
    pub fn bright_black_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightBlackBackground)
    }

    /// Appends the bright red background code.
    pub fn bright_red_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightRedBackground)
    }

    /// Appends the bright green background code.
    pub fn bright_green_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightGreenBackground)
    }

    /// Appends the bright yellow background code.
    pub fn bright_yellow_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightYellowBackground)
    }

    /// Appends the bright blue background code.
    pub fn bright_blue_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightBlueBackground)
    }

    /// Appends the bright magenta background code.
    pub fn bright_magenta_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightMagentaBackground)
    }

    /// Appends the bright cyan background code.
    pub fn bright_cyan_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightCyanBackground)
    }

    /// Appends the bright white background code.
    pub fn bright_white_bg(&mut self) -> &mut Self {
        self.esc(EscapeCode::BrightWhiteBackground)
    }
}
