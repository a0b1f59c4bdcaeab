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

//! Conversion between ANSI SGR annotated text and styled text runs.
//!
//! The decoder side ([`scan_runs`], [`insert_ansi`]) recognizes SGR escape
//! sequences inside arbitrary text, applies each one to a running
//! [`StyleState`], and emits the plain text between sequences tagged with
//! the style in effect when it was written. The encoder side
//! ([`AnsiTextBuilder`]) produces exactly the sequences the decoder
//! recognizes. Rendering is out of scope: runs carry [`ColorRef`] values
//! that a consuming layer resolves through a [`Palette`].

mod builder;
mod code;
mod color;
mod parser;
mod result;
mod sink;
mod style;

pub use self::builder::AnsiTextBuilder;
pub use self::code::{ESC, EscapeCode};
pub use self::color::{ColorRef, NamedColor, Palette, Rgb, VgaPalette};
pub use self::parser::{RunScanner, TextRun, scan_runs};
pub use self::result::{SgrError, SgrResult};
pub use self::sink::{RunBuffer, StyleSink, insert_ansi};
pub use self::style::StyleState;
