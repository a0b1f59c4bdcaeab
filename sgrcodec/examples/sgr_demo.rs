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

//! Builds a sample of every supported style, scans it back into runs, and
//! prints each run with its palette-resolved colors.

use ansirun_sgrcodec::{
    AnsiTextBuilder, Palette, RunBuffer, SgrResult, StyleState, VgaPalette, insert_ansi,
};

fn sample_text() -> String {
    let mut builder = AnsiTextBuilder::new();
    builder
        .bold()
        .text("bold")
        .newline()
        .not_bold()
        .faint()
        .text("faint")
        .newline()
        .normal()
        .italic()
        .text("italic")
        .newline()
        .not_italic()
        .underline()
        .text("underline")
        .newline()
        .not_underlined()
        .red()
        .text("red foreground")
        .newline()
        .bright_cyan()
        .text("bright cyan foreground")
        .newline()
        .default_color()
        .yellow_bg()
        .text("yellow background")
        .newline()
        .reset()
        .text("back to plain")
        .newline();
    builder.build()
}

fn main() -> SgrResult<()> {
    let palette = VgaPalette;
    let mut runs = RunBuffer::new();
    insert_ansi(&mut runs, 0, &sample_text(), StyleState::default())?;

    for (text, style) in runs.runs() {
        let foreground = palette.foreground(style.foreground);
        let background = palette
            .background(style.background)
            .map(|rgb| rgb.to_string())
            .unwrap_or_else(|| "host".to_string());
        println!(
            "{:>24?} fg={} bg={} bold={} faint={} italic={} underline={}",
            text, foreground, background, style.bold, style.faint, style.italic, style.underline
        );
    }
    Ok(())
}
