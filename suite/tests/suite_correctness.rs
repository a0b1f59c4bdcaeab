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

//! End-to-end correctness of the scanner, builder, and insertion driver
//! as observed through the public API.

use ansirun_sgrcodec::{
    AnsiTextBuilder, ColorRef, EscapeCode, NamedColor, RunBuffer, SgrError, StyleState,
    insert_ansi, scan_runs,
};
use ansirun_suite::{char_stream, scan_to_vec, styled};

#[test]
fn ansi_free_input_is_identity() {
    let input = "nothing special here\nnot even close\t";
    let runs = scan_to_vec(input, StyleState::default()).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].0, input);
    assert_eq!(runs[0].1, StyleState::default());
}

#[test]
fn text_preceding_a_code_is_never_styled_by_it() {
    let input = styled(|b| {
        b.text("A").bold().text("B").red().text("C");
    });
    let runs = scan_to_vec(&input, StyleState::default()).unwrap();

    let bold = StyleState {
        bold: true,
        ..StyleState::default()
    };
    let bold_red = StyleState {
        foreground: ColorRef::Named(NamedColor::Red),
        ..bold
    };
    assert_eq!(
        runs,
        vec![
            ("A".to_string(), StyleState::default()),
            ("B".to_string(), bold),
            ("C".to_string(), bold_red),
        ]
    );
}

#[test]
fn zero_length_gaps_between_codes_yield_no_run() {
    let input = styled(|b| {
        b.bold().red().text("X");
    });
    let runs = scan_to_vec(&input, StyleState::default()).unwrap();
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].0, "X");
    assert!(runs[0].1.bold);
    assert_eq!(runs[0].1.foreground, ColorRef::Named(NamedColor::Red));
}

#[test]
fn applying_bold_then_faint_keeps_both() {
    let state = StyleState::default()
        .apply(EscapeCode::Bold)
        .apply(EscapeCode::Faint);
    assert!(state.bold);
    assert!(state.faint);
}

#[test]
fn reset_erases_any_mutation_history() {
    let mut state = StyleState::default();
    for code in [
        EscapeCode::Bold,
        EscapeCode::Italic,
        EscapeCode::BrightMagenta,
        EscapeCode::CyanBackground,
        EscapeCode::Underline,
    ] {
        state = state.apply(code);
    }
    assert_eq!(state.apply(EscapeCode::Reset), StyleState::default());
}

#[test]
fn unknown_code_stops_the_parse_with_no_further_runs() {
    let mut scanner = scan_runs("\u{1b}[999mnever seen", StyleState::default());
    assert!(matches!(
        scanner.next(),
        Some(Err(SgrError::UnknownEscapeCode { .. }))
    ));
    assert!(scanner.next().is_none());
}

#[test]
fn builder_rejects_negative_repeat_counts() {
    let mut builder = AnsiTextBuilder::new();
    assert_eq!(
        builder.spaces(-1).unwrap_err(),
        SgrError::InvalidArgument { count: -1 }
    );
    assert_eq!(
        builder.tabs(-1).unwrap_err(),
        SgrError::InvalidArgument { count: -1 }
    );
    assert_eq!(builder.as_str(), "");
}

#[test]
fn insertion_rejects_negative_offsets() {
    let mut sink = RunBuffer::new();
    assert_eq!(
        insert_ansi(&mut sink, -3, "text", StyleState::default()).unwrap_err(),
        SgrError::NegativeOffset { offset: -3 }
    );
    assert!(sink.is_empty());
}

#[test]
fn three_part_incremental_insert_matches_one_combined_insert() {
    let parts = [
        styled(|b| {
            b.text("plain ").bold();
        }),
        styled(|b| {
            b.text("bold ").red().text("red ");
        }),
        styled(|b| {
            b.reset().text("plain again");
        }),
    ];

    let mut split = RunBuffer::new();
    let mut state = StyleState::default();
    let mut offset = 0i64;
    for part in &parts {
        state = insert_ansi(&mut split, offset, part, state).unwrap();
        offset = split.text().len() as i64;
    }

    let mut whole = RunBuffer::new();
    insert_ansi(&mut whole, 0, &parts.join(""), StyleState::default()).unwrap();

    assert_eq!(char_stream(split.runs()), char_stream(whole.runs()));
}

#[test]
fn seeded_styles_carry_into_unstyled_text() {
    let seed = StyleState {
        italic: true,
        foreground: ColorRef::Named(NamedColor::Cyan),
        ..StyleState::default()
    };
    let runs = scan_to_vec("inherited", seed).unwrap();
    assert_eq!(runs, vec![("inherited".to_string(), seed)]);
}

#[test]
fn insertion_normalizes_only_the_unset_foreground() {
    let mut fresh = RunBuffer::new();
    insert_ansi(&mut fresh, 0, "text", StyleState::default()).unwrap();
    assert_eq!(fresh.runs()[0].1.foreground, ColorRef::Default);
    // Background is left alone; the renderer owns its default.
    assert_eq!(fresh.runs()[0].1.background, ColorRef::Unset);

    let black_seed = StyleState {
        foreground: ColorRef::Named(NamedColor::Black),
        ..StyleState::default()
    };
    let mut deliberate = RunBuffer::new();
    insert_ansi(&mut deliberate, 0, "text", black_seed).unwrap();
    assert_eq!(
        deliberate.runs()[0].1.foreground,
        ColorRef::Named(NamedColor::Black)
    );
}
