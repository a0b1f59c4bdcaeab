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

//! Property tests over arbitrary inputs.

use ansirun_sgrcodec::{AnsiTextBuilder, EscapeCode, StyleState};
use ansirun_suite::scan_to_vec;
use proptest::prelude::*;

fn catalog_code() -> impl Strategy<Value = EscapeCode> {
    prop::sample::select(EscapeCode::ALL.to_vec())
}

proptest! {
    /// Text without the escape marker byte is one run, unchanged, in the
    /// seed style.
    #[test]
    fn escape_free_text_is_a_single_unchanged_run(input in "\\PC*") {
        let input: String = input.chars().filter(|&ch| ch != '\u{1b}').collect();
        let runs = scan_to_vec(&input, StyleState::default()).unwrap();
        if input.is_empty() {
            prop_assert!(runs.is_empty());
        } else {
            prop_assert_eq!(runs.len(), 1);
            prop_assert_eq!(runs[0].0.as_str(), input.as_str());
            prop_assert_eq!(runs[0].1, StyleState::default());
        }
    }

    /// Anything the builder emits parses without error, and stripping the
    /// escape sequences recovers exactly the plain fragments.
    #[test]
    fn builder_output_always_parses(
        fragments in prop::collection::vec(("[a-z ]{1,8}", catalog_code()), 0..32)
    ) {
        let mut builder = AnsiTextBuilder::new();
        let mut plain = String::new();
        for (fragment, code) in &fragments {
            builder.esc(*code).text(fragment);
            plain.push_str(fragment);
        }

        let runs = scan_to_vec(builder.as_str(), StyleState::default()).unwrap();
        let recovered: String = runs.iter().map(|(text, _)| text.as_str()).collect();
        prop_assert_eq!(recovered, plain);
    }

    /// Applying codes one at a time through the scanner agrees with folding
    /// the same codes through the pure transition function.
    #[test]
    fn scanner_state_agrees_with_folded_apply(
        codes in prop::collection::vec(catalog_code(), 0..32)
    ) {
        let mut builder = AnsiTextBuilder::new();
        for code in &codes {
            builder.esc(*code);
        }
        builder.text("x");

        let folded = codes
            .iter()
            .fold(StyleState::default(), |state, &code| state.apply(code));

        let runs = scan_to_vec(builder.as_str(), StyleState::default()).unwrap();
        prop_assert_eq!(runs.len(), 1);
        prop_assert_eq!(runs[0].1, folded);
    }

    /// Reset always restores the all-default state, whatever came before.
    #[test]
    fn reset_is_absorbing(codes in prop::collection::vec(catalog_code(), 0..32)) {
        let state = codes
            .iter()
            .fold(StyleState::default(), |state, &code| state.apply(code));
        prop_assert_eq!(state.apply(EscapeCode::Reset), StyleState::default());
    }
}
