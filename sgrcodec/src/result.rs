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

//! Error types for the sgrcodec crate.
//!
//! All failures are local, synchronous, and immediately surfaced; the crate
//! never swallows an error and continues. Recovery (for example, rendering
//! the raw text unstyled after an unknown escape code) is the caller's
//! decision.

use thiserror::Error;

/// Result type alias for operations that may fail with an [`SgrError`].
pub type SgrResult<T> = std::result::Result<T, SgrError>;

/// Errors raised while decoding, scanning, or building ANSI SGR text.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SgrError {
    /// A sequence matched the escape-sequence pattern but has no entry in
    /// the [`EscapeCode`](crate::EscapeCode) catalog.
    ///
    /// This is fatal to the parse in progress: runs already emitted stand,
    /// but nothing further is produced. The stored sequence has the ESC
    /// byte stripped so the message stays printable.
    #[error("no escape code is defined for sequence '{sequence}'")]
    UnknownEscapeCode {
        /// The offending wire sequence, with the ESC byte removed
        sequence: String,
    },

    /// A negative repeat count was passed to one of the text builder's
    /// repetition helpers. Raised before any buffer mutation.
    #[error("repeat count must be >= 0, was {count}")]
    InvalidArgument {
        /// The rejected count
        count: isize,
    },

    /// A negative insertion offset was supplied to the insertion entry
    /// point. Raised before any state mutation or sink call.
    #[error("insertion offset cannot be negative, was {offset}")]
    NegativeOffset {
        /// The rejected offset
        offset: i64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_printable() {
        let err = SgrError::UnknownEscapeCode {
            sequence: "[999m".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no escape code is defined for sequence '[999m'"
        );

        let err = SgrError::InvalidArgument { count: -1 };
        assert_eq!(err.to_string(), "repeat count must be >= 0, was -1");

        let err = SgrError::NegativeOffset { offset: -7 };
        assert_eq!(err.to_string(), "insertion offset cannot be negative, was -7");
    }
}
