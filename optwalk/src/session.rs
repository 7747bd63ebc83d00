// This file is part of optwalk, a command-line option scanner.
// Copyright (C) 2026 optwalk developers
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Scanning session state
//!
//! A [`Session`] owns every piece of state that classical option scanners
//! keep in process globals: the cursor into the argument sequence, the
//! position inside a partially scanned token, the bounds of operands
//! waiting to be permuted, and the most recent classification. Keeping the
//! state in an ordinary value makes independent parses independent: one
//! session drives one pass over one argument sequence, and concurrent
//! parses simply use one session each.

use crate::model::{Dash, OptionCode, Parsed, ParseError, SpelledOption};
use crate::report::{Diagnostics, StderrDiagnostics};
use crate::spec::ShortSpec;
use std::fmt;

/// State of one option-scanning session
///
/// The session is advanced one classification at a time by
/// [`next_short`](Self::next_short), [`next_long`](Self::next_long), and
/// [`next_long_only`](Self::next_long_only). Call [`reset`](Self::reset)
/// before reusing a session for an unrelated argument sequence or option
/// specification; a session never resets itself.
pub struct Session {
    /// Index of the next argument to examine (element 0 is the program name)
    pub(crate) arg_index: usize,
    /// Byte offset of the next character to examine in the current argument;
    /// `None` between tokens
    pub(crate) char_offset: Option<usize>,
    /// First index of the operand run awaiting permutation
    pub(crate) nonopt_start: Option<usize>,
    /// One past the last index of the operand run, set when an option
    /// follows the run
    pub(crate) nonopt_end: Option<usize>,
    /// Prefix form of the current long-option attempt, for diagnostics
    pub(crate) dash: Dash,
    /// Code of the most recent classification
    pub(crate) current: Option<OptionCode>,
    /// Argument text of the most recent classification
    pub(crate) argument: Option<String>,
    /// Most recent scanning error
    pub(crate) last_error: Option<ParseError>,
    /// Character that introduces options
    pub(crate) prefix: char,
    /// Whether diagnostics are emitted to the sink
    pub(crate) print_errors: bool,
    pub(crate) sink: Box<dyn Diagnostics>,
}

impl Session {
    /// Creates a session ready to scan a sequence from its beginning.
    ///
    /// The prefix character is `-` and diagnostics go to standard error.
    #[must_use]
    pub fn new() -> Self {
        Session {
            arg_index: 1,
            char_offset: None,
            nonopt_start: None,
            nonopt_end: None,
            dash: Dash::Single,
            current: None,
            argument: None,
            last_error: None,
            prefix: '-',
            print_errors: true,
            sink: Box::new(StderrDiagnostics),
        }
    }

    /// Prepares the session for an unrelated argument sequence.
    ///
    /// Clears the cursor, the position inside a partially scanned token,
    /// the operand-run bounds, and the most recent classification and
    /// error. The prefix character, the report toggle, and the sink keep
    /// their configured values. Calling this twice in a row leaves the same
    /// state as calling it once.
    pub fn reset(&mut self) {
        self.arg_index = 1;
        self.char_offset = None;
        self.nonopt_start = None;
        self.nonopt_end = None;
        self.current = None;
        self.argument = None;
        self.last_error = None;
    }

    /// Returns the index of the next argument to examine.
    ///
    /// After [`EndOfOptions`](Parsed::EndOfOptions), this is the index of
    /// the first operand, so `&args[session.arg_index()..]` is the operand
    /// slice.
    #[must_use]
    pub fn arg_index(&self) -> usize {
        self.arg_index
    }

    /// Returns the code of the most recently classified option.
    #[must_use]
    pub fn current(&self) -> Option<OptionCode> {
        self.current
    }

    /// Returns the argument attached to the most recent classification.
    ///
    /// In in-order mode, this is also set for each
    /// [`Operand`](Parsed::Operand) result.
    #[must_use]
    pub fn argument(&self) -> Option<&str> {
        self.argument.as_deref()
    }

    /// Returns the most recent scanning error.
    #[must_use]
    pub fn last_error(&self) -> Option<&ParseError> {
        self.last_error.as_ref()
    }

    /// Returns the character that introduces options.
    #[must_use]
    pub fn prefix(&self) -> char {
        self.prefix
    }

    /// Changes the character that introduces options.
    ///
    /// Change this between sessions only; tokens already scanned with the
    /// old prefix are not revisited.
    pub fn set_prefix(&mut self, prefix: char) {
        self.prefix = prefix;
    }

    /// Enables or disables diagnostic output.
    ///
    /// Disabling output never changes the values returned from scanning.
    pub fn report_errors(&mut self, report: bool) {
        self.print_errors = report;
    }

    /// Whether diagnostic output is enabled
    #[must_use]
    pub fn reports_errors(&self) -> bool {
        self.print_errors
    }

    /// Replaces the diagnostic sink.
    pub fn set_diagnostics(&mut self, sink: Box<dyn Diagnostics>) {
        self.sink = sink;
    }

    /// Records a classification and hands it to the caller.
    pub(crate) fn finish(&mut self, code: OptionCode, argument: Option<String>) -> Parsed {
        self.current = Some(code);
        self.argument = argument.clone();
        Parsed::Option(code, argument)
    }

    /// Records an error, emits its diagnostic, and hands it to the caller.
    pub(crate) fn fail(&mut self, spec: ShortSpec<'_>, error: ParseError) -> Parsed {
        if self.print_errors && !spec.quiet() {
            let line = crate::report::render(&error);
            self.sink.report(&line);
        }
        self.last_error = Some(error.clone());
        Parsed::Error(error)
    }

    /// Spells an option name the way it was written, for diagnostics.
    pub(crate) fn spell(&self, name: &str) -> SpelledOption {
        SpelledOption {
            dash: self.dash,
            prefix: self.prefix,
            name: name.to_owned(),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("arg_index", &self.arg_index)
            .field("char_offset", &self.char_offset)
            .field("nonopt_start", &self.nonopt_start)
            .field("nonopt_end", &self.nonopt_end)
            .field("current", &self.current)
            .field("argument", &self.argument)
            .field("last_error", &self.last_error)
            .field("prefix", &self.prefix)
            .field("print_errors", &self.print_errors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parsed;
    use assert_matches::assert_matches;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn new_session_defaults() {
        let session = Session::new();
        assert_eq!(session.arg_index(), 1);
        assert_eq!(session.prefix(), '-');
        assert!(session.reports_errors());
        assert_eq!(session.current(), None);
        assert_eq!(session.argument(), None);
        assert_eq!(session.last_error(), None);
    }

    #[test]
    fn reset_restores_scanning_state() {
        let mut args = strings(&["prog", "-ab", "x"]);
        let spec = ShortSpec::from("ab");
        let mut session = Session::new();

        // stop in the middle of the cluster
        assert_matches!(session.next_short(&mut args, spec), Parsed::Option(..));
        session.reset();

        assert_eq!(session.arg_index(), 1);
        assert_eq!(session.current(), None);
        assert_eq!(session.argument(), None);
        assert_eq!(session.last_error(), None);

        // scanning starts over from the first argument
        assert_matches!(session.next_short(&mut args, spec), Parsed::Option(..));
    }

    #[test]
    fn reset_is_idempotent() {
        let mut args = strings(&["prog", "-a", "x", "-a"]);
        let spec = ShortSpec::from("a");
        let mut session = Session::new();
        while session.next_short(&mut args, spec) != Parsed::EndOfOptions {}

        session.reset();
        let once = format!("{session:?}");
        session.reset();
        let twice = format!("{session:?}");
        assert_eq!(once, twice);
    }

    #[test]
    fn reset_keeps_configuration() {
        let mut session = Session::new();
        session.set_prefix('/');
        session.report_errors(false);
        session.reset();
        assert_eq!(session.prefix(), '/');
        assert!(!session.reports_errors());
    }

    #[test]
    fn debug_does_not_expose_the_sink() {
        let session = Session::new();
        let debug = format!("{session:?}");
        assert!(debug.starts_with("Session"));
        assert!(debug.contains("arg_index"));
        assert!(!debug.contains("sink"));
    }
}
