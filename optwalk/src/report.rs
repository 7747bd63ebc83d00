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

//! Diagnostic output
//!
//! Scanning errors are returned as values; this module is the optional
//! collaborator that turns them into human-readable text. The scanner
//! behaves identically with the sink disabled, so diagnostics are purely
//! presentational.

use crate::model::{ParseError, SpelledOption};
use itertools::Itertools;
use std::cell::RefCell;
use std::rc::Rc;

/// Line-oriented sink for diagnostic messages
pub trait Diagnostics {
    /// Receives one complete diagnostic line, without a trailing newline.
    fn report(&mut self, line: &str);
}

/// Writes each diagnostic line to standard error.
///
/// This is the default sink of a new [`Session`](crate::Session).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn report(&mut self, line: &str) {
        eprintln!("{line}");
    }
}

/// Collects diagnostic lines, mainly for inspection in tests.
impl Diagnostics for Vec<String> {
    fn report(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}

/// Forwards each line to a sink shared with the caller.
impl<D: Diagnostics> Diagnostics for Rc<RefCell<D>> {
    fn report(&mut self, line: &str) {
        self.borrow_mut().report(line);
    }
}

/// Renders one error as a diagnostic line.
///
/// An ambiguous long option additionally lists every candidate the
/// abbreviation reached, each spelled the way the option was written.
pub(crate) fn render(error: &ParseError) -> String {
    match error {
        ParseError::AmbiguousLongOption { option, candidates } if !candidates.is_empty() => {
            format!(
                "{}; possibilities:{}",
                error,
                candidates.iter().format_with("", |name, f| {
                    let candidate = SpelledOption {
                        dash: option.dash,
                        prefix: option.prefix,
                        name: name.clone(),
                    };
                    f(&format_args!(" '{candidate}'"))
                })
            )
        }
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Dash;

    fn spelled(name: &str) -> SpelledOption {
        SpelledOption {
            dash: Dash::Double,
            prefix: '-',
            name: name.to_owned(),
        }
    }

    #[test]
    fn render_plain_errors() {
        assert_eq!(
            render(&ParseError::UnknownShortOption('q')),
            "invalid option -- 'q'"
        );
        assert_eq!(
            render(&ParseError::MissingLongArgument(spelled("file"))),
            "option '--file' requires an argument"
        );
    }

    #[test]
    fn render_ambiguity_lists_possibilities() {
        let error = ParseError::AmbiguousLongOption {
            option: spelled("m"),
            candidates: vec!["max".to_owned(), "min".to_owned()],
        };
        assert_eq!(
            render(&error),
            "option '--m' is ambiguous; possibilities: '--max' '--min'"
        );
    }

    #[test]
    fn render_ambiguity_without_candidates() {
        let error = ParseError::AmbiguousLongOption {
            option: spelled("m"),
            candidates: vec![],
        };
        assert_eq!(render(&error), "option '--m' is ambiguous");
    }

    #[test]
    fn vec_sink_collects_lines() {
        let mut sink = Vec::new();
        sink.report("first");
        sink.report("second");
        assert_eq!(sink, ["first", "second"]);
    }

    #[test]
    fn shared_sink_forwards_lines() {
        let shared = Rc::new(RefCell::new(Vec::new()));
        let mut handle = Rc::clone(&shared);
        handle.report("shared line");
        assert_eq!(*shared.borrow(), ["shared line"]);
    }
}
