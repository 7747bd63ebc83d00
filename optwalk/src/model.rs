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

//! Classification results and error values
//!
//! Every scanning step produces a [`Parsed`] value. Problems with a token
//! are part of that value, not panics or process exits: a [`ParseError`]
//! describes what was wrong with the token, and the session remains
//! consistent so the caller may keep scanning.

use std::fmt;
use thiserror::Error;

/// Which prefix form introduced a long-option attempt
///
/// Recorded only so diagnostics can reproduce the caller's spelling.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Dash {
    /// A single prefix character, as in `-name`
    Single,
    /// A doubled prefix character, as in `--name`
    Double,
    /// The `-W name` escape
    Escape,
}

/// An option as it was written on the command line
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct SpelledOption {
    /// Prefix form that introduced the option
    pub dash: Dash,
    /// The prefix character in effect when the option was scanned
    pub prefix: char,
    /// The option name as given, without the prefix
    pub name: String,
}

impl fmt::Display for SpelledOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.dash {
            Dash::Single => write!(f, "{}{}", self.prefix, self.name),
            Dash::Double => write!(f, "{}{}{}", self.prefix, self.prefix, self.name),
            Dash::Escape => write!(f, "{}W {}", self.prefix, self.name),
        }
    }
}

/// Broad classes of scanning errors
///
/// See [`ParseError::kind`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// Option character or name not present in any spec
    UnknownOption,
    /// Long option name with two or more materially different expansions
    AmbiguousLongOption,
    /// Required argument absent at the end of the token or of the sequence
    MissingRequiredArgument,
    /// Argument supplied to an option that takes none
    SpuriousArgument,
}

/// Error in classifying one token
///
/// Every variant is recoverable: the session stays consistent and the
/// caller may continue scanning or stop, at its discretion.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ParseError {
    /// Short option character not listed in the spec
    #[error("invalid option -- '{0}'")]
    UnknownShortOption(char),

    /// Long option name that matched no table entry
    #[error("unrecognized option '{0}'")]
    UnknownLongOption(SpelledOption),

    /// Long option name matching two or more entries that behave differently
    #[error("option '{option}' is ambiguous")]
    AmbiguousLongOption {
        /// The name as written
        option: SpelledOption,
        /// Names of all entries the abbreviation reached
        candidates: Vec<String>,
    },

    /// Short option missing its required argument
    #[error("option requires an argument -- '{0}'")]
    MissingShortArgument(char),

    /// Long option missing its required argument
    #[error("option '{0}' requires an argument")]
    MissingLongArgument(SpelledOption),

    /// `=value` given to a long option that takes no argument
    #[error("option '{0}' doesn't allow an argument")]
    SpuriousArgument(SpelledOption),
}

impl ParseError {
    /// Returns the broad class of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        use ParseError::*;
        match self {
            UnknownShortOption(_) | UnknownLongOption(_) => ErrorKind::UnknownOption,
            AmbiguousLongOption { .. } => ErrorKind::AmbiguousLongOption,
            MissingShortArgument(_) | MissingLongArgument(_) => {
                ErrorKind::MissingRequiredArgument
            }
            SpuriousArgument(_) => ErrorKind::SpuriousArgument,
        }
    }
}

/// Identifies a classified option
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OptionCode {
    /// A short option character
    Short(char),
    /// The code of a matched long option entry
    ///
    /// A matched entry carrying a flag target stores its code through the
    /// target and classifies as `Long(0)`.
    Long(i32),
}

/// Result of one scanning step
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Parsed {
    /// A recognized option and its argument, if one was attached
    Option(OptionCode, Option<String>),
    /// An operand, returned in place (in-order mode only)
    Operand(String),
    /// No more options; the remaining arguments are operands
    EndOfOptions,
    /// A token-level problem; scanning may continue on the next call
    Error(ParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spelled(dash: Dash, name: &str) -> SpelledOption {
        SpelledOption {
            dash,
            prefix: '-',
            name: name.to_owned(),
        }
    }

    #[test]
    fn spelled_option_display() {
        assert_eq!(spelled(Dash::Single, "verbose").to_string(), "-verbose");
        assert_eq!(spelled(Dash::Double, "verbose").to_string(), "--verbose");
        assert_eq!(spelled(Dash::Escape, "verbose").to_string(), "-W verbose");
    }

    #[test]
    fn spelled_option_display_with_custom_prefix() {
        let option = SpelledOption {
            dash: Dash::Double,
            prefix: '/',
            name: "wide".to_owned(),
        };
        assert_eq!(option.to_string(), "//wide");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ParseError::UnknownShortOption('x').to_string(),
            "invalid option -- 'x'"
        );
        assert_eq!(
            ParseError::UnknownLongOption(spelled(Dash::Double, "two")).to_string(),
            "unrecognized option '--two'"
        );
        assert_eq!(
            ParseError::AmbiguousLongOption {
                option: spelled(Dash::Double, "m"),
                candidates: vec!["max".to_owned(), "min".to_owned()],
            }
            .to_string(),
            "option '--m' is ambiguous"
        );
        assert_eq!(
            ParseError::MissingShortArgument('a').to_string(),
            "option requires an argument -- 'a'"
        );
        assert_eq!(
            ParseError::MissingLongArgument(spelled(Dash::Double, "foo")).to_string(),
            "option '--foo' requires an argument"
        );
        assert_eq!(
            ParseError::SpuriousArgument(spelled(Dash::Double, "bar")).to_string(),
            "option '--bar' doesn't allow an argument"
        );
    }

    #[test]
    fn error_kinds() {
        use ErrorKind::*;
        assert_eq!(ParseError::UnknownShortOption('x').kind(), UnknownOption);
        assert_eq!(
            ParseError::UnknownLongOption(spelled(Dash::Double, "a")).kind(),
            UnknownOption
        );
        assert_eq!(
            ParseError::AmbiguousLongOption {
                option: spelled(Dash::Double, "a"),
                candidates: vec![],
            }
            .kind(),
            AmbiguousLongOption
        );
        assert_eq!(
            ParseError::MissingShortArgument('a').kind(),
            MissingRequiredArgument
        );
        assert_eq!(
            ParseError::MissingLongArgument(spelled(Dash::Double, "a")).kind(),
            MissingRequiredArgument
        );
        assert_eq!(
            ParseError::SpuriousArgument(spelled(Dash::Double, "a")).kind(),
            SpuriousArgument
        );
    }
}
