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

//! Option specifications
//!
//! This module defines the two inputs that describe what a command accepts:
//! [`ShortSpec`], which wraps the classical one-letter option description
//! string, and [`LongOption`], one entry in the table of long option names.

use std::cell::Cell;

/// How operands are treated relative to options
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ArgOrdering {
    /// Scanning stops at the first operand (leading `+` in the spec string).
    RequireOrder,
    /// Operands are reordered to the end of the argument sequence (default).
    Permute,
    /// Every operand is returned in place as an
    /// [`Operand`](crate::Parsed::Operand) result (leading `-` in the spec
    /// string).
    ReturnInOrder,
}

/// Classification of a single character against a [`ShortSpec`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OptionKind {
    /// The character is not a recognized option.
    Unknown,
    /// The option takes no argument.
    NoArgument,
    /// The option requires an argument (one `:` after the character).
    RequiredArgument,
    /// The option may take an inline argument (two `:` after the character).
    OptionalArgument,
}

/// Short-option description string
///
/// The string lists every recognized option character. A character followed
/// by one `:` requires an argument; two `:` make the argument optional. The
/// raw string may begin with one mode flag: `+` stops scanning at the first
/// operand and `-` returns operands in place (see [`ArgOrdering`]). After
/// that flag, a leading `:` silences the diagnostic sink. The first
/// character of the remaining *effective* spec is always an ordinary option
/// character, never a mode flag.
///
/// # Example
///
/// ```
/// # use optwalk::{OptionKind, ShortSpec};
/// let spec = ShortSpec::from("ab:c::");
/// assert_eq!(spec.lookup('a'), OptionKind::NoArgument);
/// assert_eq!(spec.lookup('b'), OptionKind::RequiredArgument);
/// assert_eq!(spec.lookup('c'), OptionKind::OptionalArgument);
/// assert_eq!(spec.lookup('x'), OptionKind::Unknown);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ShortSpec<'a> {
    raw: &'a str,
}

/// Creates a spec from its raw string representation.
impl<'a, S: AsRef<str> + ?Sized> From<&'a S> for ShortSpec<'a> {
    #[inline(always)]
    fn from(raw: &'a S) -> Self {
        Self { raw: raw.as_ref() }
    }
}

impl ShortSpec<'_> {
    /// Returns the raw string representation of the spec.
    #[inline(always)]
    #[must_use]
    pub fn as_raw(&self) -> &str {
        self.raw
    }

    /// Whether the raw spec is empty
    ///
    /// An empty spec makes every scanning call report the end of options
    /// without examining any argument.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Returns the spec with the leading mode flag removed.
    fn effective(&self) -> &str {
        self.raw.strip_prefix(['+', '-']).unwrap_or(self.raw)
    }

    /// Returns the operand-handling mode requested by the spec.
    #[must_use]
    pub fn ordering(&self) -> ArgOrdering {
        match self.raw.chars().next() {
            Some('+') => ArgOrdering::RequireOrder,
            Some('-') => ArgOrdering::ReturnInOrder,
            _ => ArgOrdering::Permute,
        }
    }

    /// Whether a leading `:` asks for diagnostics to be withheld
    ///
    /// The quiet convention affects the diagnostic sink only; the error
    /// values returned from scanning are the same either way.
    #[must_use]
    pub fn quiet(&self) -> bool {
        self.effective().starts_with(':')
    }

    /// Returns the kind of the given option character.
    #[must_use]
    pub fn lookup(&self, option: char) -> OptionKind {
        if option == ':' {
            return OptionKind::Unknown;
        }

        let mut iter = self.effective().chars();
        match iter.find(|&c| c == option) {
            None => OptionKind::Unknown,
            Some(_) => match (iter.next(), iter.next()) {
                (Some(':'), Some(':')) => OptionKind::OptionalArgument,
                (Some(':'), _) => OptionKind::RequiredArgument,
                _ => OptionKind::NoArgument,
            },
        }
    }

    /// Whether the spec's `W` entry is followed by `;`
    ///
    /// The `W;` entry turns `-W name` into an alternate spelling for the
    /// long option `name`.
    #[must_use]
    pub fn long_escape(&self) -> bool {
        let mut iter = self.effective().chars();
        iter.find(|&c| c == 'W').is_some() && iter.next() == Some(';')
    }
}

/// Specification for a long option's argument
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum OptionArgument {
    /// The option does not take an argument. (default)
    #[default]
    None,
    /// The option requires an argument.
    Required,
    /// The option may take an argument, but only one attached with `=`.
    Optional,
}

/// One entry in a long-option table
///
/// An entry pairs a name with its argument requirement and an integer code.
/// When the entry also carries a flag target, a match stores the code into
/// the target instead of reporting it (see
/// [`OptionCode::Long`](crate::OptionCode::Long)).
///
/// # Example
///
/// ```
/// # use optwalk::{LongOption, OptionArgument};
/// let entry = LongOption::new("output")
///     .argument(OptionArgument::Required)
///     .code('o' as i32);
/// assert_eq!(entry.get_name(), "output");
/// assert_eq!(entry.get_argument(), OptionArgument::Required);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LongOption<'a> {
    name: &'a str,
    argument: OptionArgument,
    flag: Option<&'a Cell<i32>>,
    code: i32,
}

impl<'a> LongOption<'a> {
    /// Creates an entry with the given name, taking no argument, with code 0.
    ///
    /// The name should not start with the option prefix or contain `=`.
    #[must_use]
    pub const fn new(name: &'a str) -> Self {
        LongOption {
            name,
            argument: OptionArgument::None,
            flag: None,
            code: 0,
        }
    }

    /// Returns the option name.
    #[must_use]
    pub const fn get_name(&self) -> &'a str {
        self.name
    }

    /// Returns whether this option takes an argument.
    #[must_use]
    pub const fn get_argument(&self) -> OptionArgument {
        self.argument
    }

    /// Chained setter for the argument requirement
    #[must_use]
    pub const fn argument(mut self, argument: OptionArgument) -> Self {
        self.argument = argument;
        self
    }

    /// Returns the code reported (or stored) when this option matches.
    #[must_use]
    pub const fn get_code(&self) -> i32 {
        self.code
    }

    /// Chained setter for the code
    #[must_use]
    pub const fn code(mut self, code: i32) -> Self {
        self.code = code;
        self
    }

    /// Returns the flag target, if any.
    #[must_use]
    pub const fn get_flag(&self) -> Option<&'a Cell<i32>> {
        self.flag
    }

    /// Chained setter for the flag target
    ///
    /// A match then stores the code into `flag` and classifies as
    /// [`Long(0)`](crate::OptionCode::Long).
    #[must_use]
    pub fn flag(mut self, flag: &'a Cell<i32>) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Whether two entries behave identically when matched
    ///
    /// Entries agreeing in argument requirement, code, and flag target are
    /// interchangeable, so an abbreviation reaching both is not ambiguous.
    pub(crate) fn same_behavior(&self, other: &Self) -> bool {
        self.argument == other.argument
            && self.code == other.code
            && match (self.flag, other.flag) {
                (None, None) => true,
                (Some(mine), Some(theirs)) => std::ptr::eq(mine, theirs),
                _ => false,
            }
    }
}

#[test]
fn new_long_option_takes_no_argument() {
    let entry = LongOption::new("verbose");
    assert_eq!(entry.get_argument(), OptionArgument::None);
    assert_eq!(entry.get_code(), 0);
    assert_eq!(entry.get_flag(), None);
}
