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

//! Long-option resolution
//!
//! A long option may be abbreviated to any prefix that reaches exactly one
//! table entry. An exact, full-length match always wins, even when other
//! entries share the prefix. Two abbreviation matches make the name
//! ambiguous only when the entries behave differently; identical entries
//! under different names are interchangeable. In long-only mode, any second
//! abbreviation match is ambiguous.

use crate::model::{OptionCode, Parsed, ParseError};
use crate::session::Session;
use crate::spec::{LongOption, OptionArgument, ShortSpec};

impl Session {
    /// Matches `args[self.arg_index][offset..]` against the long-option
    /// table, allowing unambiguous abbreviation.
    ///
    /// Returns `None` when `short_too` is set and nothing matched: the
    /// token may still be a short-option cluster, and the cursor has been
    /// restored for the short scanner to retry it.
    pub(crate) fn resolve_long(
        &mut self,
        args: &mut [String],
        spec: ShortSpec<'_>,
        table: &[LongOption<'_>],
        short_too: bool,
        long_only: bool,
        offset: usize,
    ) -> Option<Parsed> {
        let rest = args[self.arg_index][offset..].to_owned();
        self.arg_index += 1;

        let (name, inline) = match rest.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (rest.as_str(), None),
        };

        let mut matched: Option<usize> = None;
        let mut exact = false;
        let mut distinct_partials = false;
        for (index, entry) in table.iter().enumerate() {
            if !entry.get_name().starts_with(name) {
                continue;
            }
            if entry.get_name().len() == name.len() {
                matched = Some(index);
                exact = true;
                break;
            }
            // a lone character that is also a short option never matches a
            // long name by abbreviation
            if short_too && single_char(name) {
                continue;
            }
            match matched {
                None => matched = Some(index),
                Some(first) if long_only || !entry.same_behavior(&table[first]) => {
                    distinct_partials = true;
                }
                Some(_) => {}
            }
        }

        if distinct_partials && !exact {
            let error = ParseError::AmbiguousLongOption {
                option: self.spell(name),
                candidates: table
                    .iter()
                    .filter(|entry| entry.get_name().starts_with(name))
                    .map(|entry| entry.get_name().to_owned())
                    .collect(),
            };
            return Some(self.fail(spec, error));
        }

        let Some(index) = matched else {
            if short_too {
                // decline: the short scanner gets another look at the token
                self.arg_index -= 1;
                return None;
            }
            let error = ParseError::UnknownLongOption(self.spell(&rest));
            return Some(self.fail(spec, error));
        };
        let entry = table[index];

        let argument = match (entry.get_argument(), inline) {
            (OptionArgument::None, Some(_)) => {
                let error = ParseError::SpuriousArgument(self.spell(name));
                return Some(self.fail(spec, error));
            }
            (OptionArgument::None, None) | (OptionArgument::Optional, None) => None,
            (_, Some(value)) => Some(value.to_owned()),
            (OptionArgument::Required, None) => match args.get(self.arg_index) {
                Some(value) => {
                    let value = value.clone();
                    self.arg_index += 1;
                    Some(value)
                }
                None => {
                    let error = ParseError::MissingLongArgument(self.spell(name));
                    return Some(self.fail(spec, error));
                }
            },
        };

        if let Some(flag) = entry.get_flag() {
            flag.set(entry.get_code());
            return Some(self.finish(OptionCode::Long(0), argument));
        }
        Some(self.finish(OptionCode::Long(entry.get_code()), argument))
    }
}

fn single_char(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some() && chars.next().is_none()
}
