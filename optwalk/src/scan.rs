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

//! Unified scanning and short-option clusters
//!
//! One call to a `next_*` method classifies one thing: an option, an
//! operand, an error, or the end of options. The session resumes exactly
//! where the previous call stopped, including in the middle of a cluster
//! like `-abc`. Operand handling depends on the ordering mode of the short
//! spec: operands are permuted to the end of the sequence, returned in
//! place, or end the scan (see [`ArgOrdering`]).

use crate::model::{Dash, OptionCode, Parsed, ParseError};
use crate::permute::rotate_runs;
use crate::session::Session;
use crate::spec::{ArgOrdering, LongOption, OptionKind, ShortSpec};

impl Session {
    /// Classifies the next argument against short options only.
    pub fn next_short(&mut self, args: &mut [String], spec: ShortSpec<'_>) -> Parsed {
        self.scan(args, spec, None, false)
    }

    /// Classifies the next argument against short and long options.
    ///
    /// Long options are introduced by a doubled prefix (`--name`) or by the
    /// `W;` escape entry of the short spec (`-W name`).
    pub fn next_long(
        &mut self,
        args: &mut [String],
        spec: ShortSpec<'_>,
        longs: &[LongOption<'_>],
    ) -> Parsed {
        self.scan(args, spec, Some(longs), false)
    }

    /// Like [`next_long`](Self::next_long), but a single prefix character
    /// may introduce a long name as well.
    pub fn next_long_only(
        &mut self,
        args: &mut [String],
        spec: ShortSpec<'_>,
        longs: &[LongOption<'_>],
    ) -> Parsed {
        self.scan(args, spec, Some(longs), true)
    }

    fn scan(
        &mut self,
        args: &mut [String],
        spec: ShortSpec<'_>,
        longs: Option<&[LongOption<'_>]>,
        long_only: bool,
    ) -> Parsed {
        if spec.is_empty() {
            return Parsed::EndOfOptions;
        }
        self.argument = None;

        let offset = match self.char_offset {
            Some(offset) => offset,
            None => match self.advance(args, spec) {
                Ok(offset) => offset,
                Err(done) => return done,
            },
        };

        // A token whose second character repeats the prefix carries a long
        // name, as does any token in long-only mode; the resolver may
        // decline in favor of the short scanner.
        if let Some(table) = longs {
            if offset != 0 {
                let rest = &args[self.arg_index][offset..];
                let doubled = rest.starts_with(self.prefix);
                if doubled || long_only {
                    let name_offset;
                    let mut short_too = false;
                    if doubled {
                        name_offset = offset + self.prefix.len_utf8();
                        self.dash = Dash::Double;
                    } else {
                        name_offset = offset;
                        self.dash = Dash::Single;
                        // a token being scanned always has characters left
                        let first = rest.chars().next().unwrap();
                        short_too = first != ':' && spec.lookup(first) != OptionKind::Unknown;
                    }
                    if let Some(result) =
                        self.resolve_long(args, spec, table, short_too, long_only, name_offset)
                    {
                        self.char_offset = None;
                        return result;
                    }
                }
            }
        }

        self.scan_cluster(args, spec, longs, long_only, offset)
    }

    /// Finds the next token to examine.
    ///
    /// Returns the scanning offset just past the introducing prefix
    /// character (0 for a bare prefix token listed in the spec), or the
    /// finished classification when no option token remains.
    fn advance(&mut self, args: &mut [String], spec: ShortSpec<'_>) -> Result<usize, Parsed> {
        loop {
            if self.arg_index >= args.len() {
                return Err(self.finish_scanning(args));
            }

            let token = &args[self.arg_index];
            if !self.looks_like_option(token, spec) {
                match spec.ordering() {
                    ArgOrdering::ReturnInOrder => {
                        let operand = token.clone();
                        self.arg_index += 1;
                        self.current = None;
                        self.argument = Some(operand.clone());
                        return Err(Parsed::Operand(operand));
                    }
                    ArgOrdering::RequireOrder => return Err(Parsed::EndOfOptions),
                    ArgOrdering::Permute => {}
                }
                match (self.nonopt_start, self.nonopt_end) {
                    (None, _) => self.nonopt_start = Some(self.arg_index),
                    (Some(start), Some(end)) => {
                        // merge the closed run with the operand just found
                        rotate_runs(args, start, end, self.arg_index);
                        self.nonopt_start = Some(self.arg_index - (end - start));
                        self.nonopt_end = None;
                    }
                    (Some(_), None) => {}
                }
                self.arg_index += 1;
                continue;
            }

            // an option token after skipped operands closes their run
            if self.nonopt_start.is_some() && self.nonopt_end.is_none() {
                self.nonopt_end = Some(self.arg_index);
            }

            let prefix_len = self.prefix.len_utf8();
            if token.len() == prefix_len {
                // the bare prefix character, listed in the spec
                self.char_offset = Some(0);
                return Ok(0);
            }

            let mut rest = token[prefix_len..].chars();
            if rest.next() == Some(self.prefix) && rest.as_str().is_empty() {
                // the doubled prefix terminates scanning and is consumed
                self.arg_index += 1;
                self.char_offset = None;
                return Err(self.finish_scanning(args));
            }

            self.char_offset = Some(prefix_len);
            return Ok(prefix_len);
        }
    }

    /// Whether a token is introduced by the prefix character
    ///
    /// A token consisting of the bare prefix character alone is an operand
    /// (the conventional standard-input name) unless the prefix character
    /// itself is listed in the spec.
    fn looks_like_option(&self, token: &str, spec: ShortSpec<'_>) -> bool {
        let mut chars = token.chars();
        chars.next() == Some(self.prefix)
            && (chars.next().is_some() || spec.lookup(self.prefix) != OptionKind::Unknown)
    }

    /// Closes the pending operand run and stops scanning.
    ///
    /// A closed run is rotated past the options that followed it and the
    /// cursor is pulled back by the run length; a run that was still open
    /// (nothing but operands remained) just gets the cursor parked on its
    /// first element.
    fn finish_scanning(&mut self, args: &mut [String]) -> Parsed {
        if let (Some(start), Some(end)) = (self.nonopt_start, self.nonopt_end) {
            rotate_runs(args, start, end, self.arg_index);
            self.arg_index -= end - start;
        } else if let Some(start) = self.nonopt_start {
            self.arg_index = start;
        }
        self.nonopt_start = None;
        self.nonopt_end = None;
        Parsed::EndOfOptions
    }

    /// Scans one character of a short-option cluster.
    fn scan_cluster(
        &mut self,
        args: &mut [String],
        spec: ShortSpec<'_>,
        longs: Option<&[LongOption<'_>]>,
        long_only: bool,
        offset: usize,
    ) -> Parsed {
        // a token being scanned always has characters left at the offset
        let mut chars = args[self.arg_index][offset..].chars();
        let option = chars.next().unwrap();
        let after = chars.as_str();
        self.char_offset = Some(offset + option.len_utf8());

        let kind = spec.lookup(option);
        if option == ':' || (option == self.prefix && !after.is_empty()) || kind == OptionKind::Unknown
        {
            if option == self.prefix && after.is_empty() {
                // a trailing prefix character stands for the conventional
                // standard-input name; stop without consuming the token
                self.char_offset = None;
                return Parsed::EndOfOptions;
            }
            if after.is_empty() {
                self.arg_index += 1;
                self.char_offset = None;
            }
            return self.fail(spec, ParseError::UnknownShortOption(option));
        }

        if option == 'W' && spec.long_escape() {
            if let Some(table) = longs {
                return self.escape_to_long(args, spec, table, long_only, offset + option.len_utf8());
            }
        }

        let argument = match kind {
            OptionKind::NoArgument => {
                if after.is_empty() {
                    self.arg_index += 1;
                    self.char_offset = None;
                }
                None
            }
            _ if !after.is_empty() => {
                // the rest of the token is the inline argument
                self.arg_index += 1;
                self.char_offset = None;
                Some(after.to_owned())
            }
            OptionKind::RequiredArgument => {
                // the argument is the following token
                self.arg_index += 1;
                let Some(value) = args.get(self.arg_index) else {
                    self.char_offset = None;
                    return self.fail(spec, ParseError::MissingShortArgument(option));
                };
                let value = value.clone();
                self.arg_index += 1;
                self.char_offset = None;
                Some(value)
            }
            _ => {
                // an optional argument is never taken from the following token
                self.arg_index += 1;
                self.char_offset = None;
                None
            }
        };

        self.finish(OptionCode::Short(option), argument)
    }

    /// Handles the `W;` escape: the rest of the token, or the following
    /// token, is a long option name.
    fn escape_to_long(
        &mut self,
        args: &mut [String],
        spec: ShortSpec<'_>,
        table: &[LongOption<'_>],
        long_only: bool,
        offset: usize,
    ) -> Parsed {
        let mut name_offset = offset;
        if args[self.arg_index].len() == offset {
            self.arg_index += 1;
            if self.arg_index >= args.len() {
                self.char_offset = None;
                return self.fail(spec, ParseError::MissingShortArgument('W'));
            }
            name_offset = 0;
        }
        self.dash = Dash::Escape;
        let result = self.resolve_long(args, spec, table, false, long_only, name_offset);
        self.char_offset = None;
        // the resolver only declines under short_too
        result.unwrap()
    }
}
