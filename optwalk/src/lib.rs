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

//! Incremental command-line option scanner
//!
//! This crate classifies the tokens of an argument vector one call at a
//! time: each call returns one short option (possibly from a cluster like
//! `-abc`), one long option (possibly abbreviated, as in `--verb` for
//! `--verbose`), one operand, one error, or the end of options. Operands
//! are reordered to the end of the vector in place unless the caller asks
//! for strict POSIX ordering or for operands returned in place.
//!
//! # Usage
//!
//! Create a [`Session`], then call [`next_short`](Session::next_short) or
//! [`next_long`](Session::next_long) until [`EndOfOptions`](Parsed::EndOfOptions):
//!
//! ```
//! use optwalk::{LongOption, OptionCode, Parsed, Session, ShortSpec};
//!
//! let mut args: Vec<String> = ["tool", "-n3", "input.txt", "--verbose"]
//!     .iter()
//!     .map(ToString::to_string)
//!     .collect();
//! let spec = ShortSpec::from("n:v");
//! let longs = [LongOption::new("verbose").code('v' as i32)];
//!
//! let mut session = Session::new();
//! let mut count = None;
//! let mut verbose = false;
//! loop {
//!     match session.next_long(&mut args, spec, &longs) {
//!         Parsed::Option(OptionCode::Short('n'), value) => count = value,
//!         Parsed::Option(OptionCode::Long(code), _) if code == 'v' as i32 => verbose = true,
//!         Parsed::EndOfOptions => break,
//!         other => panic!("unexpected {other:?}"),
//!     }
//! }
//!
//! assert_eq!(count.as_deref(), Some("3"));
//! assert!(verbose);
//! // the operand was permuted to the tail of the vector
//! assert_eq!(&args[session.arg_index()..], ["input.txt".to_string()]);
//! ```
//!
//! # Behavior
//!
//! The short spec string follows the classical conventions: `x` is a
//! switch, `x:` requires a value (inline or in the following token), and
//! `x::` takes a value only when written inline (`-xvalue`). A leading `+`
//! stops scanning at the first operand, a leading `-` returns operands in
//! place, and a leading `:` (after that) silences diagnostics. Long names
//! may be abbreviated to any unambiguous prefix, take values as
//! `--name=value` or in the following token, and can alternatively be
//! spelled `-W name` when the spec contains `W;`. The token `--` ends
//! option scanning and is consumed; a bare `-` is an operand.
//!
//! # Errors
//!
//! Malformed tokens never panic and never end the scan: they come back as
//! [`Parsed::Error`] values carrying a [`ParseError`], and the session
//! stays consistent so the caller decides whether to continue. Diagnostic
//! text is handed to a [`Diagnostics`] sink (standard error by default),
//! which can be silenced without affecting the returned values.
//!
//! # Sessions
//!
//! All scanning state lives in the [`Session`] value, so independent
//! parses are fully isolated; nothing is shared between sessions and no
//! global state exists. A session is not meant to be shared across
//! threads: every call mutates it in place, and the argument vector is
//! reordered while scanning is in progress.

mod long;
pub mod model;
mod permute;
pub mod report;
mod scan;
pub mod session;
pub mod spec;

pub use self::model::{Dash, ErrorKind, OptionCode, Parsed, ParseError, SpelledOption};
pub use self::report::{Diagnostics, StderrDiagnostics};
pub use self::session::Session;
pub use self::spec::{ArgOrdering, LongOption, OptionArgument, OptionKind, ShortSpec};
