#![warn(clippy::all)]
#![warn(clippy::correctness)]
#![warn(clippy::style)]
#![warn(clippy::complexity)]
#![warn(clippy::perf)]

/*!
# paarse
- a small parser combinator library built around a three-valued result
- parsers are plain immutable values: build them once, run them as often as you like, from any thread

Main concepts:

# ParseResult
every parser returns exactly one of

- `Success(value, remainder)` - matched, with the input moved on past what was consumed
- `Failure(payload)` - didn't match, nothing consumed, so an alternative may be tried
- `Error(payload)` - didn't match after consuming input. Nothing further is attempted

# Combinators
`choice` tries alternatives in order and stops at the first success or the first error.
`sequence` turns a failure into an error as soon as an earlier parser has consumed input,
and `many` does the same when it stops short of its minimum. `attempt` undoes that, turning an
error back into a failure, and `bind` maps values and payloads.

```
use paarse::prelude::*;

let word = choice![string("let"), string("var")];
assert_eq!(word.run("var"), Ok("var".to_string()));

// 'l' matched, so the mismatch on 'o' is fatal and "lot" is never tried
let word = choice![string("let"), string("lot")];
assert_eq!(word.run("lot"), Err(ParseError::Incomplete));
```

Trace output goes through the `log` crate under the target `paarse`, e.g. `RUST_LOG=paarse=trace`.
*/

use std::cell::Cell;

pub mod combo;
pub mod contrib;
mod cursor;
mod error;
mod logging;
mod parser;
mod text_parser;
mod util;

pub mod prelude;

pub use combo::{attempt, bind, choice, lazy, many, sequence};
pub use cursor::Cursor;
pub use error::{fatal, ParseError, Payload};
pub use parser::{constant_error, constant_failure, constant_success, predicate};
pub use parser::{Halt, ParseResult, Parser};
pub use text_parser::{character, eos, satisfy, string, StrParser};

pub(crate) const LOG_TARGET: &str = "paarse";

thread_local!(pub(crate) static LABEL: Cell<&'static str> = Cell::new(""));
