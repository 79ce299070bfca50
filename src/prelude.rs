pub use crate::{choice, sequence};
pub use crate::{
    attempt, bind, character, constant_error, constant_failure, constant_success, eos, lazy,
    many, predicate, satisfy, string,
};
pub use crate::{fatal, Cursor, Halt, ParseError, ParseResult, Parser, Payload, StrParser};
