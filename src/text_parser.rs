use crate::combo::sequence;
use crate::cursor::Cursor;
use crate::error::{ParseError, Payload};
use crate::logging::Loggable;
use crate::parser::{predicate, ParseResult, Parser};

use ParseResult::{Error, Failure, Success};

/// A parser over string input.
pub type StrParser<O, F = ParseError, E = ParseError> = Parser<Cursor, O, F, E>;

/// Matches a single character accepted by `pred`.
pub fn satisfy<P>(pred: P) -> StrParser<char>
where
    P: Fn(char) -> bool + Send + Sync + 'static,
{
    predicate(move |cur: Cursor| {
        let res = match cur.peek() {
            Some(c) if pred(c) => Some((c, cur.advance(c.len_utf8()))),
            _ => None,
        };
        cur.log_outcome("satisfy", "", if res.is_some() { "success" } else { "failure" });
        res
    })
}

/// Matches exactly `want`, advancing past it.
pub fn character(want: char) -> StrParser<char> {
    predicate(move |cur: Cursor| {
        let res = match cur.peek() {
            Some(c) if c == want => Some((c, cur.advance(c.len_utf8()))),
            _ => None,
        };
        cur.log_outcome("char", want, if res.is_some() { "success" } else { "failure" });
        res
    })
}

/// Matches `word` one character at a time.
///
/// A mismatch on the first character is a `Failure`. A mismatch after a matched prefix is an
/// `Error`, as the prefix has been consumed.
pub fn string(word: &str) -> StrParser<String> {
    sequence(word.chars().map(character).collect()).bind(|cs| cs.into_iter().collect())
}

fn end<F: Payload, E>() -> Parser<Cursor, (), F, E> {
    predicate(|cur: Cursor| {
        let at_end = cur.is_eos();
        cur.log_outcome("eos", "", if at_end { "success" } else { "failure" });
        at_end.then_some(((), cur))
    })
}

/// Matches the end of input, consuming nothing.
pub fn eos() -> StrParser<()> {
    end()
}

impl<O, F, E> Parser<Cursor, O, F, E>
where
    O: 'static,
    F: Payload + Into<E> + 'static,
    E: Payload + 'static,
{
    /// Requires the whole input to be consumed. Never fails, only succeeds or errors.
    ///
    /// A failure of this parser is escalated, and trailing input is an error too.
    pub fn finalize(self) -> Self {
        self.then(end()).escalate().bind(|(o, ())| o)
    }

    /// Parses the whole of `input`, returning the value or the error payload.
    pub fn run(&self, input: &str) -> Result<O, E> {
        let cur = Cursor::from(input);
        let res = self.clone().finalize().parse(cur.clone());
        cur.log_outcome("run", "", res.kind());
        match res {
            Success(o, _rest) => Ok(o),
            Failure(f) => Err(f.into()),
            Error(e) => Err(e),
        }
    }
}
