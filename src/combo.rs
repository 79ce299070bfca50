use std::ops::{Bound, RangeBounds};

use once_cell::sync::OnceCell;

use crate::error::{ParseError, Payload};
use crate::logging::log_combinator;
use crate::parser::{ParseResult, Parser};

use ParseResult::{Error, Failure, Success};

fn start_end<R: RangeBounds<usize>>(rb: &R) -> (usize, usize) {
    let start = match rb.start_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match rb.end_bound() {
        Bound::Included(&i) => i,
        Bound::Excluded(&i) => i.saturating_sub(1),
        Bound::Unbounded => usize::MAX,
    };
    (start, end)
}

impl<I, O, F, E> Parser<I, O, F, E>
where
    I: 'static,
    O: 'static,
    F: 'static,
    E: 'static,
{
    /// Demotes an `Error` to a `Failure`, so that an enclosing `choice` carries on.
    ///
    /// The remainder is not rewound. Only wrap parsers that never consume input before erroring,
    /// otherwise the next alternative starts from wherever the caller's cursor was, while the
    /// erroring parser believed it had moved on.
    pub fn attempt(self) -> Self
    where
        E: Into<F>,
    {
        Parser::new(move |input| match self.parse(input) {
            Error(e) => {
                log_combinator("attempt", "", "error -> failure");
                Failure(e.into())
            }
            res => res,
        })
    }

    /// Promotes a `Failure` to an `Error`. The inverse of `attempt`.
    pub fn escalate(self) -> Self
    where
        F: Into<E>,
    {
        Parser::new(move |input| match self.parse(input) {
            Failure(f) => {
                log_combinator("escalate", "", "failure -> error");
                Error(f.into())
            }
            res => res,
        })
    }

    /// Maps the value of a `Success`. Failures and errors pass through untouched.
    pub fn bind<O2, S>(self, on_success: S) -> Parser<I, O2, F, E>
    where
        O2: 'static,
        S: Fn(O) -> O2 + Send + Sync + 'static,
    {
        Parser::new(move |input| match self.parse(input) {
            Success(o, rest) => Success(on_success(o), rest),
            Failure(f) => Failure(f),
            Error(e) => Error(e),
        })
    }

    /// Maps whichever payload the result carries. The classification never changes.
    pub fn bind_all<O2, F2, E2, S, G, H>(
        self,
        on_success: S,
        on_failure: G,
        on_error: H,
    ) -> Parser<I, O2, F2, E2>
    where
        O2: 'static,
        F2: 'static,
        E2: 'static,
        S: Fn(O) -> O2 + Send + Sync + 'static,
        G: Fn(F) -> F2 + Send + Sync + 'static,
        H: Fn(E) -> E2 + Send + Sync + 'static,
    {
        Parser::new(move |input| match self.parse(input) {
            Success(o, rest) => Success(on_success(o), rest),
            Failure(f) => Failure(on_failure(f)),
            Error(e) => Error(on_error(e)),
        })
    }

    pub fn map_failure<F2, G>(self, on_failure: G) -> Parser<I, O, F2, E>
    where
        F2: 'static,
        G: Fn(F) -> F2 + Send + Sync + 'static,
    {
        self.bind_all(|o| o, on_failure, |e| e)
    }

    pub fn map_error<E2, H>(self, on_error: H) -> Parser<I, O, F, E2>
    where
        E2: 'static,
        H: Fn(E) -> E2 + Send + Sync + 'static,
    {
        self.bind_all(|o| o, |f| f, on_error)
    }

    /// Applies the parser repeatedly, collecting between `min` and `max` values.
    ///
    /// Stops at the first failure or once `max` values are collected. An error from the wrapped
    /// parser is propagated at once and the collected values are dropped. Having stopped:
    /// at least `min` matches is a success, zero matches is a failure, and anything in between
    /// is an error since input was consumed.
    ///
    /// A match that leaves the input where it was is kept and ends the repetition, as every
    /// further attempt would match the same way.
    pub fn many(self, min: usize, max: usize) -> Parser<I, Vec<O>, F, E>
    where
        I: Clone + PartialEq,
        F: Payload,
        E: Payload,
    {
        Parser::new(move |input: I| {
            let mut matches = Vec::new();
            let mut cur = input;
            while matches.len() < max {
                match self.parse(cur.clone()) {
                    Success(o, rest) => {
                        let stalled = rest == cur;
                        matches.push(o);
                        cur = rest;
                        if stalled {
                            break;
                        }
                    }
                    Failure(_) => break,
                    Error(e) => {
                        log_combinator("many", (min, max), "error");
                        return Error(e);
                    }
                }
            }
            let res = if matches.len() >= min {
                Success(matches, cur)
            } else if matches.is_empty() {
                Failure(F::no_match())
            } else {
                Error(E::incomplete())
            };
            log_combinator("many", (min, max), res.kind());
            res
        })
    }

    /// Zero or more.
    pub fn many0(self) -> Parser<I, Vec<O>, F, E>
    where
        I: Clone + PartialEq,
        F: Payload,
        E: Payload,
    {
        self.many(0, usize::MAX)
    }

    /// One or more.
    pub fn many1(self) -> Parser<I, Vec<O>, F, E>
    where
        I: Clone + PartialEq,
        F: Payload,
        E: Payload,
    {
        self.many(1, usize::MAX)
    }

    /// `many` with its bounds taken from a range, e.g. `repeat(2..=3)` or `repeat(1..)`.
    pub fn repeat<R: RangeBounds<usize>>(self, range: R) -> Parser<I, Vec<O>, F, E>
    where
        I: Clone + PartialEq,
        F: Payload,
        E: Payload,
    {
        let (min, max) = start_end(&range);
        self.many(min, max)
    }

    /// Runs `next` on the remainder of this parser, pairing the two values.
    ///
    /// Behaves as a two element `sequence`: a failure of `next` is escalated to an error.
    pub fn then<O2>(self, next: Parser<I, O2, F, E>) -> Parser<I, (O, O2), F, E>
    where
        O2: 'static,
        E: Payload,
    {
        Parser::new(move |input| match self.parse(input) {
            Success(a, rest) => match next.parse(rest) {
                Success(b, rest) => Success((a, b), rest),
                Failure(_) => {
                    log_combinator("then", "", "failure -> error");
                    Error(E::incomplete())
                }
                Error(e) => Error(e),
            },
            Failure(f) => Failure(f),
            Error(e) => Error(e),
        })
    }
}

impl<I: 'static, O: 'static> Parser<I, O, ParseError, ParseError> {
    /// Wraps failure and error payloads with `label`, leaving successes alone.
    pub fn context(self, label: &'static str) -> Self {
        let wrap = move |e: ParseError| ParseError::Context {
            label,
            source: Box::new(e),
        };
        self.bind_all(|o| o, wrap, wrap)
    }
}

/// Free function form of `Parser::attempt`.
pub fn attempt<I, O, F, E>(p: Parser<I, O, F, E>) -> Parser<I, O, F, E>
where
    I: 'static,
    O: 'static,
    F: 'static,
    E: Into<F> + 'static,
{
    p.attempt()
}

/// Free function form of `Parser::many`.
pub fn many<I, O, F, E>(p: Parser<I, O, F, E>, min: usize, max: usize) -> Parser<I, Vec<O>, F, E>
where
    I: Clone + PartialEq + 'static,
    O: 'static,
    F: Payload + 'static,
    E: Payload + 'static,
{
    p.many(min, max)
}

/// Free function form of `Parser::bind`.
pub fn bind<I, O, O2, F, E, S>(p: Parser<I, O, F, E>, on_success: S) -> Parser<I, O2, F, E>
where
    I: 'static,
    O: 'static,
    O2: 'static,
    F: 'static,
    E: 'static,
    S: Fn(O) -> O2 + Send + Sync + 'static,
{
    p.bind(on_success)
}

/// Ordered alternation: the first success wins.
///
/// Every alternative sees the same input. A failure moves on to the next alternative, an error
/// ends the whole choice at once. When every alternative fails (or there are none) the result
/// is `Failure(F::no_match())`.
pub fn choice<I, O, F, E>(parsers: Vec<Parser<I, O, F, E>>) -> Parser<I, O, F, E>
where
    I: Clone + 'static,
    O: 'static,
    F: Payload + 'static,
    E: 'static,
{
    Parser::new(move |input: I| {
        for (i, p) in parsers.iter().enumerate() {
            match p.parse(input.clone()) {
                Failure(_) => continue,
                res => {
                    log_combinator("choice", i, res.kind());
                    return res;
                }
            }
        }
        log_combinator("choice", parsers.len(), "failure");
        Failure(F::no_match())
    })
}

/// Ordered composition: each parser runs on the remainder of the previous one.
///
/// A failure of the first parser is returned as is, nothing having been consumed. A failure of
/// any later parser is escalated to `Error(E::incomplete())`. Errors propagate at once.
/// No parsers at all succeeds with an empty vector and the input unchanged.
pub fn sequence<I, O, F, E>(parsers: Vec<Parser<I, O, F, E>>) -> Parser<I, Vec<O>, F, E>
where
    I: 'static,
    O: 'static,
    F: 'static,
    E: Payload + 'static,
{
    Parser::new(move |input: I| {
        let mut values = Vec::with_capacity(parsers.len());
        let mut cur = input;
        for p in parsers.iter() {
            match p.parse(cur) {
                Success(o, rest) => {
                    values.push(o);
                    cur = rest;
                }
                Failure(f) if values.is_empty() => return Failure(f),
                Failure(_) => {
                    log_combinator("sequence", values.len(), "failure -> error");
                    return Error(E::incomplete());
                }
                Error(e) => return Error(e),
            }
        }
        Success(values, cur)
    })
}

/// Defers building a parser until it is first used, then reuses it.
///
/// Lets a grammar refer to itself, e.g. an expression containing parenthesised expressions.
pub fn lazy<I, O, F, E, B>(build: B) -> Parser<I, O, F, E>
where
    I: 'static,
    O: 'static,
    F: 'static,
    E: 'static,
    B: Fn() -> Parser<I, O, F, E> + Send + Sync + 'static,
{
    let cell: OnceCell<Parser<I, O, F, E>> = OnceCell::new();
    Parser::new(move |input| cell.get_or_init(&build).parse(input))
}

/// `choice![p1, p2, ..]` is `choice(vec![p1, p2, ..])`.
#[macro_export]
macro_rules! choice {
    ($($p:expr),* $(,)?) => {
        $crate::combo::choice(::std::vec![$($p),*])
    };
}

/// `sequence![p1, p2, ..]` is `sequence(vec![p1, p2, ..])`.
#[macro_export]
macro_rules! sequence {
    ($($p:expr),* $(,)?) => {
        $crate::combo::sequence(::std::vec![$($p),*])
    };
}
