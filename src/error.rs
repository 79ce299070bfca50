use std::{error::Error, fmt};

/// The payloads a parser has to invent by itself, without any help from the caller.
///
/// Primitives and combinators report a plain miss with `no_match`, and use `incomplete`
/// when a failure is escalated to an error because input was already consumed.
pub trait Payload {
    fn no_match() -> Self;
    fn incomplete() -> Self;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input didn't match, nothing consumed. Alternatives may still be tried.
    NoMatch,
    /// Some input was consumed before the match broke down.
    Incomplete,
    /// A payload wrapped with a label via `Parser::context`.
    Context {
        label: &'static str,
        source: Box<ParseError>,
    },
    /// Raised by user code, e.g. from a `bind_all` callback.
    Fatal(String),
}

impl Payload for ParseError {
    #[inline]
    fn no_match() -> Self {
        Self::NoMatch
    }

    #[inline]
    fn incomplete() -> Self {
        Self::Incomplete
    }
}

impl Payload for bool {
    #[inline]
    fn no_match() -> Self {
        true
    }

    #[inline]
    fn incomplete() -> Self {
        true
    }
}

impl Payload for () {
    fn no_match() -> Self {}
    fn incomplete() -> Self {}
}

#[inline]
pub fn fatal<S: Into<String>>(msg: S) -> ParseError {
    ParseError::Fatal(msg.into())
}

impl ParseError {
    /// The innermost payload, with any context labels peeled off.
    pub fn root(&self) -> &ParseError {
        match self {
            Self::Context { source, .. } => source.root(),
            e => e,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::NoMatch => write!(f, "NoMatch")?,
            Self::Incomplete => write!(f, "Incomplete: input partially consumed")?,
            Self::Context { label, source } => write!(f, "{label}: {source}")?,
            Self::Fatal(msg) => write!(f, "Fatal:{msg}")?,
        };
        Ok(())
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Context { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_display() {
        assert_eq!(ParseError::NoMatch.to_string(), "NoMatch");
        assert_eq!(fatal("boom").to_string(), "Fatal:boom");
        let e = ParseError::Context {
            label: "number",
            source: Box::new(ParseError::Incomplete),
        };
        assert_eq!(e.to_string(), "number: Incomplete: input partially consumed");
        assert_eq!(e.root(), &ParseError::Incomplete);
        assert!(e.source().is_some());
        assert!(ParseError::NoMatch.source().is_none());
    }

    #[test]
    fn test_payloads() {
        assert_eq!(ParseError::no_match(), ParseError::NoMatch);
        assert_eq!(ParseError::incomplete(), ParseError::Incomplete);
        assert!(bool::no_match());
        assert!(bool::incomplete());
        let () = <()>::no_match();
        let () = <()>::incomplete();
    }

    #[test]
    fn test_unit_payloads_in_parsers() {
        use crate::parser::{predicate, ParseResult, Parser};

        let a: Parser<&'static str, char, (), ()> =
            predicate(|s: &'static str| s.strip_prefix('a').map(|rest| ('a', rest)));
        assert_eq!(a.parse("b"), ParseResult::Failure(()));
        assert_eq!(a.clone().many(2, 3).parse("b"), ParseResult::Failure(()));
        assert_eq!(a.many(2, 3).parse("ab"), ParseResult::Error(()));
    }
}
