use std::fmt;
use std::sync::Arc;

use crate::error::{ParseError, Payload};
use crate::logging::{log_combinator, LabelGuard};

/// The outcome of running a parser. Exactly one variant is ever populated.
///
/// - `Success` carries the value and the input positioned just past what was consumed.
/// - `Failure` means nothing was consumed, and a sibling alternative may still be tried.
/// - `Error` is fatal. Input may have been partly consumed, so nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseResult<O, I, F = ParseError, E = ParseError> {
    Success(O, I),
    Failure(F),
    Error(E),
}

/// The non-success half of a `ParseResult`, for use with `?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Halt<F, E> {
    Failure(F),
    Error(E),
}

impl<O, I, F, E> ParseResult<O, I, F, E> {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(..))
    }

    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(..))
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(..))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Success(..) => "success",
            Self::Failure(..) => "failure",
            Self::Error(..) => "error",
        }
    }

    pub fn value(&self) -> Option<&O> {
        match self {
            Self::Success(o, _) => Some(o),
            _ => None,
        }
    }

    pub fn remainder(&self) -> Option<&I> {
        match self {
            Self::Success(_, rest) => Some(rest),
            _ => None,
        }
    }

    pub fn into_result(self) -> Result<(O, I), Halt<F, E>> {
        match self {
            Self::Success(o, rest) => Ok((o, rest)),
            Self::Failure(f) => Err(Halt::Failure(f)),
            Self::Error(e) => Err(Halt::Error(e)),
        }
    }
}

impl<F: fmt::Display, E: fmt::Display> fmt::Display for Halt<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Failure(x) => write!(f, "failure: {x}"),
            Self::Error(x) => write!(f, "error: {x}"),
        }
    }
}

impl<F, E> std::error::Error for Halt<F, E>
where
    F: fmt::Debug + fmt::Display,
    E: fmt::Debug + fmt::Display,
{
}

type ParseFn<I, O, F, E> = Arc<dyn Fn(I) -> ParseResult<O, I, F, E> + Send + Sync>;

/// A parser: an immutable, shareable function from an input cursor to a `ParseResult`.
///
/// Combinators never mutate a parser, they build a new one owning the parsers it was made from.
/// Cloning is cheap and shares the same underlying function.
pub struct Parser<I, O, F = ParseError, E = ParseError> {
    run: ParseFn<I, O, F, E>,
}

impl<I, O, F, E> Clone for Parser<I, O, F, E> {
    fn clone(&self) -> Self {
        Parser {
            run: Arc::clone(&self.run),
        }
    }
}

impl<I, O, F, E> fmt::Debug for Parser<I, O, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Parser({input}) -> {output}",
            input = std::any::type_name::<I>(),
            output = std::any::type_name::<O>()
        )
    }
}

impl<I, O, F, E> Parser<I, O, F, E> {
    pub fn new<P>(p: P) -> Self
    where
        P: Fn(I) -> ParseResult<O, I, F, E> + Send + Sync + 'static,
    {
        Parser { run: Arc::new(p) }
    }

    #[inline]
    pub fn parse(&self, input: I) -> ParseResult<O, I, F, E> {
        (self.run)(input)
    }
}

impl<I: 'static, O: 'static, F: 'static, E: 'static> Parser<I, O, F, E> {
    /// Runs the parser with `name` as this thread's logging label. Results are untouched.
    pub fn label(self, name: &'static str) -> Self {
        Parser::new(move |input| {
            let _guard = LabelGuard::enter(name);
            let res = self.parse(input);
            log_combinator("label", name, res.kind());
            res
        })
    }
}

/// Always succeeds with a clone of `value`, without consuming anything beyond what `next` says.
///
/// `next` computes the remainder from the input, typically the identity.
pub fn constant_success<I, O, F, E, N>(value: O, next: N) -> Parser<I, O, F, E>
where
    O: Clone + Send + Sync + 'static,
    N: Fn(I) -> I + Send + Sync + 'static,
{
    Parser::new(move |input| ParseResult::Success(value.clone(), next(input)))
}

pub fn constant_failure<I, O, F, E>(info: F) -> Parser<I, O, F, E>
where
    F: Clone + Send + Sync + 'static,
{
    Parser::new(move |_input| ParseResult::Failure(info.clone()))
}

pub fn constant_error<I, O, F, E>(info: E) -> Parser<I, O, F, E>
where
    E: Clone + Send + Sync + 'static,
{
    Parser::new(move |_input| ParseResult::Error(info.clone()))
}

/// The atomic matcher. `matcher` returns the value and remainder on a match, `None` otherwise.
///
/// A miss is reported as `Failure(F::no_match())`.
pub fn predicate<I, O, F, E, M>(matcher: M) -> Parser<I, O, F, E>
where
    F: Payload,
    M: Fn(I) -> Option<(O, I)> + Send + Sync + 'static,
{
    Parser::new(move |input| match matcher(input) {
        Some((o, rest)) => ParseResult::Success(o, rest),
        None => ParseResult::Failure(F::no_match()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::fatal;
    use test_log::test;

    type P<O> = Parser<&'static str, O>;

    fn first_char() -> P<char> {
        predicate(|s: &'static str| {
            let c = s.chars().next()?;
            Some((c, &s[c.len_utf8()..]))
        })
    }

    #[test]
    fn test_constant_success() {
        let p: P<&str> = constant_success("success", |_| "next");
        assert_eq!(p.parse("anything"), ParseResult::Success("success", "next"));
        let p: P<i32> = constant_success(7, |s| s);
        assert_eq!(p.parse("abc"), ParseResult::Success(7, "abc"));
    }

    #[test]
    fn test_constant_failure_and_error() {
        let p: P<()> = constant_failure(fatal("failure"));
        assert_eq!(p.parse("x"), ParseResult::Failure(fatal("failure")));
        let p: P<()> = constant_error(fatal("error"));
        assert_eq!(p.parse("x"), ParseResult::Error(fatal("error")));
    }

    #[test]
    fn test_predicate() {
        let p = first_char();
        assert_eq!(p.parse("ab"), ParseResult::Success('a', "b"));
        assert_eq!(p.parse(""), ParseResult::Failure(ParseError::NoMatch));

        let b: Parser<&'static str, char, bool, bool> = predicate(|_| None);
        assert_eq!(b.parse("ab"), ParseResult::Failure(true));
    }

    #[test]
    fn test_replay_is_identical() {
        let p = first_char();
        assert_eq!(p.parse(""), p.parse(""));
        assert_eq!(p.parse("xy"), p.clone().parse("xy"));
    }

    #[test]
    fn test_result_helpers() {
        let r: ParseResult<char, &str> = first_char().parse("ab");
        assert!(r.is_success());
        assert_eq!(r.kind(), "success");
        assert_eq!(r.value(), Some(&'a'));
        assert_eq!(r.remainder(), Some(&"b"));
        assert_eq!(r.into_result(), Ok(('a', "b")));

        let r: ParseResult<char, &str> = ParseResult::Error(ParseError::Incomplete);
        assert!(r.is_error() && !r.is_failure());
        assert_eq!(r.into_result(), Err(Halt::Error(ParseError::Incomplete)));
        assert_eq!(
            Halt::<ParseError, ParseError>::Failure(ParseError::NoMatch).to_string(),
            "failure: NoMatch"
        );
    }

    #[test]
    fn test_label_passes_through() {
        let p = first_char().label("first");
        assert_eq!(p.parse("z"), ParseResult::Success('z', ""));
        assert_eq!(p.parse(""), ParseResult::Failure(ParseError::NoMatch));
        assert!(format!("{p:?}").starts_with("Parser("));
    }

    #[test]
    fn test_label_restored_after_panic() {
        use crate::LABEL;
        use std::panic::{catch_unwind, AssertUnwindSafe};

        let boom: Parser<&'static str, char> = Parser::new(|_| panic!("boom"));
        let inner = boom.label("inner").label("outer");
        let before = LABEL.with(|f| f.replace("caller"));
        assert!(catch_unwind(AssertUnwindSafe(|| inner.parse("x"))).is_err());
        assert_eq!(LABEL.with(|f| f.replace(before)), "caller");
    }
}
