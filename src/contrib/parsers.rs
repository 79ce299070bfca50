use once_cell::sync::Lazy;

use crate::prelude::*;

use crate::ParseResult::{Error, Failure, Success};

/// Any one of the characters in `chars`.
pub fn one_of(chars: &str) -> StrParser<char> {
    let set: Vec<char> = chars.chars().collect();
    satisfy(move |c| set.contains(&c))
}

/// Any character not in `chars`. Fails at end of input.
pub fn none_of(chars: &str) -> StrParser<char> {
    let set: Vec<char> = chars.chars().collect();
    satisfy(move |c| !set.contains(&c))
}

pub fn digit() -> StrParser<char> {
    static DIGIT: Lazy<StrParser<char>> = Lazy::new(|| satisfy(|c| c.is_ascii_digit()));
    DIGIT.clone()
}

/// Zero or more whitespace characters. Always succeeds.
pub fn whitespace() -> StrParser<()> {
    static WS: Lazy<StrParser<()>> =
        Lazy::new(|| satisfy(char::is_whitespace).many0().bind(|_| ()));
    WS.clone()
}

/// `p` followed by any whitespace, keeping only the value of `p`.
pub fn lexeme<O: 'static>(p: StrParser<O>) -> StrParser<O> {
    p.then(whitespace()).bind(|(o, ())| o)
}

/// An optionally negative decimal `i64`.
///
/// A `-` not followed by a digit is an error, as is a number that overflows.
pub fn integer() -> StrParser<i64> {
    static INTEGER: Lazy<StrParser<i64>> = Lazy::new(|| {
        let digits = digit().many1();
        let negative = character('-')
            .then(digits.clone())
            .bind(|(_, ds)| (true, ds));
        let positive = digits.bind(|ds| (false, ds));
        let signed = choice![negative, positive];
        Parser::new(move |cur: Cursor| match signed.parse(cur) {
            Success((neg, ds), rest) => {
                let text: String = neg.then_some('-').into_iter().chain(ds).collect();
                match text.parse::<i64>() {
                    Ok(n) => Success(n, rest),
                    Err(e) => Error(fatal(e.to_string())),
                }
            }
            Failure(f) => Failure(f),
            Error(e) => Error(e),
        })
        .label("integer")
    });
    INTEGER.clone()
}
