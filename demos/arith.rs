use paarse::contrib::parsers::{integer, lexeme, whitespace};
use paarse::prelude::*;

/// cargo run --example arith -- "2 * (3 + 4)"
///
/// RUST_LOG=paarse=trace cargo test --example arith -- --nocapture
///

fn symbol(c: char) -> StrParser<char> {
    lexeme(character(c))
}

fn apply(first: i64, rest: Vec<(char, i64)>) -> Result<i64, ParseError> {
    rest.into_iter().try_fold(first, |acc, (op, v)| {
        let res = match op {
            '+' => acc.checked_add(v),
            '-' => acc.checked_sub(v),
            '*' => acc.checked_mul(v),
            _ => acc.checked_div(v),
        };
        res.ok_or_else(|| fatal(format!("cannot evaluate {acc} {op} {v}")))
    })
}

/// Turns an arithmetic mistake into a fatal error, there being no sensible alternative to try.
fn checked(p: StrParser<Result<i64, ParseError>>) -> StrParser<i64> {
    Parser::new(move |cur: Cursor| match p.parse(cur) {
        ParseResult::Success(Ok(v), rest) => ParseResult::Success(v, rest),
        ParseResult::Success(Err(e), _) => ParseResult::Error(e),
        ParseResult::Failure(f) => ParseResult::Failure(f),
        ParseResult::Error(e) => ParseResult::Error(e),
    })
}

/// A chain of `operand (op operand)*`, folded left to right.
fn chain(operand: StrParser<i64>, ops: &str) -> StrParser<i64> {
    let op = choice(ops.chars().map(symbol).collect());
    checked(
        operand
            .clone()
            .then(op.then(operand).many0())
            .bind(|(first, rest)| apply(first, rest)),
    )
}

fn factor() -> StrParser<i64> {
    let parens = symbol('(')
        .then(expr())
        .then(symbol(')'))
        .bind(|((_, v), _)| v);
    choice![lexeme(integer()), parens].label("factor")
}

fn term() -> StrParser<i64> {
    chain(factor(), "*/").label("term")
}

fn expr() -> StrParser<i64> {
    lazy(|| chain(term(), "+-").label("expr"))
}

/// Skips leading whitespace before `p`. Unlike `then`, a miss in `p` stays a plain failure.
fn skip_space<O: 'static>(p: StrParser<O>) -> StrParser<O> {
    Parser::new(move |cur: Cursor| match whitespace().parse(cur) {
        ParseResult::Success((), rest) => p.parse(rest),
        ParseResult::Failure(f) => ParseResult::Failure(f),
        ParseResult::Error(e) => ParseResult::Error(e),
    })
}

pub fn evaluate(input: &str) -> Result<i64, ParseError> {
    skip_space(expr()).run(input)
}

fn main() {
    env_logger::init();
    let input = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    match evaluate(&input) {
        Ok(v) => println!("{v}"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn test_evaluate() {
        assert_eq!(evaluate("1"), Ok(1));
        assert_eq!(evaluate(" 1 + 2 * 3 "), Ok(7));
        assert_eq!(evaluate("(1 + 2) * 3"), Ok(9));
        assert_eq!(evaluate("10 - 4 - 3"), Ok(3));
        assert_eq!(evaluate("2 * -3"), Ok(-6));
        assert_eq!(evaluate("((7))"), Ok(7));
        assert_eq!(evaluate("7 / 2"), Ok(3));
    }

    #[test]
    fn test_errors() {
        // operator consumed, operand missing
        assert_eq!(evaluate("1 +"), Err(ParseError::Incomplete));
        assert_eq!(evaluate("(1 + 2"), Err(ParseError::Incomplete));
        // nothing recognised at all
        assert_eq!(evaluate("x"), Err(ParseError::NoMatch));
        assert_eq!(evaluate("  x"), Err(ParseError::NoMatch));
        assert_eq!(evaluate(""), Err(ParseError::NoMatch));
        assert_eq!(expr().run("x"), Err(ParseError::NoMatch));
        assert_eq!(evaluate("1 x"), Err(ParseError::Incomplete));
        assert_eq!(evaluate("1 / 0"), Err(fatal("cannot evaluate 1 / 0")));
    }
}
