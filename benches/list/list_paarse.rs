use paarse::contrib::parsers::{integer, lexeme, whitespace};
use paarse::prelude::*;

pub fn paarse_parser() -> StrParser<Vec<i64>> {
    let item = lexeme(integer());
    let comma = lexeme(character(','));
    let items = item
        .clone()
        .then(comma.then(item).bind(|(_, n)| n).many0())
        .bind(|(first, mut rest)| {
            rest.insert(0, first);
            rest
        });
    let body = choice![items, constant_success(Vec::new(), |c| c)];
    whitespace()
        .then(lexeme(character('[')))
        .then(body)
        .then(lexeme(character(']')))
        .bind(|(((_, _), v), _)| v)
}
