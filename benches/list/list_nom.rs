use nom::{
    character::complete::{char, i64 as integer, multispace0},
    multi::separated_list0,
    sequence::{delimited, preceded, terminated},
    IResult,
};

fn lexeme<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    F: FnMut(&'a str) -> IResult<&'a str, O>,
{
    terminated(inner, multispace0)
}

pub fn nom_parser(s: &str) -> IResult<&str, Vec<i64>> {
    preceded(
        multispace0,
        delimited(
            lexeme(char('[')),
            separated_list0(lexeme(char(',')), lexeme(integer)),
            lexeme(char(']')),
        ),
    )(s)
}
