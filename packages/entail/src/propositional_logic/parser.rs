use winnow::{
    ascii::space0,
    combinator::{alt, cut_err, delimited, eof, preceded, separated, separated_foldr1, terminated},
    error::{ContextError, StrContext, StrContextValue},
    token::take_while,
    PResult, Parser,
};

use crate::error::ParseError;

use super::types::{Conjunction, Disjunction, Sentence, Symbol};

/// Parses a sentence written in the same syntax [`Sentence::formula`] renders.
///
/// Loosest to tightest: `<=>`, `=>` (both right-associative), `∨`, `∧`, `¬`.
/// ASCII spellings `|`, `&`, `~` and `!` are accepted too.
pub fn parse_sentence(input: &str) -> Result<Sentence, ParseError> {
    terminated(delimited(space0, biconditional, space0), eof)
        .parse(input)
        .map_err(|error| ParseError {
            input: input.to_owned(),
            offset: error.offset(),
            message: error.inner().to_string(),
        })
}

fn biconditional(input: &mut &str) -> PResult<Sentence> {
    separated_foldr1(implication, spaced(alt(("<=>", "⇔"))), |left, _, right| {
        Sentence::iff(left, right)
    })
    .parse_next(input)
}

fn implication(input: &mut &str) -> PResult<Sentence> {
    separated_foldr1(disjunction, spaced(alt(("=>", "⇒"))), |left, _, right| {
        Sentence::implies(left, right)
    })
    .parse_next(input)
}

fn disjunction(input: &mut &str) -> PResult<Sentence> {
    let mut disjuncts: Vec<Sentence> =
        separated(1.., conjunction, spaced(alt(('∨', '|')))).parse_next(input)?;

    Ok(match disjuncts.len() {
        1 => disjuncts.remove(0),
        _ => {
            let first = disjuncts.remove(0);
            Disjunction::from_first(first, disjuncts).into()
        }
    })
}

fn conjunction(input: &mut &str) -> PResult<Sentence> {
    let mut conjuncts: Vec<Sentence> =
        separated(1.., negation, spaced(alt(('∧', '&')))).parse_next(input)?;

    Ok(match conjuncts.len() {
        1 => conjuncts.remove(0),
        _ => {
            let first = conjuncts.remove(0);
            Conjunction::from_first(first, conjuncts).into()
        }
    })
}

fn negation(input: &mut &str) -> PResult<Sentence> {
    alt((
        preceded((alt(('¬', '~', '!')), space0), negation).map(Sentence::not),
        base_expression,
    ))
    .parse_next(input)
}

fn base_expression(input: &mut &str) -> PResult<Sentence> {
    alt((symbol.map(Sentence::Atomic), parenthesized_expression)).parse_next(input)
}

fn parenthesized_expression(input: &mut &str) -> PResult<Sentence> {
    delimited(
        ('(', space0),
        cut_err(biconditional),
        cut_err((space0, ')')).context(StrContext::Expected(StrContextValue::Description(
            "closing parenthesis",
        ))),
    )
    .parse_next(input)
}

fn symbol(input: &mut &str) -> PResult<Symbol> {
    take_while(1.., |c: char| c.is_alphanumeric() || c == '_')
        .try_map(Symbol::new)
        .context(StrContext::Label("symbol"))
        .parse_next(input)
}

fn spaced<'a, T>(
    parser: impl Parser<&'a str, T, ContextError>,
) -> impl Parser<&'a str, T, ContextError> {
    delimited(space0, parser, space0)
}
