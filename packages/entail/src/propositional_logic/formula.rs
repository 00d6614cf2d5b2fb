use std::fmt::Display;

use itertools::Itertools;

use super::types::{Connective, Sentence};

impl Sentence {
    /// Human-readable infix rendering of the sentence.
    pub fn formula(&self) -> String {
        match self {
            Sentence::Atomic(symbol) => symbol.to_string(),
            Sentence::Negation(operand) => {
                format!("{}{}", Connective::Negation, parenthesize(&operand.formula()))
            }
            Sentence::Conjunction(conjunction) => {
                join(conjunction.conjuncts(), Connective::Conjunction)
            }
            Sentence::Disjunction(disjunction) => {
                join(disjunction.disjuncts(), Connective::Disjunction)
            }
            Sentence::Implication(left, right) | Sentence::Biconditional(left, right) => {
                format!(
                    "{} {} {}",
                    parenthesize(&left.formula()),
                    self.connective()
                        .map(|connective| connective.to_string())
                        .unwrap_or_default(),
                    parenthesize(&right.formula())
                )
            }
        }
    }
}

impl Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}

fn join(sentences: &[Sentence], connective: Connective) -> String {
    match sentences {
        [single] => single.formula(),
        _ => sentences
            .iter()
            .map(|sentence| parenthesize(&sentence.formula()))
            .join(&format!(" {connective} ")),
    }
}

/// Wraps `formula` in parentheses unless it is a bare word or already
/// enclosed in one matching pair.
pub fn parenthesize(formula: &str) -> String {
    let enclosed = formula
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .is_some_and(balanced);

    if formula.is_empty() || formula.chars().all(char::is_alphabetic) || enclosed {
        formula.to_owned()
    } else {
        format!("({formula})")
    }
}

/// The running count of open parentheses never drops below zero and ends at zero.
pub fn balanced(formula: &str) -> bool {
    let mut open = 0usize;

    for c in formula.chars() {
        match c {
            '(' => open += 1,
            ')' => match open.checked_sub(1) {
                Some(remaining) => open = remaining,
                None => return false,
            },
            _ => {}
        }
    }

    open == 0
}
