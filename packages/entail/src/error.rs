use derive_more::derive::{Display, Error};

use crate::propositional_logic::types::Symbol;

/// Raised when a sentence would violate one of its structural invariants.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum InvalidSentence {
    #[display("symbol name must not be empty")]
    EmptySymbolName,
    #[display("a conjunction needs at least one conjunct")]
    EmptyConjunction,
    #[display("a disjunction needs at least one disjunct")]
    EmptyDisjunction,
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[display("variable {symbol} not in model")]
    UndefinedSymbol { symbol: Symbol },
}

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("failed to parse sentence \"{input}\" at offset {offset}: {message}")]
pub struct ParseError {
    pub input: String,
    pub offset: usize,
    pub message: String,
}
