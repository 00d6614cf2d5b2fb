use std::fmt::Display;

use indexmap::IndexMap;

use crate::error::EvaluationError;

use super::types::{Sentence, Symbol};

/// An assignment of truth values to symbols.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model(IndexMap<Symbol, bool>);

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, symbol: &Symbol) -> Option<bool> {
        self.0.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, bool)> {
        self.0.iter().map(|(symbol, value)| (symbol, *value))
    }

    /// A copy of this model with `symbol` additionally set to `value`.
    pub fn with(&self, symbol: Symbol, value: bool) -> Self {
        let mut model = self.clone();
        model.0.insert(symbol, value);

        model
    }

    /// Every total model over `symbols`, ordered as the binary numbers
    /// `0..2^n` with the first symbol as the most significant bit.
    pub fn generate_all(symbols: &[Symbol]) -> impl Iterator<Item = Model> + '_ {
        let n = symbols.len();

        (0..1usize << n).map(move |i| {
            symbols
                .iter()
                .enumerate()
                .map(|(position, symbol)| (symbol.clone(), (i >> (n - 1 - position)) & 1 == 1))
                .collect()
        })
    }
}

impl FromIterator<(Symbol, bool)> for Model {
    fn from_iter<T: IntoIterator<Item = (Symbol, bool)>>(iter: T) -> Self {
        Model(iter.into_iter().collect())
    }
}

impl Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut symbols = self.0.keys().collect::<Vec<_>>();
        symbols.sort();

        let assignments = symbols
            .iter()
            .map(|&symbol| {
                let prefix = if self.0[symbol] { "" } else { "¬" };
                format!("{prefix}{symbol}")
            })
            .collect::<Vec<_>>()
            .join(", ");

        write!(f, "{{{}}}", assignments)
    }
}

pub trait Evaluate {
    fn evaluate(&self, model: &Model) -> Result<bool, EvaluationError>;
}

impl Evaluate for Symbol {
    fn evaluate(&self, model: &Model) -> Result<bool, EvaluationError> {
        model
            .get(self)
            .ok_or_else(|| EvaluationError::UndefinedSymbol {
                symbol: self.clone(),
            })
    }
}

impl Evaluate for Sentence {
    fn evaluate(&self, model: &Model) -> Result<bool, EvaluationError> {
        match self {
            Sentence::Atomic(symbol) => symbol.evaluate(model),
            Sentence::Negation(operand) => Ok(!operand.evaluate(model)?),
            Sentence::Conjunction(conjunction) => {
                for conjunct in conjunction.conjuncts() {
                    if !conjunct.evaluate(model)? {
                        return Ok(false);
                    }
                }

                Ok(true)
            }
            Sentence::Disjunction(disjunction) => {
                for disjunct in disjunction.disjuncts() {
                    if disjunct.evaluate(model)? {
                        return Ok(true);
                    }
                }

                Ok(false)
            }
            Sentence::Implication(antecedent, consequent) => {
                let antecedent = antecedent.evaluate(model)?;
                let consequent = consequent.evaluate(model)?;

                Ok(!antecedent || consequent)
            }
            Sentence::Biconditional(left, right) => {
                Ok(left.evaluate(model)? == right.evaluate(model)?)
            }
        }
    }
}
