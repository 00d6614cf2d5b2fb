use std::fmt::Display;

use colored::{Color, Colorize};

use crate::error::EvaluationError;

use super::{
    evaluate::{Evaluate, Model},
    model_check::combined_symbols,
    types::{Sentence, Symbol},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTableRow {
    pub model: Model,
    pub knowledge: bool,
    pub query: bool,
}

impl TruthTableRow {
    /// The knowledge base holds in this row but the query does not.
    pub fn is_counterexample(&self) -> bool {
        self.knowledge && !self.query
    }
}

/// Every model of a knowledge base and query, with the value of each.
#[derive(Debug, Clone)]
pub struct TruthTable {
    pub symbols: Vec<Symbol>,
    pub knowledge: Sentence,
    pub query: Sentence,
    pub rows: Vec<TruthTableRow>,
}

impl TruthTable {
    pub fn for_entailment(knowledge: &Sentence, query: &Sentence) -> Result<Self, EvaluationError> {
        let symbols = combined_symbols(knowledge, query);

        let rows = Model::generate_all(&symbols)
            .map(|model| {
                Ok(TruthTableRow {
                    knowledge: knowledge.evaluate(&model)?,
                    query: query.evaluate(&model)?,
                    model,
                })
            })
            .collect::<Result<Vec<_>, EvaluationError>>()?;

        Ok(TruthTable {
            symbols,
            knowledge: knowledge.clone(),
            query: query.clone(),
            rows,
        })
    }

    pub fn entailed(&self) -> bool {
        !self.rows.iter().any(TruthTableRow::is_counterexample)
    }

    pub fn counterexamples(&self) -> impl Iterator<Item = &TruthTableRow> {
        self.rows.iter().filter(|row| row.is_counterexample())
    }
}

fn truth_value(value: bool) -> &'static str {
    if value {
        "T"
    } else {
        "F"
    }
}

impl Display for TruthTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "|{}", symbol.to_string().blue())?;
        }
        writeln!(
            f,
            "|{}|{}|",
            self.knowledge.to_string().blue(),
            self.query.to_string().blue()
        )?;

        for _ in 0..self.symbols.len() + 2 {
            write!(f, "|:-:")?;
        }
        writeln!(f, "|")?;

        for row in &self.rows {
            let color = if row.is_counterexample() {
                Color::Red
            } else if row.knowledge {
                Color::Green
            } else {
                Color::White
            };

            for (_, value) in row.model.iter() {
                write!(f, "|{}", truth_value(value).color(color))?;
            }
            writeln!(
                f,
                "|{}|{}|",
                truth_value(row.knowledge).color(color),
                truth_value(row.query).color(color)
            )?;
        }

        Ok(())
    }
}
