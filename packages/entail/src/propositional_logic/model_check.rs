use colored::Colorize;
use log::{debug, trace};
use strum::{Display, EnumString};

use crate::{
    error::EvaluationError,
    explanation::{DiscardedExplanation, Explain},
};

use super::{
    evaluate::{Evaluate, Model},
    types::{Sentence, Symbol},
};

/// Splits with at least this many symbols left to assign are handed to rayon.
const PARALLEL_CUTOFF: usize = 10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Strategy {
    #[default]
    Sequential,
    Parallel,
}

impl Strategy {
    pub fn entails(self, knowledge: &Sentence, query: &Sentence) -> Result<bool, EvaluationError> {
        match self {
            Strategy::Sequential => entails(knowledge, query),
            Strategy::Parallel => entails_parallel(knowledge, query),
        }
    }
}

/// The symbols of `knowledge` followed by those only found in `query`.
pub fn combined_symbols(knowledge: &Sentence, query: &Sentence) -> Vec<Symbol> {
    let mut symbols = knowledge.symbols();
    symbols.extend(query.symbols());

    symbols.into_iter().collect()
}

/// Whether every model satisfying `knowledge` also satisfies `query`.
pub fn entails(knowledge: &Sentence, query: &Sentence) -> Result<bool, EvaluationError> {
    model_check(knowledge, query, &mut DiscardedExplanation)
}

/// Decides entailment by enumerating every model over the symbols of both
/// sentences, recording each complete model in `explanation`.
pub fn model_check(
    knowledge: &Sentence,
    query: &Sentence,
    explanation: &mut impl Explain,
) -> Result<bool, EvaluationError> {
    let symbols = combined_symbols(knowledge, query);

    debug!(
        "Model checking {} ⊨ {} over {} symbols",
        knowledge,
        query,
        symbols.len()
    );

    explanation.with_subexplanation(
        || {
            format!(
                "Checking whether {} entails {}",
                knowledge.to_string().blue(),
                query.to_string().blue()
            )
        },
        |explanation| {
            explanation.step(|| {
                format!(
                    "Enumerating all 2^{} models over {{{}}}",
                    symbols.len(),
                    symbols.iter().map(Symbol::name).collect::<Vec<_>>().join(", ")
                )
            });

            let result = check_all(knowledge, query, &symbols, Model::new(), explanation)?;

            explanation.step(|| {
                if result {
                    format!("=> {}", "entailed".green())
                } else {
                    format!("=> {}", "not entailed".red())
                }
            });

            debug!("Model checking finished: {result}");

            Ok(result)
        },
    )
}

fn check_all(
    knowledge: &Sentence,
    query: &Sentence,
    symbols: &[Symbol],
    model: Model,
    explanation: &mut impl Explain,
) -> Result<bool, EvaluationError> {
    match symbols.split_first() {
        None => check_model(knowledge, query, &model, explanation),
        Some((symbol, remaining)) => Ok(check_all(
            knowledge,
            query,
            remaining,
            model.with(symbol.clone(), true),
            explanation,
        )? && check_all(
            knowledge,
            query,
            remaining,
            model.with(symbol.clone(), false),
            explanation,
        )?),
    }
}

fn check_model(
    knowledge: &Sentence,
    query: &Sentence,
    model: &Model,
    explanation: &mut impl Explain,
) -> Result<bool, EvaluationError> {
    if !knowledge.evaluate(model)? {
        trace!("{model}: knowledge does not hold");
        explanation.step(|| format!("{model}: knowledge is {}", "false".yellow()));

        return Ok(true);
    }

    let holds = query.evaluate(model)?;

    trace!("{model}: knowledge holds, query is {holds}");
    explanation.step(|| {
        format!(
            "{model}: knowledge is {}, query is {}",
            "true".green(),
            if holds { "true".green() } else { "false".red() }
        )
    });

    Ok(holds)
}

/// Same result as [`entails`], with the branches of large splits evaluated
/// concurrently.
pub fn entails_parallel(knowledge: &Sentence, query: &Sentence) -> Result<bool, EvaluationError> {
    let symbols = combined_symbols(knowledge, query);

    debug!(
        "Parallel model checking {} ⊨ {} over {} symbols",
        knowledge,
        query,
        symbols.len()
    );

    let result = check_all_parallel(knowledge, query, &symbols, Model::new())?;

    debug!("Parallel model checking finished: {result}");

    Ok(result)
}

fn check_all_parallel(
    knowledge: &Sentence,
    query: &Sentence,
    symbols: &[Symbol],
    model: Model,
) -> Result<bool, EvaluationError> {
    if symbols.len() < PARALLEL_CUTOFF {
        return check_all(knowledge, query, symbols, model, &mut DiscardedExplanation);
    }

    let (symbol, remaining) = (&symbols[0], &symbols[1..]);
    let model_true = model.with(symbol.clone(), true);
    let model_false = model.with(symbol.clone(), false);

    let (when_true, when_false) = rayon::join(
        || check_all_parallel(knowledge, query, remaining, model_true),
        || check_all_parallel(knowledge, query, remaining, model_false),
    );

    Ok(when_true? && when_false?)
}

/// The first model in enumeration order in which `knowledge` holds and
/// `query` does not.
pub fn counterexample(
    knowledge: &Sentence,
    query: &Sentence,
) -> Result<Option<Model>, EvaluationError> {
    let symbols = combined_symbols(knowledge, query);

    find_counterexample(knowledge, query, &symbols, Model::new())
}

fn find_counterexample(
    knowledge: &Sentence,
    query: &Sentence,
    symbols: &[Symbol],
    model: Model,
) -> Result<Option<Model>, EvaluationError> {
    let Some((symbol, remaining)) = symbols.split_first() else {
        let refuted = knowledge.evaluate(&model)? && !query.evaluate(&model)?;

        return Ok(refuted.then_some(model));
    };

    for value in [true, false] {
        let found =
            find_counterexample(knowledge, query, remaining, model.with(symbol.clone(), value))?;

        if found.is_some() {
            return Ok(found);
        }
    }

    Ok(None)
}
