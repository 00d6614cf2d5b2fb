use entail::{
    error::EvaluationError,
    explanation::Explanation,
    propositional_logic::{
        evaluate::Evaluate,
        model_check::{
            combined_symbols, counterexample, entails, entails_parallel, model_check, Strategy,
        },
        truth_table::TruthTable,
        types::{Sentence, Symbol},
    },
};

fn symbol(name: &str) -> Sentence {
    Sentence::symbol(name).unwrap()
}

fn and(conjuncts: impl IntoIterator<Item = Sentence>) -> Sentence {
    Sentence::and(conjuncts).unwrap()
}

fn or(disjuncts: impl IntoIterator<Item = Sentence>) -> Sentence {
    Sentence::or(disjuncts).unwrap()
}

fn harry_potter() -> (Sentence, Sentence) {
    let rain = symbol("It is raining today");
    let hagrid = symbol("Harry visited hagrid today");
    let dumbledore = symbol("Harry visited dumbledore today");

    let knowledge = and([
        Sentence::implies(Sentence::not(rain.clone()), hagrid.clone()),
        or([hagrid.clone(), dumbledore.clone()]),
        Sentence::not(and([hagrid, dumbledore.clone()])),
        dumbledore,
    ]);

    (knowledge, rain)
}

#[test]
fn reference_knowledge_base_entails_rain() {
    let (knowledge, rain) = harry_potter();

    assert_eq!(entails(&knowledge, &rain), Ok(true));
    assert_eq!(entails_parallel(&knowledge, &rain), Ok(true));
    assert_eq!(counterexample(&knowledge, &rain), Ok(None));
}

#[test]
fn reference_knowledge_base_does_not_entail_hagrid() {
    let (knowledge, _) = harry_potter();
    let hagrid = symbol("Harry visited hagrid today");

    assert_eq!(entails(&knowledge, &hagrid), Ok(false));
    assert_eq!(entails(&knowledge, &hagrid.negated()), Ok(true));
}

#[test]
fn tautologies_are_always_entailed() {
    let p = symbol("p");
    let tautology = or([p.clone(), Sentence::not(p.clone())]);

    let knowledge_bases = [
        symbol("q"),
        Sentence::not(symbol("q")),
        and([symbol("q"), Sentence::not(symbol("q"))]),
        Sentence::implies(symbol("p"), symbol("r")),
        p,
    ];

    for knowledge in knowledge_bases {
        assert_eq!(entails(&knowledge, &tautology), Ok(true), "{knowledge}");
    }
}

#[test]
fn contradictory_knowledge_entails_anything() {
    let knowledge = and([symbol("p"), Sentence::not(symbol("p"))]);

    assert_eq!(entails(&knowledge, &symbol("q")), Ok(true));
    assert_eq!(entails(&knowledge, &Sentence::not(symbol("q"))), Ok(true));
}

#[test]
fn counterexample_refutes_entailment() {
    let knowledge = or([symbol("p"), symbol("q")]);
    let query = symbol("p");

    assert_eq!(entails(&knowledge, &query), Ok(false));

    let model = counterexample(&knowledge, &query).unwrap().unwrap();

    assert_eq!(knowledge.evaluate(&model), Ok(true));
    assert_eq!(query.evaluate(&model), Ok(false));
    assert_eq!(model.get(&Symbol::new("q").unwrap()), Some(true));
}

#[test]
fn modus_ponens_and_friends() {
    let (p, q, r) = (symbol("p"), symbol("q"), symbol("r"));

    let test_cases = [
        (and([Sentence::implies(p.clone(), q.clone()), p.clone()]), q.clone(), true),
        (
            and([Sentence::implies(p.clone(), q.clone()), Sentence::not(q.clone())]),
            Sentence::not(p.clone()),
            true,
        ),
        (
            and([Sentence::implies(p.clone(), q.clone()), q.clone()]),
            p.clone(),
            false,
        ),
        (
            and([
                Sentence::implies(p.clone(), q.clone()),
                Sentence::implies(q.clone(), r.clone()),
            ]),
            Sentence::implies(p.clone(), r.clone()),
            true,
        ),
        (
            Sentence::iff(p.clone(), q.clone()),
            Sentence::iff(Sentence::not(q.clone()), Sentence::not(p.clone())),
            true,
        ),
        (and([p.clone(), q.clone()]), or([p.clone(), r.clone()]), true),
        (or([p.clone(), q.clone()]), and([p.clone(), q.clone()]), false),
    ];

    for (knowledge, query, expected) in test_cases {
        for strategy in [Strategy::Sequential, Strategy::Parallel] {
            assert_eq!(
                strategy.entails(&knowledge, &query),
                Ok(expected),
                "{knowledge} ⊨ {query} ({strategy})"
            );
        }
        assert_eq!(
            counterexample(&knowledge, &query).unwrap().is_none(),
            expected
        );
    }
}

#[test]
fn unrelated_query_is_not_entailed() {
    let knowledge = symbol("p");
    let query = symbol("q");

    assert_eq!(combined_symbols(&knowledge, &query).len(), 2);
    assert_eq!(entails(&knowledge, &query), Ok(false));
}

#[test]
fn parallel_agrees_on_many_symbols() {
    // A chain x0 => x1 => ... => x11 together with x0 entails x11, and nothing
    // entails an unconstrained symbol.
    let variables = (0..12).map(|i| symbol(&format!("x{i}"))).collect::<Vec<_>>();

    let mut knowledge = and([variables[0].clone()]);
    for pair in variables.windows(2) {
        knowledge
            .as_conjunction_mut()
            .unwrap()
            .add(Sentence::implies(pair[0].clone(), pair[1].clone()));
    }

    let last = variables[11].clone();
    let unrelated = symbol("y");

    assert_eq!(entails(&knowledge, &last), Ok(true));
    assert_eq!(entails_parallel(&knowledge, &last), Ok(true));
    assert_eq!(entails(&knowledge, &unrelated), Ok(false));
    assert_eq!(entails_parallel(&knowledge, &unrelated), Ok(false));
}

#[test]
fn strategy_parses_from_text() {
    assert_eq!("sequential".parse::<Strategy>(), Ok(Strategy::Sequential));
    assert_eq!("parallel".parse::<Strategy>(), Ok(Strategy::Parallel));
    assert!("random".parse::<Strategy>().is_err());
    assert_eq!(Strategy::default(), Strategy::Sequential);
    assert_eq!(Strategy::Parallel.to_string(), "parallel");
}

#[test]
fn explanation_records_every_model() {
    let knowledge = Sentence::implies(symbol("p"), symbol("q"));
    let query = symbol("q");

    let mut explanation = Explanation::new("test");
    let result = model_check(&knowledge, &query, &mut explanation);

    assert_eq!(result, Ok(false));

    let check = explanation.subexplanations().next().unwrap();
    // One step announcing the enumeration, one per model, one verdict.
    assert_eq!(check.steps().count(), 1 + 4 + 1);
}

#[test]
fn explanation_stops_at_first_failing_branch() {
    let knowledge = symbol("p");
    let query = Sentence::not(symbol("p"));

    let mut explanation = Explanation::new("test");
    assert_eq!(model_check(&knowledge, &query, &mut explanation), Ok(false));

    let check = explanation.subexplanations().next().unwrap();
    // The `p = true` branch already fails, so `p = false` is never visited.
    assert_eq!(check.steps().count(), 1 + 1 + 1);
}

#[test]
fn truth_table_agrees_with_model_checking() {
    let (knowledge, rain) = harry_potter();

    let table = TruthTable::for_entailment(&knowledge, &rain).unwrap();

    assert_eq!(table.rows.len(), 8);
    assert!(table.entailed());
    assert_eq!(table.rows.iter().filter(|row| row.knowledge).count(), 1);

    let hagrid = symbol("Harry visited hagrid today");
    let table = TruthTable::for_entailment(&knowledge, &hagrid).unwrap();

    assert!(!table.entailed());
    assert_eq!(table.counterexamples().count(), 1);
    assert_eq!(entails(&knowledge, &hagrid), Ok(table.entailed()));
}

#[test]
fn undefined_symbols_are_not_reported_by_model_checking() {
    // Enumeration always assigns every symbol, so evaluation errors cannot
    // surface through entailment.
    let (knowledge, rain) = harry_potter();

    let result: Result<bool, EvaluationError> = entails(&rain, &knowledge);

    assert_eq!(result, Ok(false));
}
