use entail::propositional_logic::{
    model_check::entails,
    parser::parse_sentence,
    types::{Sentence, Symbol},
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

#[test]
fn precedence_and_associativity() {
    let (p, q, r) = (symbol("p"), symbol("q"), symbol("r"));

    let test_cases = [
        ("p", p.clone()),
        ("  p  ", p.clone()),
        ("¬p", Sentence::not(p.clone())),
        ("~~p", Sentence::not(Sentence::not(p.clone()))),
        ("p ∧ q ∧ r", and([p.clone(), q.clone(), r.clone()])),
        ("p & q | r", or([and([p.clone(), q.clone()]), r.clone()])),
        ("p ∨ q ∧ r", or([p.clone(), and([q.clone(), r.clone()])])),
        ("¬p ∧ q", and([Sentence::not(p.clone()), q.clone()])),
        (
            "p => q => r",
            Sentence::implies(p.clone(), Sentence::implies(q.clone(), r.clone())),
        ),
        (
            "(p => q) => r",
            Sentence::implies(Sentence::implies(p.clone(), q.clone()), r.clone()),
        ),
        (
            "p ∨ q => r",
            Sentence::implies(or([p.clone(), q.clone()]), r.clone()),
        ),
        (
            "p => q <=> ¬q => ¬p",
            Sentence::iff(
                Sentence::implies(p.clone(), q.clone()),
                Sentence::implies(Sentence::not(q.clone()), Sentence::not(p.clone())),
            ),
        ),
        ("p ⇔ q", Sentence::iff(p.clone(), q.clone())),
        (
            "¬(p ∧ q)",
            Sentence::not(and([p.clone(), q.clone()])),
        ),
        ("( p )", p.clone()),
    ];

    for (input, expected) in test_cases {
        assert_eq!(parse_sentence(input), Ok(expected), "parsing {input:?}");
    }
}

#[test]
fn symbol_names() {
    assert_eq!(
        parse_sentence("rain_today ∧ x2"),
        Ok(and([symbol("rain_today"), symbol("x2")]))
    );
    assert_eq!(
        parse_sentence("dumbledore").unwrap().symbols().first(),
        Some(&Symbol::new("dumbledore").unwrap())
    );
}

#[test]
fn malformed_input_is_rejected() {
    let test_cases = ["", "p ∧", "(p ∨ q", "p q", "=> p", "p <=>", "()", "¬"];

    for input in test_cases {
        let error = parse_sentence(input).unwrap_err();

        assert_eq!(error.input, input);
        assert!(error.offset <= input.len(), "offset for {input:?}");
    }
}

#[test]
fn rendered_formulas_parse_back() {
    let (rain, hagrid, dumbledore) = (symbol("rain"), symbol("hagrid"), symbol("dumbledore"));

    let knowledge = and([
        Sentence::implies(Sentence::not(rain.clone()), hagrid.clone()),
        or([hagrid.clone(), dumbledore.clone()]),
        Sentence::not(and([hagrid.clone(), dumbledore.clone()])),
        dumbledore.clone(),
        Sentence::iff(rain.clone(), or([hagrid, Sentence::not(dumbledore)])),
    ]);

    let parsed = parse_sentence(&knowledge.formula()).unwrap();

    assert_eq!(parsed, knowledge);
    assert_eq!(parsed.formula(), knowledge.formula());
}

#[test]
fn parsed_knowledge_base_entails_rain() {
    let knowledge = parse_sentence(
        "(¬rain => hagrid) ∧ (hagrid ∨ dumbledore) ∧ ¬(hagrid ∧ dumbledore) ∧ dumbledore",
    )
    .unwrap();
    let query = parse_sentence("rain").unwrap();

    assert_eq!(entails(&knowledge, &query), Ok(true));
}
