use entail::{error::InvalidSentence, propositional_logic::types::Sentence};

/// Harry visits Hagrid whenever it is not raining, visits exactly one of
/// Hagrid and Dumbledore, and visited Dumbledore today.
pub fn knowledge_base() -> Result<(Sentence, Sentence), InvalidSentence> {
    let rain = Sentence::symbol("It is raining today")?;
    let hagrid = Sentence::symbol("Harry visited hagrid today")?;
    let dumbledore = Sentence::symbol("Harry visited dumbledore today")?;

    let knowledge = Sentence::and([
        Sentence::implies(rain.negated(), hagrid.clone()),
        Sentence::or([hagrid.clone(), dumbledore.clone()])?,
        Sentence::not(Sentence::and([hagrid, dumbledore.clone()])?),
        dumbledore,
    ])?;

    Ok((knowledge, rain))
}
