use std::{
    fmt::Debug,
    hash::{DefaultHasher, Hash, Hasher},
};

use derive_more::derive::Display;
use enum_as_inner::EnumAsInner;
use indexmap::IndexSet;
use itertools::Itertools;
use strum::EnumIter;
use termtree::Tree;

use crate::error::InvalidSentence;

/// An atomic proposition, identified by its name.
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidSentence> {
        let name = name.into();

        if name.is_empty() {
            return Err(InvalidSentence::EmptySymbolName);
        }

        Ok(Symbol(name))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, EnumIter)]
pub enum Connective {
    #[strum(to_string = "¬")]
    Negation,
    #[strum(to_string = "∧")]
    Conjunction,
    #[strum(to_string = "∨")]
    Disjunction,
    #[strum(to_string = "=>")]
    Implication,
    #[strum(to_string = "<=>")]
    Biconditional,
}

/// A non-empty, ordered list of conjuncts.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Conjunction(Vec<Sentence>);

impl Conjunction {
    pub fn new(conjuncts: impl IntoIterator<Item = Sentence>) -> Result<Self, InvalidSentence> {
        let conjuncts = conjuncts.into_iter().collect::<Vec<_>>();

        if conjuncts.is_empty() {
            return Err(InvalidSentence::EmptyConjunction);
        }

        Ok(Conjunction(conjuncts))
    }

    pub fn from_first(first: Sentence, rest: impl IntoIterator<Item = Sentence>) -> Self {
        Conjunction(std::iter::once(first).chain(rest).collect())
    }

    pub fn add(&mut self, conjunct: Sentence) {
        self.0.push(conjunct);
    }

    pub fn conjuncts(&self) -> &[Sentence] {
        &self.0
    }
}

/// A non-empty, ordered list of disjuncts.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Disjunction(Vec<Sentence>);

impl Disjunction {
    pub fn new(disjuncts: impl IntoIterator<Item = Sentence>) -> Result<Self, InvalidSentence> {
        let disjuncts = disjuncts.into_iter().collect::<Vec<_>>();

        if disjuncts.is_empty() {
            return Err(InvalidSentence::EmptyDisjunction);
        }

        Ok(Disjunction(disjuncts))
    }

    pub fn from_first(first: Sentence, rest: impl IntoIterator<Item = Sentence>) -> Self {
        Disjunction(std::iter::once(first).chain(rest).collect())
    }

    pub fn disjuncts(&self) -> &[Sentence] {
        &self.0
    }
}

#[derive(Clone, EnumAsInner)]
pub enum Sentence {
    Atomic(Symbol),
    Negation(Box<Sentence>),
    Conjunction(Conjunction),
    Disjunction(Disjunction),
    Implication(Box<Sentence>, Box<Sentence>),
    Biconditional(Box<Sentence>, Box<Sentence>),
}

impl From<Symbol> for Sentence {
    fn from(symbol: Symbol) -> Self {
        Sentence::Atomic(symbol)
    }
}

impl From<Conjunction> for Sentence {
    fn from(conjunction: Conjunction) -> Self {
        Sentence::Conjunction(conjunction)
    }
}

impl From<Disjunction> for Sentence {
    fn from(disjunction: Disjunction) -> Self {
        Sentence::Disjunction(disjunction)
    }
}

impl Sentence {
    pub fn symbol(name: impl Into<String>) -> Result<Self, InvalidSentence> {
        Symbol::new(name).map(Sentence::Atomic)
    }

    pub fn not(operand: Sentence) -> Self {
        Sentence::Negation(Box::new(operand))
    }

    pub fn and(conjuncts: impl IntoIterator<Item = Sentence>) -> Result<Self, InvalidSentence> {
        Conjunction::new(conjuncts).map(Sentence::Conjunction)
    }

    pub fn or(disjuncts: impl IntoIterator<Item = Sentence>) -> Result<Self, InvalidSentence> {
        Disjunction::new(disjuncts).map(Sentence::Disjunction)
    }

    pub fn implies(antecedent: Sentence, consequent: Sentence) -> Self {
        Sentence::Implication(Box::new(antecedent), Box::new(consequent))
    }

    pub fn iff(left: Sentence, right: Sentence) -> Self {
        Sentence::Biconditional(Box::new(left), Box::new(right))
    }

    pub fn negated(&self) -> Self {
        Sentence::not(self.clone())
    }

    pub fn connective(&self) -> Option<Connective> {
        match self {
            Sentence::Atomic(_) => None,
            Sentence::Negation(_) => Some(Connective::Negation),
            Sentence::Conjunction(_) => Some(Connective::Conjunction),
            Sentence::Disjunction(_) => Some(Connective::Disjunction),
            Sentence::Implication(_, _) => Some(Connective::Implication),
            Sentence::Biconditional(_, _) => Some(Connective::Biconditional),
        }
    }

    /// Every distinct symbol in the sentence, in order of first appearance.
    pub fn symbols(&self) -> IndexSet<Symbol> {
        let mut symbols = IndexSet::new();
        self.collect_symbols(&mut symbols);

        symbols
    }

    fn collect_symbols(&self, symbols: &mut IndexSet<Symbol>) {
        match self {
            Sentence::Atomic(symbol) => {
                symbols.insert(symbol.clone());
            }
            Sentence::Negation(operand) => operand.collect_symbols(symbols),
            Sentence::Conjunction(Conjunction(sentences))
            | Sentence::Disjunction(Disjunction(sentences)) => {
                for sentence in sentences {
                    sentence.collect_symbols(symbols);
                }
            }
            Sentence::Implication(left, right) | Sentence::Biconditional(left, right) => {
                left.collect_symbols(symbols);
                right.collect_symbols(symbols);
            }
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        match self {
            Sentence::Atomic(symbol) => Tree::new(symbol.to_string()),
            Sentence::Negation(operand) => {
                Tree::new(Connective::Negation.to_string()).with_leaves([operand.get_tree()])
            }
            Sentence::Conjunction(Conjunction(sentences))
            | Sentence::Disjunction(Disjunction(sentences)) => {
                Tree::new(self.connective_glyph())
                    .with_leaves(sentences.iter().map(|sentence| sentence.get_tree()))
            }
            Sentence::Implication(left, right) | Sentence::Biconditional(left, right) => {
                Tree::new(self.connective_glyph())
                    .with_leaves([left.get_tree(), right.get_tree()])
            }
        }
    }

    fn connective_glyph(&self) -> String {
        self.connective()
            .map(|connective| connective.to_string())
            .unwrap_or_default()
    }
}

fn hash_of(sentence: &Sentence) -> u64 {
    let mut hasher = DefaultHasher::new();
    sentence.hash(&mut hasher);

    hasher.finish()
}

impl PartialEq for Sentence {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Sentence::Atomic(a), Sentence::Atomic(b)) => a == b,
            (Sentence::Negation(a), Sentence::Negation(b)) => a == b,
            (Sentence::Conjunction(a), Sentence::Conjunction(b)) => a == b,
            (Sentence::Disjunction(a), Sentence::Disjunction(b)) => a == b,
            (Sentence::Implication(a1, c1), Sentence::Implication(a2, c2)) => a1 == a2 && c1 == c2,
            // Biconditionals are equal regardless of side order.
            (Sentence::Biconditional(l1, r1), Sentence::Biconditional(l2, r2)) => {
                (l1 == l2 && r1 == r2) || (l1 == r2 && r1 == l2)
            }
            _ => false,
        }
    }
}

impl Eq for Sentence {}

impl Hash for Sentence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);

        match self {
            Sentence::Atomic(symbol) => symbol.hash(state),
            Sentence::Negation(operand) => operand.hash(state),
            Sentence::Conjunction(conjunction) => conjunction.hash(state),
            Sentence::Disjunction(disjunction) => disjunction.hash(state),
            Sentence::Implication(antecedent, consequent) => {
                antecedent.hash(state);
                consequent.hash(state);
            }
            Sentence::Biconditional(left, right) => {
                let (left, right) = (hash_of(left), hash_of(right));
                left.min(right).hash(state);
                left.max(right).hash(state);
            }
        }
    }
}

impl Debug for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentence::Atomic(symbol) => write!(f, "{symbol}"),
            Sentence::Negation(operand) => write!(f, "Not({operand:?})"),
            Sentence::Conjunction(Conjunction(conjuncts)) => {
                write!(f, "And({})", conjuncts.iter().map(|c| format!("{c:?}")).join(", "))
            }
            Sentence::Disjunction(Disjunction(disjuncts)) => {
                write!(f, "Or({})", disjuncts.iter().map(|d| format!("{d:?}")).join(", "))
            }
            Sentence::Implication(antecedent, consequent) => {
                write!(f, "Implication({antecedent:?}, {consequent:?})")
            }
            Sentence::Biconditional(left, right) => {
                write!(f, "Biconditional({left:?}, {right:?})")
            }
        }
    }
}

impl Debug for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}

impl Debug for Disjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(&self.0).finish()
    }
}
