use std::fmt::Display;

use enum_as_inner::EnumAsInner;
use termtree::Tree;

/// Sink for the reasoning steps of a check.
///
/// Steps and descriptions are passed as closures so that a discarding sink
/// never pays for formatting them.
pub trait Explain {
    fn step<S: Into<String>>(&mut self, step: impl FnOnce() -> S);

    fn with_subexplanation<S: Into<String>, T>(
        &mut self,
        description: impl FnOnce() -> S,
        function: impl FnOnce(&mut Self) -> T,
    ) -> T;
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, EnumAsInner)]
enum ExplanationComponent {
    Step(String),
    Explanation(Explanation),
}

#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Explanation {
    description: String,
    components: Vec<ExplanationComponent>,
}

impl Explanation {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            components: Vec::new(),
        }
    }

    pub fn subexplanation(&mut self, description: impl Into<String>) -> &mut Self {
        self.components
            .push(ExplanationComponent::Explanation(Explanation::new(
                description,
            )));

        match self.components.last_mut() {
            Some(ExplanationComponent::Explanation(explanation)) => explanation,
            _ => unreachable!("a subexplanation was just pushed"),
        }
    }

    pub fn get_tree(&self) -> Tree<String> {
        let leaves = self.components.iter().map(|component| match component {
            ExplanationComponent::Step(step) => Tree::new(step.clone()),
            ExplanationComponent::Explanation(explanation) => explanation.get_tree(),
        });

        Tree::new(self.description.clone()).with_leaves(leaves)
    }

    /// Plain steps recorded directly under this explanation, in order.
    pub fn steps(&self) -> impl Iterator<Item = &str> {
        self.components
            .iter()
            .filter_map(|component| component.as_step().map(String::as_str))
    }

    pub fn subexplanations(&self) -> impl Iterator<Item = &Explanation> {
        self.components
            .iter()
            .filter_map(ExplanationComponent::as_explanation)
    }
}

impl Explain for Explanation {
    fn step<S: Into<String>>(&mut self, step: impl FnOnce() -> S) {
        let step = ExplanationComponent::Step(step().into());

        if self.components.last() != Some(&step) {
            self.components.push(step);
        }
    }

    fn with_subexplanation<S: Into<String>, T>(
        &mut self,
        description: impl FnOnce() -> S,
        function: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let explanation = self.subexplanation(description());
        function(explanation)
    }
}

impl Display for Explanation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.get_tree())
    }
}

/// An explanation sink that records nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscardedExplanation;

impl Explain for DiscardedExplanation {
    fn step<S: Into<String>>(&mut self, _step: impl FnOnce() -> S) {}

    fn with_subexplanation<S: Into<String>, T>(
        &mut self,
        _description: impl FnOnce() -> S,
        function: impl FnOnce(&mut Self) -> T,
    ) -> T {
        function(self)
    }
}
