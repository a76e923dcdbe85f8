use crate::lang::Tokenized;
use crate::syntax::parser::Guide;

use super::{Configuration, Dependency, DependencySet, Error, Index, Transition, TransitionSystem,
            ROOT};

/// Relation carried by the transitions returned from `possible_transitions`.
pub static ARCHETYPE_RELATION: &'static str = "<archetype>";

/// The arc-standard system.
///
/// Unlike the textbook formulation, a right arc does not leave the head on
/// the stack: the head replaces the dependent at the front of the buffer, so
/// that it can collect further right dependents before it is shifted.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArcStandard;

impl ArcStandard {
    pub fn new() -> Self {
        ArcStandard
    }

    /// Shift: (s, i|b, A) => (s|i, b, A)
    pub fn apply_shift(c: &mut Configuration) {
        debug_assert!(ArcStandard::is_allowed_shift(c));
        if let Some(b0) = c.advance() {
            c.push(b0);
        }
    }

    /// Left Arc: (s|i, j|b, A) => (s, j|b, A + (j,l,i))
    pub fn apply_left_arc(c: &mut Configuration, relation: &str) {
        debug_assert!(ArcStandard::is_allowed_left_arc(c));
        if let (Some(s0), Some(b0)) = (c.stack_top(), c.buffer_head()) {
            c.add_dependency(Dependency::new(b0, relation, s0));
            c.pop();
        }
    }

    /// Right Arc: (s|i, j|b, A) => (s, i|b, A + (i,l,j))
    pub fn apply_right_arc(c: &mut Configuration, relation: &str) {
        debug_assert!(ArcStandard::is_allowed_right_arc(c));
        if let (Some(s0), Some(b0)) = (c.stack_top(), c.buffer_head()) {
            c.add_dependency(Dependency::new(s0, relation, b0));
            c.pop();
            c.replace_buffer_head(s0);
        }
    }

    pub fn is_allowed_shift(c: &Configuration) -> bool {
        !c.is_buffer_empty()
    }

    pub fn is_allowed_left_arc(c: &Configuration) -> bool {
        !c.is_buffer_empty() && c.stack_top().map_or(false, |s0| s0 != ROOT)
    }

    pub fn is_allowed_right_arc(c: &Configuration) -> bool {
        !c.is_stack_empty() && !c.is_buffer_empty()
    }
}

impl TransitionSystem for ArcStandard {
    fn is_terminal(&self, c: &Configuration) -> bool {
        c.is_buffer_empty()
    }

    fn possible_transitions(&self, c: &Configuration) -> Vec<Transition> {
        let mut transitions = Vec::with_capacity(3);
        if ArcStandard::is_allowed_shift(c) {
            transitions.push(Transition::Shift);
        }
        if ArcStandard::is_allowed_left_arc(c) {
            transitions.push(Transition::LeftArc(ARCHETYPE_RELATION.to_string()));
        }
        if ArcStandard::is_allowed_right_arc(c) {
            transitions.push(Transition::RightArc(ARCHETYPE_RELATION.to_string()));
        }
        transitions
    }
}

/// Static oracle for the arc-standard system.
///
/// The oracle is only correct along its own trajectory, starting from the
/// initial configuration of the sentence that the gold tree belongs to.
#[derive(Debug, Clone)]
pub struct ArcStandardOracle {
    gold: DependencySet,
}

impl ArcStandardOracle {
    pub fn new(gold: DependencySet) -> Self {
        ArcStandardOracle { gold: gold }
    }

    pub fn from_tokens<T: Tokenized>(tokens: &[T]) -> Result<Self, Error> {
        Ok(ArcStandardOracle::new(DependencySet::from_tokens(tokens)?))
    }

    pub fn gold(&self) -> &DependencySet {
        &self.gold
    }

    fn gold_head(&self, dependent: Index) -> Option<Index> {
        self.gold.get(dependent).map(|d| d.head)
    }

    fn gold_relation(&self, dependent: Index) -> String {
        self.gold
            .get(dependent)
            .map(|d| d.relation.clone())
            .unwrap_or_default()
    }

    /// Whether a token that is still in the buffer is a gold dependent of
    /// `head`.
    fn needed_for_attachment(&self, c: &Configuration, head: Index) -> bool {
        c.buffer_tokens()
            .any(|token| self.gold_head(token) == Some(head))
    }
}

impl Guide for ArcStandardOracle {
    fn best_transition(&self, c: &Configuration) -> Transition {
        if let (Some(s0), Some(b0)) = (c.stack_top(), c.buffer_head()) {
            if ArcStandard::is_allowed_left_arc(c) && self.gold_head(s0) == Some(b0) {
                return Transition::LeftArc(self.gold_relation(s0));
            }

            if ArcStandard::is_allowed_right_arc(c) && self.gold_head(b0) == Some(s0) &&
                !self.needed_for_attachment(c, b0)
            {
                return Transition::RightArc(self.gold_relation(b0));
            }
        }

        Transition::Shift
    }
}

/// The configuration reached by following the oracle on a gold sentence,
/// together with the transitions that were taken.
#[derive(Debug)]
pub struct GoldState {
    configuration: Configuration,
    transitions: Vec<Transition>,
}

#[inline]
fn estimate_num_transitions(num_tokens: usize) -> usize {
    2 * num_tokens + 1
}

impl GoldState {
    pub fn new<T: Tokenized>(tokens: &[T]) -> Result<Self, Error> {
        GoldState::with_feature_extract(tokens, |_, _| ()).map(|(state, _)| state)
    }

    /// Follows the oracle and calls `extract` on every configuration before a
    /// transition is applied to it.
    pub fn with_feature_extract<T, FO, F>(tokens: &[T], mut extract: F) -> Result<(Self, Vec<FO>), Error>
    where
        T: Tokenized,
        F: FnMut(&Configuration, &Transition) -> FO,
    {
        let system = ArcStandard::new();
        let oracle = ArcStandardOracle::from_tokens(tokens)?;
        let mut configuration = Configuration::new(tokens)?;
        let capacity = estimate_num_transitions(tokens.len());
        let mut transitions = Vec::with_capacity(capacity);
        let mut features = Vec::with_capacity(capacity);
        while !system.is_terminal(&configuration) {
            let transition = oracle.best_transition(&configuration);
            features.push(extract(&configuration, &transition));
            transition.apply(&mut configuration);
            transitions.push(transition);
        }
        let state = GoldState {
            configuration: configuration,
            transitions: transitions,
        };
        Ok((state, features))
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn dependencies(&self) -> &DependencySet {
        self.configuration.dependencies()
    }
}
