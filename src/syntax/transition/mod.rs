use std::collections::hash_map;
use std::collections::HashMap;
use std::convert::TryFrom;
use std::error;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

use crate::lang::Tokenized;

pub use self::arc_standard::*;
pub use self::state::*;

mod arc_standard;
pub mod prelude;
mod state;

pub type Index = u32;

static SHIFT: &'static str = "SHIFT";
static LEFT_ARC: &'static str = "LEFT_ARC";
static RIGHT_ARC: &'static str = "RIGHT_ARC";

/// A labeled arc `head -relation-> dependent`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Dependency {
    pub head: Index,
    pub relation: String,
    pub dependent: Index,
}

impl Dependency {
    pub fn new<S: Into<String>>(head: Index, relation: S, dependent: Index) -> Self {
        Dependency {
            head: head,
            relation: relation.into(),
            dependent: dependent,
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {}, {})", self.head, self.relation, self.dependent)
    }
}

/// Dependencies keyed by their dependent; a token has at most one head.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencySet {
    arcs: HashMap<Index, Dependency>,
}

impl DependencySet {
    pub fn new() -> Self {
        DependencySet { arcs: HashMap::new() }
    }

    /// Reads the gold tree from the head and relation fields of a sentence
    /// (root excluded, the first token has position 1).
    pub fn from_tokens<T: Tokenized>(tokens: &[T]) -> Result<Self, Error> {
        let mut dependencies = DependencySet::new();
        for (i, token) in tokens.iter().enumerate() {
            let dependent = (i + 1) as Index;
            match (token.head(), token.deprel()) {
                (Some(head), Some(relation)) => {
                    let head = Index::try_from(head).map_err(|_| Error::HeadOutOfRange {
                        dependent: dependent,
                        head: head,
                    })?;
                    dependencies.insert(Dependency::new(head, relation, dependent));
                }
                _ => return Err(Error::IncompleteToken(dependent)),
            }
        }
        Ok(dependencies)
    }

    /// Adds a dependency, returning the one it replaced for the same dependent.
    pub fn insert(&mut self, dependency: Dependency) -> Option<Dependency> {
        self.arcs.insert(dependency.dependent, dependency)
    }

    pub fn get(&self, dependent: Index) -> Option<&Dependency> {
        self.arcs.get(&dependent)
    }

    pub fn contains(&self, dependency: &Dependency) -> bool {
        self.arcs.get(&dependency.dependent) == Some(dependency)
    }

    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    pub fn iter(&self) -> hash_map::Values<'_, Index, Dependency> {
        self.arcs.values()
    }

    /// Dependencies ordered by dependent.
    pub fn to_sorted_vec(&self) -> Vec<Dependency> {
        let mut dependencies = self.arcs.values().cloned().collect::<Vec<_>>();
        dependencies.sort_by_key(|d| d.dependent);
        dependencies
    }
}

impl FromIterator<Dependency> for DependencySet {
    fn from_iter<I: IntoIterator<Item = Dependency>>(iter: I) -> Self {
        let mut dependencies = DependencySet::new();
        for dependency in iter {
            dependencies.insert(dependency);
        }
        dependencies
    }
}

/// The transitions of the arc-standard system.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    Shift,
    LeftArc(String),
    RightArc(String),
}

impl Transition {
    pub fn relation(&self) -> Option<&str> {
        match *self {
            Transition::Shift => None,
            Transition::LeftArc(ref relation) | Transition::RightArc(ref relation) => {
                Some(relation.as_str())
            }
        }
    }

    /// Legality only depends on the shape of the stack and the buffer, never
    /// on the relation.
    pub fn is_possible(&self, c: &Configuration) -> bool {
        match *self {
            Transition::Shift => ArcStandard::is_allowed_shift(c),
            Transition::LeftArc(_) => ArcStandard::is_allowed_left_arc(c),
            Transition::RightArc(_) => ArcStandard::is_allowed_right_arc(c),
        }
    }

    /// Applies the transition.
    ///
    /// # Panics
    ///
    /// Panics if the transition is not possible in `c`.
    pub fn apply(&self, c: &mut Configuration) {
        assert!(
            self.is_possible(c),
            "transition `{}` is not possible in configuration {:?}",
            self,
            c
        );
        match *self {
            Transition::Shift => ArcStandard::apply_shift(c),
            Transition::LeftArc(ref relation) => ArcStandard::apply_left_arc(c, relation),
            Transition::RightArc(ref relation) => ArcStandard::apply_right_arc(c, relation),
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Transition::Shift => f.write_str(SHIFT),
            Transition::LeftArc(ref relation) => write!(f, "{} {}", LEFT_ARC, relation),
            Transition::RightArc(ref relation) => write!(f, "{} {}", RIGHT_ARC, relation),
        }
    }
}

impl FromStr for Transition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::EmptyTransition);
        }

        let mut parts = s.splitn(2, ' ');
        let action = parts.next().unwrap_or("");
        let relation = parts.next();
        if action == SHIFT {
            Ok(Transition::Shift)
        } else if action == LEFT_ARC {
            relation
                .map(|r| Transition::LeftArc(r.to_string()))
                .ok_or(Error::MissingRelation(LEFT_ARC))
        } else if action == RIGHT_ARC {
            relation
                .map(|r| Transition::RightArc(r.to_string()))
                .ok_or(Error::MissingRelation(RIGHT_ARC))
        } else {
            Err(Error::UnknownTransition(action.to_string()))
        }
    }
}

mod serialize {
    use serde::de::{self, Deserializer};
    use serde::ser::Serializer;
    use serde::{Deserialize, Serialize};

    use super::Transition;

    impl Serialize for Transition {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.collect_str(self)
        }
    }

    impl<'de> Deserialize<'de> for Transition {
        fn deserialize<D>(deserializer: D) -> Result<Transition, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            s.parse::<Transition>().map_err(de::Error::custom)
        }
    }
}

pub trait TransitionSystem {
    fn is_terminal(&self, c: &Configuration) -> bool;

    fn possible_transitions(&self, c: &Configuration) -> Vec<Transition>;

    fn serialize_transition(&self, transition: &Transition) -> String {
        transition.to_string()
    }

    fn deserialize_transition(&self, s: &str) -> Result<Transition, Error> {
        s.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    EmptySentence,
    EmptyTransition,
    UnknownTransition(String),
    MissingRelation(&'static str),
    IncompleteToken(Index),
    HeadOutOfRange { dependent: Index, head: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::EmptySentence => write!(f, "cannot parse an empty sentence"),
            Error::EmptyTransition => write!(f, "empty transition"),
            Error::UnknownTransition(ref action) => write!(f, "unknown transition: {}", action),
            Error::MissingRelation(action) => {
                write!(f, "{} transition requires a relation argument", action)
            }
            Error::IncompleteToken(token) => {
                write!(f, "token {} has no head or dependency relation", token)
            }
            Error::HeadOutOfRange { dependent, head } => {
                write!(f, "head {} of token {} is out of range", head, dependent)
            }
        }
    }
}

impl error::Error for Error {}
