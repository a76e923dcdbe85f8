//! Training data for a linear guide: the oracle is followed over gold
//! sentences and every configuration on its way yields one instance, the
//! hashed features of the configuration labeled with the oracle transition.

use std::error;
use std::fmt;
use std::io as std_io;

use slog::{Discard, Logger};

use crate::features::{FeatureGenerator, FeatureNode};
use crate::lang::Tokenized;
use crate::preprocessing::TransitionNumberer;
use crate::syntax::transition::{self, DependencySet, GoldState, Transition, TransitionSystem};

pub use self::score::*;

mod score;

#[derive(Clone, Debug, PartialEq)]
pub struct Instance {
    pub label: u32,
    pub features: Vec<FeatureNode>,
}

#[derive(Debug)]
pub enum Error {
    Transition(transition::Error),
    /// The oracle does not reconstruct the gold tree, which happens for
    /// non-projective trees.
    Unreachable { expected: usize, found: usize },
    Io(std_io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Transition(ref e) => write!(f, "{}", e),
            Error::Unreachable { expected, found } => write!(
                f,
                "the oracle reconstructs {} of {} gold dependencies",
                found,
                expected
            ),
            Error::Io(ref e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Transition(ref e) => Some(e),
            Error::Unreachable { .. } => None,
            Error::Io(ref e) => Some(e),
        }
    }
}

impl From<transition::Error> for Error {
    fn from(e: transition::Error) -> Self {
        Error::Transition(e)
    }
}

impl From<std_io::Error> for Error {
    fn from(e: std_io::Error) -> Self {
        Error::Io(e)
    }
}

/// Collects instances from gold sentences, numbering transitions as they are
/// encountered.
pub struct InstanceCollector<G> {
    generator: G,
    numberer: TransitionNumberer,
    max_features: usize,
    logger: Logger,
}

impl<G: FeatureGenerator> InstanceCollector<G> {
    pub fn new(generator: G, max_features: usize) -> Self {
        InstanceCollector::with_numberer(generator, max_features, TransitionNumberer::new())
    }

    /// Continues numbering with an existing numberer.
    pub fn with_numberer(generator: G, max_features: usize, numberer: TransitionNumberer) -> Self {
        assert!(max_features > 0, "the feature space must not be empty");
        InstanceCollector {
            generator: generator,
            numberer: numberer,
            max_features: max_features,
            logger: Logger::root(Discard, o!()),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn numberer(&self) -> &TransitionNumberer {
        &self.numberer
    }

    pub fn into_numberer(self) -> TransitionNumberer {
        self.numberer
    }

    /// The instances of one sentence. Sentences whose gold tree the oracle
    /// cannot reconstruct are rejected as a whole.
    pub fn collect<T: Tokenized>(&mut self, tokens: &[T]) -> Result<Vec<Instance>, Error> {
        let generator = &self.generator;
        let max_features = self.max_features;
        let (state, examples) = GoldState::with_feature_extract(tokens, |c, transition| {
            (generator.vectorize(c, max_features), transition.clone())
        })?;

        let gold = DependencySet::from_tokens(tokens)?;
        if state.dependencies() != &gold {
            let found = gold.iter()
                .filter(|d| state.dependencies().contains(d))
                .count();
            warn!(
                self.logger,
                "skipping sentence: the oracle reconstructs {} of {} dependencies",
                found,
                gold.len()
            );
            return Err(Error::Unreachable {
                expected: gold.len(),
                found: found,
            });
        }

        let instances = examples
            .into_iter()
            .map(|(features, transition)| {
                Instance {
                    label: self.numberer.add(transition),
                    features: features,
                }
            })
            .collect::<Vec<_>>();
        debug!(
            self.logger,
            "collected {} instances from {} tokens",
            instances.len(),
            tokens.len()
        );
        Ok(instances)
    }
}

/// Writes an instance as `label index:value ...`; zero values are left out.
pub fn write_instance<W: std_io::Write>(writer: &mut W, instance: &Instance) -> std_io::Result<()> {
    write!(writer, "{}", instance.label)?;
    for node in &instance.features {
        if node.value != 0.0 {
            write!(writer, " {}:{}", node.index, node.value)?;
        }
    }
    writeln!(writer)
}

/// Writes the canonical text form of each transition on its own line.
pub fn write_transitions<W: std_io::Write>(
    writer: &mut W,
    system: &dyn TransitionSystem,
    transitions: &[Transition],
) -> std_io::Result<()> {
    for transition in transitions {
        writeln!(writer, "{}", system.serialize_transition(transition))?;
    }
    Ok(())
}

/// Reads transitions written by `write_transitions`.
pub fn read_transitions<R: std_io::BufRead>(
    reader: R,
    system: &dyn TransitionSystem,
) -> Result<Vec<Transition>, Error> {
    let mut transitions = vec![];
    for line in reader.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.is_empty() {
            continue;
        }
        transitions.push(system.deserialize_transition(line)?);
    }
    Ok(transitions)
}
