use slog::{Discard, Logger};

use crate::lang::Tokenized;
use crate::syntax::transition::{Configuration, DependencySet, Error, Transition,
                                TransitionSystem};

/// Chooses the transition to apply to a configuration.
///
/// Guides are never mutated while parsing, so one guide can serve many
/// parsers running on different threads.
pub trait Guide {
    fn best_transition(&self, c: &Configuration) -> Transition;
}

impl<'a, G: Guide + ?Sized> Guide for &'a G {
    fn best_transition(&self, c: &Configuration) -> Transition {
        (**self).best_transition(c)
    }
}

pub trait Parser {
    fn parse<T: Tokenized>(&self, tokens: &[T]) -> Result<DependencySet, Error>;
}

/// Applies the transition proposed by the guide until the configuration is
/// terminal. There is no backtracking.
pub struct GreedyParser<'a> {
    system: &'a dyn TransitionSystem,
    guide: &'a dyn Guide,
    logger: Logger,
}

impl<'a> GreedyParser<'a> {
    pub fn new(system: &'a dyn TransitionSystem, guide: &'a dyn Guide) -> Self {
        GreedyParser {
            system: system,
            guide: guide,
            logger: Logger::root(Discard, o!()),
        }
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    pub fn parse_configuration(&self, mut c: Configuration) -> DependencySet {
        let mut num_transitions = 0;
        while !self.system.is_terminal(&c) {
            let transition = self.guide.best_transition(&c);
            trace!(
                self.logger,
                "apply `{}`", self.system.serialize_transition(&transition);
                "stack" => c.stack_size(), "buffer" => c.buffer_size()
            );
            transition.apply(&mut c);
            num_transitions += 1;
        }
        debug!(
            self.logger,
            "parsed {} tokens with {} transitions",
            c.num_tokens() - 1,
            num_transitions
        );
        c.into_dependencies()
    }
}

impl<'a> Parser for GreedyParser<'a> {
    fn parse<T: Tokenized>(&self, tokens: &[T]) -> Result<DependencySet, Error> {
        let c = Configuration::new(tokens)?;
        Ok(self.parse_configuration(c))
    }
}
