use slog::{Discard, Logger};

use crate::features::{AddressedValueGenerator, FeatureGenerator};
use crate::models::LinearModel;
use crate::preprocessing::TransitionNumberer;
use crate::syntax::parser::Guide;
use crate::syntax::transition::{Configuration, Transition};

/// A guide that scores transitions with a linear model over hashed features.
///
/// Feature indices lie in `[1, max_features]`; the model must have been
/// trained with the same templates and the same `max_features`.
pub struct HashingGuide<M, G = AddressedValueGenerator> {
    model: M,
    generator: G,
    numberer: TransitionNumberer,
    max_features: usize,
    logger: Logger,
}

impl<M: LinearModel, G: FeatureGenerator> HashingGuide<M, G> {
    pub fn new(model: M, generator: G, numberer: TransitionNumberer, max_features: usize) -> Self {
        assert!(max_features > 0, "the feature space must not be empty");
        HashingGuide {
            model: model,
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

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn numberer(&self) -> &TransitionNumberer {
        &self.numberer
    }

    pub fn max_features(&self) -> usize {
        self.max_features
    }
}

impl<M: LinearModel, G: FeatureGenerator> Guide for HashingGuide<M, G> {
    /// The possible transition with the highest decision value. On ties the
    /// label that comes first in the model wins.
    fn best_transition(&self, c: &Configuration) -> Transition {
        let x = self.generator.vectorize(c, self.max_features);
        let values = self.model.decision_values(&x);
        debug_assert_eq!(values.len(), self.model.labels().len());

        let mut best: Option<(&Transition, f64)> = None;
        for (&label, &value) in self.model.labels().iter().zip(values.iter()) {
            if value.is_nan() {
                continue;
            }
            if let Some((_, best_value)) = best {
                if !(value > best_value) {
                    continue;
                }
            }

            let transition = match self.numberer.value(label) {
                Some(transition) => transition,
                None => {
                    debug!(self.logger, "model label {} has no transition", label);
                    continue;
                }
            };
            if !transition.is_possible(c) {
                continue;
            }

            best = Some((transition, value));
        }

        match best {
            Some((transition, _)) => transition.clone(),
            None => {
                warn!(
                    self.logger,
                    "no possible transition among {} model labels, falling back to SHIFT",
                    values.len()
                );
                Transition::Shift
            }
        }
    }
}
