use crate::features::FeatureNode;

pub use self::hashing::*;

mod hashing;

/// A trained multi-class linear model.
pub trait LinearModel {
    /// Label numbers in the order of the decision values.
    fn labels(&self) -> &[u32];

    /// One decision value per label, in the order of `labels`.
    fn decision_values(&self, features: &[FeatureNode]) -> Vec<f64>;
}
