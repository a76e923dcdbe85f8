pub use super::{Configuration, Transition, TransitionSystem};
pub use crate::syntax::parser::Guide;
