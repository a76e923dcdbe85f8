pub use super::{Phrasal, Tokenized};
