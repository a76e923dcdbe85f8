pub use self::parser::{GreedyParser, Guide, Parser};

pub mod parser;
pub mod transition;
