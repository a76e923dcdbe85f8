pub use self::features::Features;
pub use self::simple::*;

mod features;
pub mod prelude;
mod simple;

/// Form and tag of the artificial root token that precedes every sentence.
pub static ROOT_FORM: &'static str = "<ROOT>";
pub static ROOT_TAG: &'static str = "ROOT";

pub trait Tokenized {
    fn id(&self) -> usize;
    fn form(&self) -> &str;
    fn lemma(&self) -> Option<&str>;
    /// Coarse-grained part-of-speech tag.
    fn cpostag(&self) -> Option<&str>;
    fn postag(&self) -> Option<&str>;
    fn features(&self) -> Option<&Features>;
    fn head(&self) -> Option<usize>;
    fn deprel(&self) -> Option<&str>;
}

pub trait Phrasal {
    type Token: Tokenized;

    fn from_tokens(tokens: Vec<Self::Token>) -> Self;
    fn raw(&self) -> &str;

    fn token(&self, index: usize) -> Option<&Self::Token>;

    fn tokens(&self) -> &[Self::Token];

    fn len(&self) -> usize {
        self.tokens().len()
    }
}
