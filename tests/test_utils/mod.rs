#![allow(dead_code)]

pub mod mock {
    use transdep::lang::{Features, Sentence, Token};
    use transdep::lang::prelude::*;

    /// "John saw Mary ." with a projective gold tree.
    pub fn john_saw_mary() -> Vec<Token<'static>> {
        vec![
            Token::tagged(1, "John", "NNP").with_head(2, "nsubj"),
            Token::tagged(2, "saw", "VBD").with_head(0, "root"),
            Token::tagged(3, "Mary", "NNP").with_head(2, "obj"),
            Token::tagged(4, ".", ".").with_head(2, "punct"),
        ]
    }

    pub fn a_b_c() -> Vec<Token<'static>> {
        vec![
            Token::tagged(1, "A", "X").with_head(2, "nsubj"),
            Token::tagged(2, "B", "Y").with_head(0, "root"),
            Token::tagged(3, "C", "Z").with_head(2, "obj"),
        ]
    }

    /// Arcs (1, 3) and (2, 4) cross.
    pub fn non_projective() -> Vec<Token<'static>> {
        vec![
            Token::tagged(1, "a", "A").with_head(0, "root"),
            Token::tagged(2, "b", "B").with_head(4, "dep"),
            Token::tagged(3, "c", "C").with_head(1, "dep"),
            Token::tagged(4, "d", "D").with_head(1, "dep"),
        ]
    }

    pub fn with_morphology() -> Vec<Token<'static>> {
        let features = |s: &str| s.parse::<Features>().unwrap();
        vec![
            Token::tagged(1, "Hunde", "NN")
                .with_features(features("case=nom|number=pl"))
                .with_head(2, "nsubj"),
            Token::tagged(2, "bellen", "VVFIN")
                .with_features(features("number=pl"))
                .with_head(0, "root"),
        ]
    }

    pub fn untagged(n: usize) -> Vec<Token<'static>> {
        (1..=n)
            .map(|i| Token::new(i, format!("w{}", i), None, None, None, None, None))
            .collect()
    }

    pub const CONLL_TEXT: &'static str = "# sent_id = 1
1\tJohn\tjohn\tPROPN\tNNP\t_\t2\tnsubj\t_\t_
2\tsaw\tsee\tVERB\tVBD\tTense=Past\t0\troot\t_\t_
3\tMary\tmary\tPROPN\tNNP\t_\t2\tobj\t_\t_
4\t.\t.\tPUNCT\t.\t_\t2\tpunct\t_\t_

1\tDogs\tdog\tNOUN\tNNS\tNumber=Plur\t2\tnsubj\t_\t_
2\tbark\tbark\tVERB\tVBP\t_\t0\troot\t_\t_
";

    pub fn provide_conll_tokens() -> Vec<Sentence<Token<'static>>> {
        vec![
            Sentence::from_tokens(john_saw_mary()),
            Sentence::from_tokens(a_b_c()),
            Sentence::from_tokens(with_morphology()),
        ]
    }
}
