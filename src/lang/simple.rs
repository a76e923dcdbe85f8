use std::borrow::Cow;
use std::ops::Deref;

use crate::lang::{Features, Phrasal, Tokenized};

#[derive(Clone, Debug, PartialEq)]
pub struct Token<'a> {
    id: usize,
    form: Cow<'a, str>,
    lemma: Option<Cow<'a, str>>,
    cpostag: Option<Cow<'a, str>>,
    postag: Option<Cow<'a, str>>,
    features: Option<Features>,
    head: Option<usize>,
    deprel: Option<Cow<'a, str>>,
}

impl<'a> Token<'a> {
    pub fn new<S: Into<Cow<'a, str>>>(
        id: usize,
        form: S,
        lemma: Option<S>,
        postag: Option<S>,
        features: Option<Features>,
        head: Option<usize>,
        deprel: Option<S>,
    ) -> Self {
        Token {
            id: id,
            form: form.into(),
            lemma: lemma.map(|s| s.into()),
            cpostag: None,
            postag: postag.map(|s| s.into()),
            features: features,
            head: head,
            deprel: deprel.map(|s| s.into()),
        }
    }

    /// A token carrying only a form and a tag.
    pub fn tagged<S: Into<Cow<'a, str>>>(id: usize, form: S, postag: S) -> Self {
        Token::new(id, form, None, Some(postag), None, None, None)
    }

    /// Sets the coarse-grained tag kept next to the fine-grained `postag`.
    pub fn with_cpostag<S: Into<Cow<'a, str>>>(mut self, cpostag: S) -> Self {
        self.cpostag = Some(cpostag.into());
        self
    }

    pub fn with_features(mut self, features: Features) -> Self {
        self.features = Some(features);
        self
    }

    pub fn with_head<S: Into<Cow<'a, str>>>(mut self, head: usize, deprel: S) -> Self {
        self.head = Some(head);
        self.deprel = Some(deprel.into());
        self
    }
}

impl<'a> Tokenized for Token<'a> {
    fn id(&self) -> usize {
        self.id
    }

    fn form(&self) -> &str {
        &self.form
    }

    fn lemma(&self) -> Option<&str> {
        self.lemma.as_ref().map(|x| x.deref())
    }

    fn cpostag(&self) -> Option<&str> {
        self.cpostag.as_ref().map(|x| x.deref())
    }

    fn postag(&self) -> Option<&str> {
        self.postag.as_ref().map(|x| x.deref())
    }

    fn features(&self) -> Option<&Features> {
        self.features.as_ref()
    }

    fn head(&self) -> Option<usize> {
        self.head
    }

    fn deprel(&self) -> Option<&str> {
        self.deprel.as_ref().map(|x| x.deref())
    }
}

/// A sentence without the root token; token ids start at 1.
#[derive(Clone, Debug)]
pub struct Sentence<T: Tokenized> {
    raw: String,
    tokens: Vec<T>,
}

impl<T: Tokenized> Phrasal for Sentence<T> {
    type Token = T;

    fn from_tokens(tokens: Vec<T>) -> Self {
        Sentence {
            raw: tokens
                .iter()
                .map(|t| t.form().to_string())
                .collect::<Vec<String>>()
                .join(" "),
            tokens: tokens,
        }
    }

    fn raw(&self) -> &str {
        &self.raw
    }

    fn token(&self, index: usize) -> Option<&Self::Token> {
        self.tokens.get(index)
    }

    fn tokens(&self) -> &[Self::Token] {
        &self.tokens
    }
}

impl<T: Tokenized> Deref for Sentence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.tokens
    }
}
