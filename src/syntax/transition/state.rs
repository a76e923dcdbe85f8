use std::collections::VecDeque;

use crate::lang::{Features, Tokenized, ROOT_FORM, ROOT_TAG};

use super::{Dependency, DependencySet, Error, Index};

/// Index of the artificial root token.
pub const ROOT: Index = 0;

/// The parser state: the tokens of a sentence, a stack, a buffer and the
/// dependencies that were attached so far.
///
/// Tokens are stored once and addressed by their position; position 0 is the
/// root and the tokens of the sentence occupy `1..=n`. Initially the stack is
/// empty and the buffer holds every position (the root included) in sentence
/// order.
#[derive(Clone, Debug)]
pub struct Configuration {
    forms: Vec<String>,
    tags: Vec<Option<String>>,
    features: Vec<Option<Features>>,
    stack: Vec<Index>,
    buffer: VecDeque<Index>,
    dependencies: DependencySet,
    left_dependents: Vec<Vec<Index>>,
    right_dependents: Vec<Vec<Index>>,
}

impl Configuration {
    pub fn new<T: Tokenized>(tokens: &[T]) -> Result<Self, Error> {
        if tokens.is_empty() {
            return Err(Error::EmptySentence);
        }

        let n = tokens.len() + 1;
        let mut forms = Vec::with_capacity(n);
        let mut tags = Vec::with_capacity(n);
        let mut features = Vec::with_capacity(n);
        forms.push(ROOT_FORM.to_string());
        tags.push(Some(ROOT_TAG.to_string()));
        features.push(None);
        for token in tokens {
            forms.push(token.form().to_string());
            tags.push(token.postag().map(|t| t.to_string()));
            features.push(token.features().cloned());
        }

        Ok(Configuration {
            forms: forms,
            tags: tags,
            features: features,
            stack: Vec::with_capacity(n),
            buffer: (0..n as Index).collect(),
            dependencies: DependencySet::new(),
            left_dependents: vec![vec![]; n],
            right_dependents: vec![vec![]; n],
        })
    }

    /// Number of tokens, including the root.
    pub fn num_tokens(&self) -> usize {
        self.forms.len()
    }

    pub fn form(&self, token: Index) -> Option<&str> {
        self.forms.get(token as usize).map(|f| f.as_str())
    }

    pub fn tag(&self, token: Index) -> Option<&str> {
        self.tags
            .get(token as usize)
            .and_then(|t| t.as_ref().map(|t| t.as_str()))
    }

    pub fn features(&self, token: Index) -> Option<&Features> {
        self.features.get(token as usize).and_then(|f| f.as_ref())
    }

    pub fn stack_top(&self) -> Option<Index> {
        self.stack.last().cloned()
    }

    /// The token at `position` counted from the top of the stack.
    pub fn stack(&self, position: usize) -> Option<Index> {
        let stack_size = self.stack.len();
        if position < stack_size {
            Some(self.stack[stack_size - 1 - position])
        } else {
            None
        }
    }

    pub fn stack_size(&self) -> usize {
        self.stack.len()
    }

    pub fn is_stack_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Stack contents, bottom first.
    pub fn stack_tokens(&self) -> &[Index] {
        &self.stack
    }

    pub fn buffer_head(&self) -> Option<Index> {
        self.buffer.front().cloned()
    }

    /// The token at `position` counted from the front of the buffer.
    pub fn buffer(&self, position: usize) -> Option<Index> {
        self.buffer.get(position).cloned()
    }

    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_buffer_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Buffer contents, front first.
    pub fn buffer_tokens(&self) -> impl Iterator<Item = Index> + '_ {
        self.buffer.iter().cloned()
    }

    /// The dependency that attaches `token` to its head, if one was added.
    pub fn head(&self, token: Index) -> Option<&Dependency> {
        self.dependencies.get(token)
    }

    /// The `k`-th dependent to the left of `token`, counting from the
    /// leftmost one (smallest position).
    pub fn leftmost_dependent(&self, token: Index, k: usize) -> Option<Index> {
        self.left_dependents
            .get(token as usize)
            .and_then(|deps| deps.get(k))
            .cloned()
    }

    /// The `k`-th dependent to the right of `token`, counting from the
    /// rightmost one (largest position).
    pub fn rightmost_dependent(&self, token: Index, k: usize) -> Option<Index> {
        self.right_dependents
            .get(token as usize)
            .and_then(|deps| deps.iter().rev().nth(k))
            .cloned()
    }

    pub fn add_dependency(&mut self, dependency: Dependency) {
        let head = dependency.head as usize;
        let dependent = dependency.dependent;
        assert!(
            head < self.num_tokens() && (dependent as usize) < self.num_tokens(),
            "dependency {} points outside of the sentence",
            dependency
        );
        debug_assert!(
            self.dependencies.get(dependent).is_none(),
            "token {} already has a head",
            dependent
        );

        let dependents = if dependent < dependency.head {
            &mut self.left_dependents[head]
        } else {
            &mut self.right_dependents[head]
        };
        if let Err(pos) = dependents.binary_search(&dependent) {
            dependents.insert(pos, dependent);
        }
        self.dependencies.insert(dependency);
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    pub fn into_dependencies(self) -> DependencySet {
        self.dependencies
    }

    pub(crate) fn push(&mut self, token: Index) {
        self.stack.push(token);
    }

    pub(crate) fn pop(&mut self) -> Option<Index> {
        self.stack.pop()
    }

    pub(crate) fn advance(&mut self) -> Option<Index> {
        self.buffer.pop_front()
    }

    pub(crate) fn replace_buffer_head(&mut self, token: Index) {
        match self.buffer.front_mut() {
            Some(head) => *head = token,
            None => self.buffer.push_front(token),
        }
    }
}

