use std::collections::HashMap;
use std::hash::Hash;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::syntax::transition::Transition;

pub type TransitionNumberer = Numberer<Transition>;

/// Assigns consecutive numbers, starting at 0, to values in the order in which
/// they are first added.
#[derive(Debug, Clone)]
pub struct Numberer<T: Eq + Hash> {
    t2i: HashMap<T, u32>,
    i2t: Vec<T>,
}

impl<T: Clone + Eq + Hash> Numberer<T> {
    pub fn new() -> Self {
        Numberer {
            t2i: HashMap::new(),
            i2t: vec![],
        }
    }

    /// Returns the number of `value`, adding it if it is unknown.
    pub fn add(&mut self, value: T) -> u32 {
        if let Some(&id) = self.t2i.get(&value) {
            return id;
        }
        let id = self.i2t.len() as u32;
        self.i2t.push(value.clone());
        self.t2i.insert(value, id);
        id
    }

    pub fn number(&self, value: &T) -> Option<u32> {
        self.t2i.get(value).cloned()
    }

    pub fn value(&self, id: u32) -> Option<&T> {
        self.i2t.get(id as usize)
    }

    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.i2t.is_empty()
    }

    pub fn values(&self) -> &[T] {
        &self.i2t
    }
}

impl<T: Clone + Eq + Hash> Default for Numberer<T> {
    fn default() -> Self {
        Numberer::new()
    }
}

impl<T: Clone + Eq + Hash> PartialEq for Numberer<T> {
    fn eq(&self, other: &Self) -> bool {
        self.i2t == other.i2t
    }
}

impl<T: Eq + Hash + Serialize> Serialize for Numberer<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.i2t.serialize(serializer)
    }
}

impl<'de, T: Clone + Eq + Hash + Deserialize<'de>> Deserialize<'de> for Numberer<T> {
    fn deserialize<D>(deserializer: D) -> Result<Numberer<T>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let values = Vec::<T>::deserialize(deserializer)?;
        let mut numberer = Numberer::new();
        for value in values {
            if numberer.number(&value).is_some() {
                return Err(de::Error::custom("duplicate value in numberer"));
            }
            numberer.add(value);
        }
        Ok(numberer)
    }
}
