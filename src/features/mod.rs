//! Addressing values in a parser configuration.
//!
//! An `AddressedValue` names a token relative to the stack or the buffer,
//! optionally followed by hops to leftmost/rightmost dependents, and the layer
//! of that token to read. Feature templates are written as
//!
//! ```text
//! [STACK0]TAG [BUFFER0,LDEP0]DEPREL
//! ```

use std::fmt;

use crate::syntax::transition::{Configuration, Index};

pub use self::hash::*;
pub use self::parse::{parse_templates, ParseError, ParseErrorKind};

mod hash;
mod parse;

/// Where an address component finds its token. `LDep` and `RDep` address
/// from the leftmost/rightmost dependents of the token found so far.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Source {
    Stack,
    Buffer,
    LDep,
    RDep,
}

impl Source {
    pub fn keyword(&self) -> &'static str {
        match *self {
            Source::Stack => "STACK",
            Source::Buffer => "BUFFER",
            Source::LDep => "LDEP",
            Source::RDep => "RDEP",
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "STACK" => Some(Source::Stack),
            "BUFFER" => Some(Source::Buffer),
            "LDEP" => Some(Source::LDep),
            "RDEP" => Some(Source::RDep),
            _ => None,
        }
    }

    /// Tag that identifies the source in feature hashes.
    pub fn tag(&self) -> u64 {
        match *self {
            Source::Stack => 0,
            Source::Buffer => 1,
            Source::LDep => 2,
            Source::RDep => 3,
        }
    }
}

/// The information of an addressed token that is read.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Token,
    Tag,
    DepRel,
    Feature(String),
}

impl Layer {
    /// Keyword in the template syntax. There is no syntax for features.
    pub fn keyword(&self) -> Option<&'static str> {
        match *self {
            Layer::Token => Some("TOKEN"),
            Layer::Tag => Some("TAG"),
            Layer::DepRel => Some("DEPREL"),
            Layer::Feature(_) => None,
        }
    }

    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "TOKEN" => Some(Layer::Token),
            "TAG" => Some(Layer::Tag),
            "DEPREL" => Some(Layer::DepRel),
            _ => None,
        }
    }

    /// Tag that identifies the layer in feature hashes.
    pub fn tag(&self) -> u64 {
        match *self {
            Layer::Token => 0,
            Layer::Tag => 1,
            Layer::DepRel => 2,
            Layer::Feature(_) => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressComponent {
    pub source: Source,
    pub index: u32,
}

impl AddressComponent {
    pub fn new(source: Source, index: u32) -> Self {
        AddressComponent {
            source: source,
            index: index,
        }
    }
}

impl fmt::Display for AddressComponent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.source.keyword(), self.index)
    }
}

/// A template that reads a layer of an addressed token.
///
/// To get the tag of the leftmost dependent of the token on top of the stack:
///
/// ```
/// use transdep::features::{AddressComponent, AddressedValue, Layer, Source};
///
/// let template = AddressedValue::new(
///     vec![
///         AddressComponent::new(Source::Stack, 0),
///         AddressComponent::new(Source::LDep, 0),
///     ],
///     Layer::Tag,
/// );
/// assert_eq!(template.to_string(), "[STACK0,LDEP0]TAG");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddressedValue {
    pub address: Vec<AddressComponent>,
    pub layer: Layer,
}

impl AddressedValue {
    pub fn new(address: Vec<AddressComponent>, layer: Layer) -> Self {
        AddressedValue {
            address: address,
            layer: layer,
        }
    }

    /// Resolves the address and reads the layer. Returns `None` when the
    /// address points to a token that does not exist (yet) or the token has
    /// no value in the layer.
    ///
    /// # Panics
    ///
    /// Panics if the address is empty, starts with a dependent hop, or has a
    /// stack/buffer component after the first position.
    pub fn get<'a>(&self, c: &'a Configuration) -> Option<&'a str> {
        let token = self.resolve(c)?;
        match self.layer {
            Layer::Token => c.form(token),
            Layer::Tag => c.tag(token),
            Layer::DepRel => c.head(token).map(|d| d.relation.as_str()),
            Layer::Feature(ref name) => c.features(token).and_then(|f| f.get(name)),
        }
    }

    /// The token the address points to.
    pub fn resolve(&self, c: &Configuration) -> Option<Index> {
        assert!(!self.address.is_empty(), "empty address");

        let mut token = None;
        for (idx, component) in self.address.iter().enumerate() {
            let position = component.index as usize;
            token = match component.source {
                Source::Stack | Source::Buffer if idx != 0 => {
                    panic!(
                        "{} can only be the initial address component",
                        component.source.keyword()
                    );
                }
                Source::Stack => c.stack(position),
                Source::Buffer => c.buffer(position),
                Source::LDep | Source::RDep if idx == 0 => {
                    panic!(
                        "{} cannot be an initial address component",
                        component.source.keyword()
                    );
                }
                Source::LDep => token.and_then(|t| c.leftmost_dependent(t, position)),
                Source::RDep => token.and_then(|t| c.rightmost_dependent(t, position)),
            };

            // Not addressable
            if token.is_none() {
                return None;
            }
        }

        token
    }
}

impl fmt::Display for AddressedValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("[")?;
        for (idx, component) in self.address.iter().enumerate() {
            if idx != 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", component)?;
        }
        f.write_str("]")?;
        match self.layer {
            Layer::Feature(ref name) => write!(f, "FEATURE({})", name),
            ref layer => f.write_str(layer.keyword().unwrap_or("")),
        }
    }
}
