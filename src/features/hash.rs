use std::collections::BTreeMap;
use std::hash::Hasher;

use fnv::FnvHasher;

use crate::syntax::transition::Configuration;

use super::{parse_templates, AddressedValue, Layer, ParseError};

const SIGN_BIT: u64 = 0x8000_0000_0000_0000;
const MAGNITUDE_MASK: u64 = 0x7fff_ffff_ffff_ffff;

/// An entry of a sparse feature vector. Indices start at 1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureNode {
    pub index: usize,
    pub value: f64,
}

impl FeatureNode {
    pub fn new(index: usize, value: f64) -> Self {
        FeatureNode {
            index: index,
            value: value,
        }
    }
}

/// Feeds the identity of a resolved template into a hasher: every address
/// component (source tag, index), the layer tag, the feature name of the
/// feature layer and finally the value. Numbers are written as little-endian
/// `u64`s.
///
/// Models are trained on these hashes, so the order and width of the fields
/// must stay as they are.
pub fn hash_feature<H: Hasher>(template: &AddressedValue, value: &str, hasher: &mut H) {
    for component in &template.address {
        hasher.write(&component.source.tag().to_le_bytes());
        hasher.write(&(component.index as u64).to_le_bytes());
    }

    hasher.write(&template.layer.tag().to_le_bytes());
    if let Layer::Feature(ref name) = template.layer {
        hasher.write(name.as_bytes());
    }

    hasher.write(value.as_bytes());
}

/// 64-bit FNV-1a hash of a resolved template. The hash does not depend on
/// the platform.
pub fn feature_hash(template: &AddressedValue, value: &str) -> u64 {
    let mut hasher = FnvHasher::default();
    hash_feature(template, value, &mut hasher);
    hasher.finish()
}

/// Maps a hash into `[1, max_features]`, returning the index and the sign
/// (the top bit of the hash) that the feature value is multiplied with.
///
/// # Panics
///
/// Panics if `max_features` is zero.
pub fn bound_hash(hash: u64, max_features: usize) -> (usize, f64) {
    assert!(max_features > 0, "the feature space must not be empty");
    let sign = if hash & SIGN_BIT == SIGN_BIT { -1.0 } else { 1.0 };
    let index = ((hash & MAGNITUDE_MASK) % max_features as u64) as usize + 1;
    (index, sign)
}

/// Collects feature values, summing values that share an index.
#[derive(Debug, Default)]
pub struct FeatureVectorBuilder {
    values: BTreeMap<usize, f64>,
}

impl FeatureVectorBuilder {
    pub fn new() -> Self {
        FeatureVectorBuilder { values: BTreeMap::new() }
    }

    pub fn add(&mut self, index: usize, value: f64) {
        *self.values.entry(index).or_insert(0.0) += value;
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The vector sorted by index.
    pub fn build(self) -> Vec<FeatureNode> {
        self.values
            .into_iter()
            .map(|(index, value)| FeatureNode::new(index, value))
            .collect()
    }
}

pub trait FeatureGenerator {
    /// Human-readable features, e.g. `[STACK0]TAG=NN`.
    fn generate(&self, c: &Configuration) -> Vec<String>;

    fn generate_hashed(&self, c: &Configuration, max_features: usize, builder: &mut FeatureVectorBuilder);

    fn vectorize(&self, c: &Configuration, max_features: usize) -> Vec<FeatureNode> {
        let mut builder = FeatureVectorBuilder::new();
        self.generate_hashed(c, max_features, &mut builder);
        builder.build()
    }
}

/// Generates one feature for every template that resolves in a configuration.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddressedValueGenerator {
    templates: Vec<AddressedValue>,
}

impl AddressedValueGenerator {
    pub fn new(templates: Vec<AddressedValue>) -> Self {
        AddressedValueGenerator { templates: templates }
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Ok(AddressedValueGenerator::new(parse_templates(input)?))
    }

    pub fn templates(&self) -> &[AddressedValue] {
        &self.templates
    }

    /// Templates paired with their values; unavailable templates are skipped.
    pub fn values<'a>(&'a self, c: &'a Configuration) -> impl Iterator<Item = (&'a AddressedValue, &'a str)> {
        self.templates
            .iter()
            .filter_map(move |template| template.get(c).map(|value| (template, value)))
    }
}

impl FeatureGenerator for AddressedValueGenerator {
    fn generate(&self, c: &Configuration) -> Vec<String> {
        self.values(c)
            .map(|(template, value)| format!("{}={}", template, value))
            .collect()
    }

    fn generate_hashed(&self, c: &Configuration, max_features: usize, builder: &mut FeatureVectorBuilder) {
        for (template, value) in self.values(c) {
            let (index, sign) = bound_hash(feature_hash(template, value), max_features);
            builder.add(index, sign);
        }
    }
}
