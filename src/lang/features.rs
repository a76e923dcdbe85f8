use std::collections::BTreeMap;
use std::fmt;
use std::iter::FromIterator;
use std::str::FromStr;

static FEATURES_DELIMITER: &'static str = "|";
static FEATURE_VALUE_DELIMITER: char = '=';

/// Morphological features of a token, e.g. `case=nom|number=sg`.
///
/// Features are kept in name order, so two maps built from the same pairs
/// always render identically.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Features {
    inner: BTreeMap<String, String>,
}

impl Features {
    pub fn new() -> Self {
        Features { inner: BTreeMap::new() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(|v| v.as_str())
    }

    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for Features {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        Features {
            inner: iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl FromStr for Features {
    type Err = String;

    /// A feature without `=` is stored with an empty value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut features = Features::new();
        for feature in s.split(FEATURES_DELIMITER) {
            if feature.is_empty() {
                return Err(format!("empty feature in `{}`", s));
            }
            let mut parts = feature.splitn(2, FEATURE_VALUE_DELIMITER);
            let name = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            features.insert(name, value);
        }
        Ok(features)
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                f.write_str(FEATURES_DELIMITER)?;
            }
            first = false;
            if value.is_empty() {
                write!(f, "{}", name)?;
            } else {
                write!(f, "{}{}{}", name, FEATURE_VALUE_DELIMITER, value)?;
            }
        }
        Ok(())
    }
}
