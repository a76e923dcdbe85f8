//! JSON description of a parser.
//!
//! ```json
//! {
//!     "system": "arc_standard",
//!     "templates": "templates.txt",
//!     "labels": "labels.json",
//!     "hash_kernel_size": 1000000
//! }
//! ```
//!
//! Relative paths are resolved against the directory of the configuration
//! file when it is loaded with `Config::load`.

use std::error;
use std::fmt;
use std::fs::File;
use std::io as std_io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json;

use crate::features::{AddressedValueGenerator, ParseError};
use crate::io;
use crate::preprocessing::TransitionNumberer;
use crate::syntax::transition::{ArcStandard, TransitionSystem};

pub static ARC_STANDARD: &'static str = "arc_standard";

#[derive(Debug)]
pub enum Error {
    Io(std_io::Error),
    Json(serde_json::Error),
    Template(ParseError),
    UnknownSystem(String),
    EmptyKernel,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::Io(ref e) => write!(f, "{}", e),
            Error::Json(ref e) => write!(f, "malformed configuration: {}", e),
            Error::Template(ref e) => write!(f, "malformed feature template: {}", e),
            Error::UnknownSystem(ref name) => write!(f, "unknown transition system `{}`", name),
            Error::EmptyKernel => write!(f, "the hash kernel size must be positive"),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            Error::Json(ref e) => Some(e),
            Error::Template(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<std_io::Error> for Error {
    fn from(e: std_io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Error::Template(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub system: String,
    /// File with the feature templates.
    pub templates: PathBuf,
    /// JSON file with the numbered transitions of the model.
    pub labels: PathBuf,
    /// Number of feature indices; hashed features lie in `[1, hash_kernel_size]`.
    pub hash_kernel_size: usize,
}

impl Config {
    pub fn from_reader<R: std_io::Read>(reader: R) -> Result<Self, Error> {
        let config: Config = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let mut config = Config::from_reader(File::open(path)?)?;
        if let Some(dir) = path.parent() {
            config.templates = dir.join(&config.templates);
            config.labels = dir.join(&config.labels);
        }
        Ok(config)
    }

    fn validate(&self) -> Result<(), Error> {
        if self.hash_kernel_size == 0 {
            return Err(Error::EmptyKernel);
        }
        system_by_name(&self.system)?;
        Ok(())
    }

    pub fn system(&self) -> Result<Box<dyn TransitionSystem + Send + Sync>, Error> {
        system_by_name(&self.system)
    }

    pub fn load_generator(&self) -> Result<AddressedValueGenerator, Error> {
        let input = io::read_to_string(&self.templates)?;
        Ok(AddressedValueGenerator::parse(&input)?)
    }

    pub fn load_numberer(&self) -> Result<TransitionNumberer, Error> {
        let file = File::open(&self.labels)?;
        Ok(io::serialize::read(std_io::BufReader::new(file))?)
    }
}

pub fn system_by_name(name: &str) -> Result<Box<dyn TransitionSystem + Send + Sync>, Error> {
    if name == ARC_STANDARD {
        Ok(Box::new(ArcStandard))
    } else {
        Err(Error::UnknownSystem(name.to_string()))
    }
}
