//! Logger construction for parsing and training runs.
//!
//! Messages go to a terminal stream and, optionally, to a log file whose name
//! may contain `chrono` date patterns such as `parse-%Y%m%d.log`.

use std::error;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io as std_io;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use chrono::prelude::*;
pub use slog::FilterLevel as Level;
use slog::{Discard, Drain, Duplicate, Fuse, Level as LogLevel, LevelFilter, Logger, OwnedKV,
           SendSyncRefUnwindSafeKV};
use slog_async::Async;
use slog_term::{CompactFormat, Decorator, FullFormat, PlainDecorator, TermDecorator};

#[derive(Debug)]
pub enum Stream {
    StdOut,
    StdErr,
    File(File),
    Null,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Format {
    Full,
    Compact,
}

type BoxedDrain = LevelFilter<Fuse<Async>>;

#[derive(Debug)]
pub struct LoggerBuilder {
    stream: Stream,
    level: Level,
    format: Format,
}

impl LoggerBuilder {
    pub fn new(stream: Stream) -> Self {
        LoggerBuilder {
            stream: stream,
            level: Level::Info,
            format: Format::Full,
        }
    }

    pub fn level(mut self, l: Level) -> Self {
        self.level = l;
        self
    }

    pub fn format(mut self, f: Format) -> Self {
        self.format = f;
        self
    }

    pub fn build<T>(self, values: OwnedKV<T>) -> Result<Logger, Error>
    where
        T: SendSyncRefUnwindSafeKV + 'static,
    {
        let logger = match self.build_drain()? {
            Some(drain) => Logger::root(drain.fuse(), values),
            None => Logger::root(Discard, values),
        };
        Ok(logger)
    }

    /// Builds a logger writing to both streams.
    pub fn build_with<T>(self, other: LoggerBuilder, values: OwnedKV<T>) -> Result<Logger, Error>
    where
        T: SendSyncRefUnwindSafeKV + 'static,
    {
        let logger = match (self.build_drain()?, other.build_drain()?) {
            (Some(d1), Some(d2)) => Logger::root(Duplicate::new(d1, d2).fuse(), values),
            (Some(d), None) | (None, Some(d)) => Logger::root(d.fuse(), values),
            (None, None) => Logger::root(Discard, values),
        };
        Ok(logger)
    }

    fn build_drain(&self) -> Result<Option<BoxedDrain>, Error> {
        let level = match LogLevel::from_usize(self.level.as_usize()) {
            Some(level) => level,
            None => return Ok(None),
        };
        let drain = match self.stream {
            Stream::StdOut => self.wrap(TermDecorator::new().stdout().build(), level),
            Stream::StdErr => self.wrap(TermDecorator::new().stderr().build(), level),
            Stream::File(ref f) => self.wrap(PlainDecorator::new(f.try_clone()?), level),
            Stream::Null => return Ok(None),
        };
        Ok(Some(drain))
    }

    fn wrap<D: Decorator + Send + 'static>(&self, decorator: D, level: LogLevel) -> BoxedDrain {
        let drain = match self.format {
            Format::Compact => {
                let drain = CompactFormat::new(decorator).use_local_timestamp().build();
                Async::new(drain.fuse()).build()
            }
            Format::Full => {
                let drain = FullFormat::new(decorator).use_local_timestamp().build();
                Async::new(drain.fuse()).build()
            }
        };
        LevelFilter::new(drain.fuse(), level)
    }
}

#[derive(Debug)]
pub enum Error {
    InvalidFileMode(char),
    InvalidFilename(String),
    Io(std_io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::InvalidFileMode(mode) => write!(f, "invalid file mode `{}`", mode),
            Error::InvalidFilename(ref name) => write!(f, "invalid log filename `{}`", name),
            Error::Io(ref e) => write!(f, "{}", e),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self {
            Error::Io(ref e) => Some(e),
            _ => None,
        }
    }
}

impl From<std_io::Error> for Error {
    fn from(e: std_io::Error) -> Self {
        Error::Io(e)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Level of the log file; `Off` disables the file.
    pub level: Level,
    /// Level of the terminal stream.
    pub verbosity: Level,
    pub logdir: PathBuf,
    pub mkdir: bool,
    pub filename: String,
    /// `w` truncates, `a` appends and `n` picks the first unused numbered name.
    pub filemode: char,
    pub format: Format,
    pub use_stderr: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            level: Level::Off,
            verbosity: Level::Info,
            logdir: PathBuf::from("./"),
            mkdir: false,
            filename: "transdep-%Y%m%d.log".to_string(),
            filemode: 'a',
            format: Format::Full,
            use_stderr: true,
        }
    }
}

pub fn create_logger(config: &Config) -> Result<Logger, Error> {
    create_logger_at(config, o!(), Local::now())
}

pub fn create_logger_at<T, Tz: TimeZone>(
    config: &Config,
    values: OwnedKV<T>,
    datetime: DateTime<Tz>,
) -> Result<Logger, Error>
where
    T: SendSyncRefUnwindSafeKV + 'static,
    Tz::Offset: fmt::Display,
{
    let file_stream = match config.level {
        Level::Off => Stream::Null,
        _ => {
            let mut options = OpenOptions::new();
            options.create(true).write(true);
            let numbering = match config.filemode {
                'w' => {
                    options.truncate(true);
                    false
                }
                'a' => {
                    options.append(true);
                    false
                }
                'n' => {
                    options.truncate(true);
                    true
                }
                mode => return Err(Error::InvalidFileMode(mode)),
            };
            let path = log_path(
                &config.logdir,
                &config.filename,
                datetime,
                config.mkdir,
                numbering,
            )?;
            Stream::File(options.open(path)?)
        }
    };
    let term_stream = if config.use_stderr {
        Stream::StdErr
    } else {
        Stream::StdOut
    };

    LoggerBuilder::new(term_stream)
        .level(config.verbosity)
        .format(config.format)
        .build_with(
            LoggerBuilder::new(file_stream)
                .level(config.level)
                .format(config.format),
            values,
        )
}

/// Expands the date patterns of `filename` and joins it to `dir`.
pub fn log_path<Tz: TimeZone>(
    dir: &Path,
    filename: &str,
    time: DateTime<Tz>,
    mkdir: bool,
    numbering: bool,
) -> Result<PathBuf, Error>
where
    Tz::Offset: fmt::Display,
{
    if !dir.is_dir() {
        if mkdir {
            fs::create_dir_all(dir)?;
        } else {
            return Err(Error::Io(std_io::Error::new(
                std_io::ErrorKind::NotFound,
                format!("`{}` is not a directory", dir.display()),
            )));
        }
    }
    if filename.is_empty() || filename.contains(MAIN_SEPARATOR) {
        return Err(Error::InvalidFilename(filename.to_string()));
    }

    let (stem, ext) = match filename.rfind('.') {
        Some(i) if i > 0 => (&filename[..i], &filename[i..]),
        _ => (filename, ""),
    };
    let stem = time.format(stem).to_string();

    if numbering {
        let mut number = 0;
        loop {
            let path = dir.join(format!("{}-{}{}", stem, number, ext));
            if !path.exists() {
                return Ok(path);
            }
            number += 1;
        }
    } else {
        Ok(dir.join(format!("{}{}", stem, ext)))
    }
}
