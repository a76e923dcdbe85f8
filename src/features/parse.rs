use std::error;
use std::fmt;

use super::{AddressComponent, AddressedValue, Layer, Source};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    UnknownSource(String),
    UnknownLayer(String),
    InvalidIndex(String),
    /// A dependent hop at the start of an address, or a stack/buffer
    /// component after it.
    MisplacedSource(String),
    UnexpectedCharacter(char),
    UnexpectedEnd,
}

/// A template parse error at a byte offset of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub position: usize,
    pub kind: ParseErrorKind,
}

impl ParseError {
    fn new(position: usize, kind: ParseErrorKind) -> Self {
        ParseError {
            position: position,
            kind: kind,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.kind {
            ParseErrorKind::UnknownSource(ref s) => write!(f, "unknown source `{}`", s)?,
            ParseErrorKind::UnknownLayer(ref s) => write!(f, "unknown layer `{}`", s)?,
            ParseErrorKind::InvalidIndex(ref s) => write!(f, "invalid index `{}`", s)?,
            ParseErrorKind::MisplacedSource(ref s) => write!(f, "misplaced source `{}`", s)?,
            ParseErrorKind::UnexpectedCharacter(c) => write!(f, "unexpected character `{}`", c)?,
            ParseErrorKind::UnexpectedEnd => write!(f, "unexpected end of input")?,
        }
        write!(f, " at byte {}", self.position)
    }
}

impl error::Error for ParseError {}

/// Parses whitespace-separated templates such as `[STACK0]TAG [BUFFER0,LDEP0]DEPREL`.
///
/// On top of syntax errors, addresses that are well formed but cannot be
/// resolved are rejected with `MisplacedSource`: the first component must be
/// `STACK` or `BUFFER`, and every later one `LDEP` or `RDEP`.
/// `AddressedValue::resolve` panics on such addresses, so only hand-built
/// values can reach it.
pub fn parse_templates(input: &str) -> Result<Vec<AddressedValue>, ParseError> {
    let mut scanner = Scanner::new(input);
    let mut templates = vec![];
    loop {
        scanner.skip_whitespace();
        if scanner.is_at_end() {
            break;
        }
        templates.push(scanner.template()?);
    }
    Ok(templates)
}

struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Scanner {
            input: input,
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn unexpected(&self) -> ParseError {
        match self.peek() {
            Some(c) => ParseError::new(self.pos, ParseErrorKind::UnexpectedCharacter(c)),
            None => ParseError::new(self.pos, ParseErrorKind::UnexpectedEnd),
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), ParseError> {
        if self.peek() == Some(expected) {
            self.pos += expected.len_utf8();
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    /// Consumes a run of characters matching `pred`, returning it with its
    /// start offset.
    fn take_while<P: Fn(char) -> bool>(&mut self, pred: P) -> (usize, &'a str) {
        let input = self.input;
        let start = self.pos;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
        (start, &input[start..self.pos])
    }

    fn keyword(&mut self) -> Result<(usize, &'a str), ParseError> {
        let (start, keyword) = self.take_while(|c| c.is_ascii_alphabetic() || c == '_');
        if keyword.is_empty() {
            Err(self.unexpected())
        } else {
            Ok((start, keyword))
        }
    }

    fn index(&mut self) -> Result<u32, ParseError> {
        let (start, digits) = self.take_while(|c| c.is_ascii_digit());
        if digits.is_empty() {
            return Err(self.unexpected());
        }
        digits.parse::<u32>().map_err(|_| {
            ParseError::new(start, ParseErrorKind::InvalidIndex(digits.to_string()))
        })
    }

    fn component(&mut self, first: bool) -> Result<AddressComponent, ParseError> {
        let (start, keyword) = self.keyword()?;
        let source = Source::from_keyword(keyword).ok_or_else(|| {
            ParseError::new(start, ParseErrorKind::UnknownSource(keyword.to_string()))
        })?;
        let initial = match source {
            Source::Stack | Source::Buffer => true,
            Source::LDep | Source::RDep => false,
        };
        if initial != first {
            return Err(ParseError::new(
                start,
                ParseErrorKind::MisplacedSource(keyword.to_string()),
            ));
        }
        self.skip_whitespace();
        let index = self.index()?;
        Ok(AddressComponent::new(source, index))
    }

    fn template(&mut self) -> Result<AddressedValue, ParseError> {
        self.expect('[')?;
        let mut address = vec![];
        loop {
            self.skip_whitespace();
            let component = self.component(address.is_empty())?;
            address.push(component);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => self.pos += 1,
                Some(']') => {
                    self.pos += 1;
                    break;
                }
                _ => return Err(self.unexpected()),
            }
        }

        self.skip_whitespace();
        let (start, keyword) = self.keyword()?;
        let layer = Layer::from_keyword(keyword).ok_or_else(|| {
            ParseError::new(start, ParseErrorKind::UnknownLayer(keyword.to_string()))
        })?;

        match self.peek() {
            Some(c) if !c.is_whitespace() => Err(self.unexpected()),
            _ => Ok(AddressedValue::new(address, layer)),
        }
    }
}
