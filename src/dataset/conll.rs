//! CoNLL-X files: one token per line with ten tab-separated columns
//! (ID FORM LEMMA CPOSTAG POSTAG FEATS HEAD DEPREL PHEAD PDEPREL), sentences
//! separated by blank lines.

use std::io as std_io;
use std::path::Path;

use crate::io as mod_io;
use crate::lang::{Features, Phrasal, Sentence, Token, Tokenized};
use crate::syntax::transition::{DependencySet, Index};

static CONLL_FIELD_DELIMITER: &'static str = "\t";
static CONLL_EMPTY_FIELD: &'static str = "_";
const CONLL_NUM_FIELDS: usize = 10;

#[inline]
fn invalid_data<E>(error: E) -> std_io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    std_io::Error::new(std_io::ErrorKind::InvalidData, error)
}

#[inline]
fn parse_conll_required_usize_field(field: &str) -> Result<usize, std_io::Error> {
    field.parse::<usize>().map_err(invalid_data)
}

#[inline]
fn parse_conll_optional_usize_field(field: &str) -> Result<Option<usize>, std_io::Error> {
    if field == CONLL_EMPTY_FIELD {
        Ok(None)
    } else {
        Ok(Some(field.parse::<usize>().map_err(invalid_data)?))
    }
}

#[inline]
fn parse_conll_optional_str_field(field: &str) -> Option<String> {
    if field == CONLL_EMPTY_FIELD {
        None
    } else {
        Some(field.to_string())
    }
}

impl<'a> mod_io::FromLine for Token<'a> {
    type Err = std_io::Error;

    fn from_line(line: &str) -> Result<Token<'a>, Self::Err> {
        let cols = line.split(CONLL_FIELD_DELIMITER).collect::<Vec<_>>();
        if cols.len() != CONLL_NUM_FIELDS {
            return Err(invalid_data(format!(
                "expected {} fields, found {}: `{}`",
                CONLL_NUM_FIELDS,
                cols.len(),
                line
            )));
        }

        let features = match parse_conll_optional_str_field(cols[5]) {
            Some(feats) => Some(feats.parse::<Features>().map_err(invalid_data)?),
            None => None,
        };
        let token = Token::new(
            parse_conll_required_usize_field(cols[0])?,
            cols[1].to_string(),
            parse_conll_optional_str_field(cols[2]),
            parse_conll_optional_str_field(cols[4]),
            features,
            parse_conll_optional_usize_field(cols[6])?,
            parse_conll_optional_str_field(cols[7]),
        );
        Ok(match parse_conll_optional_str_field(cols[3]) {
            Some(cpostag) => token.with_cpostag(cpostag),
            None => token,
        })
    }
}

/// Reads up to `num` sentences. Comment lines starting with `#` are skipped.
pub fn read_upto<R, S, T>(reader: &mut R, num: usize, buf: &mut Vec<S>) -> std_io::Result<usize>
where
    R: std_io::BufRead,
    S: Phrasal<Token = T>,
    T: Tokenized + mod_io::FromLine,
{
    let mut count = 0;
    let mut line = String::new();
    let mut tokens = vec![];
    while count < num {
        match reader.read_line(&mut line) {
            Ok(0) => {
                if !tokens.is_empty() {
                    buf.push(S::from_tokens(tokens));
                    count += 1;
                }
                break;
            }
            Ok(_) => {
                let line_trimmed = line.trim_end_matches(|c| c == '\n' || c == '\r');
                if line_trimmed.trim().is_empty() {
                    if !tokens.is_empty() {
                        buf.push(S::from_tokens(tokens));
                        count += 1;
                    }
                    tokens = vec![];
                } else if !line_trimmed.starts_with("#") {
                    let token = T::from_line(line_trimmed).map_err(invalid_data)?;
                    if token.id() != tokens.len() + 1 {
                        return Err(invalid_data(format!(
                            "expected token {}, found token {}",
                            tokens.len() + 1,
                            token.id()
                        )));
                    }
                    tokens.push(token);
                }
            }
            Err(ref e) if e.kind() == std_io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
        line.clear();
    }
    Ok(count)
}

pub type Reader<'a, R> = mod_io::Reader<R, Sentence<Token<'a>>>;

impl<'a, R: std_io::BufRead> mod_io::Read for Reader<'a, R> {
    type Item = Sentence<Token<'a>>;

    fn read_upto(&mut self, num: usize, buf: &mut Vec<Self::Item>) -> std_io::Result<usize> {
        read_upto(self.inner_mut(), num, buf)
    }
}

/// Reads every sentence of a CoNLL-X file.
pub fn load<'a, P: AsRef<Path>>(file: P) -> std_io::Result<Vec<Sentence<Token<'a>>>> {
    use crate::io::Read;

    let mut reader: Reader<'a, _> = mod_io::Reader::open(file)?;
    let mut buf = vec![];
    reader.read(&mut buf)?;
    Ok(buf)
}

#[inline]
fn field_or_empty(field: Option<&str>) -> &str {
    field.unwrap_or(CONLL_EMPTY_FIELD)
}

/// Writes a sentence with the heads and relations of `dependencies`,
/// followed by a blank line. Tokens without a dependency get empty columns.
pub fn write_sentence<W, S>(writer: &mut W, sentence: &S, dependencies: &DependencySet) -> std_io::Result<()>
where
    W: std_io::Write,
    S: Phrasal,
{
    for (i, token) in sentence.tokens().iter().enumerate() {
        let id = i + 1;
        let features = token.features().map(|f| f.to_string());
        let dependency = dependencies.get(id as Index);
        let head = dependency.map(|d| d.head.to_string());
        writeln!(
            writer,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t_\t_",
            id,
            token.form(),
            field_or_empty(token.lemma()),
            field_or_empty(token.cpostag()),
            field_or_empty(token.postag()),
            field_or_empty(features.as_ref().map(|f| f.as_str())),
            field_or_empty(head.as_ref().map(|h| h.as_str())),
            field_or_empty(dependency.map(|d| d.relation.as_str())),
        )?;
    }
    writeln!(writer)
}
