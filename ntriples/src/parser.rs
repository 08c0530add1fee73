//! Lazy parser for the [N-Triples] concrete syntax.
//!
//! [`NtParser`] pulls one line at a time from a [`BufRead`],
//! so that the first triple is available before the whole input has been read.
//! Decoding stops at the first malformed line.
//!
//! Besides the five escapes produced by the [serializer](crate::serializer)
//! (`\\`, `\t`, `\n`, `\r`, `\"`),
//! the parser also accepts `\b`, `\f`, `\'`, `\uXXXX` and `\UXXXXXXXX` in literals.
//! IRIs are taken verbatim, no escape sequence is interpreted in them.
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
use sparrow_api::term::{
    is_valid_bnode_id, is_valid_iri, is_valid_language_tag, Literal, Subject, Term,
};
use sparrow_api::triple::Triple;
use std::io::BufRead;

mod _error;
pub use _error::*;

/// An iterator of [`Triple`]s decoded from N-Triples text.
///
/// Blank node labels are kept as they appear in the input.
/// After the first error, the iterator yields nothing more.
pub struct NtParser<R> {
    read: R,
    buffer: String,
    line: usize,
    done: bool,
}

impl<R: BufRead> NtParser<R> {
    /// Build a parser consuming `read`.
    pub fn new(read: R) -> Self {
        NtParser {
            read,
            buffer: String::new(),
            line: 0,
            done: false,
        }
    }

    /// The number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }
}

impl<R: BufRead> Iterator for NtParser<R> {
    type Item = Result<Triple, SyntaxError>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buffer.clear();
            self.line += 1;
            match self.read.read_line(&mut self.buffer) {
                Ok(0) => {
                    self.done = true;
                }
                Ok(_) => {
                    let txt = self.buffer.trim_end_matches(['\n', '\r']);
                    let mut lp = LineParser::new(txt, self.line);
                    match lp.parse_line() {
                        Ok(None) => continue,
                        Ok(Some(t)) => return Some(Ok(t)),
                        Err(e) => {
                            self.done = true;
                            return Some(Err(e));
                        }
                    }
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(SyntaxError::io(e, self.line)));
                }
            }
        }
        None
    }
}

/// Parse one line of N-Triples.
struct LineParser<'a> {
    txt: &'a str,
    pos: usize,
    line: usize,
}

impl<'a> LineParser<'a> {
    fn new(txt: &'a str, line: usize) -> Self {
        LineParser { txt, pos: 0, line }
    }

    /// Return `None` for blank and comment lines.
    fn parse_line(&mut self) -> Result<Option<Triple>, SyntaxError> {
        self.skip_ws();
        if matches!(self.peek(), None | Some('#')) {
            return Ok(None);
        }
        let subject = self.parse_subject()?;
        self.skip_ws();
        let predicate = self.parse_predicate()?;
        self.skip_ws();
        let object = self.parse_object()?;
        self.skip_ws();
        if self.peek() != Some('.') {
            return Err(self.err_here(ErrorKind::MissingTerminator));
        }
        self.pos += 1;
        self.skip_ws();
        if !matches!(self.peek(), None | Some('#')) {
            return Err(self.err_here(ErrorKind::TrailingData));
        }
        Ok(Some(Triple {
            subject,
            predicate,
            object,
        }))
    }

    fn parse_subject(&mut self) -> Result<Subject, SyntaxError> {
        match self.peek() {
            Some('<') => Ok(Subject::Iri(self.parse_iri()?)),
            Some('_') => Ok(Subject::BlankNode(self.parse_bnode()?)),
            _ => Err(self.err_here(ErrorKind::ExpectedSubject)),
        }
    }

    fn parse_predicate(&mut self) -> Result<String, SyntaxError> {
        match self.peek() {
            Some('<') => self.parse_iri(),
            _ => Err(self.err_here(ErrorKind::ExpectedPredicate)),
        }
    }

    fn parse_object(&mut self) -> Result<Term, SyntaxError> {
        match self.peek() {
            Some('<') => Ok(Term::Iri(self.parse_iri()?)),
            Some('_') => Ok(Term::BlankNode(self.parse_bnode()?)),
            Some('"') => Ok(Term::Literal(self.parse_literal()?)),
            _ => Err(self.err_here(ErrorKind::ExpectedObject)),
        }
    }

    /// Parse `<...>`, the current character being `<`.
    fn parse_iri(&mut self) -> Result<String, SyntaxError> {
        let start = self.pos;
        let rest = &self.txt[start + 1..];
        let Some(len) = rest.find('>') else {
            return Err(self.err_from(ErrorKind::UnterminatedIri, start, self.txt.len()));
        };
        let iri = &rest[..len];
        let end = start + len + 2;
        if !is_valid_iri(iri) {
            return Err(self.err_from(ErrorKind::InvalidIri, start, end));
        }
        self.pos = end;
        Ok(iri.to_string())
    }

    /// Parse `_:label`, the current character being `_`.
    fn parse_bnode(&mut self) -> Result<String, SyntaxError> {
        let start = self.pos;
        let Some(rest) = self.txt[start..].strip_prefix("_:") else {
            return Err(self.err_from(ErrorKind::InvalidBnode, start, start + 1));
        };
        let len = rest
            .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.'))
            .unwrap_or(rest.len());
        // a trailing dot belongs to the terminator, not to the label
        let label = rest[..len].trim_end_matches('.');
        if label.is_empty() {
            return Err(self.err_from(ErrorKind::InvalidBnode, start, start + 2 + len));
        }
        if !is_valid_bnode_id(label) {
            return Err(self.err_from(ErrorKind::InvalidBnode, start, start + 2 + label.len()));
        }
        self.pos = start + 2 + label.len();
        Ok(label.to_string())
    }

    /// Parse a literal, the current character being `"`.
    fn parse_literal(&mut self) -> Result<Literal, SyntaxError> {
        let start = self.pos;
        let mut value = String::new();
        let mut chars = self.txt[start + 1..].char_indices();
        let close = loop {
            match chars.next() {
                None => {
                    return Err(self.err_from(
                        ErrorKind::UnterminatedLiteral,
                        start,
                        self.txt.len(),
                    ))
                }
                Some((i, '"')) => break start + 1 + i,
                Some((i, '\\')) => {
                    let esc_start = start + 1 + i;
                    let unescaped = match chars.next() {
                        Some((_, 't')) => Some('\t'),
                        Some((_, 'n')) => Some('\n'),
                        Some((_, 'r')) => Some('\r'),
                        Some((_, '"')) => Some('"'),
                        Some((_, '\\')) => Some('\\'),
                        Some((_, '\'')) => Some('\''),
                        Some((_, 'b')) => Some('\u{8}'),
                        Some((_, 'f')) => Some('\u{c}'),
                        Some((_, 'u')) => hex_char(&mut chars, 4),
                        Some((_, 'U')) => hex_char(&mut chars, 8),
                        _ => None,
                    };
                    match unescaped {
                        Some(c) => value.push(c),
                        None => {
                            let esc_end = chars
                                .clone()
                                .next()
                                .map(|(j, _)| start + 1 + j)
                                .unwrap_or(self.txt.len());
                            return Err(self.err_from(ErrorKind::BadEscape, esc_start, esc_end));
                        }
                    }
                }
                Some((_, c)) => value.push(c),
            }
        };
        self.pos = close + 1;
        match self.peek() {
            Some('@') => {
                let tag_start = self.pos;
                let rest = &self.txt[tag_start + 1..];
                let len = rest
                    .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-'))
                    .unwrap_or(rest.len());
                let tag = &rest[..len];
                self.pos = tag_start + 1 + len;
                if !is_valid_language_tag(tag) {
                    return Err(self.err_from(ErrorKind::InvalidLanguage, tag_start, self.pos));
                }
                if self.txt[self.pos..].starts_with("^^") {
                    return Err(self.err_from(ErrorKind::LangAndDatatype, start, self.pos + 2));
                }
                Ok(Literal::lang(value, tag))
            }
            Some('^') if self.txt[self.pos..].starts_with("^^<") => {
                self.pos += 2;
                let datatype = self.parse_iri()?;
                if self.peek() == Some('@') {
                    return Err(self.err_from(ErrorKind::LangAndDatatype, start, self.pos + 1));
                }
                Ok(Literal::typed(value, datatype))
            }
            Some('^') => Err(self.err_here(ErrorKind::ExpectedObject)),
            _ => Ok(Literal::simple(value)),
        }
    }

    fn peek(&self) -> Option<char> {
        self.txt[self.pos..].chars().next()
    }

    fn skip_ws(&mut self) {
        let rest = &self.txt[self.pos..];
        self.pos += rest.len() - rest.trim_start_matches([' ', '\t']).len();
    }

    /// An error about the character at the current position.
    fn err_here(&self, kind: ErrorKind) -> SyntaxError {
        let end = self.peek().map(|c| self.pos + c.len_utf8()).unwrap_or(self.pos);
        self.err_from(kind, self.pos, end)
    }

    /// An error about the text between byte offsets `start` and `end`.
    fn err_from(&self, kind: ErrorKind, start: usize, end: usize) -> SyntaxError {
        let col = self.txt[..start].chars().count() + 1;
        SyntaxError::new(kind, self.line, col, &self.txt[start..end])
    }
}

/// Read exactly `n` hex digits from `chars` and return the corresponding character.
fn hex_char(chars: &mut std::str::CharIndices, n: usize) -> Option<char> {
    let mut code = 0;
    for _ in 0..n {
        let (_, c) = chars.next()?;
        code = code * 16 + c.to_digit(16)?;
    }
    char::from_u32(code)
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
