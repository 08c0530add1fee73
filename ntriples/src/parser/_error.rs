// this module is transparently re-exported by its parent `parser`
use std::fmt;
use std::io;
use thiserror::Error;

/// The different ways an N-Triples document can be malformed.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The subject is neither an IRI nor a blank node.
    #[error("expected an IRI or a blank node as subject")]
    ExpectedSubject,
    /// The predicate is not an IRI.
    #[error("expected an IRI as predicate")]
    ExpectedPredicate,
    /// The object is neither an IRI, a blank node nor a literal.
    #[error("expected an IRI, a blank node or a literal as object")]
    ExpectedObject,
    /// An IRI is missing its closing `>`.
    #[error("unterminated IRI")]
    UnterminatedIri,
    /// An IRI contains a character that can not appear between `<` and `>`.
    #[error("invalid IRI")]
    InvalidIri,
    /// A blank node label is empty or malformed.
    #[error("invalid blank node identifier")]
    InvalidBnode,
    /// A literal is missing its closing `"`.
    #[error("unterminated literal")]
    UnterminatedLiteral,
    /// A backslash in a literal is followed by an unknown escape sequence.
    #[error("invalid escape sequence")]
    BadEscape,
    /// A language tag is empty or malformed.
    #[error("invalid language tag")]
    InvalidLanguage,
    /// A literal carries both a language tag and a datatype.
    #[error("literal has both a language tag and a datatype")]
    LangAndDatatype,
    /// The triple is not followed by ` .`.
    #[error("missing '.' at the end of the triple")]
    MissingTerminator,
    /// Something other than a comment follows the terminating `.`.
    #[error("unexpected data after the end of the triple")]
    TrailingData,
    /// The underlying stream could not be read (this includes invalid UTF-8).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// This error is raised when decoding malformed N-Triples.
///
/// It carries the position (line and column, both starting at 1)
/// and the text fragment where the problem was detected.
#[derive(Debug, Error)]
pub struct SyntaxError {
    kind: ErrorKind,
    line: usize,
    col: usize,
    fragment: String,
}

impl SyntaxError {
    pub(crate) fn new<T: Into<String>>(kind: ErrorKind, line: usize, col: usize, fragment: T) -> Self {
        SyntaxError {
            kind,
            line,
            col,
            fragment: fragment.into(),
        }
    }

    pub(crate) fn io(err: io::Error, line: usize) -> Self {
        Self::new(ErrorKind::Io(err), line, 1, "")
    }

    /// What went wrong.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The line and column (both starting at 1) where the error was detected.
    pub fn position(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    /// The offending piece of text (possibly empty, e.g. at the end of a line).
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {}:{} near {:?}",
            self.kind, self.line, self.col, self.fragment
        )
    }
}
