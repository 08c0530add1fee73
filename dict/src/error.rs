//! Errors raised by the dict mapper.
use sparrow_api::document::ValueType;
use sparrow_ntriples::SyntaxError;
use std::io;
use thiserror::Error;

/// This error is raised when a [`Document`](sparrow_api::Document) is structurally invalid.
#[derive(Debug, Error)]
pub enum ValueError {
    /// A record has a `type` other than `uri`, `bnode` or `literal`.
    #[error("Unknown value type '{0}'")]
    UnknownType(String),
    /// A literal record carries both `lang` and `datatype`.
    #[error("Literal {0:?} has both a language tag and a datatype")]
    LangAndDatatype(String),
    /// A `uri` or `bnode` record carries `lang` or `datatype`.
    #[error("{kind} value {value:?} can not have a language tag or a datatype")]
    UnexpectedAnnotation {
        /// The type of the offending record.
        kind: ValueType,
        /// The value of the offending record.
        value: String,
    },
    /// A predicate key is not an IRI.
    #[error("Predicate {0:?} is not an IRI")]
    InvalidPredicate(String),
    /// An IRI (subject, object or datatype) can not be written in N-Triples.
    #[error("Invalid IRI {0:?}")]
    InvalidIri(String),
    /// A blank node identifier is malformed.
    #[error("Invalid blank node identifier {0:?}")]
    InvalidBnode(String),
    /// A language tag is malformed.
    #[error("Invalid language tag {0:?}")]
    InvalidLanguage(String),
    /// More distinct blank nodes were found than substitutions were given.
    #[error("No substitution left for blank node '{0}'")]
    MissingSubstitution(String),
    /// The JSON text could not be read or written.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The errors raised by conversions that both decode N-Triples and map documents.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed N-Triples.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Invalid document.
    #[error(transparent)]
    Value(#[from] ValueError),
    /// Output could not be written.
    #[error(transparent)]
    Io(#[from] io::Error),
}
