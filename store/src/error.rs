//! I define [`StoreError`], the error type of every store operation.
use sparrow_api::prefix::InvalidPrefix;
use sparrow_dict::ValueError;
use sparrow_ntriples::SyntaxError;
use sparrow_sparql_results::ParseError;
use std::io;
use thiserror::Error;

/// This error is raised by [`TripleStore`](crate::TripleStore)
/// and [`SparqlEndpoint`](crate::SparqlEndpoint) operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),
    /// The backend rejected or failed to run a query.
    #[error("Query error: {0}")]
    Query(String),
    /// The backend answered with an unexpected status.
    #[error("Store error {status}: {message}")]
    Status {
        /// The status code returned by the backend.
        status: u16,
        /// The body or reason returned along with it.
        message: String,
    },
    /// The backend does not support this operation or format.
    #[error("Unsupported: {0}")]
    Unsupported(String),
    /// A data source URI could not be opened.
    #[error("Can not load <{uri}>: {message}")]
    Loader {
        /// The URI that failed to open.
        uri: String,
        /// Why it failed.
        message: String,
    },
    /// A prefix could not be registered.
    #[error(transparent)]
    InvalidPrefix(#[from] InvalidPrefix),
    /// Malformed N-Triples.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// Structurally invalid dict document.
    #[error(transparent)]
    Value(#[from] ValueError),
    /// Malformed SPARQL results.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Malformed Turtle or RDF/XML.
    #[error(transparent)]
    Rio(#[from] sparrow_rio::Error),
    /// I/O error while reading a data source or writing a serialization.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<sparrow_dict::Error> for StoreError {
    fn from(value: sparrow_dict::Error) -> Self {
        match value {
            sparrow_dict::Error::Syntax(e) => StoreError::Syntax(e),
            sparrow_dict::Error::Value(e) => StoreError::Value(e),
            sparrow_dict::Error::Io(e) => StoreError::Io(e),
        }
    }
}

impl StoreError {
    pub(crate) fn loader<T: ToString>(uri: &str, message: T) -> Self {
        StoreError::Loader {
            uri: uri.to_string(),
            message: message.to_string(),
        }
    }
}
