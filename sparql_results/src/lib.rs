//! This crate is part of [Sparrow],
//! a backend-neutral API for storing, querying and exchanging [RDF] triples.
//!
//! It decodes the [SPARQL Query Results XML Format][SRX]
//! into [`Binding`] rows (SELECT) or a boolean (ASK).
//! Bound values use the same [`ValueRecord`](sparrow_api::ValueRecord) shape
//! as the dict form of triples.
//!
//! ```
//! # use sparrow_sparql_results::{decode, QueryResults};
//! let xml = br#"<sparql xmlns="http://www.w3.org/2005/sparql-results#">
//!   <head/><boolean>true</boolean>
//! </sparql>"#;
//! assert_eq!(decode(&xml[..])?, QueryResults::Boolean(true));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [Sparrow]: https://docs.rs/sparrow/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [SRX]: https://www.w3.org/TR/rdf-sparql-XMLres/
#![deny(missing_docs)]

use sparrow_api::document::Binding;
use std::io::BufRead;
use thiserror::Error;

mod xml_parser;

/// The decoded content of a SPARQL XML results document.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum QueryResults {
    /// The rows of a SELECT query, in document order.
    ///
    /// A document with neither `<result>` nor `<boolean>` decodes to empty bindings:
    /// callers know which query form they issued.
    Bindings(Vec<Binding>),
    /// The answer to an ASK query.
    Boolean(bool),
}

impl QueryResults {
    /// Return the rows of these results, if they are bindings.
    pub fn into_bindings(self) -> Option<Vec<Binding>> {
        match self {
            QueryResults::Bindings(b) => Some(b),
            QueryResults::Boolean(_) => None,
        }
    }

    /// Return the answer of these results, if they are a boolean.
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            QueryResults::Boolean(b) => Some(*b),
            QueryResults::Bindings(_) => None,
        }
    }
}

/// This error is raised when decoding a malformed SPARQL XML results document.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
    /// The document is well-formed XML, but not SPARQL results.
    #[error("Invalid SPARQL results: {0}")]
    Structure(String),
}

impl From<quick_xml::events::attributes::AttrError> for ParseError {
    fn from(value: quick_xml::events::attributes::AttrError) -> Self {
        ParseError::Xml(value.into())
    }
}

/// Decode a SPARQL XML results document.
pub fn decode<R: BufRead>(read: R) -> Result<QueryResults, ParseError> {
    xml_parser::SparqlXmlParser::new(read).parse_results_document()
}

/// Decode a SPARQL XML results document held in memory.
pub fn from_slice(data: &[u8]) -> Result<QueryResults, ParseError> {
    decode(data)
}
