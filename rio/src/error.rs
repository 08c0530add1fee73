//! Errors raised when going through Rio.
use std::io;
use thiserror::Error;

/// This error is raised when parsing Turtle or RDF/XML fails,
/// or when the parsed data can not be represented as Sparrow triples.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed Turtle.
    #[error(transparent)]
    Turtle(#[from] rio_turtle::TurtleError),
    /// Malformed RDF/XML.
    #[error(transparent)]
    RdfXml(#[from] rio_xml::RdfXmlError),
    /// The base IRI given to a parser is not an absolute IRI.
    #[error("Invalid base IRI <{iri}>: {message}")]
    InvalidBase {
        /// The rejected base IRI.
        iri: String,
        /// Why it was rejected.
        message: String,
    },
    /// The data contains an RDF-star quoted triple.
    #[error("Unsupported RDF-star triple: {0}")]
    Unsupported(String),
    /// The output could not be written.
    #[error(transparent)]
    Io(#[from] io::Error),
}
