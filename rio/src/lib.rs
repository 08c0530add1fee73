//! This crate is part of [Sparrow],
//! a backend-neutral API for storing, querying and exchanging [RDF] triples.
//!
//! It reads and writes [Turtle] and [RDF/XML] through the [Rio] toolkit,
//! converting Rio's borrowed model to and from Sparrow [`Triple`]s.
//!
//! ```
//! # use sparrow_rio::*;
//! let ttl = "@prefix s: <http://schema.org/> . <tag:me> s:name \"me\" .";
//! let triples = parse_turtle(ttl.as_bytes(), None)?;
//! assert_eq!(triples[0].predicate, "http://schema.org/name");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [Sparrow]: https://docs.rs/sparrow/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
//! [Rio]: https://github.com/oxigraph/rio/
#![deny(missing_docs)]

use sparrow_api::serializer::Stringifier;
use sparrow_api::triple::Triple;
use std::io::{self, BufRead};

mod error;
pub use error::*;
pub mod model;
pub mod parser;
pub use parser::{RdfXmlParser, TurtleParser};
pub mod serializer;
pub use serializer::{RdfXmlConfig, RdfXmlSerializer, TurtleConfig, TurtleSerializer};

/// Parse Turtle, resolving relative IRIs against `base` if provided.
pub fn parse_turtle<R: BufRead>(read: R, base: Option<&str>) -> Result<Vec<Triple>, Error> {
    TurtleParser { base: base.map(str::to_string) }.parse(read)
}

/// Parse RDF/XML, resolving relative IRIs against `base` if provided.
pub fn parse_rdfxml<R: BufRead>(read: R, base: Option<&str>) -> Result<Vec<Triple>, Error> {
    RdfXmlParser { base: base.map(str::to_string) }.parse(read)
}

/// Serialize `triples` as Turtle.
pub fn write_turtle<'a, I>(triples: I, config: &TurtleConfig) -> io::Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Triple>,
{
    let mut ser = TurtleSerializer::new_stringifier_with_config(config.clone());
    ser.serialize_triples(triples)?;
    Ok(ser.as_utf8().to_vec())
}

/// Serialize `triples` as RDF/XML.
pub fn write_rdfxml<'a, I>(triples: I, config: &RdfXmlConfig) -> io::Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Triple>,
{
    let mut ser = RdfXmlSerializer::new_stringifier_with_config(config.clone());
    ser.serialize_triples(triples)?;
    Ok(ser.as_utf8().to_vec())
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
