//! This crate is part of [Sparrow],
//! a backend-neutral API for storing, querying and exchanging [RDF] triples.
//!
//! It maps N-Triples to and from the dict [`Document`] form,
//! and that form to and from JSON.
//!
//! ```
//! # use sparrow_dict::*;
//! let nt = b"<uri:a> <uri:b> <uri:c> .\n";
//! let doc = ntriples_to_dict(&nt[..])?;
//! assert_eq!(doc["uri:a"]["uri:b"][0].value, "uri:c");
//! assert_eq!(dict_to_ntriples(&doc)?, nt);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Blank node labels are not stable across round trips.
//! Callers needing deterministic output supply the labels to use explicitly:
//!
//! ```
//! # use sparrow_dict::*;
//! let nt = b"_:a <uri:b> _:c .\n";
//! let doc = ntriples_to_dict(&nt[..])?;
//! assert_eq!(dict_to_ntriples_substituted(&doc, &["a", "c"])?, nt);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [Sparrow]: https://docs.rs/sparrow/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

use sparrow_api::document::Document;
use std::io::{BufRead, Read};

mod error;
pub use error::*;
pub mod json;
pub use json::{from_json, from_json_str, to_json, JsonConfig};
pub mod mapper;
pub use mapper::{from_dict, from_dict_substituted, to_dict, try_to_dict};

/// Decode N-Triples into a [`Document`].
pub fn ntriples_to_dict<R: BufRead>(read: R) -> Result<Document, sparrow_ntriples::SyntaxError> {
    try_to_dict(sparrow_ntriples::decode(read))
}

/// Encode a [`Document`] as N-Triples, keeping its blank node labels.
pub fn dict_to_ntriples(doc: &Document) -> Result<Vec<u8>, Error> {
    let triples = from_dict(doc)?;
    Ok(sparrow_ntriples::encode(&triples)?)
}

/// Encode a [`Document`] as N-Triples,
/// relabelling its blank nodes with `substitutions`
/// (see [`from_dict_substituted`]).
pub fn dict_to_ntriples_substituted<S>(
    doc: &Document,
    substitutions: &[S],
) -> Result<Vec<u8>, Error>
where
    S: AsRef<str>,
{
    let triples = from_dict_substituted(doc, substitutions)?;
    Ok(sparrow_ntriples::encode(&triples)?)
}

/// Decode JSON into N-Triples.
pub fn json_to_ntriples<R: Read>(read: R) -> Result<Vec<u8>, Error> {
    dict_to_ntriples(&from_json(read)?)
}

/// Decode N-Triples into JSON.
pub fn ntriples_to_json<R: BufRead>(read: R, config: &JsonConfig) -> Result<String, Error> {
    Ok(to_json(&ntriples_to_dict(read)?, config)?)
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
