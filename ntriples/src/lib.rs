//! This crate is part of [Sparrow],
//! a backend-neutral API for storing, querying and exchanging [RDF] triples.
//!
//! It implements the lexical codec for [N-Triples],
//! the canonical interchange format every other Sparrow format converges on.
//!
//! ```
//! # use sparrow_ntriples::{decode, encode};
//! let src = b"<uri:a> <uri:b> \"I say \\\"Hello\\\".\" .\n";
//! let triples = decode(&src[..]).collect::<Result<Vec<_>, _>>()?;
//! assert_eq!(triples[0].object.value(), "I say \"Hello\".");
//! assert_eq!(encode(&triples)?, src);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [Sparrow]: https://docs.rs/sparrow/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [N-Triples]: https://www.w3.org/TR/n-triples/
#![deny(missing_docs)]

use sparrow_api::triple::Triple;
use std::io::{self, BufRead};

pub mod parser;
pub mod serializer;

pub use parser::{ErrorKind, NtParser, SyntaxError};
pub use serializer::{NtConfig, NtSerializer};

/// Lazily decode N-Triples from `read`.
pub fn decode<R: BufRead>(read: R) -> NtParser<R> {
    NtParser::new(read)
}

/// Decode all the triples of an N-Triples string.
pub fn parse_str(txt: &str) -> Result<Vec<Triple>, SyntaxError> {
    decode(txt.as_bytes()).collect()
}

/// Encode triples as N-Triples, one per line, in the given order.
pub fn encode<'a, I>(triples: I) -> io::Result<Vec<u8>>
where
    I: IntoIterator<Item = &'a Triple>,
{
    let mut ser = NtSerializer::new_stringifier();
    ser.serialize_triples(triples)?;
    Ok(ser.into_inner())
}

/// Encode triples as an N-Triples string.
pub fn to_string<'a, I>(triples: I) -> io::Result<String>
where
    I: IntoIterator<Item = &'a Triple>,
{
    let bytes = encode(triples)?;
    // only valid UTF-8 is ever written
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
