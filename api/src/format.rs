//! I define [`Format`], the interchange formats a store can be asked to speak.
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An interchange format accepted at the boundary of a store.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Format {
    /// [N-Triples](https://www.w3.org/TR/n-triples/), the canonical format.
    NTriples,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/).
    RdfXml,
    /// [Turtle](https://www.w3.org/TR/turtle/).
    Turtle,
    /// The JSON serialization of a [`Document`](crate::Document).
    Json,
    /// An in-memory [`Document`](crate::Document).
    Dict,
}

impl Format {
    /// All supported formats.
    pub const ALL: [Format; 5] = [
        Format::NTriples,
        Format::RdfXml,
        Format::Turtle,
        Format::Json,
        Format::Dict,
    ];

    /// The name of this format, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Format::NTriples => "ntriples",
            Format::RdfXml => "rdfxml",
            Format::Turtle => "turtle",
            Format::Json => "json",
            Format::Dict => "dict",
        }
    }

    /// The media type used when exchanging this format with a remote store.
    ///
    /// NB: remote stores historically expect `text/plain` for N-Triples
    /// and `application/x-turtle` for Turtle.
    /// [`Format::Dict`] has no serialized form, hence no media type.
    pub fn mime_type(&self) -> Option<&'static str> {
        match self {
            Format::NTriples => Some("text/plain"),
            Format::RdfXml => Some("application/rdf+xml"),
            Format::Turtle => Some("application/x-turtle"),
            Format::Json => Some("application/json"),
            Format::Dict => None,
        }
    }

    /// Whether this format is converted to N-Triples by the dict mapper
    /// before reaching a store.
    pub fn is_mapped(&self) -> bool {
        matches!(self, Format::Json | Format::Dict)
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| UnknownFormat(s.to_string()))
    }
}

/// This error is raised when parsing an unsupported format name.
#[derive(Debug, Error)]
#[error("Unknown format '{0}'")]
pub struct UnknownFormat(pub String);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("ntriples", Format::NTriples)]
    #[test_case("rdfxml", Format::RdfXml)]
    #[test_case("turtle", Format::Turtle)]
    #[test_case("json", Format::Json)]
    #[test_case("dict", Format::Dict)]
    fn parse_name(name: &str, exp: Format) {
        assert_eq!(name.parse::<Format>().unwrap(), exp);
        assert_eq!(exp.to_string(), name);
    }

    #[test]
    fn unknown_name() {
        assert!("n3".parse::<Format>().is_err());
    }

    #[test]
    fn dict_has_no_mime_type() {
        assert_eq!(Format::Dict.mime_type(), None);
        assert_eq!(Format::NTriples.mime_type(), Some("text/plain"));
    }
}
