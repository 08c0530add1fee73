//! Parsers for [Turtle] and [RDF/XML], based on [`rio_turtle`] and [`rio_xml`].
//!
//! Both parsers produce the whole list of triples, or an error:
//! no partial result is ever returned.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
use crate::model::triple_from_rio;
use crate::Error;
use rio_api::parser::TriplesParser;
use rio_turtle::TurtleParser as RioTurtleParser;
use rio_xml::RdfXmlParser as RioRdfXmlParser;
use sparrow_api::triple::Triple;
use std::io::BufRead;

/// Turtle parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct TurtleParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<String>,
}

impl TurtleParser {
    /// Transform a [`TurtleParser`] by setting its [`base`](TurtleParser::base).
    #[must_use]
    pub fn with_base<T: Into<String>>(mut self, base: Option<T>) -> Self {
        self.base = base.map(Into::into);
        self
    }

    /// Parse all the triples of `data`.
    pub fn parse<R: BufRead>(&self, data: R) -> Result<Vec<Triple>, Error> {
        let base = parse_base(self.base.as_deref())?;
        collect_triples(RioTurtleParser::new(data, base))
    }

    /// Parse all the triples of `txt`.
    pub fn parse_str(&self, txt: &str) -> Result<Vec<Triple>, Error> {
        self.parse(txt.as_bytes())
    }
}

/// RDF/XML parser based on RIO.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlParser {
    /// The base IRI used by this parser to resolve relative IRI-references.
    pub base: Option<String>,
}

impl RdfXmlParser {
    /// Transform an [`RdfXmlParser`] by setting its [`base`](RdfXmlParser::base).
    #[must_use]
    pub fn with_base<T: Into<String>>(mut self, base: Option<T>) -> Self {
        self.base = base.map(Into::into);
        self
    }

    /// Parse all the triples of `data`.
    pub fn parse<R: BufRead>(&self, data: R) -> Result<Vec<Triple>, Error> {
        let base = parse_base(self.base.as_deref())?;
        collect_triples(RioRdfXmlParser::new(data, base))
    }

    /// Parse all the triples of `txt`.
    pub fn parse_str(&self, txt: &str) -> Result<Vec<Triple>, Error> {
        self.parse(txt.as_bytes())
    }
}

fn parse_base(base: Option<&str>) -> Result<Option<oxiri::Iri<String>>, Error> {
    base.map(|iri| {
        oxiri::Iri::parse(iri.to_string()).map_err(|e| Error::InvalidBase {
            iri: iri.to_string(),
            message: e.to_string(),
        })
    })
    .transpose()
}

fn collect_triples<P>(mut parser: P) -> Result<Vec<Triple>, Error>
where
    P: TriplesParser,
    Error: From<P::Error>,
{
    let mut triples = vec![];
    parser.parse_all(&mut |t| -> Result<(), Error> {
        triples.push(triple_from_rio(&t)?);
        Ok(())
    })?;
    Ok(triples)
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use sparrow_api::term::{Subject, Term};

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test]
    fn turtle() -> TestResult {
        let ttl = r#"
            @prefix : <http://example.org/ns/> .
            <#me> :knows [ a :Person ; :name "Alice"@en ] ;
                :age 42 .
        "#;
        let p = TurtleParser::default().with_base(Some("http://localhost/ex"));
        let g = p.parse_str(ttl)?;
        assert_eq!(g.len(), 4);
        let me = Subject::iri("http://localhost/ex#me");
        assert!(g.iter().any(|t| t.subject == me
            && t.predicate == "http://example.org/ns/knows"
            && t.object.is_blank_node()));
        assert!(g.iter().any(|t| t.subject == me
            && t.object == Term::literal_dt("42", "http://www.w3.org/2001/XMLSchema#integer")));
        assert!(g
            .iter()
            .any(|t| t.object == Term::literal_lang("Alice", "en")));
        Ok(())
    }

    #[test]
    fn rdfxml() -> TestResult {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
        <rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
                 xmlns="http://example.org/ns/">
          <rdf:Description rdf:about="http://localhost/ex#me">
            <knows>
              <Person>
                <name>Alice</name>
              </Person>
            </knows>
          </rdf:Description>
        </rdf:RDF>
        "#;
        let g = RdfXmlParser::default()
            .with_base(Some("http://localhost/ex"))
            .parse_str(xml)?;
        assert_eq!(g.len(), 3);
        assert!(g.iter().any(|t| t.subject == Subject::iri("http://localhost/ex#me")
            && t.predicate == "http://example.org/ns/knows"
            && t.object.is_blank_node()));
        assert!(g.iter().any(|t| t.subject.is_blank_node()
            && t.predicate == "http://www.w3.org/1999/02/22-rdf-syntax-ns#type"
            && t.object == Term::iri("http://example.org/ns/Person")));
        Ok(())
    }

    #[test]
    fn turtle_syntax_error() {
        let err = TurtleParser::default()
            .parse_str("<tag:s> <tag:p> .")
            .unwrap_err();
        assert!(matches!(err, Error::Turtle(_)));
    }

    #[test]
    fn rdfxml_syntax_error() {
        let err = RdfXmlParser::default().parse_str("<rdf:RDF").unwrap_err();
        assert!(matches!(err, Error::RdfXml(_)));
    }

    #[test]
    fn invalid_base() {
        let err = TurtleParser::default()
            .with_base(Some("not an iri"))
            .parse_str("")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidBase { .. }));
    }
}
