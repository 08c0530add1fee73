//! Serializers for [Turtle] and [RDF/XML].
//!
//! **Important**:
//! the methods in this module accepting a [`Write`](io::Write)
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`](io::BufWriter).
//!
//! [Turtle]: https://www.w3.org/TR/turtle/
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
use crate::model::triple_to_rio;
use lazy_static::lazy_static;
use regex::Regex;
use rio_api::formatter::TriplesFormatter;
use rio_xml::RdfXmlFormatter;
use sparrow_api::prefix::PrefixMap;
use sparrow_api::serializer::Stringifier;
use sparrow_api::term::{is_valid_language_tag, LiteralKind, Subject, Term};
use sparrow_api::triple::Triple;
use sparrow_ntriples::serializer as nt;
use std::io;

lazy_static! {
    /// The ASCII subset of Turtle's `PN_LOCAL`, without backslash escapes.
    pub(crate) static ref PN_LOCAL: Regex = Regex::new(
        r"(?x)^
        ( [A-Za-z0-9_:] | %[0-9A-Fa-f]{2} )
        (
            ( [A-Za-z0-9_.:-] | %[0-9A-Fa-f]{2} )*
            ( [A-Za-z0-9_:-] | %[0-9A-Fa-f]{2} )
        )?
        $"
    )
    .unwrap();
}

/// Turtle serializer configuration.
#[derive(Clone, Debug)]
pub struct TurtleConfig {
    pub(crate) prefix_map: PrefixMap,
}

impl TurtleConfig {
    /// Build a new default [`TurtleConfig`].
    pub fn new() -> Self {
        TurtleConfig {
            prefix_map: PrefixMap::rdf_defaults(),
        }
    }

    /// [`PrefixMap`] to use in serialization
    /// (defaults to a map containing `rdf:`, `rdfs:` and `xsd:`).
    pub fn prefix_map(&self) -> &PrefixMap {
        &self.prefix_map
    }

    /// Transform a [`TurtleConfig`] by setting the [`prefix_map`](TurtleConfig::prefix_map).
    #[must_use]
    pub fn with_prefix_map(mut self, pm: PrefixMap) -> Self {
        self.prefix_map = pm;
        self
    }
}

impl Default for TurtleConfig {
    fn default() -> Self {
        TurtleConfig::new()
    }
}

/// Turtle serializer.
///
/// Each call to [`serialize_triples`](TurtleSerializer::serialize_triples)
/// writes one `@prefix` line per entry of the prefix map,
/// then one triple per line.
pub struct TurtleSerializer<W> {
    config: TurtleConfig,
    write: W,
}

impl<W> TurtleSerializer<W>
where
    W: io::Write,
{
    /// Build a new Turtle serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, TurtleConfig::default())
    }

    /// Build a new Turtle serializer writing to `write`, with the given config.
    pub fn new_with_config(write: W, config: TurtleConfig) -> Self {
        TurtleSerializer { config, write }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &TurtleConfig {
        &self.config
    }

    /// Serialize all the given triples, in order.
    pub fn serialize_triples<'a, I>(&mut self, triples: I) -> io::Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let w = &mut self.write;
        let pm = &self.config.prefix_map;
        for (prefix, ns) in pm.iter() {
            write!(w, "@prefix {prefix}: ")?;
            nt::write_iri(w, ns)?;
            w.write_all(b" .\n")?;
        }
        if !pm.is_empty() {
            w.write_all(b"\n")?;
        }
        for t in triples {
            match &t.subject {
                Subject::Iri(iri) => write_iri(w, iri, pm)?,
                Subject::BlankNode(id) => nt::write_bnode(w, id)?,
            }
            w.write_all(b" ")?;
            write_iri(w, &t.predicate, pm)?;
            w.write_all(b" ")?;
            write_term(w, &t.object, pm)?;
            w.write_all(b" .\n")?;
        }
        Ok(self)
    }
}

impl TurtleSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    pub fn new_stringifier() -> Self {
        TurtleSerializer::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    pub fn new_stringifier_with_config(config: TurtleConfig) -> Self {
        TurtleSerializer::new_with_config(Vec::new(), config)
    }
}

impl Stringifier for TurtleSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

fn write_iri<W: io::Write>(w: &mut W, iri: &str, pm: &PrefixMap) -> io::Result<()> {
    match pm.get_checked_prefixed_pair(iri, |txt| PN_LOCAL.is_match(txt)) {
        Some((pre, suf)) => write!(w, "{pre}:{suf}"),
        None => nt::write_iri(w, iri),
    }
}

fn write_term<W: io::Write>(w: &mut W, t: &Term, pm: &PrefixMap) -> io::Result<()> {
    match t {
        Term::Iri(iri) => write_iri(w, iri, pm),
        Term::BlankNode(id) => nt::write_bnode(w, id),
        Term::Literal(lit) => {
            w.write_all(b"\"")?;
            nt::quoted_string(w, lit.value().as_bytes())?;
            w.write_all(b"\"")?;
            match lit.kind() {
                LiteralKind::Simple => Ok(()),
                LiteralKind::Lang(tag) => {
                    if !is_valid_language_tag(tag) {
                        return Err(io::Error::new(
                            io::ErrorKind::InvalidInput,
                            format!("can not write language tag {tag:?} in Turtle"),
                        ));
                    }
                    write!(w, "@{tag}")
                }
                LiteralKind::Datatype(dt) => {
                    w.write_all(b"^^")?;
                    write_iri(w, dt, pm)
                }
            }
        }
    }
}

/// RDF/XML serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct RdfXmlConfig {
    indentation: usize,
}

impl RdfXmlConfig {
    /// Size of the indentation to use in the serialization.
    /// (defaults to 0, meaning no indentation nor linebreaks)
    pub fn indentation(&self) -> usize {
        self.indentation
    }

    /// Build a new default [`RdfXmlConfig`]
    pub fn new() -> Self {
        Default::default()
    }

    /// Transform an [`RdfXmlConfig`] by setting the [`indentation`](RdfXmlConfig::indentation).
    #[must_use]
    pub fn with_indentation(mut self, i: usize) -> Self {
        self.indentation = i;
        self
    }
}

/// RDF/XML serializer, based on [`rio_xml`].
///
/// NB: no prefix map is used, namespaces are declared by the formatter itself.
pub struct RdfXmlSerializer<W> {
    config: RdfXmlConfig,
    write: W,
}

impl<W> RdfXmlSerializer<W>
where
    W: io::Write,
{
    /// Build a new RDF/XML serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, RdfXmlConfig::default())
    }

    /// Build a new RDF/XML serializer writing to `write`, with the given config.
    pub fn new_with_config(write: W, config: RdfXmlConfig) -> Self {
        RdfXmlSerializer { config, write }
    }

    /// Borrow this serializer's configuration.
    pub fn config(&self) -> &RdfXmlConfig {
        &self.config
    }

    /// Serialize all the given triples as one RDF/XML document.
    pub fn serialize_triples<'a, I>(&mut self, triples: I) -> io::Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        let mut tf = if self.config.indentation > 0 {
            RdfXmlFormatter::with_indentation(&mut self.write, self.config.indentation)?
        } else {
            RdfXmlFormatter::new(&mut self.write)?
        };
        for t in triples {
            tf.format(&triple_to_rio(t))?;
        }
        tf.finish()?;
        Ok(self)
    }
}

impl RdfXmlSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    pub fn new_stringifier() -> Self {
        RdfXmlSerializer::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    pub fn new_stringifier_with_config(config: RdfXmlConfig) -> Self {
        RdfXmlSerializer::new_with_config(Vec::new(), config)
    }
}

impl Stringifier for RdfXmlSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use crate::parser::{RdfXmlParser, TurtleParser};
    use test_case::test_case;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    fn graph() -> Vec<Triple> {
        vec![
            Triple::new(
                Subject::iri("http://example.org/me"),
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
                Term::iri("http://schema.org/Person"),
            ),
            Triple::new(
                Subject::iri("http://example.org/me"),
                "http://schema.org/name",
                Term::literal_lang("Pierre \"the\" author", "en"),
            ),
            Triple::new(
                Subject::iri("http://example.org/me"),
                "http://example.org/age",
                Term::literal_dt("42", "http://www.w3.org/2001/XMLSchema#integer"),
            ),
        ]
    }

    #[test_case("a", true)]
    #[test_case("aBc", true)]
    #[test_case(":::", true)]
    #[test_case("123", true)]
    #[test_case("%20%21", true)]
    #[test_case("a.b", true)]
    #[test_case(" ", false)]
    #[test_case(".a", false)]
    #[test_case("a.", false)]
    #[test_case("a/b", false)]
    fn pn_local(txt: &str, exp: bool) {
        assert_eq!(PN_LOCAL.is_match(txt), exp, "{txt}");
    }

    #[test]
    fn turtle_with_prefixes() -> TestResult {
        let pm = PrefixMap::rdf_defaults().with("s", "http://schema.org/")?;
        let config = TurtleConfig::new().with_prefix_map(pm);
        let got = TurtleSerializer::new_stringifier_with_config(config)
            .serialize_triples(&graph())?
            .to_string();
        assert_eq!(
            got,
            r#"@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .
@prefix s: <http://schema.org/> .

<http://example.org/me> rdf:type s:Person .
<http://example.org/me> s:name "Pierre \"the\" author"@en .
<http://example.org/me> <http://example.org/age> "42"^^xsd:integer .
"#
        );
        Ok(())
    }

    #[test]
    fn turtle_reads_back() -> TestResult {
        let g = graph();
        let txt = TurtleSerializer::new_stringifier()
            .serialize_triples(&g)?
            .to_string();
        assert_eq!(TurtleParser::default().parse_str(&txt)?, g);
        Ok(())
    }

    #[test]
    fn turtle_without_prefixes() -> TestResult {
        let config = TurtleConfig::new().with_prefix_map(PrefixMap::new());
        let t = Triple::new(Subject::bnode("b"), "tag:p", Term::literal("x"));
        let got = TurtleSerializer::new_stringifier_with_config(config)
            .serialize_triples([&t])?
            .to_string();
        assert_eq!(got, "_:b <tag:p> \"x\" .\n");
        Ok(())
    }

    #[test]
    fn rdfxml_reads_back() -> TestResult {
        let g = graph();
        for config in [RdfXmlConfig::new(), RdfXmlConfig::new().with_indentation(2)] {
            let txt = RdfXmlSerializer::new_stringifier_with_config(config)
                .serialize_triples(&g)?
                .to_string();
            let mut got = RdfXmlParser::default().parse_str(&txt)?;
            got.sort();
            let mut exp = g.clone();
            exp.sort();
            assert_eq!(got, exp);
        }
        Ok(())
    }
}
