//! I define the dict/JSON representation of RDF data.
//!
//! A [`Document`] groups triples by subject, then by predicate:
//!
//! ```json
//! {
//!   "http://example.org/s": {
//!     "http://example.org/p": [
//!       {"value": "http://example.org/o", "type": "uri"},
//!       {"value": "chat", "type": "literal", "lang": "fr"}
//!     ]
//!   },
//!   "_:b0": { "http://example.org/p": [{"value": "b1", "type": "bnode"}] }
//! }
//! ```
//!
//! Each object position is a [`ValueRecord`].
//! SPARQL SELECT rows ([`Binding`]) reuse the same record shape,
//! so that query results and stored triples can be handled identically.
//!
//! Blank node subjects are keyed as `"_:<label>"`;
//! a real IRI starting with `_:` can therefore not be used as a subject key.
use crate::term::{Literal, LiteralKind, Subject, Term};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The prefix distinguishing blank node subject keys from IRI subject keys in a [`Document`].
pub const BNODE_PREFIX: &str = "_:";

/// The objects of one subject, grouped by predicate IRI,
/// in the order the predicates were first encountered.
pub type PredicateMap = IndexMap<String, Vec<ValueRecord>>;

/// Subject key → predicate IRI → ordered sequence of [`ValueRecord`].
///
/// Equality of documents ignores the order of subjects and predicates,
/// but not the order of the records in each list.
pub type Document = IndexMap<String, PredicateMap>;

/// One row of SPARQL SELECT results: variable name → bound value.
pub type Binding = HashMap<String, ValueRecord>;

/// The `type` tag of a [`ValueRecord`].
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// The record holds an IRI.
    Uri,
    /// The record holds a blank node label (without the leading `_:`).
    Bnode,
    /// The record holds the lexical form of a literal.
    Literal,
}

impl ValueType {
    /// The tag as it appears in documents and SPARQL XML results.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Uri => "uri",
            ValueType::Bnode => "bnode",
            ValueType::Literal => "literal",
        }
    }

    /// Parse a tag, as it appears in documents and SPARQL XML results.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "uri" => Some(ValueType::Uri),
            "bnode" => Some(ValueType::Bnode),
            "literal" => Some(ValueType::Literal),
            _ => None,
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The interchange shape of one object position
/// (`{value, type, lang?, datatype?}`).
///
/// The fields are public and unchecked:
/// a record may be structurally invalid (e.g. carry both `lang` and `datatype`),
/// which is detected when the record is converted back to a [`Term`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct ValueRecord {
    /// The IRI, blank node label or lexical form.
    pub value: String,
    /// The kind of value.
    #[serde(rename = "type")]
    pub kind: ValueType,
    /// The language tag of a literal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
    /// The datatype IRI of a literal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datatype: Option<String>,
}

impl ValueRecord {
    /// Build a record without annotation.
    pub fn new<T: Into<String>>(value: T, kind: ValueType) -> Self {
        ValueRecord {
            value: value.into(),
            kind,
            lang: None,
            datatype: None,
        }
    }

    /// Build an IRI record.
    pub fn uri<T: Into<String>>(value: T) -> Self {
        Self::new(value, ValueType::Uri)
    }

    /// Build a blank node record.
    pub fn bnode<T: Into<String>>(value: T) -> Self {
        Self::new(value, ValueType::Bnode)
    }

    /// Build a plain literal record.
    pub fn literal<T: Into<String>>(value: T) -> Self {
        Self::new(value, ValueType::Literal)
    }

    /// Set the language tag of this record.
    #[must_use]
    pub fn with_lang<T: Into<String>>(mut self, lang: T) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Set the datatype of this record.
    #[must_use]
    pub fn with_datatype<T: Into<String>>(mut self, datatype: T) -> Self {
        self.datatype = Some(datatype.into());
        self
    }
}

impl From<Term> for ValueRecord {
    fn from(other: Term) -> Self {
        match other {
            Term::Iri(iri) => ValueRecord::uri(iri),
            Term::BlankNode(id) => ValueRecord::bnode(id),
            Term::Literal(lit) => lit.into(),
        }
    }
}

impl From<Literal> for ValueRecord {
    fn from(other: Literal) -> Self {
        let (value, kind) = other.into_parts();
        let rec = ValueRecord::literal(value);
        match kind {
            LiteralKind::Simple => rec,
            LiteralKind::Lang(tag) => rec.with_lang(tag),
            LiteralKind::Datatype(dt) => rec.with_datatype(dt),
        }
    }
}

/// The [`Document`] key of the given subject.
pub fn subject_key(subject: &Subject) -> String {
    match subject {
        Subject::Iri(iri) => iri.clone(),
        Subject::BlankNode(id) => format!("{BNODE_PREFIX}{id}"),
    }
}

/// The subject denoted by a [`Document`] key.
pub fn key_subject(key: &str) -> Subject {
    match key.strip_prefix(BNODE_PREFIX) {
        Some(id) => Subject::bnode(id),
        None => Subject::iri(key),
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn record_from_terms() {
        assert_eq!(
            ValueRecord::from(Term::iri("uri:c")),
            ValueRecord::uri("uri:c")
        );
        assert_eq!(ValueRecord::from(Term::bnode("c")), ValueRecord::bnode("c"));
        assert_eq!(
            ValueRecord::from(Term::literal_lang("foo", "en")),
            ValueRecord::literal("foo").with_lang("en")
        );
        assert_eq!(
            ValueRecord::from(Term::literal_dt("foo", "uri:string")),
            ValueRecord::literal("foo").with_datatype("uri:string")
        );
    }

    #[test]
    fn record_json_shape() -> Result<(), Box<dyn std::error::Error>> {
        let rec = ValueRecord::literal("foo").with_lang("en");
        let json = serde_json::to_value(&rec)?;
        assert_eq!(
            json,
            serde_json::json!({"value": "foo", "type": "literal", "lang": "en"})
        );
        let rec = ValueRecord::uri("uri:c");
        let json = serde_json::to_value(&rec)?;
        assert_eq!(json, serde_json::json!({"value": "uri:c", "type": "uri"}));
        Ok(())
    }

    #[test]
    fn record_rejects_unknown_type() {
        let src = r#"{"value": "x", "type": "typed-literal"}"#;
        assert!(serde_json::from_str::<ValueRecord>(src).is_err());
    }

    #[test]
    fn subject_keys() {
        assert_eq!(subject_key(&Subject::iri("uri:a")), "uri:a");
        assert_eq!(subject_key(&Subject::bnode("a")), "_:a");
        assert_eq!(key_subject("_:a"), Subject::bnode("a"));
        assert_eq!(key_subject("uri:a"), Subject::iri("uri:a"));
    }

    #[test]
    fn document_equality_ignores_key_order() {
        let mut d1 = Document::new();
        d1.entry("uri:a".into())
            .or_default()
            .insert("uri:p".into(), vec![ValueRecord::literal("1")]);
        d1.entry("uri:b".into())
            .or_default()
            .insert("uri:p".into(), vec![ValueRecord::literal("2")]);
        let mut d2 = Document::new();
        d2.entry("uri:b".into())
            .or_default()
            .insert("uri:p".into(), vec![ValueRecord::literal("2")]);
        d2.entry("uri:a".into())
            .or_default()
            .insert("uri:p".into(), vec![ValueRecord::literal("1")]);
        assert_eq!(d1, d2);
    }
}
