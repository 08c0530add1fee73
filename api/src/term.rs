//! I define how RDF terms
//! (such as [IRIs](https://www.w3.org/TR/rdf11-concepts/#section-IRIs),
//! [blank nodes](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
//! and [literals](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal))
//! are represented in Sparrow.
//!
//! Unlike richer RDF toolkits, Sparrow uses a single owned representation ([`Term`]),
//! because every conversion produces fresh values owned by the caller.
//!
//! The lexical checks provided here ([`is_valid_iri`], [`is_valid_bnode_id`], [`is_valid_language_tag`])
//! only guarantee that a term can be written to, and read back from, the N-Triples syntax.
//! They do not validate RDF semantics.
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    /// Blank node identifiers are opaque ASCII tokens.
    ///
    /// This is the ASCII subset of Turtle's `BLANK_NODE_LABEL` (without the leading `_:`):
    /// dots are allowed inside the label, but not at its end.
    static ref BNODE_ID: Regex = Regex::new(r"^[A-Za-z0-9_](?:[A-Za-z0-9_.\-]*[A-Za-z0-9_\-])?$").unwrap();
    /// `LANGTAG ::= '@' [a-zA-Z]+ ('-' [a-zA-Z0-9]+)*` (without the leading '@').
    static ref LANG_TAG: Regex = Regex::new(r"^[A-Za-z]+(?:-[A-Za-z0-9]+)*$").unwrap();
}

/// The different kinds of terms that a [`Term`] can represent.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum TermKind {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri,
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    BlankNode,
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal,
}

/// An RDF term.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum Term {
    /// An IRI, without its `<` `>` delimiters.
    Iri(String),
    /// A blank node, identified by its label (without the leading `_:`).
    ///
    /// The label is only meaningful within the scope of one parse/serialize operation.
    BlankNode(String),
    /// A literal.
    Literal(Literal),
}

impl Term {
    /// Build an IRI term.
    pub fn iri<T: Into<String>>(iri: T) -> Self {
        Term::Iri(iri.into())
    }

    /// Build a blank node term.
    pub fn bnode<T: Into<String>>(id: T) -> Self {
        Term::BlankNode(id.into())
    }

    /// Build a simple literal term.
    pub fn literal<T: Into<String>>(value: T) -> Self {
        Term::Literal(Literal::simple(value))
    }

    /// Build a language-tagged literal term.
    pub fn literal_lang<T: Into<String>, U: Into<String>>(value: T, lang: U) -> Self {
        Term::Literal(Literal::lang(value, lang))
    }

    /// Build a literal term with an explicit datatype.
    pub fn literal_dt<T: Into<String>, U: Into<String>>(value: T, datatype: U) -> Self {
        Term::Literal(Literal::typed(value, datatype))
    }

    /// The kind of this term.
    pub fn kind(&self) -> TermKind {
        match self {
            Term::Iri(_) => TermKind::Iri,
            Term::BlankNode(_) => TermKind::BlankNode,
            Term::Literal(_) => TermKind::Literal,
        }
    }

    /// The IRI, blank node label or lexical form of this term.
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::BlankNode(id) => id,
            Term::Literal(lit) => lit.value(),
        }
    }

    /// Return the [`Literal`] held by this term, if any.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Whether this term is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Term::Iri(_))
    }

    /// Whether this term is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    /// Whether this term is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }
}

impl From<Literal> for Term {
    fn from(other: Literal) -> Self {
        Term::Literal(other)
    }
}

impl From<Subject> for Term {
    fn from(other: Subject) -> Self {
        match other {
            Subject::Iri(iri) => Term::Iri(iri),
            Subject::BlankNode(id) => Term::BlankNode(id),
        }
    }
}

/// The annotation carried by a [`Literal`].
///
/// Language tag and datatype are mutually exclusive, which this type enforces.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum LiteralKind {
    /// A plain literal, with neither language tag nor datatype.
    Simple,
    /// A language-tagged literal.
    Lang(String),
    /// A literal with an explicit datatype IRI.
    Datatype(String),
}

/// An RDF literal: a lexical form and an optional annotation.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct Literal {
    value: String,
    kind: LiteralKind,
}

impl Literal {
    /// Build a literal from its parts.
    pub fn new<T: Into<String>>(value: T, kind: LiteralKind) -> Self {
        Literal {
            value: value.into(),
            kind,
        }
    }

    /// Build a plain literal.
    pub fn simple<T: Into<String>>(value: T) -> Self {
        Self::new(value, LiteralKind::Simple)
    }

    /// Build a language-tagged literal.
    pub fn lang<T: Into<String>, U: Into<String>>(value: T, lang: U) -> Self {
        Self::new(value, LiteralKind::Lang(lang.into()))
    }

    /// Build a literal with an explicit datatype.
    pub fn typed<T: Into<String>, U: Into<String>>(value: T, datatype: U) -> Self {
        Self::new(value, LiteralKind::Datatype(datatype.into()))
    }

    /// The lexical form of this literal (unescaped).
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The annotation of this literal.
    pub fn kind(&self) -> &LiteralKind {
        &self.kind
    }

    /// The language tag of this literal, if any.
    pub fn language(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Lang(tag) => Some(tag),
            _ => None,
        }
    }

    /// The datatype IRI of this literal, if explicitly given.
    pub fn datatype(&self) -> Option<&str> {
        match &self.kind {
            LiteralKind::Datatype(dt) => Some(dt),
            _ => None,
        }
    }

    /// Split this literal into its lexical form and annotation.
    pub fn into_parts(self) -> (String, LiteralKind) {
        (self.value, self.kind)
    }
}

/// The terms allowed in subject position: IRIs and blank nodes.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub enum Subject {
    /// An IRI, without its `<` `>` delimiters.
    Iri(String),
    /// A blank node label, without the leading `_:`.
    BlankNode(String),
}

impl Subject {
    /// Build an IRI subject.
    pub fn iri<T: Into<String>>(iri: T) -> Self {
        Subject::Iri(iri.into())
    }

    /// Build a blank node subject.
    pub fn bnode<T: Into<String>>(id: T) -> Self {
        Subject::BlankNode(id.into())
    }

    /// The IRI or blank node label of this subject.
    pub fn value(&self) -> &str {
        match self {
            Subject::Iri(iri) => iri,
            Subject::BlankNode(id) => id,
        }
    }

    /// Whether this subject is a blank node.
    pub fn is_blank_node(&self) -> bool {
        matches!(self, Subject::BlankNode(_))
    }
}

/// Literals can not be subjects: the rejected term is handed back.
impl TryFrom<Term> for Subject {
    type Error = Term;

    fn try_from(other: Term) -> Result<Self, Term> {
        match other {
            Term::Iri(iri) => Ok(Subject::Iri(iri)),
            Term::BlankNode(id) => Ok(Subject::BlankNode(id)),
            lit @ Term::Literal(_) => Err(lit),
        }
    }
}

impl fmt::Display for TermKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TermKind::Iri => "IRI",
            TermKind::BlankNode => "blank node",
            TermKind::Literal => "literal",
        };
        f.write_str(name)
    }
}

/// Check that `iri` can be written between `<` and `>` and read back unchanged.
///
/// IRIs are never escaped by Sparrow, so they must not contain
/// the delimiters, a double quote, whitespace or control characters.
pub fn is_valid_iri(iri: &str) -> bool {
    !iri.chars()
        .any(|c| c <= ' ' || c == '<' || c == '>' || c == '"' || c == '\u{7f}')
}

/// Check that `id` is a valid blank node label (without the leading `_:`).
pub fn is_valid_bnode_id(id: &str) -> bool {
    BNODE_ID.is_match(id)
}

/// Check that `tag` is a syntactically valid language tag (without the leading `@`).
pub fn is_valid_language_tag(tag: &str) -> bool {
    LANG_TAG.is_match(tag)
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use test_case::test_case;

    #[test_case("http://example.org/", true ; "http")]
    #[test_case("uri:a", true ; "urn like")]
    #[test_case("c:\\temp", true ; "backslash is kept verbatim")]
    #[test_case("http://example.org/a b", false ; "space")]
    #[test_case("http://example.org/<", false ; "lt")]
    #[test_case("http://example.org/>", false ; "gt")]
    #[test_case("a\nb", false ; "newline")]
    fn iri(txt: &str, valid: bool) {
        assert_eq!(is_valid_iri(txt), valid);
    }

    #[test_case("a", true ; "single letter")]
    #[test_case("b0", true ; "letter digit")]
    #[test_case("0b", true ; "leading digit")]
    #[test_case("a.b-c_d", true ; "inner punctuation")]
    #[test_case("a.", false ; "trailing dot")]
    #[test_case("", false ; "empty")]
    #[test_case("a b", false ; "space")]
    #[test_case("été", false ; "non ascii")]
    fn bnode_id(txt: &str, valid: bool) {
        assert_eq!(is_valid_bnode_id(txt), valid);
    }

    #[test_case("en", true ; "simple")]
    #[test_case("en-US", true ; "region")]
    #[test_case("de-CH-1996", true ; "variant")]
    #[test_case("", false ; "empty")]
    #[test_case("en-", false ; "trailing dash")]
    #[test_case("1en", false ; "leading digit")]
    fn language_tag(txt: &str, valid: bool) {
        assert_eq!(is_valid_language_tag(txt), valid);
    }

    #[test]
    fn literal_accessors() {
        let lit = Literal::lang("chat", "fr");
        assert_eq!(lit.value(), "chat");
        assert_eq!(lit.language(), Some("fr"));
        assert_eq!(lit.datatype(), None);

        let lit = Literal::typed("42", "http://www.w3.org/2001/XMLSchema#integer");
        assert_eq!(lit.language(), None);
        assert_eq!(
            lit.datatype(),
            Some("http://www.w3.org/2001/XMLSchema#integer")
        );
    }

    #[test]
    fn subject_from_term() {
        assert_eq!(
            Subject::try_from(Term::iri("uri:a")),
            Ok(Subject::iri("uri:a"))
        );
        assert_eq!(
            Subject::try_from(Term::bnode("b")),
            Ok(Subject::bnode("b"))
        );
        assert_eq!(
            Subject::try_from(Term::literal("x")),
            Err(Term::literal("x"))
        );
    }

    #[test]
    fn term_kind() {
        assert_eq!(Term::iri("uri:a").kind(), TermKind::Iri);
        assert_eq!(Term::bnode("b").kind(), TermKind::BlankNode);
        assert_eq!(Term::literal_lang("x", "en").kind(), TermKind::Literal);
        assert_eq!(Term::literal_dt("x", "uri:dt").value(), "x");
    }
}
