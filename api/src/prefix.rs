//! A prefix map associates prefixes to namespaces.
//!
//! Prefix maps are only used for display-time serialization (e.g. Turtle),
//! and are always passed explicitly to the serializer that needs them.
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

lazy_static! {
    /// `PN_PREFIX` from Turtle, restricted to ASCII (the empty prefix is allowed).
    static ref PN_PREFIX: Regex = Regex::new(r"^(?:[A-Za-z](?:[A-Za-z0-9_.\-]*[A-Za-z0-9_\-])?)?$").unwrap();
}

/// An ordered list of prefix/namespace pairs.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PrefixMap {
    pairs: Vec<(String, String)>,
}

impl PrefixMap {
    /// Build an empty prefix map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a prefix map binding `rdf:`, `rdfs:` and `xsd:`.
    pub fn rdf_defaults() -> Self {
        let pairs = [
            ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
            ("rdfs", "http://www.w3.org/2000/01/rdf-schema#"),
            ("xsd", "http://www.w3.org/2001/XMLSchema#"),
        ];
        PrefixMap {
            pairs: pairs
                .into_iter()
                .map(|(p, n)| (p.to_string(), n.to_string()))
                .collect(),
        }
    }

    /// Bind `prefix` to `namespace`, replacing any previous binding of `prefix`.
    pub fn insert<P, N>(&mut self, prefix: P, namespace: N) -> Result<(), InvalidPrefix>
    where
        P: Into<String>,
        N: Into<String>,
    {
        let prefix = prefix.into();
        if !PN_PREFIX.is_match(&prefix) {
            return Err(InvalidPrefix(prefix));
        }
        let namespace = namespace.into();
        match self.pairs.iter_mut().find(|(p, _)| *p == prefix) {
            Some(pair) => pair.1 = namespace,
            None => self.pairs.push((prefix, namespace)),
        }
        Ok(())
    }

    /// Transform this map by binding `prefix` to `namespace`.
    pub fn with<P, N>(mut self, prefix: P, namespace: N) -> Result<Self, InvalidPrefix>
    where
        P: Into<String>,
        N: Into<String>,
    {
        self.insert(prefix, namespace)?;
        Ok(self)
    }

    /// Return the namespace associated to this prefix, if any.
    pub fn get_namespace(&self, prefix: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, n)| n.as_str())
    }

    /// Return a prefix-suffix pair describing `iri`, if any,
    /// guaranteeing that the suffix will satisfy `suffix_check`.
    ///
    /// When several namespaces match, the longest one wins.
    pub fn get_checked_prefixed_pair<'s, F>(
        &'s self,
        iri: &'s str,
        suffix_check: F,
    ) -> Option<(&'s str, &'s str)>
    where
        F: Fn(&str) -> bool,
    {
        let mut matched = 0;
        let mut found = None;
        for (p, n) in &self.pairs {
            if iri.starts_with(n.as_str()) && n.len() > matched {
                let suffix = &iri[n.len()..];
                if suffix_check(suffix) {
                    matched = n.len();
                    found = Some((p.as_str(), suffix));
                }
            }
        }
        found
    }

    /// Iterate over the prefix/namespace pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    /// Number of bound prefixes.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no prefix is bound.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// This error is raised when trying to bind an invalid prefix.
#[derive(Debug, Error)]
#[error("The given prefix '{0}' does not comply with Turtle's PN_PREFIX")]
pub struct InvalidPrefix(pub String);

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
