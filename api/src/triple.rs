//! An RDF triple expresses a single fact.
//! Its formed of three terms called *subject*, *predicate* and *object*.
//!
//! In Sparrow, the shape of a triple is enforced by its type:
//! the subject is a [`Subject`] (IRI or blank node),
//! the predicate is always an IRI,
//! and only the object may be any [`Term`].
use crate::term::{Subject, Term};

/// A canonical RDF triple.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialOrd, PartialEq)]
pub struct Triple {
    /// The subject of this triple.
    pub subject: Subject,
    /// The predicate IRI of this triple, without its `<` `>` delimiters.
    pub predicate: String,
    /// The object of this triple.
    pub object: Term,
}

impl Triple {
    /// Build a triple from its three parts.
    pub fn new<S, P, O>(subject: S, predicate: P, object: O) -> Self
    where
        S: Into<Subject>,
        P: Into<String>,
        O: Into<Term>,
    {
        Triple {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Subject {
        &self.subject
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &str {
        &self.predicate
    }

    /// The object of this triple.
    pub fn o(&self) -> &Term {
        &self.object
    }

    /// Whether this triple mentions at least one blank node.
    pub fn has_blank_node(&self) -> bool {
        self.subject.is_blank_node() || self.object.is_blank_node()
    }

    /// Apply `f` to the label of every blank node of this triple,
    /// in subject-then-object order.
    pub fn map_blank_nodes<F>(self, mut f: F) -> Self
    where
        F: FnMut(String) -> String,
    {
        let subject = match self.subject {
            Subject::BlankNode(id) => Subject::BlankNode(f(id)),
            other => other,
        };
        let object = match self.object {
            Term::BlankNode(id) => Term::BlankNode(f(id)),
            other => other,
        };
        Triple {
            subject,
            predicate: self.predicate,
            object,
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn map_blank_nodes_visits_subject_first() {
        let t = Triple::new(Subject::bnode("x"), "uri:p", Term::bnode("y"));
        let mut seen = vec![];
        let t = t.map_blank_nodes(|id| {
            seen.push(id.clone());
            format!("{id}{id}")
        });
        assert_eq!(seen, vec!["x", "y"]);
        assert_eq!(t.subject, Subject::bnode("xx"));
        assert_eq!(t.object, Term::bnode("yy"));
    }

    #[test]
    fn map_blank_nodes_leaves_other_terms() {
        let t = Triple::new(Subject::iri("uri:s"), "uri:p", Term::literal("o"));
        assert!(!t.has_blank_node());
        let t2 = t.clone().map_blank_nodes(|_| unreachable!());
        assert_eq!(t, t2);
    }
}
