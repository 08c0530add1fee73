//! Conversion between Rio's borrowed model and Sparrow [`Triple`]s.
use crate::Error;
use rio_api::model::{
    BlankNode, Literal as RioLiteral, NamedNode, Subject as RioSubject, Term as RioTerm,
    Triple as RioTriple,
};
use sparrow_api::term::{Literal, LiteralKind, Subject, Term};
use sparrow_api::triple::Triple;

/// Copy a Rio triple into an owned [`Triple`].
///
/// Quoted triples (RDF-star) are rejected.
pub fn triple_from_rio(t: &RioTriple<'_>) -> Result<Triple, Error> {
    let subject = match t.subject {
        RioSubject::NamedNode(n) => Subject::iri(n.iri),
        RioSubject::BlankNode(b) => Subject::bnode(b.id),
        RioSubject::Triple(_) => return Err(Error::Unsupported(t.to_string())),
    };
    let object = match t.object {
        RioTerm::NamedNode(n) => Term::iri(n.iri),
        RioTerm::BlankNode(b) => Term::bnode(b.id),
        RioTerm::Literal(RioLiteral::Simple { value }) => Literal::simple(value).into(),
        RioTerm::Literal(RioLiteral::LanguageTaggedString { value, language }) => {
            Literal::lang(value, language).into()
        }
        RioTerm::Literal(RioLiteral::Typed { value, datatype }) => {
            Literal::typed(value, datatype.iri).into()
        }
        RioTerm::Triple(_) => return Err(Error::Unsupported(t.to_string())),
    };
    Ok(Triple {
        subject,
        predicate: t.predicate.iri.to_string(),
        object,
    })
}

/// Borrow a [`Triple`] as a Rio triple.
pub fn triple_to_rio(t: &Triple) -> RioTriple<'_> {
    let subject = match &t.subject {
        Subject::Iri(iri) => NamedNode { iri }.into(),
        Subject::BlankNode(id) => BlankNode { id }.into(),
    };
    let object = match &t.object {
        Term::Iri(iri) => NamedNode { iri }.into(),
        Term::BlankNode(id) => BlankNode { id }.into(),
        Term::Literal(lit) => {
            let value = lit.value();
            match lit.kind() {
                LiteralKind::Simple => RioLiteral::Simple { value },
                LiteralKind::Lang(language) => RioLiteral::LanguageTaggedString { value, language },
                LiteralKind::Datatype(iri) => RioLiteral::Typed {
                    value,
                    datatype: NamedNode { iri },
                },
            }
            .into()
        }
    };
    RioTriple {
        subject,
        predicate: NamedNode { iri: &t.predicate },
        object,
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
