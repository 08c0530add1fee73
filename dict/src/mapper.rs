//! Conversion between sequences of [`Triple`]s and [`Document`]s.
use crate::error::ValueError;
use sparrow_api::document::{
    key_subject, subject_key, Document, ValueRecord, ValueType, BNODE_PREFIX,
};
use sparrow_api::term::{
    is_valid_bnode_id, is_valid_iri, is_valid_language_tag, Literal, Subject, Term,
};
use sparrow_api::triple::Triple;
use std::collections::HashMap;

/// Group triples by subject, then by predicate.
///
/// Predicates and values keep the order in which they were encountered.
/// Blank node subjects are keyed as `"_:<label>"`.
pub fn to_dict<I>(triples: I) -> Document
where
    I: IntoIterator<Item = Triple>,
{
    let mut doc = Document::new();
    for t in triples {
        insert(&mut doc, t);
    }
    doc
}

/// Same as [`to_dict`] for a fallible source of triples,
/// e.g. an [`NtParser`](sparrow_ntriples::NtParser).
///
/// The first error aborts the conversion; no partial document is returned.
pub fn try_to_dict<I, E>(triples: I) -> Result<Document, E>
where
    I: IntoIterator<Item = Result<Triple, E>>,
{
    let mut doc = Document::new();
    for t in triples {
        insert(&mut doc, t?);
    }
    Ok(doc)
}

fn insert(doc: &mut Document, t: Triple) {
    doc.entry(subject_key(&t.subject))
        .or_default()
        .entry(t.predicate)
        .or_default()
        .push(t.object.into());
}

/// Rebuild the triples described by `doc`, keeping its blank node labels.
///
/// Triples come out subject by subject, predicate by predicate,
/// in the order of the document.
pub fn from_dict(doc: &Document) -> Result<Vec<Triple>, ValueError> {
    map_document(doc, |id| Ok(id.to_string()))
}

/// Rebuild the triples described by `doc`,
/// replacing every distinct blank node by the next label of `substitutions`,
/// in the order in which blank nodes are first encountered (subject before object).
///
/// Unused substitutions are ignored;
/// running out of them is a [`ValueError::MissingSubstitution`].
pub fn from_dict_substituted<S>(
    doc: &Document,
    substitutions: &[S],
) -> Result<Vec<Triple>, ValueError>
where
    S: AsRef<str>,
{
    let mut next = substitutions.iter();
    let mut seen = HashMap::<String, String>::new();
    map_document(doc, |id| {
        if let Some(label) = seen.get(id) {
            return Ok(label.clone());
        }
        let label = next
            .next()
            .ok_or_else(|| ValueError::MissingSubstitution(id.to_string()))?
            .as_ref();
        if !is_valid_bnode_id(label) {
            return Err(ValueError::InvalidBnode(label.to_string()));
        }
        seen.insert(id.to_string(), label.to_string());
        Ok(label.to_string())
    })
}

/// Walk `doc`, passing every blank node label through `bnode`.
fn map_document<F>(doc: &Document, mut bnode: F) -> Result<Vec<Triple>, ValueError>
where
    F: FnMut(&str) -> Result<String, ValueError>,
{
    let mut triples = vec![];
    for (key, predicates) in doc {
        for (predicate, records) in predicates {
            if predicate.starts_with(BNODE_PREFIX)
                || predicate.is_empty()
                || !is_valid_iri(predicate)
            {
                return Err(ValueError::InvalidPredicate(predicate.clone()));
            }
            for rec in records {
                // the subject is resolved per triple, so that it is encountered before the object
                let subject = subject(key, &mut bnode)?;
                let object = term(rec, &mut bnode)?;
                triples.push(Triple {
                    subject,
                    predicate: predicate.clone(),
                    object,
                });
            }
        }
    }
    Ok(triples)
}

fn subject<F>(key: &str, bnode: &mut F) -> Result<Subject, ValueError>
where
    F: FnMut(&str) -> Result<String, ValueError>,
{
    match key_subject(key) {
        Subject::BlankNode(id) => {
            if !is_valid_bnode_id(&id) {
                return Err(ValueError::InvalidBnode(id));
            }
            Ok(Subject::BlankNode(bnode(&id)?))
        }
        Subject::Iri(iri) => {
            if !is_valid_iri(&iri) {
                return Err(ValueError::InvalidIri(iri));
            }
            Ok(Subject::Iri(iri))
        }
    }
}

/// Convert a record to a [`Term`].
///
/// An empty `lang` or `datatype` is treated as absent.
fn term<F>(rec: &ValueRecord, bnode: &mut F) -> Result<Term, ValueError>
where
    F: FnMut(&str) -> Result<String, ValueError>,
{
    let lang = rec.lang.as_deref().filter(|s| !s.is_empty());
    let datatype = rec.datatype.as_deref().filter(|s| !s.is_empty());
    if rec.kind != ValueType::Literal && (lang.is_some() || datatype.is_some()) {
        return Err(ValueError::UnexpectedAnnotation {
            kind: rec.kind,
            value: rec.value.clone(),
        });
    }
    match rec.kind {
        ValueType::Uri => {
            if !is_valid_iri(&rec.value) {
                return Err(ValueError::InvalidIri(rec.value.clone()));
            }
            Ok(Term::Iri(rec.value.clone()))
        }
        ValueType::Bnode => {
            if !is_valid_bnode_id(&rec.value) {
                return Err(ValueError::InvalidBnode(rec.value.clone()));
            }
            Ok(Term::BlankNode(bnode(&rec.value)?))
        }
        ValueType::Literal => match (lang, datatype) {
            (Some(_), Some(_)) => Err(ValueError::LangAndDatatype(rec.value.clone())),
            (Some(tag), None) => {
                if !is_valid_language_tag(tag) {
                    return Err(ValueError::InvalidLanguage(tag.to_string()));
                }
                Ok(Literal::lang(rec.value.clone(), tag).into())
            }
            (None, Some(dt)) => {
                if !is_valid_iri(dt) {
                    return Err(ValueError::InvalidIri(dt.to_string()));
                }
                Ok(Literal::typed(rec.value.clone(), dt).into())
            }
            (None, None) => Ok(Literal::simple(rec.value.clone()).into()),
        },
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use sparrow_api::document::PredicateMap;
    use test_case::test_case;

    fn doc<const N: usize>(entries: [(&str, &str, Vec<ValueRecord>); N]) -> Document {
        let mut doc = Document::new();
        for (s, p, values) in entries {
            doc.entry(s.to_string())
                .or_insert_with(PredicateMap::new)
                .insert(p.to_string(), values);
        }
        doc
    }

    #[test]
    fn groups_by_subject_and_predicate() {
        let triples = vec![
            Triple::new(Subject::iri("uri:a"), "uri:p", Term::literal("1")),
            Triple::new(Subject::iri("uri:b"), "uri:p", Term::literal("2")),
            Triple::new(Subject::iri("uri:a"), "uri:q", Term::iri("uri:x")),
            Triple::new(Subject::iri("uri:a"), "uri:p", Term::literal("3")),
            Triple::new(Subject::bnode("n"), "uri:p", Term::bnode("m")),
        ];
        let got = to_dict(triples);
        let exp = doc([
            (
                "uri:a",
                "uri:p",
                vec![ValueRecord::literal("1"), ValueRecord::literal("3")],
            ),
            ("uri:a", "uri:q", vec![ValueRecord::uri("uri:x")]),
            ("uri:b", "uri:p", vec![ValueRecord::literal("2")]),
            ("_:n", "uri:p", vec![ValueRecord::bnode("m")]),
        ]);
        assert_eq!(got, exp);
        let preds: Vec<_> = got["uri:a"].keys().collect();
        assert_eq!(preds, vec!["uri:p", "uri:q"]);
    }

    #[test]
    fn round_trip_without_blank_nodes() -> Result<(), ValueError> {
        let d = doc([
            (
                "uri:a",
                "uri:p",
                vec![
                    ValueRecord::literal("chat").with_lang("fr"),
                    ValueRecord::literal("42").with_datatype("uri:int"),
                ],
            ),
            ("uri:b", "uri:q", vec![ValueRecord::uri("uri:a")]),
        ]);
        assert_eq!(to_dict(from_dict(&d)?), d);
        Ok(())
    }

    #[test]
    fn substitution_is_per_distinct_blank_node() -> Result<(), ValueError> {
        let d = doc([
            ("_:x", "uri:p", vec![ValueRecord::bnode("y"), ValueRecord::bnode("x")]),
            ("_:y", "uri:p", vec![ValueRecord::literal("z")]),
        ]);
        let got = from_dict_substituted(&d, &["a", "c", "unused"])?;
        assert_eq!(
            got,
            vec![
                Triple::new(Subject::bnode("a"), "uri:p", Term::bnode("c")),
                Triple::new(Subject::bnode("a"), "uri:p", Term::bnode("a")),
                Triple::new(Subject::bnode("c"), "uri:p", Term::literal("z")),
            ]
        );
        Ok(())
    }

    #[test]
    fn missing_substitution() {
        let d = doc([("_:x", "uri:p", vec![ValueRecord::bnode("y")])]);
        let err = from_dict_substituted(&d, &["a"]).unwrap_err();
        assert!(matches!(err, ValueError::MissingSubstitution(id) if id == "y"));
    }

    #[test]
    fn invalid_substitution() {
        let d = doc([("_:x", "uri:p", vec![ValueRecord::literal("y")])]);
        let err = from_dict_substituted(&d, &["not valid"]).unwrap_err();
        assert!(matches!(err, ValueError::InvalidBnode(_)));
    }

    #[test]
    fn substitutions_apply_to_fresh_documents() -> Result<(), ValueError> {
        let d = doc([("uri:a", "uri:p", vec![ValueRecord::uri("uri:b")])]);
        let no_subs: &[&str] = &[];
        assert_eq!(from_dict_substituted(&d, no_subs)?, from_dict(&d)?);
        Ok(())
    }

    #[test_case(ValueRecord::literal("x").with_lang("en").with_datatype("uri:t") ; "lang and datatype")]
    #[test_case(ValueRecord::uri("uri:x").with_lang("en") ; "uri with lang")]
    #[test_case(ValueRecord::bnode("x").with_datatype("uri:t") ; "bnode with datatype")]
    #[test_case(ValueRecord::uri("not an iri") ; "invalid iri")]
    #[test_case(ValueRecord::bnode("_:x") ; "bnode with prefix")]
    #[test_case(ValueRecord::literal("x").with_lang("en_US") ; "invalid lang")]
    #[test_case(ValueRecord::literal("x").with_datatype("uri:a b") ; "invalid datatype")]
    fn invalid_record(rec: ValueRecord) {
        let d = doc([("uri:a", "uri:p", vec![rec])]);
        assert!(from_dict(&d).is_err());
    }

    #[test]
    fn lang_and_datatype_error_kind() {
        let rec = ValueRecord::literal("x").with_lang("en").with_datatype("uri:t");
        let d = doc([("uri:a", "uri:p", vec![rec])]);
        assert!(matches!(from_dict(&d), Err(ValueError::LangAndDatatype(_))));
    }

    #[test]
    fn empty_annotations_are_ignored() -> Result<(), ValueError> {
        let rec = ValueRecord::literal("x").with_lang("").with_datatype("");
        let d = doc([("uri:a", "uri:p", vec![rec])]);
        assert_eq!(from_dict(&d)?[0].object, Term::literal("x"));
        Ok(())
    }

    #[test_case("_:b" ; "blank node")]
    #[test_case("" ; "empty")]
    #[test_case("uri:a b" ; "space")]
    fn invalid_predicate(p: &str) {
        let d = doc([("uri:a", p, vec![ValueRecord::literal("x")])]);
        assert!(matches!(from_dict(&d), Err(ValueError::InvalidPredicate(_))));
    }

    #[test_case("_:" ; "empty bnode")]
    #[test_case("uri:a b" ; "space in iri")]
    fn invalid_subject(s: &str) {
        let d = doc([(s, "uri:p", vec![ValueRecord::literal("x")])]);
        assert!(from_dict(&d).is_err());
    }
}
