//! This crate is part of [Sparrow],
//! a backend-neutral API for storing, querying and exchanging [RDF] triples.
//!
//! It defines the canonical representation shared by every other Sparrow crate:
//! * RDF [terms](term) and [triples](triple),
//! * the dict/JSON [document](document) form grouping triples by subject and predicate,
//!   and the SPARQL [`Binding`] rows that reuse the same [`ValueRecord`] shape,
//! * the interchange [formats](format) a store can be asked to speak,
//! * [prefix maps](prefix) used by serializers for display purposes,
//!   and the [`Stringifier`](serializer::Stringifier) trait shared by serializers.
//!
//! [Sparrow]: https://docs.rs/sparrow/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

pub mod document;
pub mod format;
pub mod prefix;
pub mod prelude;
pub mod serializer;
pub mod term;
pub mod triple;

pub use document::{Binding, Document, PredicateMap, ValueRecord, ValueType};
pub use format::Format;
pub use prefix::PrefixMap;
pub use term::{Literal, LiteralKind, Subject, Term, TermKind};
pub use triple::Triple;
