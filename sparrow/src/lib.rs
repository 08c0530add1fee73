//! Sparrow is a backend-neutral API
//! for storing, querying and exchanging [RDF] triples.
//!
//! Client code adds, removes and retrieves triples,
//! and runs SPARQL queries,
//! against any store implementing [`store::TripleStore`]
//! (and [`store::SparqlEndpoint`]),
//! choosing per call among the interchange [formats](api::Format):
//! N-Triples, RDF/XML, Turtle, JSON, or the in-memory dict [`Document`](api::Document).
//!
//! All formats converge on [N-Triples](ntriples),
//! which the [dict mapper](dict) converts to and from the dict form.
//! SPARQL SELECT and ASK results are [decoded](sparql_results)
//! into the same value records as the dict form.
//!
//! # Getting Started
//!
//! ```
//! use sparrow::inmem::MemoryStore;
//! use sparrow::store::TripleStore;
//! use sparrow::api::{Format, ValueRecord};
//!
//! let example = r#"
//!     <http://example.org/alice> <http://xmlns.com/foaf/0.1/name> "Alice" .
//!     <http://example.org/alice> <http://xmlns.com/foaf/0.1/knows> _:someone .
//! "#;
//! let mut store = MemoryStore::new();
//! store.add(Format::NTriples, example.into(), Some("people"))?;
//!
//! let doc = store.get_dict(Some("people"))?;
//! let alice = &doc["http://example.org/alice"];
//! assert_eq!(alice["http://xmlns.com/foaf/0.1/name"], vec![ValueRecord::literal("Alice")]);
//!
//! let ttl = store.get_turtle(Some("people"))?;
//! println!("{}", String::from_utf8_lossy(&ttl));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf11-primer/

pub use sparrow_api as api;
pub use sparrow_dict as dict;
pub use sparrow_inmem as inmem;
pub use sparrow_ntriples as ntriples;
pub use sparrow_rio as rio;
pub use sparrow_sparql_results as sparql_results;
pub use sparrow_store as store;
