//! This crate is part of [Sparrow],
//! a backend-neutral API for storing, querying and exchanging [RDF] triples.
//!
//! It provides [`MemoryStore`], an in-memory implementation of
//! [`TripleStore`](sparrow_store::TripleStore),
//! used as the reference backend of the store contract.
//!
//! ```
//! # use sparrow_inmem::MemoryStore;
//! use sparrow_store::TripleStore;
//!
//! let mut store = MemoryStore::new();
//! store.add_turtle(
//!     "<tag:a> <tag:b> \"c\"@en .".into(),
//!     Some("test"),
//!     None,
//! )?;
//! assert_eq!(store.count(None)?, Some(1));
//! assert_eq!(store.contexts()?, vec!["test"]);
//! assert_eq!(store.get_ntriples(Some("test"))?, b"<tag:a> <tag:b> \"c\"@en .\n");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! [Sparrow]: https://docs.rs/sparrow/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
#![deny(missing_docs)]

mod config;
pub use config::*;
mod store;
pub use store::*;
