//! This crate is part of [Sparrow],
//! a backend-neutral API for storing, querying and exchanging [RDF] triples.
//!
//! It defines the capability contract of triple store backends:
//! - [`TripleStore`] to add, remove and retrieve triples in any [`Format`],
//!   per context (named graph);
//! - [`SparqlEndpoint`] to run SELECT, ASK and CONSTRUCT queries;
//! - [`SparqlProtocol`] for backends returning serialized query results,
//!   which get [`SparqlEndpoint`] for free.
//!
//! Backends only deal with N-Triples:
//! every other format is converted by the provided methods of [`TripleStore`].
//!
//! [Sparrow]: https://docs.rs/sparrow/
//! [RDF]: https://www.w3.org/TR/rdf11-primer/
//! [`Format`]: sparrow_api::Format
#![deny(missing_docs)]

mod error;
pub use error::*;
pub mod source;
pub use source::{ClosureLoader, DataSource, FileUrlLoader, NoLoader, UriLoader};
pub mod sparql;
pub use sparql::{SparqlEndpoint, SparqlProtocol};
pub mod store;
pub use store::{GraphOutput, TripleStore};

#[cfg(test)]
pub(crate) fn test_setup() {
    TEST_SETUP.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
