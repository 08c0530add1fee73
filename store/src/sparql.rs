//! I define the SPARQL side of a store:
//! [`SparqlEndpoint`] for running queries,
//! and [`SparqlProtocol`] for backends answering over the SPARQL protocol.
use crate::store::GraphOutput;
use crate::StoreError;
use log::{trace, warn};
use sparrow_api::document::Binding;
use sparrow_api::format::Format;
use sparrow_dict::JsonConfig;
use sparrow_sparql_results::QueryResults;

/// The media type requested for SELECT and ASK results.
pub const SPARQL_RESULTS_XML: &str = "application/sparql-results+xml";

/// The prefix of error bodies some servers send along with a success status.
const SERVER_ERROR: &str = "Server error:";

/// A store that can be queried with SPARQL.
pub trait SparqlEndpoint {
    /// Run a SELECT query and return its rows.
    fn select(&self, sparql: &str) -> Result<Vec<Binding>, StoreError>;

    /// Run an ASK query and return its answer.
    fn ask(&self, sparql: &str) -> Result<bool, StoreError>;

    /// Run a CONSTRUCT query and return the resulting graph in `format`.
    fn construct(&self, sparql: &str, format: Format) -> Result<GraphOutput, StoreError>;
}

/// A store answering SPARQL queries with serialized results.
///
/// Implementing this trait is enough to get [`SparqlEndpoint`]:
/// SELECT and ASK results are requested as [`SPARQL_RESULTS_XML`] and decoded,
/// CONSTRUCT results are requested as N-Triples for [`Format::Json`] and [`Format::Dict`],
/// and converted with the dict mapper.
pub trait SparqlProtocol {
    /// Run `sparql`, asking for results of media type `accept`, and return the response body.
    ///
    /// Non-success responses are expected to be reported as
    /// [`StoreError::Query`] or [`StoreError::Status`].
    fn query(&self, sparql: &str, accept: &str) -> Result<Vec<u8>, StoreError>;
}

impl<T: SparqlProtocol + ?Sized> SparqlEndpoint for T {
    fn select(&self, sparql: &str) -> Result<Vec<Binding>, StoreError> {
        match query_results(self, sparql)? {
            QueryResults::Bindings(rows) => Ok(rows),
            QueryResults::Boolean(_) => Err(StoreError::Query(
                "SELECT query answered with a boolean".to_string(),
            )),
        }
    }

    fn ask(&self, sparql: &str) -> Result<bool, StoreError> {
        match query_results(self, sparql)? {
            QueryResults::Boolean(b) => Ok(b),
            QueryResults::Bindings(_) => Err(StoreError::Query(
                "ASK query answered with bindings".to_string(),
            )),
        }
    }

    fn construct(&self, sparql: &str, format: Format) -> Result<GraphOutput, StoreError> {
        let wire = if format.is_mapped() {
            Format::NTriples
        } else {
            format
        };
        let accept = wire
            .mime_type()
            .ok_or_else(|| StoreError::Unsupported(format!("no media type for {wire}")))?;
        let body = checked_query(self, sparql, accept)?;
        Ok(match format {
            Format::Json => GraphOutput::Bytes(
                sparrow_dict::ntriples_to_json(&body[..], &JsonConfig::default())?.into_bytes(),
            ),
            Format::Dict => GraphOutput::Document(sparrow_dict::ntriples_to_dict(&body[..])?),
            _ => GraphOutput::Bytes(body),
        })
    }
}

fn query_results<T: SparqlProtocol + ?Sized>(
    endpoint: &T,
    sparql: &str,
) -> Result<QueryResults, StoreError> {
    let body = checked_query(endpoint, sparql, SPARQL_RESULTS_XML)?;
    Ok(sparrow_sparql_results::from_slice(&body)?)
}

fn checked_query<T: SparqlProtocol + ?Sized>(
    endpoint: &T,
    sparql: &str,
    accept: &str,
) -> Result<Vec<u8>, StoreError> {
    trace!("querying ({accept}):\n{sparql}");
    let body = endpoint.query(sparql, accept)?;
    if let Some(msg) = body.strip_prefix(SERVER_ERROR.as_bytes()) {
        let msg = String::from_utf8_lossy(msg).trim().to_string();
        warn!("server reported an error with a success status: {msg}");
        return Err(StoreError::Query(msg));
    }
    Ok(body)
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use sparrow_api::document::ValueRecord;
    use std::cell::RefCell;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    /// Answers every query with the same body, and records the requested media types.
    struct MockEndpoint {
        body: &'static str,
        accepted: RefCell<Vec<String>>,
    }

    impl MockEndpoint {
        fn new(body: &'static str) -> Self {
            crate::test_setup();
            MockEndpoint {
                body,
                accepted: RefCell::new(vec![]),
            }
        }
    }

    impl SparqlProtocol for MockEndpoint {
        fn query(&self, _sparql: &str, accept: &str) -> Result<Vec<u8>, StoreError> {
            self.accepted.borrow_mut().push(accept.to_string());
            Ok(self.body.as_bytes().to_vec())
        }
    }

    const SELECT: &str = r#"<?xml version="1.0"?>
<sparql xmlns="http://www.w3.org/2005/sparql-results#">
  <head><variable name="grape"/></head>
  <results>
    <result><binding name="grape"><uri>http://example.org/Merlot</uri></binding></result>
  </results>
</sparql>"#;

    const ASK: &str = r#"<sparql xmlns="http://www.w3.org/2005/sparql-results#">
  <head/><boolean>false</boolean>
</sparql>"#;

    #[test]
    fn select() -> TestResult {
        let ep = MockEndpoint::new(SELECT);
        let rows = ep.select("SELECT ?grape { ?grape a :Grape }")?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["grape"], ValueRecord::uri("http://example.org/Merlot"));
        assert_eq!(*ep.accepted.borrow(), vec![SPARQL_RESULTS_XML]);
        Ok(())
    }

    #[test]
    fn ask() -> TestResult {
        assert!(!MockEndpoint::new(ASK).ask("ASK {}")?);
        Ok(())
    }

    #[test]
    fn wrong_result_form() {
        assert!(matches!(
            MockEndpoint::new(ASK).select("SELECT * {}"),
            Err(StoreError::Query(_))
        ));
        assert!(matches!(
            MockEndpoint::new(SELECT).ask("ASK {}"),
            Err(StoreError::Query(_))
        ));
    }

    #[test]
    fn server_error_body() {
        let ep = MockEndpoint::new("Server error: unexpected token");
        match ep.select("SELECT") {
            Err(StoreError::Query(msg)) => assert_eq!(msg, "unexpected token"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn malformed_results() {
        assert!(matches!(
            MockEndpoint::new("<html/>").select("SELECT * {}"),
            Err(StoreError::Parse(_))
        ));
    }

    #[test]
    fn construct_dict() -> TestResult {
        let ep = MockEndpoint::new("<uri:a> <uri:b> \"c\"@en .\n");
        let doc = ep
            .construct("CONSTRUCT {}", Format::Dict)?
            .into_document()
            .ok_or("expected a document")?;
        assert_eq!(doc["uri:a"]["uri:b"], vec![ValueRecord::literal("c").with_lang("en")]);
        assert_eq!(*ep.accepted.borrow(), vec!["text/plain"]);
        Ok(())
    }

    #[test]
    fn construct_json() -> TestResult {
        let ep = MockEndpoint::new("<uri:a> <uri:b> <uri:c> .\n");
        let json = ep
            .construct("CONSTRUCT {}", Format::Json)?
            .into_bytes()
            .ok_or("expected bytes")?;
        let doc = sparrow_dict::from_json(&json[..])?;
        assert_eq!(doc["uri:a"]["uri:b"], vec![ValueRecord::uri("uri:c")]);
        Ok(())
    }

    #[test]
    fn construct_passes_other_formats_through() -> TestResult {
        let ep = MockEndpoint::new("@prefix : <uri:> .");
        let got = ep.construct("CONSTRUCT {}", Format::Turtle)?;
        assert_eq!(got, GraphOutput::Bytes(b"@prefix : <uri:> .".to_vec()));
        assert_eq!(*ep.accepted.borrow(), vec!["application/x-turtle"]);
        Ok(())
    }

    #[test]
    fn construct_with_syntax_error() {
        let ep = MockEndpoint::new("<uri:a> <uri:b> .\n");
        assert!(matches!(
            ep.construct("CONSTRUCT {}", Format::Dict),
            Err(StoreError::Syntax(_))
        ));
    }
}
