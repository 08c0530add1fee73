//! I define the JSON form of [`Document`]s.
//!
//! JSON input is checked record by record,
//! so that an unknown `type` tag is reported as [`ValueError::UnknownType`]
//! rather than as a generic deserialization error.
use crate::error::ValueError;
use indexmap::IndexMap;
use serde::Deserialize;
use sparrow_api::document::{Document, PredicateMap, ValueRecord, ValueType};
use std::io::Read;

/// Configuration of the JSON serialization of documents.
#[derive(Clone, Debug)]
pub struct JsonConfig {
    pub(crate) pretty: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        JsonConfig { pretty: true }
    }
}

impl JsonConfig {
    /// Whether the output is indented (the default) or compact.
    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Transform a [`JsonConfig`] by setting [`pretty`](JsonConfig::pretty).
    #[must_use]
    pub fn with_pretty(mut self, b: bool) -> Self {
        self.pretty = b;
        self
    }
}

/// A record as found in JSON, before its `type` tag is checked.
#[derive(Deserialize)]
struct RawRecord {
    value: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    lang: Option<String>,
    #[serde(default)]
    datatype: Option<String>,
}

type RawDocument = IndexMap<String, IndexMap<String, Vec<RawRecord>>>;

/// Serialize a document to JSON.
pub fn to_json(doc: &Document, config: &JsonConfig) -> Result<String, ValueError> {
    let txt = if config.pretty {
        serde_json::to_string_pretty(doc)?
    } else {
        serde_json::to_string(doc)?
    };
    Ok(txt)
}

/// Read a document from JSON text.
pub fn from_json_str(txt: &str) -> Result<Document, ValueError> {
    check(serde_json::from_str(txt)?)
}

/// Read a document from a JSON stream.
pub fn from_json<R: Read>(read: R) -> Result<Document, ValueError> {
    check(serde_json::from_reader(read)?)
}

fn check(raw: RawDocument) -> Result<Document, ValueError> {
    raw.into_iter()
        .map(|(subject, predicates)| -> Result<_, ValueError> {
            let predicates = predicates
                .into_iter()
                .map(|(predicate, records)| -> Result<_, ValueError> {
                    let records = records
                        .into_iter()
                        .map(check_record)
                        .collect::<Result<Vec<_>, _>>()?;
                    Ok((predicate, records))
                })
                .collect::<Result<PredicateMap, ValueError>>()?;
            Ok((subject, predicates))
        })
        .collect()
}

fn check_record(raw: RawRecord) -> Result<ValueRecord, ValueError> {
    let kind = ValueType::from_tag(&raw.kind).ok_or(ValueError::UnknownType(raw.kind))?;
    Ok(ValueRecord {
        value: raw.value,
        kind,
        lang: raw.lang,
        datatype: raw.datatype,
    })
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
