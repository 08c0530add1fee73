//! I define the [`TripleStore`] trait,
//! the operations every triple store backend exposes.
//!
//! Backends only implement the N-Triples operations;
//! every other format is converted to or from N-Triples by the provided methods.
//! Backends speaking a format natively may override the corresponding methods.
use crate::source::{DataSource, FileUrlLoader, UriLoader};
use crate::StoreError;
use log::debug;
use sparrow_api::document::Document;
use sparrow_api::format::Format;
use sparrow_api::prefix::PrefixMap;
use sparrow_dict::JsonConfig;
use sparrow_rio::{RdfXmlConfig, TurtleConfig};

/// The result of serializing a graph in some [`Format`].
#[derive(Clone, Debug, PartialEq)]
pub enum GraphOutput {
    /// Serialized data, for every format except [`Format::Dict`].
    Bytes(Vec<u8>),
    /// A dict document, for [`Format::Dict`].
    Document(Document),
}

impl GraphOutput {
    /// Return the serialized data, if any.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            GraphOutput::Bytes(b) => Some(b),
            GraphOutput::Document(_) => None,
        }
    }

    /// Return the dict document, if any.
    pub fn into_document(self) -> Option<Document> {
        match self {
            GraphOutput::Document(d) => Some(d),
            GraphOutput::Bytes(_) => None,
        }
    }
}

/// A triple store, partitioned into contexts (named graphs).
///
/// A `context` of `None` denotes the default graph.
pub trait TripleStore {
    /// Add the N-Triples of `data` to `context`.
    fn add_ntriples(&mut self, data: DataSource, context: Option<&str>) -> Result<(), StoreError>;

    /// Remove the N-Triples of `data` from `context`.
    fn remove_ntriples(&mut self, data: DataSource, context: Option<&str>)
        -> Result<(), StoreError>;

    /// Serialize the triples of `context` as N-Triples.
    fn get_ntriples(&self, context: Option<&str>) -> Result<Vec<u8>, StoreError>;

    /// List the names of the non-empty named contexts.
    fn contexts(&self) -> Result<Vec<String>, StoreError>;

    /// Remove every triple of `context`.
    fn clear(&mut self, context: Option<&str>) -> Result<(), StoreError>;

    /// Count the triples in `context`, or in the whole store if `context` is `None`.
    ///
    /// `Ok(None)` means that the backend can not count.
    fn count(&self, context: Option<&str>) -> Result<Option<usize>, StoreError>;

    /// Bind `prefix` to `namespace` for the serializations that use prefixes.
    fn register_prefix(&mut self, prefix: &str, namespace: &str) -> Result<(), StoreError>;

    /// The prefixes registered so far.
    fn namespaces(&self) -> &PrefixMap;

    /// The loader used to open [`DataSource::Uri`]s.
    fn loader(&self) -> &dyn UriLoader {
        &FileUrlLoader
    }

    /// Add the JSON document of `data` to `context`.
    fn add_json(&mut self, data: DataSource, context: Option<&str>) -> Result<(), StoreError> {
        let nt = json_to_nt(data, self.loader())?;
        self.add_ntriples(nt, context)
    }

    /// Remove the JSON document of `data` from `context`.
    fn remove_json(&mut self, data: DataSource, context: Option<&str>) -> Result<(), StoreError> {
        let nt = json_to_nt(data, self.loader())?;
        self.remove_ntriples(nt, context)
    }

    /// Serialize the triples of `context` as a JSON document.
    fn get_json(&self, context: Option<&str>, config: &JsonConfig) -> Result<String, StoreError> {
        let nt = self.get_ntriples(context)?;
        Ok(sparrow_dict::ntriples_to_json(&nt[..], config)?)
    }

    /// Add the triples of `doc` to `context`.
    fn add_dict(&mut self, doc: &Document, context: Option<&str>) -> Result<(), StoreError> {
        debug!("converting {} dict subjects to N-Triples", doc.len());
        let nt = sparrow_dict::dict_to_ntriples(doc)?;
        self.add_ntriples(DataSource::Bytes(nt), context)
    }

    /// Remove the triples of `doc` from `context`.
    fn remove_dict(&mut self, doc: &Document, context: Option<&str>) -> Result<(), StoreError> {
        let nt = sparrow_dict::dict_to_ntriples(doc)?;
        self.remove_ntriples(DataSource::Bytes(nt), context)
    }

    /// Return the triples of `context` as a dict document.
    fn get_dict(&self, context: Option<&str>) -> Result<Document, StoreError> {
        let nt = self.get_ntriples(context)?;
        Ok(sparrow_dict::ntriples_to_dict(&nt[..])?)
    }

    /// Add the Turtle of `data` to `context`,
    /// resolving relative IRIs against `base` if provided.
    fn add_turtle(
        &mut self,
        data: DataSource,
        context: Option<&str>,
        base: Option<&str>,
    ) -> Result<(), StoreError> {
        let nt = rdf_to_nt(Format::Turtle, data, base, self.loader())?;
        self.add_ntriples(nt, context)
    }

    /// Remove the Turtle of `data` from `context`.
    fn remove_turtle(
        &mut self,
        data: DataSource,
        context: Option<&str>,
        base: Option<&str>,
    ) -> Result<(), StoreError> {
        let nt = rdf_to_nt(Format::Turtle, data, base, self.loader())?;
        self.remove_ntriples(nt, context)
    }

    /// Serialize the triples of `context` as Turtle,
    /// using the [registered prefixes](TripleStore::namespaces).
    fn get_turtle(&self, context: Option<&str>) -> Result<Vec<u8>, StoreError> {
        let nt = self.get_ntriples(context)?;
        let triples = sparrow_ntriples::decode(&nt[..]).collect::<Result<Vec<_>, _>>()?;
        let config = TurtleConfig::new().with_prefix_map(self.namespaces().clone());
        Ok(sparrow_rio::write_turtle(&triples, &config)?)
    }

    /// Add the RDF/XML of `data` to `context`,
    /// resolving relative IRIs against `base` if provided.
    fn add_rdfxml(
        &mut self,
        data: DataSource,
        context: Option<&str>,
        base: Option<&str>,
    ) -> Result<(), StoreError> {
        let nt = rdf_to_nt(Format::RdfXml, data, base, self.loader())?;
        self.add_ntriples(nt, context)
    }

    /// Remove the RDF/XML of `data` from `context`.
    fn remove_rdfxml(
        &mut self,
        data: DataSource,
        context: Option<&str>,
        base: Option<&str>,
    ) -> Result<(), StoreError> {
        let nt = rdf_to_nt(Format::RdfXml, data, base, self.loader())?;
        self.remove_ntriples(nt, context)
    }

    /// Serialize the triples of `context` as RDF/XML.
    fn get_rdfxml(&self, context: Option<&str>) -> Result<Vec<u8>, StoreError> {
        let nt = self.get_ntriples(context)?;
        let triples = sparrow_ntriples::decode(&nt[..]).collect::<Result<Vec<_>, _>>()?;
        Ok(sparrow_rio::write_rdfxml(&triples, &RdfXmlConfig::new())?)
    }

    /// Add `data`, serialized in `format`, to `context`.
    ///
    /// [`Format::Dict`] is not accepted here: use [`add_dict`](TripleStore::add_dict).
    fn add(
        &mut self,
        format: Format,
        data: DataSource,
        context: Option<&str>,
    ) -> Result<(), StoreError> {
        match format {
            Format::NTriples => self.add_ntriples(data, context),
            Format::RdfXml => self.add_rdfxml(data, context, None),
            Format::Turtle => self.add_turtle(data, context, None),
            Format::Json => self.add_json(data, context),
            Format::Dict => Err(dict_source()),
        }
    }

    /// Remove `data`, serialized in `format`, from `context`.
    ///
    /// [`Format::Dict`] is not accepted here: use [`remove_dict`](TripleStore::remove_dict).
    fn remove(
        &mut self,
        format: Format,
        data: DataSource,
        context: Option<&str>,
    ) -> Result<(), StoreError> {
        match format {
            Format::NTriples => self.remove_ntriples(data, context),
            Format::RdfXml => self.remove_rdfxml(data, context, None),
            Format::Turtle => self.remove_turtle(data, context, None),
            Format::Json => self.remove_json(data, context),
            Format::Dict => Err(dict_source()),
        }
    }

    /// Serialize the triples of `context` in `format`.
    fn get(&self, format: Format, context: Option<&str>) -> Result<GraphOutput, StoreError> {
        Ok(match format {
            Format::NTriples => GraphOutput::Bytes(self.get_ntriples(context)?),
            Format::RdfXml => GraphOutput::Bytes(self.get_rdfxml(context)?),
            Format::Turtle => GraphOutput::Bytes(self.get_turtle(context)?),
            Format::Json => {
                GraphOutput::Bytes(self.get_json(context, &JsonConfig::default())?.into_bytes())
            }
            Format::Dict => GraphOutput::Document(self.get_dict(context)?),
        })
    }
}

fn json_to_nt(data: DataSource, loader: &dyn UriLoader) -> Result<DataSource, StoreError> {
    let nt = sparrow_dict::json_to_ntriples(data.open(loader)?)?;
    debug!("converted JSON to {} bytes of N-Triples", nt.len());
    Ok(DataSource::Bytes(nt))
}

fn rdf_to_nt(
    format: Format,
    data: DataSource,
    base: Option<&str>,
    loader: &dyn UriLoader,
) -> Result<DataSource, StoreError> {
    let read = data.open(loader)?;
    let triples = match format {
        Format::Turtle => sparrow_rio::parse_turtle(read, base)?,
        Format::RdfXml => sparrow_rio::parse_rdfxml(read, base)?,
        _ => return Err(StoreError::Unsupported(format!("{format} is not parsed by Rio"))),
    };
    debug!("converted {} triples of {format} to N-Triples", triples.len());
    Ok(DataSource::Bytes(sparrow_ntriples::encode(&triples)?))
}

fn dict_source() -> StoreError {
    StoreError::Unsupported("dict data must be passed as a Document".to_string())
}
