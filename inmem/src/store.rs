//! I define [`MemoryStore`], a [`TripleStore`] keeping its triples in memory.
use crate::MemoryStoreConfig;
use log::debug;
use sparrow_api::prefix::PrefixMap;
use sparrow_api::triple::Triple;
use sparrow_store::{DataSource, StoreError, TripleStore, UriLoader};
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// A triple store with one ordered set of triples per context.
///
/// Blank nodes are relabelled on every addition (`b0`, `b1`, ...),
/// so that blank nodes coming from different documents never collide.
/// Removing triples containing blank nodes therefore requires the labels
/// as they are stored, as returned by [`get_ntriples`](TripleStore::get_ntriples).
#[derive(Debug, Default)]
pub struct MemoryStore {
    config: MemoryStoreConfig,
    graphs: BTreeMap<Option<String>, BTreeSet<Triple>>,
    next_bnode: usize,
}

impl MemoryStore {
    /// Build an empty store with the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an empty store with the given config.
    pub fn new_with_config(config: MemoryStoreConfig) -> Self {
        MemoryStore {
            config,
            graphs: BTreeMap::new(),
            next_bnode: 0,
        }
    }

    /// Borrow this store's configuration.
    pub fn config(&self) -> &MemoryStoreConfig {
        &self.config
    }

    /// Iterate over the triples of `context`, in order.
    pub fn triples(&self, context: Option<&str>) -> impl Iterator<Item = &Triple> {
        self.graphs.get(&context_key(context)).into_iter().flatten()
    }

    /// Parse all the triples of `data`, or none.
    fn parse(&self, data: DataSource) -> Result<Vec<Triple>, StoreError> {
        let read = data.open(self.config.loader.as_ref())?;
        Ok(sparrow_ntriples::decode(read).collect::<Result<Vec<_>, _>>()?)
    }

    fn relabel(&mut self, triples: Vec<Triple>) -> Vec<Triple> {
        let mut labels = HashMap::new();
        let next = &mut self.next_bnode;
        triples
            .into_iter()
            .map(|t| {
                t.map_blank_nodes(|id| {
                    labels
                        .entry(id)
                        .or_insert_with(|| {
                            let label = format!("b{next}");
                            *next += 1;
                            label
                        })
                        .clone()
                })
            })
            .collect()
    }
}

impl TripleStore for MemoryStore {
    fn add_ntriples(&mut self, data: DataSource, context: Option<&str>) -> Result<(), StoreError> {
        let triples = self.parse(data)?;
        let triples = self.relabel(triples);
        let graph = self.graphs.entry(context_key(context)).or_default();
        let before = graph.len();
        graph.extend(triples);
        debug!(
            "added {} triples to context {context:?}",
            graph.len() - before
        );
        Ok(())
    }

    fn remove_ntriples(
        &mut self,
        data: DataSource,
        context: Option<&str>,
    ) -> Result<(), StoreError> {
        let triples = self.parse(data)?;
        let key = context_key(context);
        if let Some(graph) = self.graphs.get_mut(&key) {
            let before = graph.len();
            for t in &triples {
                graph.remove(t);
            }
            debug!(
                "removed {} triples from context {context:?}",
                before - graph.len()
            );
            if graph.is_empty() {
                self.graphs.remove(&key);
            }
        }
        Ok(())
    }

    fn get_ntriples(&self, context: Option<&str>) -> Result<Vec<u8>, StoreError> {
        Ok(sparrow_ntriples::encode(self.triples(context))?)
    }

    fn contexts(&self) -> Result<Vec<String>, StoreError> {
        Ok(self
            .graphs
            .iter()
            .filter(|(_, g)| !g.is_empty())
            .filter_map(|(name, _)| name.clone())
            .collect())
    }

    fn clear(&mut self, context: Option<&str>) -> Result<(), StoreError> {
        if let Some(g) = self.graphs.remove(&context_key(context)) {
            debug!("cleared {} triples from context {context:?}", g.len());
        }
        Ok(())
    }

    fn count(&self, context: Option<&str>) -> Result<Option<usize>, StoreError> {
        Ok(Some(match context {
            None => self.graphs.values().map(BTreeSet::len).sum(),
            Some(_) => self.triples(context).count(),
        }))
    }

    fn register_prefix(&mut self, prefix: &str, namespace: &str) -> Result<(), StoreError> {
        Ok(self.config.prefix_map.insert(prefix, namespace)?)
    }

    fn namespaces(&self) -> &PrefixMap {
        &self.config.prefix_map
    }

    fn loader(&self) -> &dyn UriLoader {
        self.config.loader.as_ref()
    }
}

/// The empty context name denotes the default graph.
fn context_key(context: Option<&str>) -> Option<String> {
    context.filter(|c| !c.is_empty()).map(str::to_string)
}
