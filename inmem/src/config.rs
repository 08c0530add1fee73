//! I define [`MemoryStoreConfig`].
use sparrow_api::prefix::PrefixMap;
use sparrow_store::{FileUrlLoader, UriLoader};
use std::fmt;

/// [`MemoryStore`](crate::MemoryStore) configuration.
pub struct MemoryStoreConfig {
    pub(crate) prefix_map: PrefixMap,
    pub(crate) loader: Box<dyn UriLoader>,
}

impl MemoryStoreConfig {
    /// Build a new default [`MemoryStoreConfig`].
    pub fn new() -> Self {
        MemoryStoreConfig {
            prefix_map: PrefixMap::rdf_defaults(),
            loader: Box::new(FileUrlLoader),
        }
    }

    /// The prefixes initially registered in the store
    /// (defaults to `rdf:`, `rdfs:` and `xsd:`).
    pub fn prefix_map(&self) -> &PrefixMap {
        &self.prefix_map
    }

    /// The loader used to open URI data sources
    /// (defaults to [`FileUrlLoader`]).
    pub fn loader(&self) -> &dyn UriLoader {
        self.loader.as_ref()
    }

    /// Transform a [`MemoryStoreConfig`] by setting its [`prefix_map`](MemoryStoreConfig::prefix_map).
    #[must_use]
    pub fn with_prefix_map(mut self, pm: PrefixMap) -> Self {
        self.prefix_map = pm;
        self
    }

    /// Transform a [`MemoryStoreConfig`] by setting its [`loader`](MemoryStoreConfig::loader).
    #[must_use]
    pub fn with_loader<L: UriLoader + 'static>(mut self, loader: L) -> Self {
        self.loader = Box::new(loader);
        self
    }
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        MemoryStoreConfig::new()
    }
}

impl fmt::Debug for MemoryStoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryStoreConfig")
            .field("prefix_map", &self.prefix_map)
            .finish_non_exhaustive()
    }
}
