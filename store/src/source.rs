//! I define the inputs accepted by store mutations,
//! and the [`UriLoader`]s used to open URI sources.
use crate::StoreError;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Cursor, Read};
use url::Url;

/// The data given to an `add_*` or `remove_*` operation.
pub enum DataSource {
    /// Raw serialized data.
    Bytes(Vec<u8>),
    /// A stream of serialized data.
    Reader(Box<dyn BufRead>),
    /// A `file://` or `http://` URI, opened through the store's [`UriLoader`].
    Uri(String),
}

impl DataSource {
    /// Whether `txt` is to be understood as a URI rather than as literal data.
    pub fn is_uri(txt: &str) -> bool {
        txt.starts_with("http://") || txt.starts_with("file://")
    }

    /// Open this source for reading, resolving URIs with `loader`.
    pub fn open(self, loader: &dyn UriLoader) -> Result<Box<dyn BufRead>, StoreError> {
        match self {
            DataSource::Bytes(bytes) => Ok(Box::new(Cursor::new(bytes))),
            DataSource::Reader(read) => Ok(read),
            DataSource::Uri(uri) => {
                log::debug!("loading <{uri}>");
                loader.open(&uri)
            }
        }
    }

    /// Read this source entirely, resolving URIs with `loader`.
    pub fn read_all(self, loader: &dyn UriLoader) -> Result<Vec<u8>, StoreError> {
        if let DataSource::Bytes(bytes) = self {
            return Ok(bytes);
        }
        let mut buf = Vec::new();
        self.open(loader)?.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

impl fmt::Debug for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Bytes(b) => f.debug_tuple("Bytes").field(&b.len()).finish(),
            DataSource::Reader(_) => f.write_str("Reader(..)"),
            DataSource::Uri(u) => f.debug_tuple("Uri").field(u).finish(),
        }
    }
}

impl From<String> for DataSource {
    fn from(value: String) -> Self {
        if DataSource::is_uri(&value) {
            DataSource::Uri(value)
        } else {
            DataSource::Bytes(value.into_bytes())
        }
    }
}

impl From<&str> for DataSource {
    fn from(value: &str) -> Self {
        value.to_string().into()
    }
}

impl From<Vec<u8>> for DataSource {
    fn from(value: Vec<u8>) -> Self {
        DataSource::Bytes(value)
    }
}

impl From<&[u8]> for DataSource {
    fn from(value: &[u8]) -> Self {
        DataSource::Bytes(value.to_vec())
    }
}

impl From<Box<dyn BufRead>> for DataSource {
    fn from(value: Box<dyn BufRead>) -> Self {
        DataSource::Reader(value)
    }
}

/// Opens the URIs of [`DataSource::Uri`].
pub trait UriLoader {
    /// Open `uri` for reading.
    fn open(&self, uri: &str) -> Result<Box<dyn BufRead>, StoreError>;
}

/// A [`UriLoader`] opening `file://` URLs from the local filesystem,
/// and refusing any other URI.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileUrlLoader;

impl UriLoader for FileUrlLoader {
    fn open(&self, uri: &str) -> Result<Box<dyn BufRead>, StoreError> {
        let url = Url::parse(uri).map_err(|e| StoreError::loader(uri, e))?;
        if url.scheme() != "file" {
            return Err(StoreError::loader(uri, "only file:// URLs are supported"));
        }
        let path = url
            .to_file_path()
            .map_err(|()| StoreError::loader(uri, "not a local file path"))?;
        let file = File::open(&path).map_err(|e| StoreError::loader(uri, e))?;
        Ok(Box::new(BufReader::new(file)))
    }
}

/// A [`UriLoader`] refusing every URI.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoLoader;

impl UriLoader for NoLoader {
    fn open(&self, uri: &str) -> Result<Box<dyn BufRead>, StoreError> {
        Err(StoreError::loader(uri, "URI sources are disabled"))
    }
}

/// A [`UriLoader`] delegating to a function.
///
/// This is how HTTP retrieval is plugged into a store.
pub struct ClosureLoader<F>(pub F);

impl<F> UriLoader for ClosureLoader<F>
where
    F: Fn(&str) -> io::Result<Box<dyn BufRead>>,
{
    fn open(&self, uri: &str) -> Result<Box<dyn BufRead>, StoreError> {
        (self.0)(uri).map_err(|e| StoreError::loader(uri, e))
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    type TestResult = Result<(), Box<dyn std::error::Error>>;

    #[test_case("http://example.org/data.nt", true)]
    #[test_case("file:///tmp/data.nt", true)]
    #[test_case("https://example.org/data.nt", false)]
    #[test_case("<uri:a> <uri:b> <uri:c> .", false)]
    #[test_case("", false)]
    fn str_heuristic(txt: &str, uri: bool) {
        let src = DataSource::from(txt);
        assert_eq!(matches!(src, DataSource::Uri(_)), uri, "{src:?}");
    }

    #[test]
    fn bytes_are_read_as_is() -> TestResult {
        let got = DataSource::from("hello").read_all(&NoLoader)?;
        assert_eq!(got, b"hello");
        Ok(())
    }

    #[test]
    fn reader_is_read() -> TestResult {
        let read: Box<dyn BufRead> = Box::new(Cursor::new(b"hello".to_vec()));
        let got = DataSource::from(read).read_all(&NoLoader)?;
        assert_eq!(got, b"hello");
        Ok(())
    }

    #[test]
    fn no_loader_refuses() {
        let err = DataSource::from("http://example.org/")
            .read_all(&NoLoader)
            .err()
            .unwrap();
        assert!(matches!(err, StoreError::Loader { .. }));
    }

    #[test]
    fn file_loader() -> TestResult {
        let path = std::env::temp_dir().join(format!("sparrow-loader-{}.nt", std::process::id()));
        File::create(&path)?.write_all(b"<uri:a> <uri:b> <uri:c> .\n")?;
        let url = Url::from_file_path(&path).map_err(|()| "bad path")?;
        let got = DataSource::from(url.as_str()).read_all(&FileUrlLoader);
        std::fs::remove_file(&path)?;
        assert_eq!(got?, b"<uri:a> <uri:b> <uri:c> .\n");
        Ok(())
    }

    #[test_case("file:///no/such/file.nt" ; "missing file")]
    #[test_case("http://example.org/" ; "http")]
    fn file_loader_fails(uri: &str) {
        assert!(matches!(
            FileUrlLoader.open(uri),
            Err(StoreError::Loader { .. })
        ));
    }

    #[test]
    fn closure_loader() -> TestResult {
        let loader = ClosureLoader(|uri: &str| -> io::Result<Box<dyn BufRead>> {
            Ok(Box::new(Cursor::new(uri.as_bytes().to_vec())))
        });
        let got = DataSource::from("http://example.org/x").read_all(&loader)?;
        assert_eq!(got, b"http://example.org/x");
        Ok(())
    }
}
