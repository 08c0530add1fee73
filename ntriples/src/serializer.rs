//! Serializer for the [N-Triples] concrete syntax of RDF.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`](io::Write)
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`](io::BufWriter).
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
use sparrow_api::serializer::Stringifier;
use sparrow_api::term::{
    is_valid_bnode_id, is_valid_iri, is_valid_language_tag, LiteralKind, Subject, Term,
};
use sparrow_api::triple::Triple;
use std::io;

/// N-Triples serializer configuration.
#[derive(Clone, Debug)]
pub struct NtConfig {
    pub(crate) space_before_dot: bool,
}

impl Default for NtConfig {
    fn default() -> Self {
        NtConfig {
            space_before_dot: true,
        }
    }
}

impl NtConfig {
    /// Whether triples are terminated by `" .\n"` (the default) or by `".\n"`.
    pub fn space_before_dot(&self) -> bool {
        self.space_before_dot
    }

    /// Transform an [`NtConfig`] by setting [`space_before_dot`](NtConfig::space_before_dot).
    #[must_use]
    pub fn with_space_before_dot(mut self, b: bool) -> Self {
        self.space_before_dot = b;
        self
    }
}

/// N-Triples serializer.
pub struct NtSerializer<W> {
    config: NtConfig,
    write: W,
}

impl<W> NtSerializer<W>
where
    W: io::Write,
{
    /// Build a new N-Triples serializer writing to `write`, with the default config.
    #[inline]
    pub fn new(write: W) -> Self {
        Self::new_with_config(write, NtConfig::default())
    }

    /// Build a new N-Triples serializer writing to `write`, with the given config.
    pub const fn new_with_config(write: W, config: NtConfig) -> Self {
        Self { config, write }
    }

    /// Borrow this serializer's configuration.
    pub const fn config(&self) -> &NtConfig {
        &self.config
    }

    /// Serialize one triple, on its own line.
    ///
    /// Fails with [`io::ErrorKind::InvalidInput`] if a term can not be written
    /// in a way that reads back unchanged (e.g. an IRI containing a space).
    pub fn serialize_triple(&mut self, t: &Triple) -> io::Result<&mut Self> {
        write_triple(&mut self.write, t)?;
        if self.config.space_before_dot {
            self.write.write_all(b" .\n")?;
        } else {
            self.write.write_all(b".\n")?;
        }
        Ok(self)
    }

    /// Serialize all the given triples, in order.
    pub fn serialize_triples<'a, I>(&mut self, triples: I) -> io::Result<&mut Self>
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        for t in triples {
            self.serialize_triple(t)?;
        }
        Ok(self)
    }

    /// Consume this serializer and return its target.
    pub fn into_inner(self) -> W {
        self.write
    }
}

impl NtSerializer<Vec<u8>> {
    /// Create a new serializer which targets a `String`.
    #[inline]
    #[must_use]
    pub fn new_stringifier() -> Self {
        Self::new(Vec::new())
    }
    /// Create a new serializer which targets a `String` with a custom config.
    #[inline]
    #[must_use]
    pub const fn new_stringifier_with_config(config: NtConfig) -> Self {
        Self::new_with_config(Vec::new(), config)
    }
}

impl Stringifier for NtSerializer<Vec<u8>> {
    fn as_utf8(&self) -> &[u8] {
        &self.write[..]
    }
}

/// Write the given triple into the given write in the N-Triples format,
/// without the terminating dot.
pub fn write_triple<W>(w: &mut W, t: &Triple) -> io::Result<()>
where
    W: io::Write,
{
    match &t.subject {
        Subject::Iri(iri) => write_iri(w, iri)?,
        Subject::BlankNode(id) => write_bnode(w, id)?,
    }
    w.write_all(b" ")?;
    write_iri(w, &t.predicate)?;
    w.write_all(b" ")?;
    write_term(w, &t.object)
}

/// Write the given term into the given write in the N-Triples format.
pub fn write_term<W>(w: &mut W, t: &Term) -> io::Result<()>
where
    W: io::Write,
{
    match t {
        Term::Iri(iri) => write_iri(w, iri),
        Term::BlankNode(id) => write_bnode(w, id),
        Term::Literal(lit) => {
            w.write_all(b"\"")?;
            quoted_string(w, lit.value().as_bytes())?;
            w.write_all(b"\"")?;
            match lit.kind() {
                LiteralKind::Simple => Ok(()),
                LiteralKind::Lang(tag) => {
                    if !is_valid_language_tag(tag) {
                        return Err(invalid("language tag", tag));
                    }
                    w.write_all(b"@")?;
                    w.write_all(tag.as_bytes())
                }
                LiteralKind::Datatype(dt) => {
                    w.write_all(b"^^")?;
                    write_iri(w, dt)
                }
            }
        }
    }
}

/// Write `iri` between `<` and `>`.
pub fn write_iri<W: io::Write>(w: &mut W, iri: &str) -> io::Result<()> {
    if !is_valid_iri(iri) {
        return Err(invalid("IRI", iri));
    }
    w.write_all(b"<")?;
    w.write_all(iri.as_bytes())?;
    w.write_all(b">")
}

/// Write the blank node labelled `id` as `_:id`.
pub fn write_bnode<W: io::Write>(w: &mut W, id: &str) -> io::Result<()> {
    if !is_valid_bnode_id(id) {
        return Err(invalid("blank node identifier", id));
    }
    w.write_all(b"_:")?;
    w.write_all(id.as_bytes())
}

fn invalid(what: &str, txt: &str) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!("can not write {what} {txt:?} in N-Triples"),
    )
}

/// Write `txt` with `\\`, `\t`, `\n`, `\r` and `\"` escaped; every other byte verbatim.
///
/// The delimiting quotes are not written.
pub fn quoted_string<W: io::Write>(w: &mut W, txt: &[u8]) -> io::Result<()> {
    let mut start = 0;
    for (pos, chr) in txt.iter().enumerate() {
        let escaped: &[u8] = match chr {
            b'\\' => b"\\\\",
            b'\t' => b"\\t",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'"' => b"\\\"",
            _ => continue,
        };
        w.write_all(&txt[start..pos])?;
        w.write_all(escaped)?;
        start = pos + 1;
    }
    w.write_all(&txt[start..])
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
