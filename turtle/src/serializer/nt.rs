//! Serializer for the [N-Triples] concrete syntax of RDF.
//!
//! **Important**:
//! the methods in this module accepting a [`Write`]
//! make no effort to minimize the number of write operations.
//! Hence, in most cased, they should be passed a [`BufWriter`].
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [`Write`]: https://doc.rust-lang.org/std/io/trait.Write.html
//! [`BufWriter`]: https://doc.rust-lang.org/std/io/struct.BufWriter.html

use relbase_api::serializer::{Stringifier, TripleSerializer};
use relbase_api::triple::Triple;
use std::borrow::Borrow;
use std::io;

/// N-Triples serializer configuration.
#[derive(Clone, Debug, Default)]
pub struct NtConfig {
    pub(super) ascii: bool,
}

impl NtConfig {
    /// Set the ascii configuration.
    ///
    /// When set, non-ASCII characters are written as `\u` or `\U` escape sequences.
    pub fn set_ascii(&mut self, ascii: bool) -> &mut Self {
        self.ascii = ascii;
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
}

impl<W> TripleSerializer for NtSerializer<W>
where
    W: io::Write,
{
    type Error = io::Error;

    fn serialize_triples<I>(&mut self, triples: I) -> Result<&mut Self, Self::Error>
    where
        I: IntoIterator,
        I::Item: Triple,
    {
        let mut count = 0;
        for t in triples {
            write_triple(&mut self.write, &t, self.config.ascii)?;
            count += 1;
        }
        log::debug!("{count} triples serialized as N-Triples");
        Ok(self)
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
/// followed by a newline.
pub fn write_triple<W, T>(w: &mut W, t: &T, ascii: bool) -> io::Result<()>
where
    W: io::Write,
    T: Triple,
{
    write_iri(w, t.s().as_str(), ascii)?;
    w.write_all(b" ")?;
    write_iri(w, t.p().as_str(), ascii)?;
    w.write_all(b" ")?;
    write_iri(w, t.o().as_str(), ascii)?;
    w.write_all(b" .\n")
}

/// Write the given IRI between angle brackets.
///
/// Valid IRIs contain no character that needs escaping in N-Triples,
/// so the IRI is written as is, unless `ascii` is set.
pub fn write_iri<W, T>(w: &mut W, iri: T, ascii: bool) -> io::Result<()>
where
    W: io::Write,
    T: Borrow<str>,
{
    let iri = iri.borrow();
    w.write_all(b"<")?;
    if ascii {
        for chr in iri.chars() {
            match chr as u32 {
                0..=0x7F => write!(w, "{chr}")?,
                c @ 0x80..=0xFFFF => write!(w, "\\u{c:04X}")?,
                c => write!(w, "\\U{c:08X}")?,
            }
        }
    } else {
        w.write_all(iri.as_bytes())?;
    }
    w.write_all(b">")
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
