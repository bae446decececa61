//! Implementation of IRI reference resolution as per
//! [RFC 3986 §5](https://tools.ietf.org/html/rfc3986#section-5).
//!
//! Resolution only looks at the syntactic components of IRIs;
//! the scheme of the base is copied as is, and never interpreted.

use super::{InvalidIri, Iri, IriParsed, IriRef};
use std::borrow::Borrow;
use std::fmt;

/// Parse `txt` as an IRI reference (absolute or relative).
pub fn parse_iri(txt: &str) -> Result<IriParsed, InvalidIri> {
    IriParsed::new(txt)
}

/// Resolve `reference` against `base`.
///
/// This never fails: both arguments have already been parsed.
/// If `reference` is absolute, `base` is ignored.
pub fn resolve<'a>(base: &IriParsed<'a>, reference: &IriParsed<'a>) -> IriParsed<'a> {
    base.join(reference)
}

/// A `BaseIri` is an absolute IRI against which IRI references can be resolved.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BaseIri<T: Borrow<str>>(Iri<T>);

impl<T: Borrow<str>> BaseIri<T> {
    /// Creates a new `BaseIri` if `iri` is a valid absolute IRI,
    /// otherwise returns an [`InvalidIri`].
    pub fn new(iri: T) -> Result<Self, InvalidIri> {
        Iri::new(iri).map(BaseIri)
    }

    /// Use an already checked IRI as a base.
    pub fn from_iri(iri: Iri<T>) -> Self {
        BaseIri(iri)
    }

    /// Resolve `reference` against this base.
    pub fn resolve<U: Borrow<str>>(&self, reference: &IriRef<U>) -> Iri<String> {
        let base = self.0.parsed();
        let joined = base.join(&reference.parsed()).to_string();
        log::trace!("<{}> resolved against <{}>: <{}>", reference, self.0, joined);
        Iri::new_unchecked(joined)
    }

    /// Check that `reference` is a valid IRI reference, and resolve it against this base.
    pub fn resolve_str(&self, reference: &str) -> Result<Iri<String>, InvalidIri> {
        IriRef::new(reference).map(|r| self.resolve(&r))
    }

    /// Borrow this base as an [`Iri`].
    pub fn as_iri(&self) -> &Iri<T> {
        &self.0
    }

    /// Unwrap the underlying IRI.
    pub fn unwrap(self) -> Iri<T> {
        self.0
    }
}

impl<T: Borrow<str>> fmt::Display for BaseIri<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: Borrow<str>> Borrow<str> for BaseIri<T> {
    fn borrow(&self) -> &str {
        self.0.as_str()
    }
}
