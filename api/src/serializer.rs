//! API for serializing RDF syntaxes.
//!
//! Each serializer has a specific "target" (typically a file or something similar)
//! associated to it.
//! If you want to serialize to two different files,
//! you must create two different serializers.
//!
//! Note however that this API does not cover the creation of serializers,
//! and therefore does not cover how their target is specified.

use crate::graph::Graph;
use crate::triple::Triple;

/// A triple serializer writes triples according to a given format.
pub trait TripleSerializer {
    /// The error type that may be raised during serialization.
    type Error: 'static + std::error::Error;

    /// Serialize all triples from the given iterator.
    fn serialize_triples<I>(&mut self, triples: I) -> Result<&mut Self, Self::Error>
    where
        I: IntoIterator,
        I::Item: Triple,
        Self: Sized;

    /// Serialize a whole [`Graph`].
    #[inline]
    fn serialize_graph<G>(&mut self, graph: &G) -> Result<&mut Self, Self::Error>
    where
        G: Graph,
        Self: Sized,
    {
        self.serialize_triples(graph.triples())
    }
}

/// A stringifier is special kind of [`TripleSerializer`]:
///
/// + it uses a text-based format encoded in UTF8;
/// + it stores the serialized data in memory;
/// + it gives access to the serialized data as `str` or `String`.
pub trait Stringifier {
    /// Borrows the internal serialized data.
    ///
    /// # Note to implementers
    /// It is the responsibility of implementors to ensure that this data is valid UTF8.
    /// The methods [`as_str`](Stringifier::as_str) and
    /// [`to_string`](Stringifier::to_string) rely on this.
    fn as_utf8(&self) -> &[u8];

    /// Borrows the internal serialized data as a `str`.
    fn as_str(&self) -> &str {
        unsafe { std::str::from_utf8_unchecked(self.as_utf8()) }
    }

    /// Copy the internal serialized data to a `String`.
    fn to_string(&self) -> String {
        self.as_str().to_string()
    }
}
