//! An RDF triple expresses a single fact.
//! Its formed of three terms called *subject*, *predicate* and *object*.
//!
//! In this toolkit, all three terms are IRIs;
//! literals and blank nodes are never produced by the readers.

use relbase_iri::Iri;
use std::borrow::Borrow;

/// This trait represents an abstract RDF triple,
/// and provide convenient methods for working with triples.
pub trait Triple {
    /// The underlying text type of the terms of this triple.
    type Term: Borrow<str>;
    /// The subject of this triple.
    fn s(&self) -> &Iri<Self::Term>;
    /// The predicate of this triple.
    fn p(&self) -> &Iri<Self::Term>;
    /// The object of this triple.
    fn o(&self) -> &Iri<Self::Term>;

    /// The three components of this triple, borrowed as `&str`-based IRIs.
    fn spo(&self) -> [Iri<&str>; 3] {
        [self.s().as_ref(), self.p().as_ref(), self.o().as_ref()]
    }

    /// Whether this triple is made of the same IRIs as `other`.
    fn same_as<T: Triple>(&self, other: &T) -> bool {
        self.s() == other.s() && self.p() == other.p() && self.o() == other.o()
    }
}

impl<T: Borrow<str>> Triple for [Iri<T>; 3] {
    type Term = T;
    fn s(&self) -> &Iri<T> {
        &self[0]
    }
    fn p(&self) -> &Iri<T> {
        &self[1]
    }
    fn o(&self) -> &Iri<T> {
        &self[2]
    }
}
