//! An RDF graph, the central notion of the RDF data model,
//! is a collection of [triples](crate::triple).
//!
//! This module defines traits for graphs,
//! and implements them for `HashSet`s of IRI triples.
//! Graphs have set semantics: inserting a triple twice keeps a single copy.

use crate::triple::Triple;
use relbase_iri::Iri;
use std::borrow::Borrow;
use std::collections::HashSet;
use std::hash::BuildHasher;

/// Type alias for the iterators returned by [`Graph::triples`].
pub type GTripleSource<'a> = Box<dyn Iterator<Item = [Iri<&'a str>; 3]> + 'a>;

/// Generic trait for RDF graphs.
pub trait Graph {
    /// An iterator visiting all triples of this graph in arbitrary order.
    fn triples(&self) -> GTripleSource;

    /// Return `true` if this graph contains the given triple.
    fn contains<TS, TP, TO>(&self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>,
    {
        self.triples()
            .any(|t| t.s() == s && t.p() == p && t.o() == o)
    }

    /// An iterator visiting all triples with the given subject.
    fn triples_with_s<'s, TS>(&'s self, s: &'s Iri<TS>) -> GTripleSource<'s>
    where
        TS: Borrow<str>,
    {
        Box::new(self.triples().filter(move |t| t.s() == s))
    }

    /// Return `true` if this graph contains a triple equal to `t`.
    fn contains_triple<T: Triple>(&self, t: &T) -> bool {
        self.contains(t.s(), t.p(), t.o())
    }

    /// The number of triples in this graph.
    fn len(&self) -> usize {
        self.triples().count()
    }

    /// Return `true` if this graph contains no triple.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Generic trait for mutable RDF graphs.
pub trait MutableGraph: Graph {
    /// Insert the given triple in this graph.
    ///
    /// Return `true` iff the triple was actually inserted
    /// (i.e. it was not already in the graph).
    fn insert<TS, TP, TO>(&mut self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>;

    /// Remove the given triple from this graph.
    ///
    /// Return `true` iff the triple was actually removed
    /// (i.e. it was in the graph).
    fn remove<TS, TP, TO>(&mut self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>;

    /// Insert the given triple in this graph.
    fn insert_triple<T: Triple>(&mut self, t: &T) -> bool {
        self.insert(t.s(), t.p(), t.o())
    }
}

impl<S: BuildHasher> Graph for HashSet<[Iri<Box<str>>; 3], S> {
    fn triples(&self) -> GTripleSource {
        Box::new(self.iter().map(Triple::spo))
    }

    fn contains<TS, TP, TO>(&self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>,
    {
        HashSet::contains(self, &[s.boxed(), p.boxed(), o.boxed()])
    }

    fn len(&self) -> usize {
        HashSet::len(self)
    }
}

impl<S: BuildHasher> MutableGraph for HashSet<[Iri<Box<str>>; 3], S> {
    fn insert<TS, TP, TO>(&mut self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>,
    {
        HashSet::insert(self, [s.boxed(), p.boxed(), o.boxed()])
    }

    fn remove<TS, TP, TO>(&mut self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>,
    {
        HashSet::remove(self, &[s.boxed(), p.boxed(), o.boxed()])
    }
}
