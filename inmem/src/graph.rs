//! In-memory implementation of [`Graph`] and [`MutableGraph`].
use std::borrow::Borrow;
use std::collections::BTreeSet;
use std::fmt;
use std::iter::empty;

use relbase_api::graph::GTripleSource;
use relbase_api::iri::Iri;
use relbase_api::prelude::*;

use crate::index::*;

/// A graph with a single triple index (SPO).
/// Fast to load but slow to query, with a relatively low memory footprint.
#[derive(Clone, Debug, Default)]
pub struct GenericLightGraph<TI: IriIndex> {
    terms: TI,
    triples: BTreeSet<[TI::Index; 3]>,
}

/// Default specialization of [`GenericLightGraph`].
pub type LightGraph = GenericLightGraph<SimpleIriIndex<u32>>;

impl<TI: IriIndex + Default> GenericLightGraph<TI> {
    /// Build an empty graph.
    pub fn new() -> Self {
        Self {
            terms: TI::default(),
            triples: BTreeSet::new(),
        }
    }
}

impl<TI: IriIndex> GenericLightGraph<TI> {
    fn indices<TS, TP, TO>(&self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> Option<[TI::Index; 3]>
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>,
    {
        Some([
            self.terms.get_index(s)?,
            self.terms.get_index(p)?,
            self.terms.get_index(o)?,
        ])
    }
}

impl<TI: IriIndex> Graph for GenericLightGraph<TI> {
    fn triples(&self) -> GTripleSource {
        Box::new(
            self.triples
                .iter()
                .map(|ti| ti.map(|i| self.terms.get_iri(i))),
        )
    }

    fn triples_with_s<'s, TS>(&'s self, s: &'s Iri<TS>) -> GTripleSource<'s>
    where
        TS: Borrow<str>,
    {
        let Some(si) = self.terms.get_index(s) else {
            return Box::new(empty());
        };
        let r = [si, TI::Index::ZERO, TI::Index::ZERO]..=[si, TI::Index::MAX, TI::Index::MAX];
        Box::new(
            self.triples
                .range(r)
                .map(|ti| ti.map(|i| self.terms.get_iri(i))),
        )
    }

    fn contains<TS, TP, TO>(&self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>,
    {
        self.indices(s, p, o)
            .is_some_and(|spo| self.triples.contains(&spo))
    }

    fn len(&self) -> usize {
        self.triples.len()
    }
}

impl<TI: IriIndex> MutableGraph for GenericLightGraph<TI> {
    fn insert<TS, TP, TO>(&mut self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>,
    {
        let is = self.terms.ensure_index(s);
        let ip = self.terms.ensure_index(p);
        let io = self.terms.ensure_index(o);
        self.triples.insert([is, ip, io])
    }

    fn remove<TS, TP, TO>(&mut self, s: &Iri<TS>, p: &Iri<TP>, o: &Iri<TO>) -> bool
    where
        TS: Borrow<str>,
        TP: Borrow<str>,
        TO: Borrow<str>,
    {
        let Some(spo) = self.indices(s, p, o) else {
            return false;
        };
        self.triples.remove(&spo)
    }
}

impl<TI: IriIndex + Default, T: Triple> FromIterator<T> for GenericLightGraph<TI> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut g = Self::new();
        for t in iter {
            g.insert_triple(&t);
        }
        g
    }
}

impl<TI: IriIndex> fmt::Display for GenericLightGraph<TI> {
    /// Format this graph as N-Triples, in the order of the internal index.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for [s, p, o] in self.triples() {
            writeln!(f, "<{s}> <{p}> <{o}> .")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use relbase_api::ns::{rdf, rdfs};
    use test_case::test_case;

    const BASE: &str = "org.apache.jena.test://foo/";

    fn iri(suffix: &str) -> Iri<String> {
        Iri::new(format!("{BASE}{suffix}")).unwrap()
    }

    #[test]
    fn insert_and_contains() {
        let mut g = LightGraph::new();
        assert!(g.is_empty());
        assert!(g.insert(&iri("nested/foo.txt"), &rdfs::seeAlso, &iri("bar.txt")));
        assert!(!g.insert(&iri("nested/foo.txt"), &rdfs::seeAlso, &iri("bar.txt")));
        assert_eq!(g.len(), 1);
        assert!(g.contains(&iri("nested/foo.txt"), &rdfs::seeAlso, &iri("bar.txt")));
        assert!(!g.contains(&iri("bar.txt"), &rdfs::seeAlso, &iri("nested/foo.txt")));
        assert!(!g.contains(&iri("nested/foo.txt"), &rdf::type_, &iri("bar.txt")));
        assert!(!g.contains(&iri("unknown"), &rdfs::seeAlso, &iri("bar.txt")));
    }

    #[test]
    fn remove() {
        let mut g = LightGraph::new();
        g.insert(&iri("a"), &rdfs::seeAlso, &iri("b"));
        g.insert(&iri("b"), &rdfs::seeAlso, &iri("a"));
        assert!(g.remove(&iri("a"), &rdfs::seeAlso, &iri("b")));
        assert!(!g.remove(&iri("a"), &rdfs::seeAlso, &iri("b")));
        assert!(!g.remove(&iri("x"), &rdfs::seeAlso, &iri("b")));
        assert_eq!(g.len(), 1);
    }

    #[test_case("a", 2)]
    #[test_case("b", 1)]
    #[test_case("c", 0)]
    #[test_case("never-inserted", 0)]
    fn triples_with_s(s: &str, expected: usize) {
        let g: LightGraph = [
            [iri("a"), iri("p"), iri("b")],
            [iri("a"), iri("p"), iri("c")],
            [iri("b"), iri("p"), iri("c")],
        ]
        .into_iter()
        .collect();
        let s = iri(s);
        assert_eq!(g.triples_with_s(&s).count(), expected);
        assert!(g.triples_with_s(&s).all(|t| t.s() == &s));
    }

    #[test]
    fn display_as_ntriples() {
        let mut g = LightGraph::new();
        g.insert(&iri("nested/foo.txt"), &rdfs::seeAlso, &iri("bar.txt"));
        assert_eq!(
            g.to_string(),
            "<org.apache.jena.test://foo/nested/foo.txt> <http://www.w3.org/2000/01/rdf-schema#seeAlso> <org.apache.jena.test://foo/bar.txt> .\n"
        );
    }
}
