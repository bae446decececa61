//! This crate is part of [relbase],
//! a small toolkit for reading [RDF] documents whose base IRI may use any URI scheme.
//!
//! It provides an in-memory implementation of graphs,
//! where every IRI is stored only once.
//!
//! [relbase]: https://docs.rs/relbase/latest/relbase/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

pub mod graph;
pub mod index;

pub use graph::LightGraph;
