//! This crate is part of [relbase],
//! a small toolkit for reading [RDF] documents whose base IRI may use any URI scheme.
//!
//! It defines the traits shared by the readers and graphs of the toolkit:
//! * [`Triple`](triple::Triple), a fact made of three IRIs;
//! * [`Graph`](graph::Graph) and [`MutableGraph`](graph::MutableGraph), sets of triples;
//! * [`TripleParser`](parser::TripleParser), and the errors it may raise;
//! * [`TripleSerializer`](serializer::TripleSerializer);
//! * a few vocabulary [namespaces](ns).
//!
//! [relbase]: https://docs.rs/relbase/latest/relbase/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

pub mod graph;
pub mod ns;
pub mod parser;
pub mod prelude;
pub mod serializer;
pub mod triple;

pub use relbase_iri as iri;
