//! This crate is part of [relbase],
//! a small toolkit for reading [RDF] documents whose base IRI may use any URI scheme.
//!
//! It provides a reader for a restricted subset of the [RDF/XML] concrete syntax,
//! based on [`quick_xml`].
//! Relative IRIs are resolved against `xml:base` when present,
//! or against the base IRI given to the parser.
//!
//! [relbase]: https://docs.rs/relbase/latest/relbase/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [RDF/XML]: https://www.w3.org/TR/rdf-syntax-grammar/
#![deny(missing_docs)]

pub mod parser;
