//! This crate is part of [relbase],
//! a small toolkit for reading [RDF] documents whose base IRI may use any URI scheme.
//!
//! It provides functions for validating IRIs and IRI references,
//! as well as for resolving IRI references against a given base IRI,
//! following [RFC 3986 §5](https://tools.ietf.org/html/rfc3986#section-5).
//!
//! Resolution works on the syntax of IRIs only:
//! no scheme (`http`, `file`, or any other) is ever treated specially,
//! so private schemes like `app:`, `x-madeup:` or `org.apache.jena.test:`
//! behave exactly like registered ones.
//!
//! ```
//! use relbase_iri::resolve::BaseIri;
//!
//! let base = BaseIri::new("app://h/nested/").unwrap();
//! assert_eq!(base.resolve_str("../bar.txt").unwrap(), "app://h/bar.txt");
//! ```
//!
//! [relbase]: https://docs.rs/relbase/latest/relbase/
//! [RDF]: https://www.w3.org/TR/rdf-primer/

#![deny(missing_docs)]

mod _regex;
pub use self::_regex::*;
mod _parsed;
pub use self::_parsed::*;
mod _wrapper;
pub use self::_wrapper::*;
pub mod error;
pub use self::error::InvalidIri;
pub mod resolve;
