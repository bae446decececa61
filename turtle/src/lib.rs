//! This crate is part of [relbase],
//! a small toolkit for reading [RDF] documents whose base IRI may use any URI scheme.
//!
//! It provides readers for [N-Triples] and for a restricted subset of [Turtle]
//! (IRIs only, with `@base` and `BASE` directives),
//! as well as a serializer for N-Triples.
//!
//! [relbase]: https://docs.rs/relbase/latest/relbase/
//! [RDF]: https://www.w3.org/TR/rdf-primer/
//! [N-Triples]: https://www.w3.org/TR/n-triples/
//! [Turtle]: https://www.w3.org/TR/turtle/

/// Declare a lazily compiled [`Regex`](regex::Regex) constant.
///
/// Defined before the modules using it, which get it by textual scope.
macro_rules! lazy_regex {
    ($name: ident = $re: expr) => {
        lazy_static::lazy_static! {
            static ref $name: regex::Regex = regex::Regex::new($re).unwrap();
        }
    };
}

pub mod parser;
pub mod serializer;

#[cfg(test)]
mod test;
