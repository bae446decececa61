//! This crate reads [RDF] documents whose IRIs may be relative,
//! resolving them against a base IRI of *any* URI scheme
//! (`http:`, `file:`, but also `app:`, `ssh:`, `x-madeup:`...)
//! with the generic algorithm of [RFC 3986](https://www.rfc-editor.org/rfc/rfc3986#section-5).
//!
//! It is the facade of the relbase toolkit, which is made of several crates:
//! * [`iri`]: IRI validation and reference resolution,
//! * [`api`]: traits for triples, graphs, parsers and serializers,
//! * [`inmem`]: an in-memory graph,
//! * [`turtle`]: N-Triples and (restricted) Turtle readers, N-Triples serializer,
//! * [`xml`]: (restricted) RDF/XML reader.
//!
//! # Getting Started
//!
//! ```
//! use relbase::{parse_str, Syntax};
//! use relbase::api::prelude::*;
//! use relbase::api::ns::rdfs;
//!
//! let doc = "<foo.txt> <http://www.w3.org/2000/01/rdf-schema#seeAlso> <../bar.txt> .";
//! let graph = parse_str(doc, Syntax::Turtle, Some("app://example/nested/")).unwrap();
//! assert!(graph.contains(
//!     &Iri::new("app://example/nested/foo.txt").unwrap(),
//!     &rdfs::seeAlso,
//!     &Iri::new("app://example/bar.txt").unwrap(),
//! ));
//! ```
//!
//! [RDF]: https://www.w3.org/TR/rdf-primer/
#![deny(missing_docs)]

use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub use relbase_api as api;
pub use relbase_inmem as inmem;
pub use relbase_iri as iri;
pub use relbase_turtle as turtle;
pub use relbase_xml as xml;

pub use relbase_api::parser::{ErrorKind, Location, ParseError};
pub use relbase_inmem::LightGraph;

use relbase_api::parser::TripleParser;
use relbase_iri::Iri;
use relbase_turtle::parser::{nt::NTriplesParser, turtle::TurtleParser};
use relbase_xml::parser::RdfXmlParser;

/// The concrete syntaxes supported by [`parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Syntax {
    /// [N-Triples](https://www.w3.org/TR/n-triples/)
    NTriples,
    /// [Turtle](https://www.w3.org/TR/turtle/) (IRIs only)
    Turtle,
    /// [RDF/XML](https://www.w3.org/TR/rdf-syntax-grammar/) (IRIs only)
    RdfXml,
}

impl Syntax {
    /// Guess the syntax from a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "nt" => Some(Syntax::NTriples),
            "ttl" => Some(Syntax::Turtle),
            "rdf" | "xml" | "owl" => Some(Syntax::RdfXml),
            _ => None,
        }
    }

    /// Guess the syntax from the extension of a file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        Self::from_extension(path.as_ref().extension()?.to_str()?)
    }

    /// The media type of this syntax.
    pub fn media_type(&self) -> &'static str {
        match self {
            Syntax::NTriples => "application/n-triples",
            Syntax::Turtle => "text/turtle",
            Syntax::RdfXml => "application/rdf+xml",
        }
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Syntax::NTriples => "N-Triples",
            Syntax::Turtle => "Turtle",
            Syntax::RdfXml => "RDF/XML",
        };
        f.write_str(name)
    }
}

/// Raised by [`Syntax::from_str`] for unrecognized syntax names.
#[derive(Clone, Debug, thiserror::Error)]
#[error("Unknown syntax {0:?}")]
pub struct UnknownSyntax(pub String);

impl FromStr for Syntax {
    type Err = UnknownSyntax;

    /// Recognize a syntax name, a media type, or a file extension (case insensitive).
    fn from_str(txt: &str) -> Result<Self, Self::Err> {
        match txt.to_ascii_lowercase().as_str() {
            "ntriples" | "n-triples" | "application/n-triples" => Ok(Syntax::NTriples),
            "turtle" | "text/turtle" | "application/x-turtle" => Ok(Syntax::Turtle),
            "rdfxml" | "rdf/xml" | "application/rdf+xml" => Ok(Syntax::RdfXml),
            other => Self::from_extension(other).ok_or_else(|| UnknownSyntax(txt.to_string())),
        }
    }
}

/// Parse UTF-8 encoded `data` in the given `syntax` into a fresh graph.
///
/// Relative IRIs are resolved against the in-document base if any
/// (`@base`, `BASE`, `xml:base`), or against `base` otherwise.
///
/// # Errors
/// * [`ParseError::MalformedIri`] if `base` is not an absolute IRI,
///   or if the document contains an invalid IRI;
/// * [`ParseError::MissingBase`] if a relative IRI has no base to be resolved against;
/// * [`ParseError::Syntax`] if `data` is not valid UTF-8,
///   or does not match the supported subset of `syntax`.
pub fn parse(data: &[u8], syntax: Syntax, base: Option<&str>) -> Result<LightGraph, ParseError> {
    let base = base.map(parse_base).transpose()?;
    log::debug!(
        "parsing {} bytes of {syntax} with base {}",
        data.len(),
        base.as_ref().map(Iri::as_str).unwrap_or("(none)")
    );
    match syntax {
        Syntax::NTriples => NTriplesParser { base }.parse_bytes(data),
        Syntax::Turtle => TurtleParser { base }.parse_bytes(data),
        Syntax::RdfXml => RdfXmlParser { base }.parse_bytes(data),
    }
}

/// Parse `txt` in the given `syntax` into a fresh graph.
///
/// See [`parse`].
pub fn parse_str(txt: &str, syntax: Syntax, base: Option<&str>) -> Result<LightGraph, ParseError> {
    parse(txt.as_bytes(), syntax, base)
}

fn parse_base(txt: &str) -> Result<Iri<String>, ParseError> {
    Iri::new(txt.to_string()).map_err(|err| ParseError::MalformedIri {
        iri: err.0,
        location: Location::Unknown,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use relbase_api::graph::Graph;
    use relbase_api::ns::rdfs;
    use relbase_iri::test::SCHEME_BASES;
    use test_case::test_case;

    #[test_case("nt", Some(Syntax::NTriples))]
    #[test_case("TTL", Some(Syntax::Turtle))]
    #[test_case("rdf", Some(Syntax::RdfXml))]
    #[test_case("owl", Some(Syntax::RdfXml))]
    #[test_case("xml", Some(Syntax::RdfXml))]
    #[test_case("jsonld", None)]
    fn from_extension(ext: &str, expected: Option<Syntax>) {
        assert_eq!(Syntax::from_extension(ext), expected);
    }

    #[test_case("data/doc.ttl", Some(Syntax::Turtle))]
    #[test_case("doc.tar.rdf", Some(Syntax::RdfXml))]
    #[test_case("README", None)]
    fn from_path(path: &str, expected: Option<Syntax>) {
        assert_eq!(Syntax::from_path(path), expected);
    }

    #[test_case("turtle", Syntax::Turtle)]
    #[test_case("text/turtle", Syntax::Turtle)]
    #[test_case("N-Triples", Syntax::NTriples)]
    #[test_case("application/n-triples", Syntax::NTriples)]
    #[test_case("application/rdf+xml", Syntax::RdfXml)]
    #[test_case("RDF/XML", Syntax::RdfXml)]
    #[test_case("nt", Syntax::NTriples; "extension")]
    fn from_str(txt: &str, expected: Syntax) {
        assert_eq!(txt.parse::<Syntax>().unwrap(), expected);
    }

    #[test]
    fn from_str_unknown() {
        let err = "text/html".parse::<Syntax>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown syntax \"text/html\"");
    }

    #[test]
    fn media_type_round_trip() {
        for syntax in [Syntax::NTriples, Syntax::Turtle, Syntax::RdfXml] {
            assert_eq!(syntax.media_type().parse::<Syntax>().unwrap(), syntax);
        }
    }

    #[test_case("nested/"; "relative")]
    #[test_case("app://h/a b"; "invalid")]
    #[test_case(""; "empty")]
    fn bad_base(base: &str) {
        let err = parse_str("", Syntax::Turtle, Some(base)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedIri);
        assert_eq!(err.location(), Location::Unknown);
    }

    #[test]
    fn invalid_utf8() {
        let data = b"<x:s> <x:p> <x:\xff> .";
        let err = parse(data, Syntax::NTriples, None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Syntax);
        assert_eq!(err.location(), Location::from_offset(15));
    }

    #[test]
    fn relative_turtle_with_any_scheme() -> Result<(), Box<dyn std::error::Error>> {
        let doc = "<foo.txt> <http://www.w3.org/2000/01/rdf-schema#seeAlso> <../bar.txt> .";
        for base in SCHEME_BASES {
            let g = parse_str(doc, Syntax::Turtle, Some(format!("{base}nested/").as_str()))?;
            assert_eq!(g.len(), 1);
            assert!(g.contains(
                &Iri::new(format!("{base}nested/foo.txt"))?,
                &rdfs::seeAlso,
                &Iri::new(format!("{base}bar.txt"))?,
            ));
        }
        Ok(())
    }

    #[test]
    fn each_call_returns_a_fresh_graph() -> Result<(), ParseError> {
        let g1 = parse_str("<x:a> <x:p> <x:b> .", Syntax::NTriples, None)?;
        let g2 = parse_str("<x:c> <x:p> <x:d> .", Syntax::NTriples, None)?;
        assert_eq!(g1.len(), 1);
        assert_eq!(g2.len(), 1);
        Ok(())
    }
}
