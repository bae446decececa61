//! API for parsing RDF syntaxes.
//!
//! Every reader of this toolkit implements [`TripleParser`],
//! and reports failures as a [`ParseError`].

use crate::graph::MutableGraph;
use relbase_iri::{resolve::BaseIri, Iri, IriRef};

mod _error;
pub use _error::*;
mod _location;
pub use _location::*;

/// A parser takes some text and inserts the triples it describes in a graph.
pub trait TripleParser {
    /// Parses `txt`, and inserts the resulting triples into `graph`.
    ///
    /// Returns the number of triples parsed (including those that were already in `graph`).
    fn parse_into<G: MutableGraph>(&self, txt: &str, graph: &mut G) -> Result<usize, ParseError>;

    /// Parses `txt` into a fresh graph.
    fn parse_str<G: MutableGraph + Default>(&self, txt: &str) -> Result<G, ParseError> {
        let mut graph = G::default();
        self.parse_into(txt, &mut graph)?;
        Ok(graph)
    }

    /// Parses UTF-8 encoded `data` into a fresh graph.
    ///
    /// Invalid UTF-8 is reported as a [`ParseError::Syntax`],
    /// located at the first invalid byte.
    fn parse_bytes<G: MutableGraph + Default>(&self, data: &[u8]) -> Result<G, ParseError> {
        let txt = std::str::from_utf8(data).map_err(|err| {
            ParseError::syntax("Invalid UTF-8", Location::from_offset(err.valid_up_to()))
        })?;
        self.parse_str(txt)
    }
}

/// Turn an IRI reference token into an absolute IRI.
///
/// * If `txt` is not a valid IRI reference, fail with [`ParseError::MalformedIri`].
/// * If `txt` is absolute, it is kept as is.
/// * Otherwise, it is resolved against `base`,
///   or fails with [`ParseError::MissingBase`] if no base is in scope.
pub fn resolve_iri_ref(
    base: Option<&Iri<String>>,
    txt: &str,
    location: Location,
) -> Result<Iri<String>, ParseError> {
    let iri_ref = IriRef::new(txt).map_err(|_| ParseError::MalformedIri {
        iri: txt.to_string(),
        location,
    })?;
    match iri_ref.into_iri() {
        Ok(iri) => Ok(Iri::new_unchecked(iri.unwrap().to_string())),
        Err(iri_ref) => match base {
            Some(base) => Ok(BaseIri::from_iri(base.as_ref()).resolve(&iri_ref)),
            None => Err(ParseError::MissingBase {
                iri: txt.to_string(),
                location,
            }),
        },
    }
}

/// Define convenience module-level functions for a parser implementation.
#[macro_export]
macro_rules! def_mod_functions_for_str_parser {
    ($parser_type: ident) => {
        /// Convenience function for parsing a str with the default parser.
        pub fn parse_str<G>(txt: &str) -> Result<G, $crate::parser::ParseError>
        where
            G: $crate::graph::MutableGraph + Default,
        {
            $crate::parser::TripleParser::parse_str(&$parser_type::default(), txt)
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;
    use relbase_iri::test::RELATIVE_IRIS;
    use test_case::test_case;

    fn base(txt: &str) -> Iri<String> {
        Iri::new(txt.to_string()).unwrap()
    }

    #[test_case("app://h/nested/", "../bar.txt", "app://h/bar.txt")]
    #[test_case("ssh://h/nested/", "foo.txt", "ssh://h/nested/foo.txt")]
    #[test_case("x-madeup://h/nested/", "#frag", "x-madeup://h/nested/#frag")]
    #[test_case("app://h/nested/", "ssh://other/./x", "ssh://other/./x"; "absolute is kept")]
    fn resolve_with_base(b: &str, txt: &str, expected: &str) {
        let got = resolve_iri_ref(Some(&base(b)), txt, Location::Unknown).unwrap();
        assert_eq!(got, expected);
    }

    #[test]
    fn rfc_examples() {
        let b = base("http://a/b/c/d;p?q");
        for (rel, expected) in RELATIVE_IRIS {
            let got = resolve_iri_ref(Some(&b), rel, Location::Unknown).unwrap();
            assert_eq!(got, *expected, "{rel}");
        }
    }

    #[test]
    fn absolute_needs_no_base() {
        let got = resolve_iri_ref(None, "org.apache.jena.test://foo/bar.txt", Location::Unknown);
        assert_eq!(got.unwrap(), "org.apache.jena.test://foo/bar.txt");
    }

    #[test]
    fn relative_needs_base() {
        let err = resolve_iri_ref(None, "bar.txt", Location::from_lico(2, 5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingBase);
        assert_eq!(err.location(), Location::from_lico(2, 5));
        assert_eq!(
            err.to_string(),
            "No base IRI to resolve <bar.txt> at 2:5"
        );
    }

    #[test_case("bar .txt"; "space")]
    #[test_case("http://a/%4"; "truncated percent")]
    #[test_case("1http://a/"; "bad scheme")]
    fn malformed(txt: &str) {
        let b = base("app://h/");
        let err = resolve_iri_ref(Some(&b), txt, Location::from_offset(7)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedIri);
        assert_eq!(err.location(), Location::from_offset(7));
    }
}
