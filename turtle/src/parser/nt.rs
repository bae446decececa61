//! Parser for the [N-Triples] concrete syntax of RDF.
//!
//! Only triples made of absolute IRIs are accepted.
//!
//! [N-Triples]: https://www.w3.org/TR/n-triples/

use super::_common::Scanner;
use relbase_api::graph::MutableGraph;
use relbase_api::parser::{ParseError, TripleParser};
use relbase_iri::{Iri, IriRef};

/// N-Triples parser.
#[derive(Clone, Debug, Default)]
pub struct NTriplesParser {
    /// Ignored: N-Triples has no relative IRIs.
    pub base: Option<Iri<String>>,
}

impl TripleParser for NTriplesParser {
    fn parse_into<G: MutableGraph>(&self, txt: &str, graph: &mut G) -> Result<usize, ParseError> {
        let mut scanner = Scanner::new(txt);
        let mut count = 0;
        while !scanner.is_eof() {
            scanner.hws();
            if !scanner.eol() {
                let s = iri(&mut scanner)?;
                scanner.hws();
                let p = iri(&mut scanner)?;
                scanner.hws();
                let o = iri(&mut scanner)?;
                scanner.hws();
                scanner.expect(".")?;
                scanner.hws();
                if !scanner.eol() {
                    return Err(scanner.expected("end of line"));
                }
                log::trace!("<{s}> <{p}> <{o}>");
                graph.insert(&s, &p, &o);
                count += 1;
            }
            scanner.skip_line();
        }
        log::debug!("{count} triples parsed from N-Triples");
        Ok(count)
    }
}

relbase_api::def_mod_functions_for_str_parser!(NTriplesParser);

fn iri(scanner: &mut Scanner) -> Result<Iri<String>, ParseError> {
    match scanner.rest().chars().next() {
        Some('<') => {
            let (txt, location) = scanner.iriref_raw()?;
            let iri_ref = IriRef::new(txt).map_err(|err| ParseError::MalformedIri {
                iri: err.0,
                location,
            })?;
            iri_ref.into_iri().map_err(|iri_ref| {
                ParseError::syntax(
                    format!("Relative IRI <{iri_ref}> is not allowed in N-Triples"),
                    location,
                )
            })
        }
        Some('"') => Err(scanner.unsupported("Literals")),
        Some('_') => Err(scanner.unsupported("Blank nodes")),
        _ => Err(scanner.expected("an IRI")),
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
