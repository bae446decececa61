//! Parser for a subset of the [Turtle] concrete syntax of RDF.
//!
//! Supported: `@base` and `BASE` directives,
//! and statements made of IRI references,
//! with the `a` keyword and the `,` and `;` abbreviations.
//! Prefixes, literals, blank nodes and collections are rejected.
//!
//! [Turtle]: https://www.w3.org/TR/turtle/

use super::_common::Scanner;
use relbase_api::graph::MutableGraph;
use relbase_api::ns::rdf;
use relbase_api::parser::{resolve_iri_ref, ParseError, TripleParser};
use relbase_iri::Iri;

/// Turtle parser.
#[derive(Clone, Debug, Default)]
pub struct TurtleParser {
    /// The base IRI used by this parser to resolve relative IRI-references,
    /// until the document declares its own.
    pub base: Option<Iri<String>>,
}

impl TripleParser for TurtleParser {
    fn parse_into<G: MutableGraph>(&self, txt: &str, graph: &mut G) -> Result<usize, ParseError> {
        let mut state = TurtleState {
            scanner: Scanner::new(txt),
            base: self.base.clone(),
            count: 0,
        };
        state.document(graph)?;
        log::debug!("{} triples parsed from Turtle", state.count);
        Ok(state.count)
    }
}

relbase_api::def_mod_functions_for_str_parser!(TurtleParser);

struct TurtleState<'a> {
    scanner: Scanner<'a>,
    base: Option<Iri<String>>,
    count: usize,
}

impl<'a> TurtleState<'a> {
    fn document<G: MutableGraph>(&mut self, graph: &mut G) -> Result<(), ParseError> {
        lazy_regex!(SPARQL_BASE = r"^(?i:base)[ \t\r\n<#]");
        lazy_regex!(SPARQL_PREFIX = r"^(?i:prefix)[ \t\r\n:]");
        loop {
            self.scanner.ws();
            let rest = self.scanner.rest();
            if rest.is_empty() {
                return Ok(());
            } else if rest.starts_with("@base") {
                self.scanner.advance(5);
                self.base_decl()?;
                self.scanner.ws();
                self.scanner.expect(".")?;
            } else if rest.starts_with("@prefix") {
                return Err(self.scanner.unsupported("Prefix declarations"));
            } else if rest.starts_with('@') {
                return Err(self.scanner.expected("'@base'"));
            } else if SPARQL_BASE.is_match(rest) {
                self.scanner.advance(4);
                self.base_decl()?;
            } else if SPARQL_PREFIX.is_match(rest) {
                return Err(self.scanner.unsupported("Prefix declarations"));
            } else {
                self.triples(graph)?;
            }
        }
    }

    /// Parse the IRI of a base declaration, and make it the current base.
    fn base_decl(&mut self) -> Result<(), ParseError> {
        self.scanner.ws();
        if !self.scanner.rest().starts_with('<') {
            return Err(self.scanner.expected("an IRI"));
        }
        let (txt, location) = self.scanner.iriref_raw()?;
        let base = resolve_iri_ref(self.base.as_ref(), &txt, location)?;
        match &self.base {
            Some(old) => log::debug!("base <{old}> overridden by <{base}> at {location}"),
            None => log::debug!("base set to <{base}> at {location}"),
        }
        self.base = Some(base);
        Ok(())
    }

    fn triples<G: MutableGraph>(&mut self, graph: &mut G) -> Result<(), ParseError> {
        let s = self.iri("a subject")?;
        self.scanner.ws();
        loop {
            let p = self.verb()?;
            self.scanner.ws();
            loop {
                let o = self.iri("an object")?;
                log::trace!("<{s}> <{p}> <{o}>");
                graph.insert(&s, &p, &o);
                self.count += 1;
                self.scanner.ws();
                if !self.scanner.eat(",") {
                    break;
                }
                self.scanner.ws();
            }
            if !self.scanner.eat(";") {
                break;
            }
            self.scanner.ws();
            while self.scanner.eat(";") {
                self.scanner.ws();
            }
            if self.scanner.rest().starts_with('.') {
                break;
            }
        }
        self.scanner.expect(".")
    }

    fn verb(&mut self) -> Result<Iri<String>, ParseError> {
        lazy_regex!(A = r"^a[ \t\r\n<#]");
        if A.is_match(self.scanner.rest()) {
            self.scanner.advance(1);
            Ok(Iri::new_unchecked(rdf::type_.as_str().to_string()))
        } else {
            self.iri("a predicate")
        }
    }

    fn iri(&mut self, what: &str) -> Result<Iri<String>, ParseError> {
        match self.scanner.rest().chars().next() {
            Some('<') => {
                let (txt, location) = self.scanner.iriref_raw()?;
                resolve_iri_ref(self.base.as_ref(), &txt, location)
            }
            Some('"' | '\'' | '+' | '-' | '0'..='9') => Err(self.scanner.unsupported("Literals")),
            Some('_' | '[') => Err(self.scanner.unsupported("Blank nodes")),
            Some('(') => Err(self.scanner.unsupported("Collections")),
            Some(c) if c == ':' || c.is_alphabetic() => {
                Err(self.scanner.unsupported("Prefixed names"))
            }
            _ => Err(self.scanner.expected(what)),
        }
    }
}

// ---------------------------------------------------------------------------------
//                                      tests
// ---------------------------------------------------------------------------------
