//! Parsers for the Turtle-family of RDF concrete syntaxes.
//!
//! Both parsers share the same scanner,
//! and report errors located by line and column (both starting at 1).

mod _common;

pub mod nt;
pub mod turtle;
