//! Serializers for the Turtle-family of RDF concrete syntaxes.

pub mod nt;
