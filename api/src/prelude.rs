//! Prelude of the relbase API.

pub use crate::graph::{Graph, MutableGraph};
pub use crate::parser::TripleParser;
pub use crate::serializer::{Stringifier, TripleSerializer};
pub use crate::triple::Triple;
pub use relbase_iri::{Iri, IriRef};
