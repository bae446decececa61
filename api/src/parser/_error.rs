// this module is transparently re-exported by its parent `parser`
use super::Location;

/// Error raised by the readers of this toolkit.
///
/// All errors are terminal:
/// a parse call that fails never yields a partial graph.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// An IRI token does not match the `IRI-reference` grammar
    #[error("Malformed IRI <{iri}> at {location}")]
    MalformedIri {
        /// The offending IRI token
        iri: String,
        /// Where the token was found
        location: Location,
    },
    /// A relative IRI reference was found while no base IRI was in scope
    #[error("No base IRI to resolve <{iri}> at {location}")]
    MissingBase {
        /// The relative IRI reference
        iri: String,
        /// Where the reference was found
        location: Location,
    },
    /// The document does not match the accepted syntax
    #[error("{message} at {location}")]
    Syntax {
        /// A description of the problem
        message: String,
        /// Where the problem was detected
        location: Location,
    },
}

impl ParseError {
    /// Build a [`ParseError::Syntax`].
    pub fn syntax<M: ToString>(message: M, location: Location) -> Self {
        ParseError::Syntax {
            message: message.to_string(),
            location,
        }
    }

    /// Return the [kind][`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MalformedIri { .. } => ErrorKind::MalformedIri,
            ParseError::MissingBase { .. } => ErrorKind::MissingBase,
            ParseError::Syntax { .. } => ErrorKind::Syntax,
        }
    }

    /// Return the location where this error was detected.
    pub fn location(&self) -> Location {
        match self {
            ParseError::MalformedIri { location, .. }
            | ParseError::MissingBase { location, .. }
            | ParseError::Syntax { location, .. } => *location,
        }
    }

    /// Display this error with context (typically a file name).
    pub fn in_context(&self, context: &str) -> String {
        format!("{context}: {self}")
    }
}

/// Kind of [parsing errors][`ParseError`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    /// See [`ParseError::MalformedIri`]
    MalformedIri,
    /// See [`ParseError::MissingBase`]
    MissingBase,
    /// See [`ParseError::Syntax`]
    Syntax,
}
