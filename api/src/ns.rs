//! Standard and custom namespaces.
//!
//! This module provides the [`namespace!`](crate::namespace) macro,
//! and the vocabularies needed by the readers of this toolkit.
//!
//! # Example
//! ```
//! use relbase_api::ns::rdfs;
//!
//! assert_eq!(rdfs::seeAlso, "http://www.w3.org/2000/01/rdf-schema#seeAlso");
//! ```

pub use relbase_iri::Iri;

/// Create a "namespace module"
/// defining a set of IRI constants sharing the same prefix.
///
/// The prefix must be a string literal.
/// Terms are given either as identifiers (the suffix is the identifier itself),
/// or as `identifier, "suffix"` pairs (for suffixes that are not valid Rust identifiers).
///
/// # Tests
/// This macro also creates a test module to check that all created IRIs are valid.
#[macro_export]
macro_rules! namespace {
    ($iri_prefix:literal, $($suffix:ident),*; $($r_id:ident, $r_sf:literal),*) => {
        /// Prefix used in this namespace.
        pub const PREFIX: &str = $iri_prefix;
        $(
            $crate::ns_iri!($iri_prefix, $suffix);
        )*
        $(
            $crate::ns_iri!($iri_prefix, $r_id, $r_sf);
        )*

    };
    ($iri_prefix:literal, $($suffix:ident),*) => {
        $crate::namespace!($iri_prefix, $($suffix),*;);
    };
}

/// Create a term in a "namespace module".
/// In general, you should use the [`namespace!`](crate::namespace) macro instead.
///
/// The resulting IRI is never checked at runtime;
/// [`namespace!`](crate::namespace) generates tests for that.
#[macro_export]
macro_rules! ns_iri {
    ($prefix:literal, $ident:ident) => {
        /// Generated term.
        #[allow(non_upper_case_globals)]
        pub const $ident: $crate::ns::Iri<&'static str> =
            $crate::ns::Iri::new_unchecked_const(concat!($prefix, stringify!($ident)));
    };
    ($prefix:literal, $ident:ident, $suffix:literal) => {
        /// Generated term.
        #[allow(non_upper_case_globals)]
        pub const $ident: $crate::ns::Iri<&'static str> =
            $crate::ns::Iri::new_unchecked_const(concat!($prefix, $suffix));
    };
}

/// The standard `rdf:` namespace.
///
/// Besides the terms of the RDF vocabulary,
/// it contains the syntactic names of RDF/XML.
pub mod rdf {
    namespace!(
        "http://www.w3.org/1999/02/22-rdf-syntax-ns#",
        // classes
        Property,
        // properties
        first,
        rest,
        value,
        // individuals
        nil,
        // syntax names
        RDF,
        Description,
        ID,
        about,
        parseType,
        resource,
        li,
        nodeID,
        datatype,
        bagID,
        aboutEach,
        aboutEachPrefix;
        // 'type' is a Rust keyword, so we use 'type_' instead
        type_, "type"
    );
}

/// The standard `rdfs:` namespace.
pub mod rdfs {
    namespace!(
        "http://www.w3.org/2000/01/rdf-schema#",
        Class,
        Resource,
        comment,
        label,
        isDefinedBy,
        seeAlso,
        subClassOf,
        subPropertyOf,
        domain,
        range
    );
}
