//! Regular expressions for the `IRI` and `irelative-ref` rules of
//! [RFC 3987](https://tools.ietf.org/html/rfc3987#section-2.2).
//!
//! Both expressions capture the components of the IRI reference,
//! so that [`IriParsed`](crate::IriParsed) can be built from them.
use lazy_static::lazy_static;
use regex::Regex;

/// Check whether `txt` is a valid (absolute or relative) IRI reference.
#[inline]
pub fn is_valid_iri_ref(txt: &str) -> bool {
    IRI_REGEX.is_match(txt) || IRELATIVE_REF_REGEX.is_match(txt)
}

/// Check whether `txt` is an absolute IRI reference.
#[inline]
pub fn is_absolute_iri_ref(txt: &str) -> bool {
    IRI_REGEX.is_match(txt)
}

/// Check whether `txt` is a relative IRI reference.
#[inline]
pub fn is_relative_iri_ref(txt: &str) -> bool {
    IRELATIVE_REF_REGEX.is_match(txt)
}

// Character class contents (to be used between square brackets).
const IUNRESERVED: &str = r"A-Za-z0-9\-._~\u{A0}-\u{D7FF}\u{F900}-\u{FDCF}\u{FDF0}-\u{FFEF}\u{10000}-\u{1FFFD}\u{20000}-\u{2FFFD}\u{30000}-\u{3FFFD}\u{40000}-\u{4FFFD}\u{50000}-\u{5FFFD}\u{60000}-\u{6FFFD}\u{70000}-\u{7FFFD}\u{80000}-\u{8FFFD}\u{90000}-\u{9FFFD}\u{A0000}-\u{AFFFD}\u{B0000}-\u{BFFFD}\u{C0000}-\u{CFFFD}\u{D0000}-\u{DFFFD}\u{E1000}-\u{EFFFD}";
const IPRIVATE: &str = r"\u{E000}-\u{F8FF}\u{F0000}-\u{FFFFD}\u{100000}-\u{10FFFD}";
const SUB_DELIMS: &str = r"!$&'()*+,;=";

const PCT_ENCODED: &str = r"%[0-9A-Fa-f]{2}";
const SCHEME: &str = r"[A-Za-z][A-Za-z0-9+\-.]*";
const PORT: &str = r"[0-9]*";
// IPv6 addresses are only checked for their alphabet
const IP_LITERAL: &str = r"\[(?:[0-9A-Fa-f:.]+|v[0-9A-Fa-f]+\.[A-Za-z0-9\-._~!$&'()*+,;=:]+)\]";

lazy_static! {
    static ref IPCHAR: String = format!(r"(?:[{IUNRESERVED}{SUB_DELIMS}:@]|{PCT_ENCODED})");
    static ref ISEGMENT_NZ_NC: String = format!(r"(?:[{IUNRESERVED}{SUB_DELIMS}@]|{PCT_ENCODED})+");
    static ref IAUTHORITY: String = format!(
        r"(?:(?:[{IUNRESERVED}{SUB_DELIMS}:]|{PCT_ENCODED})*@)?(?:{IP_LITERAL}|(?:[{IUNRESERVED}{SUB_DELIMS}]|{PCT_ENCODED})*)(?::{PORT})?"
    );
    static ref IPATH_ABEMPTY: String = format!(r"(?:/{ipchar}*)*", ipchar = *IPCHAR);
    static ref IPATH_ABSOLUTE: String =
        format!(r"/(?:{ipchar}+(?:/{ipchar}*)*)?", ipchar = *IPCHAR);
    static ref IPATH_ROOTLESS: String = format!(r"{ipchar}+(?:/{ipchar}*)*", ipchar = *IPCHAR);
    static ref IPATH_NOSCHEME: String = format!(
        r"{nz_nc}(?:/{ipchar}*)*",
        nz_nc = *ISEGMENT_NZ_NC,
        ipchar = *IPCHAR
    );
    static ref IQUERY: String =
        format!(r"(?:[{IUNRESERVED}{SUB_DELIMS}:@{IPRIVATE}/?]|{PCT_ENCODED})*");
    static ref IFRAGMENT: String = format!(r"(?:[{IUNRESERVED}{SUB_DELIMS}:@/?]|{PCT_ENCODED})*");

    /// Match an absolute IRI reference.
    ///
    /// Captures: 1 scheme, 2 authority, 3-5 path, 6 query, 7 fragment.
    pub static ref IRI_REGEX: Regex = Regex::new(&format!(
        r"^({SCHEME}):(?://({auth})({abempty})|({absolute})|({rootless}))?(?:\?({query}))?(?:#({fragment}))?$",
        auth = *IAUTHORITY,
        abempty = *IPATH_ABEMPTY,
        absolute = *IPATH_ABSOLUTE,
        rootless = *IPATH_ROOTLESS,
        query = *IQUERY,
        fragment = *IFRAGMENT,
    ))
    .unwrap();

    /// Match a relative IRI reference.
    ///
    /// Captures: 1 authority, 2-4 path, 5 query, 6 fragment.
    pub static ref IRELATIVE_REF_REGEX: Regex = Regex::new(&format!(
        r"^(?://({auth})({abempty})|({absolute})|({noscheme}))?(?:\?({query}))?(?:#({fragment}))?$",
        auth = *IAUTHORITY,
        abempty = *IPATH_ABEMPTY,
        absolute = *IPATH_ABSOLUTE,
        noscheme = *IPATH_NOSCHEME,
        query = *IQUERY,
        fragment = *IFRAGMENT,
    ))
    .unwrap();
}
