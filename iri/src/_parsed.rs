//! Structural view of IRI references, and their resolution as per
//! [RFC 3986 §5.2](https://tools.ietf.org/html/rfc3986#section-5.2).
//!
//! This module is transparently reexported by its parent module.

use super::{InvalidIri, IRELATIVE_REF_REGEX, IRI_REGEX};
use std::fmt;

/// Keeps track of the different components of an IRI reference.
///
/// NB: this type does not store the actual text of the IRI reference,
/// it borrows it from one (or possibly several) external `str`s.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct IriParsed<'a> {
    scheme: Option<&'a str>,
    authority: Option<&'a str>,
    /// NB: path complies with the following rules:
    /// - does not contain the separators ('/')
    /// - its first element is "" if the path starts with '/'
    /// - its last element is "" if the path ends with a '/'
    path: Vec<&'a str>,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> IriParsed<'a> {
    /// Parse the given `str` as an IRI reference,
    /// and return its inner structure (or fail with an [`InvalidIri`]).
    ///
    /// Any scheme allowed by the `scheme` rule of RFC 3986 is accepted;
    /// schemes are never checked against any registry.
    pub fn new(txt: &'a str) -> Result<IriParsed<'a>, InvalidIri> {
        let mut pi = IriParsed::default();
        let path: Option<&str>;
        if let Some(cap) = IRI_REGEX.captures(txt) {
            pi.scheme = cap.get(1).map(|m| m.as_str());
            pi.authority = cap.get(2).map(|m| m.as_str());
            pi.query = cap.get(6).map(|m| m.as_str());
            pi.fragment = cap.get(7).map(|m| m.as_str());
            path = cap
                .get(3)
                .or_else(|| cap.get(4))
                .or_else(|| cap.get(5))
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty());
        } else if let Some(cap) = IRELATIVE_REF_REGEX.captures(txt) {
            pi.authority = cap.get(1).map(|m| m.as_str());
            pi.query = cap.get(5).map(|m| m.as_str());
            pi.fragment = cap.get(6).map(|m| m.as_str());
            path = cap
                .get(2)
                .or_else(|| cap.get(3))
                .or_else(|| cap.get(4))
                .map(|m| m.as_str())
                .filter(|s| !s.is_empty());
        } else {
            return Err(InvalidIri(txt.to_owned()));
        }
        if let Some(path) = path {
            pi.path.extend(path.split('/'));
        }
        Ok(pi)
    }

    /// Return `true` if this IRI reference is absolute.
    pub fn is_absolute(&self) -> bool {
        self.scheme.is_some()
    }

    /// The scheme of this IRI reference, if any.
    pub fn scheme(&self) -> Option<&'a str> {
        self.scheme
    }

    /// The authority of this IRI reference, if any.
    pub fn authority(&self) -> Option<&'a str> {
        self.authority
    }

    /// The path of this IRI reference (possibly empty).
    pub fn path(&self) -> String {
        self.path.join("/")
    }

    /// The query of this IRI reference, if any.
    pub fn query(&self) -> Option<&'a str> {
        self.query
    }

    /// The fragment identifier of this IRI reference, if any.
    pub fn fragment(&self) -> Option<&'a str> {
        self.fragment
    }

    /// Resolve `other` using this IRI reference as the base.
    ///
    /// The fragment of the result is always the one of `other`,
    /// never inherited from `self`.
    ///
    /// NB: the resulting `IriParsed` may borrow parts from both parts.
    pub fn join(&self, other: &IriParsed<'a>) -> IriParsed<'a> {
        let (scheme, authority, path, query);
        if other.scheme.is_some() {
            scheme = other.scheme;
            authority = other.authority;
            path = normalized(other.path.clone());
            query = other.query;
        } else {
            scheme = self.scheme;
            if other.authority.is_some() {
                authority = other.authority;
                path = normalized(other.path.clone());
                query = other.query;
            } else {
                authority = self.authority;
                if other.path.is_empty() {
                    // base path is taken as is
                    path = self.path.clone();
                    query = other.query.or(self.query);
                } else {
                    if other.path[0].is_empty() {
                        path = normalized(other.path.clone());
                    } else {
                        path = normalized(self.merged_path(&other.path));
                    }
                    query = other.query;
                }
            }
        }
        IriParsed {
            scheme,
            authority,
            path,
            query,
            fragment: other.fragment,
        }
    }

    /// Appends the given path to `self`'s own path,
    /// in place of its last segment.
    fn merged_path(&self, path: &[&'a str]) -> Vec<&'a str> {
        if self.path.is_empty() {
            if self.authority.is_some() {
                // resulting path must have a leading '/'
                std::iter::once("").chain(path.iter().copied()).collect()
            } else {
                path.to_vec()
            }
        } else {
            self.path[..self.path.len() - 1]
                .iter()
                .chain(path.iter())
                .copied()
                .collect()
        }
    }
}

impl fmt::Display for IriParsed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if let Some(scheme) = self.scheme {
            write!(f, "{}:", scheme)?;
        }
        if let Some(authority) = self.authority {
            write!(f, "//{}", authority)?;
        } else if self.path.len() > 2 && self.path[0].is_empty() && self.path[1].is_empty() {
            // a path starting with "//" would be mistaken for an authority
            write!(f, "/.")?;
        }
        if let Some((first, rest)) = self.path.split_first() {
            write!(f, "{}", first)?;
            for p in rest {
                write!(f, "/{}", p)?;
            }
        }
        if let Some(query) = self.query {
            write!(f, "?{}", query)?;
        }
        if let Some(fragment) = self.fragment {
            write!(f, "#{}", fragment)?;
        }
        Ok(())
    }
}

/// Remove the `.` and `..` segments of `path`,
/// as per [RFC 3986 §5.2.4](https://tools.ietf.org/html/rfc3986#section-5.2.4).
///
/// A `..` segment that would climb above the root is dropped.
fn remove_dot_segments(path: &mut Vec<&str>) {
    if path.is_empty() {
        return;
    }
    let mut i = 0;
    let last = path[path.len() - 1];
    if last == "." || last == ".." {
        path.push("");
    }
    while i < path.len() {
        if path[i] == "." {
            path.remove(i);
        } else if path[i] == ".." {
            if i == 1 && !path[0].is_empty() {
                // "seg/.." leaves the leading '/' behind
                path[0] = "";
            } else if i > 1 {
                path.remove(i - 1);
                i -= 1;
            }
            path.remove(i);
        } else {
            i += 1;
        }
    }
}

fn normalized(mut path: Vec<&str>) -> Vec<&str> {
    remove_dot_segments(&mut path);
    path
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{NEGATIVE_IRIS, POSITIVE_IRIS, RELATIVE_IRIS};
    use test_case::test_case;

    #[test]
    fn positive() {
        for (txt, parsed) in POSITIVE_IRIS {
            let rpi = IriParsed::new(txt);
            assert!(rpi.is_ok(), "<{}> → {:?}", txt, rpi);
            let pi = rpi.unwrap();
            assert_eq!(pi.is_absolute(), parsed.0);
            assert_eq!(pi.scheme, parsed.1);
            assert_eq!(pi.authority, parsed.2);
            assert_eq!(&pi.path[..], parsed.3);
            assert_eq!(pi.query, parsed.4);
            assert_eq!(pi.fragment, parsed.5);
            assert_eq!(&pi.to_string(), txt);
        }
    }

    #[test]
    fn negative() {
        for txt in NEGATIVE_IRIS {
            let rpi = IriParsed::new(txt);
            assert!(rpi.is_err(), "<{}> → {:?}", txt, rpi);
        }
    }

    #[test]
    fn relative() {
        let base = IriParsed::new("http://a/b/c/d;p?q").unwrap();
        for (rel, abs) in RELATIVE_IRIS {
            let rel = IriParsed::new(rel).unwrap();
            let got = base.join(&rel);
            assert_eq!(&got.to_string(), abs);
        }
    }

    #[test_case("app"; "private app scheme")]
    #[test_case("ssh"; "provisional ssh scheme")]
    #[test_case("x-madeup"; "made-up scheme with dash")]
    #[test_case("org.apache.jena.test"; "reverse dns scheme")]
    #[test_case("http"; "permanent http scheme")]
    #[test_case("file"; "permanent file scheme")]
    fn scheme_does_not_matter(scheme: &str) {
        let base_txt = format!("{scheme}://h/nested/");
        let base = IriParsed::new(&base_txt).unwrap();
        for (rel, abs) in RELATIVE_IRIS {
            let rel = IriParsed::new(rel).unwrap();
            let got = base.join(&rel).to_string();
            let http_base = IriParsed::new("http://h/nested/").unwrap();
            let exp = http_base.join(&rel).to_string();
            if rel.is_absolute() {
                assert_eq!(got, exp);
            } else {
                assert_eq!(got, format!("{scheme}{}", &exp[4..]), "<{abs}>");
            }
        }
    }

    #[test]
    fn fragment_is_never_inherited() {
        let base = IriParsed::new("app://h/nested/doc?q#frag").unwrap();
        for (rel, exp) in [
            ("", "app://h/nested/doc?q"),
            ("?y", "app://h/nested/doc?y"),
            ("foo.txt", "app://h/nested/foo.txt"),
            ("#other", "app://h/nested/doc?q#other"),
        ] {
            let rel = IriParsed::new(rel).unwrap();
            assert_eq!(base.join(&rel).to_string(), exp);
        }
    }

    #[test]
    fn merge_with_empty_base_path() {
        let base = IriParsed::new("app://h").unwrap();
        let rel = IriParsed::new("foo.txt").unwrap();
        assert_eq!(base.join(&rel).to_string(), "app://h/foo.txt");

        let base = IriParsed::new("urn:").unwrap();
        let rel = IriParsed::new("foo/./bar.txt").unwrap();
        assert_eq!(base.join(&rel).to_string(), "urn:foo/bar.txt");
    }

    #[test]
    fn merge_without_authority() {
        let base = IriParsed::new("tag:a/b/c").unwrap();
        let rel = IriParsed::new("../../../x").unwrap();
        assert_eq!(base.join(&rel).to_string(), "tag:/x");
        let rel = IriParsed::new("../x").unwrap();
        assert_eq!(base.join(&rel).to_string(), "tag:a/x");
    }

    #[test]
    fn no_authority_confusion() {
        let base = IriParsed::new("tag:/a").unwrap();
        let rel = IriParsed::new("..//x").unwrap();
        assert_eq!(base.join(&rel).to_string(), "tag:/.//x");
    }

    #[test_case("/a/b/c"; "absolute path")]
    #[test_case("/a/b/c/"; "trailing slash")]
    #[test_case("a/b"; "relative path")]
    #[test_case("/a//b"; "empty segment")]
    #[test_case("/a/b/c/./../../g"; "dot segments")]
    #[test_case("/../../g"; "above root")]
    #[test_case("g/.."; "trailing double dot")]
    fn dot_segment_removal_is_idempotent(path: &str) {
        let mut once: Vec<&str> = path.split('/').collect();
        remove_dot_segments(&mut once);
        let mut twice = once.clone();
        remove_dot_segments(&mut twice);
        assert_eq!(once, twice);
    }

    #[test]
    fn dot_segment_removal_never_fails_above_root() {
        let mut path: Vec<&str> = "/../../../g".split('/').collect();
        remove_dot_segments(&mut path);
        assert_eq!(path, ["", "g"]);
    }

    #[test_case("#f", "app://h/a/b/..?q#f"; "fragment only")]
    #[test_case("?y", "app://h/a/b/..?y"; "query only")]
    #[test_case("", "app://h/a/b/..?q"; "empty")]
    #[test_case("c", "app://h/a/b/c"; "merged path")]
    #[test_case("./c/../d", "app://h/a/b/d"; "merged path is normalized")]
    fn join_with_unnormalized_base(rel: &str, expected: &str) {
        let base = IriParsed::new("app://h/a/b/..?q").unwrap();
        let rel = IriParsed::new(rel).unwrap();
        assert_eq!(base.join(&rel).to_string(), expected);
    }
}
