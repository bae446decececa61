//! I provide wrappers around `str`-like types
//! guaranteeing that their underlying data is a valid IRI or IRI reference.
use super::{error::InvalidIri, *};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;

macro_rules! iri_wrapper {
    ($(#[$attrs:meta])* $wrapper:ident, $check:ident) => {
        $(#[$attrs])*
        #[derive(Clone, Copy, Debug)]
        pub struct $wrapper<T: Borrow<str>>(T);

        impl<T: Borrow<str>> $wrapper<T> {
            #[doc = concat!("Build a new `", stringify!($wrapper), "`, checking that `inner` is valid.")]
            pub fn new(inner: T) -> Result<Self, InvalidIri> {
                if $check(inner.borrow()) {
                    Ok($wrapper(inner))
                } else {
                    Err(InvalidIri(inner.borrow().to_string()))
                }
            }

            #[doc = concat!("Build a new `", stringify!($wrapper), "` from trusted data.")]
            ///
            /// The caller is responsible for the validity of `inner`.
            pub fn new_unchecked(inner: T) -> Self {
                $wrapper(inner)
            }

            /// The underlying text.
            pub fn as_str(&self) -> &str {
                self.0.borrow()
            }

            /// Unwrap the underlying data.
            pub fn unwrap(self) -> T {
                self.0
            }

            /// Borrow the underlying data as a `&str`-based wrapper.
            pub fn as_ref(&self) -> $wrapper<&str> {
                $wrapper(self.0.borrow())
            }

            /// Copy the underlying data into a `Box<str>`-based wrapper.
            pub fn boxed(&self) -> $wrapper<Box<str>> {
                $wrapper(Box::from(self.as_str()))
            }

            /// The components of this IRI reference.
            pub fn parsed(&self) -> IriParsed {
                // the text has been checked on construction
                IriParsed::new(self.as_str()).unwrap_or_default()
            }
        }

        impl $wrapper<&'static str> {
            /// Build a new constant from a trusted `&'static str`.
            pub const fn new_unchecked_const(inner: &'static str) -> Self {
                $wrapper(inner)
            }
        }

        impl<T: Borrow<str>> Borrow<str> for $wrapper<T> {
            fn borrow(&self) -> &str {
                self.as_str()
            }
        }

        impl<T: Borrow<str>> AsRef<str> for $wrapper<T> {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl<T: Borrow<str>> Deref for $wrapper<T> {
            type Target = str;
            fn deref(&self) -> &str {
                self.as_str()
            }
        }

        impl<T: Borrow<str>> fmt::Display for $wrapper<T> {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl<T: Borrow<str>, U: Borrow<str>> PartialEq<$wrapper<U>> for $wrapper<T> {
            fn eq(&self, other: &$wrapper<U>) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl<T: Borrow<str>> Eq for $wrapper<T> {}

        impl<T: Borrow<str>> Hash for $wrapper<T> {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.as_str().hash(state)
            }
        }

        impl<T: Borrow<str>, U: Borrow<str>> PartialOrd<$wrapper<U>> for $wrapper<T> {
            fn partial_cmp(&self, other: &$wrapper<U>) -> Option<Ordering> {
                self.as_str().partial_cmp(other.as_str())
            }
        }

        impl<T: Borrow<str>> Ord for $wrapper<T> {
            fn cmp(&self, other: &Self) -> Ordering {
                self.as_str().cmp(other.as_str())
            }
        }

        impl<T: Borrow<str>> PartialEq<str> for $wrapper<T> {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl<T: Borrow<str>> PartialEq<&str> for $wrapper<T> {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }

        impl<T: Borrow<str>> PartialEq<$wrapper<T>> for str {
            fn eq(&self, other: &$wrapper<T>) -> bool {
                self == other.as_str()
            }
        }

        impl<T: Borrow<str>> PartialOrd<str> for $wrapper<T> {
            fn partial_cmp(&self, other: &str) -> Option<Ordering> {
                self.as_str().partial_cmp(other)
            }
        }
    };
}

iri_wrapper! {
    /// Wrapper around a `str`-like type satisfying the `IRI` rule of RFC 3987.
    ///
    /// The scheme may be any string allowed by RFC 3986,
    /// registered or not.
    Iri, is_absolute_iri_ref
}

iri_wrapper! {
    /// Wrapper around a `str`-like type satisfying the `IRI-reference` rule of RFC 3987.
    IriRef, is_valid_iri_ref
}

impl<T: Borrow<str>> IriRef<T> {
    /// Whether this IRI reference is absolute (i.e. has a scheme).
    pub fn is_absolute(&self) -> bool {
        is_absolute_iri_ref(self.as_str())
    }

    /// Convert this IRI reference to an [`Iri`] if it is absolute.
    pub fn into_iri(self) -> Result<Iri<T>, Self> {
        if self.is_absolute() {
            Ok(Iri(self.0))
        } else {
            Err(self)
        }
    }
}

impl<T: Borrow<str>> From<Iri<T>> for IriRef<T> {
    fn from(other: Iri<T>) -> Self {
        IriRef(other.0)
    }
}
