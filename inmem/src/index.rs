//! An [`IriIndex`] is a bidirectional association of [IRIs](`Iri`) with short numeric [indices](`Index`).
use relbase_api::iri::Iri;
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

/// Abstraction of the short numeric indices representing [IRIs](`Iri`) in an [`IriIndex`].
pub trait Index: Copy + std::fmt::Debug + Ord {
    /// The smallest index
    const ZERO: Self;
    /// The greatest index
    const MAX: Self;
    /// Convert from `usize`.
    ///
    /// # Panics
    /// If `other` is too big for this type.
    fn from_usize(other: usize) -> Self;
    /// Convert into `usize`.
    fn into_usize(self) -> usize;
}

impl Index for u32 {
    const ZERO: Self = 0;
    const MAX: Self = u32::MAX;
    fn from_usize(other: usize) -> Self {
        other
            .try_into()
            .map_err(|_| ())
            .expect("usize too big to be converted to u32")
    }
    fn into_usize(self) -> usize {
        self as usize
    }
}

//

/// A bidirectional association of [IRIs](`Iri`) with short numeric [indices](`Index`).
pub trait IriIndex {
    /// The type of indices used by this IRI-index.
    type Index: Index;

    /// Get the index corresponding to `iri`, if it exists.
    fn get_index<T: Borrow<str>>(&self, iri: &Iri<T>) -> Option<Self::Index>;
    /// Get the index corresponding to `iri`, adding it in the IRI-index if necessary.
    fn ensure_index<T: Borrow<str>>(&mut self, iri: &Iri<T>) -> Self::Index;
    /// Get the IRI corresponding to index `i`.
    ///
    /// # Precondition
    /// `i` must have been returned previously by [`get_index`](IriIndex::get_index)
    /// or [`ensure_index`](IriIndex::ensure_index),
    /// otherwise this method may panic.
    fn get_iri(&self, i: Self::Index) -> Iri<&str>;
}

/// A generic implementation of [`IriIndex`].
#[derive(Clone, Debug, Default)]
pub struct SimpleIriIndex<I: Index> {
    t2i: HashMap<Arc<str>, I>,
    i2t: Vec<Arc<str>>,
}

impl<I: Index> SimpleIriIndex<I> {
    /// Build an empty IRI-index.
    pub fn new() -> Self {
        SimpleIriIndex {
            t2i: HashMap::new(),
            i2t: vec![],
        }
    }

    /// The number of IRIs in this index.
    pub fn len(&self) -> usize {
        self.i2t.len()
    }

    /// Whether this index is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<I: Index> IriIndex for SimpleIriIndex<I> {
    type Index = I;

    fn get_index<T: Borrow<str>>(&self, iri: &Iri<T>) -> Option<Self::Index> {
        self.t2i.get(iri.as_str()).copied()
    }

    fn ensure_index<T: Borrow<str>>(&mut self, iri: &Iri<T>) -> Self::Index {
        match self.t2i.entry(Arc::from(iri.as_str())) {
            Entry::Vacant(e) => {
                let i = I::from_usize(self.i2t.len());
                self.i2t.push(e.key().clone());
                e.insert(i);
                i
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    fn get_iri(&self, i: Self::Index) -> Iri<&str> {
        // only valid IRIs are ever inserted
        Iri::new_unchecked(&*self.i2t[i.into_usize()])
    }
}
