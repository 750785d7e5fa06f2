//! Ordered collections keyed by collation order

use crate::collator::{compare, Collator};
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::hash::{Hash, Hasher};
use tracing::debug;

/// String wrapper ordered by the default collator
///
/// Since the collation is a strict total order, two keys are equal exactly
/// when their strings are identical, which keeps `Eq` and `Hash` consistent
/// with `Ord`.
#[derive(Debug, Clone, Default)]
pub struct CollationKey<S>(pub S);

impl<S: AsRef<str>> CollationKey<S> {
    /// Wrap a string
    pub fn new(inner: S) -> Self {
        Self(inner)
    }

    /// The wrapped string as `&str`
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// Unwrap the string
    pub fn into_inner(self) -> S {
        self.0
    }
}

impl<S: AsRef<str>> AsRef<str> for CollationKey<S> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<S: AsRef<str>> Ord for CollationKey<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self.as_str(), other.as_str())
    }
}

impl<S: AsRef<str>> PartialOrd for CollationKey<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: AsRef<str>> PartialEq for CollationKey<S> {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl<S: AsRef<str>> Eq for CollationKey<S> {}

impl<S: AsRef<str>> Hash for CollationKey<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl From<&str> for CollationKey<String> {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CollationKey<String> {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Collect strings into a set ordered by collation
pub fn sorted_set<I, S>(items: I) -> BTreeSet<CollationKey<String>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items
        .into_iter()
        .map(|item| CollationKey(item.into()))
        .collect()
}

/// Collect entries into a map whose keys are ordered by collation
pub fn sorted_map<I, K, V>(entries: I) -> BTreeMap<CollationKey<String>, V>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
{
    entries
        .into_iter()
        .map(|(key, value)| (CollationKey(key.into()), value))
        .collect()
}

impl Collator {
    /// Sort strings in place
    pub fn sort<S: AsRef<str>>(&self, items: &mut [S]) {
        debug!(count = items.len(), "sorting");
        items.sort_unstable_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Sort values in place by a string key; stable for equal keys
    pub fn sort_by_key<T, F>(&self, items: &mut [T], mut key: F)
    where
        F: FnMut(&T) -> &str,
    {
        debug!(count = items.len(), "sorting by key");
        items.sort_by(|a, b| self.compare(key(a), key(b)));
    }

    /// Sort strings in place on the rayon thread pool
    #[cfg(feature = "parallel")]
    pub fn par_sort<S: AsRef<str> + Send>(&self, items: &mut [S]) {
        use rayon::slice::ParallelSliceMut;

        debug!(count = items.len(), "sorting in parallel");
        items.par_sort_unstable_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Whether a slice is already in collation order
    pub fn is_sorted<S: AsRef<str>>(&self, items: &[S]) -> bool {
        items
            .windows(2)
            .all(|pair| self.compare(pair[0].as_ref(), pair[1].as_ref()) != Ordering::Greater)
    }
}
