//! Composed fallback over multiple readers.

use crate::reader::Reader;
use crate::types::Translation;

/// A [`Reader`] that consults an ordered chain of readers.
///
/// `get` returns the first translation any reader in the chain produces, in
/// the order the readers were added; `None` only when every reader misses.
/// The chain imposes no fallback-language order of its own: the `language`
/// argument is forwarded unchanged to every reader, and the caller decides
/// the reader order.
///
/// A `ChainReader` is itself a [`Reader`], so chains nest.
#[derive(Default)]
pub struct ChainReader {
    readers: Vec<Box<dyn Reader>>,
}

impl std::fmt::Debug for ChainReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChainReader").field("readers", &self.readers.len()).finish()
    }
}

impl ChainReader {
    /// Creates an empty chain. An empty chain misses every lookup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a reader to the end of the chain.
    #[must_use]
    pub fn with_reader(mut self, reader: impl Reader + 'static) -> Self {
        self.push(reader);
        self
    }

    /// Appends a reader to the end of the chain.
    pub fn push(&mut self, reader: impl Reader + 'static) {
        self.readers.push(Box::new(reader));
    }

    /// Returns the number of readers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.readers.len()
    }

    /// Returns true if the chain holds no readers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readers.is_empty()
    }
}

impl Reader for ChainReader {
    fn get(&self, key: &str, language: Option<&str>) -> Option<Translation> {
        let found = self.readers.iter().find_map(|reader| reader.get(key, language));
        if found.is_none() {
            tracing::debug!(key, ?language, "No reader in the chain has a translation");
        }
        found
    }
}

impl FromIterator<Box<dyn Reader>> for ChainReader {
    fn from_iter<I: IntoIterator<Item = Box<dyn Reader>>>(iter: I) -> Self {
        Self { readers: iter.into_iter().collect() }
    }
}
