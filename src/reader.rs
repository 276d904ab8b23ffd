//! The translation lookup capability and its shipped implementations.

use thiserror::Error;

use crate::types::Translation;

pub mod chain;
pub mod file;
pub mod memory;

pub use chain::ChainReader;
pub use file::FileReader;
pub use memory::MemoryReader;

/// A source of translations.
///
/// This is the single seam between callers and translation storage: file
/// catalogues, databases, remote services and composed fallback chains all
/// look the same through it.
///
/// Contract:
/// - A missing translation is `None`, never an error. Callers branch on the
///   returned `Option` and need no error handling for the ordinary miss.
/// - Returned strings are handed out verbatim. No placeholder or parameter
///   substitution happens here; `"{{count}} items"` comes back as-is.
/// - What `language = None` means is implementation-defined (substitute a
///   configured default, or skip translation entirely) and every
///   implementation documents its choice. Omitting the language must never
///   be a reason to panic.
/// - Lookups are idempotent while the backing data is unchanged.
///
/// Genuine faults (unreachable store, corrupt data) belong to a separate
/// channel such as a fallible constructor; they must not be folded into the
/// not-found result.
pub trait Reader: Send + Sync {
    /// Returns the translation(s) for `key`, or `None` if there is none.
    fn get(&self, key: &str, language: Option<&str>) -> Option<Translation>;
}

impl<R: Reader + ?Sized> Reader for Box<R> {
    fn get(&self, key: &str, language: Option<&str>) -> Option<Translation> {
        (**self).get(key, language)
    }
}

impl<R: Reader + ?Sized> Reader for std::sync::Arc<R> {
    fn get(&self, key: &str, language: Option<&str>) -> Option<Translation> {
        (**self).get(key, language)
    }
}

/// Faults raised while building a catalogue-backed reader.
///
/// These are load-time errors only. `Reader::get` itself is infallible;
/// "no translation" is `None`, not an error.
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The catalogue root could not be read.
    #[error("Failed to read translation root '{path}': {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// A translation file contained malformed JSON.
    #[error("Failed to parse translation file '{path}': {source}")]
    Parse {
        /// File that failed to parse.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
    /// The translation file pattern was not a valid glob.
    #[error("Invalid translation file pattern: {0}")]
    Pattern(#[from] globset::Error),
    /// The catalogue settings file could not be loaded.
    #[error("Failed to load catalogue settings: {0}")]
    Config(#[from] crate::config::ConfigError),
}
