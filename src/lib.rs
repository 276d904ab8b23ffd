//! i18n-reader
//!
//! Pluggable translation lookup: a single [`Reader`] trait over translation
//! sources, a typed three-way result ([`Translation`] or `None`), and
//! shipped readers for in-memory, JSON-file and composed-fallback
//! catalogues.

pub mod config;
pub mod plural;
pub mod reader;
pub mod types;

pub use reader::{
    ChainReader,
    FileReader,
    MemoryReader,
    Reader,
    ReaderError,
};
pub use types::{
    OTHER,
    Translation,
};
