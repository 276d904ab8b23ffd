//! End-to-end tests of the public lookup API.

#![allow(clippy::unwrap_used)]
#![allow(missing_docs)]

use std::fs;
use std::path::Path;

use googletest::prelude::*;
use i18n_reader::{
    ChainReader,
    FileReader,
    MemoryReader,
    Reader,
    Translation,
};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[googletest::test]
fn single_translation_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "en.json", r#"{"hello": "Hi"}"#);

    let reader = FileReader::open(temp_dir.path()).unwrap();

    expect_that!(
        reader.get("hello", Some("en")),
        some(eq(&Translation::Single("Hi".to_string())))
    );
    expect_that!(reader.get("missing", Some("en")), none());
}

#[googletest::test]
fn variant_translation_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "en.json", r#"{"items": {"other": "items", "one": "item"}}"#);

    let reader = FileReader::open(temp_dir.path()).unwrap();

    let translation = reader.get("items", Some("en")).unwrap();
    let variants = translation.as_variants().unwrap();
    expect_that!(variants.len(), eq(2));
    expect_that!(variants.get("one"), some(eq(&"item".to_string())));
    expect_that!(variants.get("other"), some(eq(&"items".to_string())));
    expect_that!(translation.default_text(), some(eq("items")));
}

#[googletest::test]
fn chain_of_file_and_memory_readers() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "de.json", r#"{"hello": "Hallo"}"#);

    let mut fallback = MemoryReader::new();
    fallback.insert("de", "goodbye", "Tschüss");
    fallback.insert("de", "hello", "never reached");

    let chain = ChainReader::new()
        .with_reader(FileReader::open(temp_dir.path()).unwrap())
        .with_reader(fallback);

    // The file reader wins for keys it has; the memory reader fills the rest.
    expect_that!(
        chain.get("hello", Some("de")),
        some(eq(&Translation::Single("Hallo".to_string())))
    );
    expect_that!(
        chain.get("goodbye", Some("de")),
        some(eq(&Translation::Single("Tschüss".to_string())))
    );
    expect_that!(chain.get("missing", Some("de")), none());
}

#[googletest::test]
fn omitted_language_is_deterministic() {
    let mut reader = MemoryReader::new();
    reader.insert("en", "hello", "Hi");

    // Without a default language every omitted-language lookup misses.
    expect_that!(reader.get("hello", None), none());
    expect_that!(reader.get("hello", None), none());

    let reader = reader.with_default_language("en");
    expect_that!(reader.get("hello", None), some(eq(&Translation::Single("Hi".to_string()))));
    expect_that!(reader.get("hello", None), some(eq(&Translation::Single("Hi".to_string()))));
}

#[googletest::test]
fn placeholders_come_back_unresolved() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "en.json", r#"{"greeting": "Hello, {{name}}!"}"#);

    let reader = FileReader::open(temp_dir.path()).unwrap();

    expect_that!(
        reader.get("greeting", Some("en")),
        some(eq(&Translation::Single("Hello, {{name}}!".to_string())))
    );
}

#[googletest::test]
fn readers_are_object_safe_and_shareable() {
    let mut reader = MemoryReader::new();
    reader.insert("en", "hello", "Hi");
    let boxed: Box<dyn Reader> = Box::new(reader);
    let shared = std::sync::Arc::new(boxed);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let shared = std::sync::Arc::clone(&shared);
            std::thread::spawn(move || shared.get("hello", Some("en")))
        })
        .collect();

    for handle in handles {
        expect_that!(
            handle.join().unwrap(),
            some(eq(&Translation::Single("Hi".to_string())))
        );
    }
}

#[googletest::test]
fn catalogue_settings_steer_the_file_reader() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), ".i18n.json", r#"{"defaultLanguage": "en", "keySeparator": ":"}"#);
    write(temp_dir.path(), "en.json", r#"{"common": {"hello": "Hi"}}"#);

    let reader = FileReader::open(temp_dir.path()).unwrap();

    expect_that!(
        reader.get("common:hello", None),
        some(eq(&Translation::Single("Hi".to_string())))
    );
    expect_that!(reader.get("common.hello", None), none());
}
