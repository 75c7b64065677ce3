//! Cross-checks `t!` call sites in `src/` against the bundled FTL files.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the canonical FTL file per locale.
const FTL_FILENAME: &str = "scorecard-ui.ftl";

/// Root (relative to crate) for i18n assets.
const I18N_DIR: &str = "i18n";

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Message IDs defined in a Fluent file (terms and attributes skipped).
fn parse_ftl_keys(content: &str) -> BTreeSet<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('-'))
        .filter_map(|line| line.split_once('=').map(|(id, _)| id.trim()))
        .filter(|id| !id.is_empty() && id.chars().all(valid_key_char))
        .map(str::to_string)
        .collect()
}

fn rust_sources(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![root.to_path_buf()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(entries) = fs::read_dir(&path) {
                stack.extend(entries.flatten().map(|entry| entry.path()));
            }
        } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
            files.push(path);
        }
    }
    files
}

/// Literal first arguments of every `t!(...)` invocation.
///
/// Dynamically built IDs and direct `fl!` calls are not seen; the views
/// only use literal keys.
fn referenced_keys(src_root: &Path) -> BTreeSet<String> {
    let needle = concat!("t!", "(\"");
    let mut found = BTreeSet::new();
    for file in rust_sources(src_root) {
        let Ok(content) = fs::read_to_string(&file) else {
            continue;
        };
        for (pos, _) in content.match_indices(needle) {
            let rest = &content[pos + needle.len()..];
            if let Some(end) = rest.find('"') {
                let key = &rest[..end];
                if !key.is_empty() && key.chars().all(valid_key_char) {
                    found.insert(key.to_string());
                }
            }
        }
    }
    found
}

fn locale_files(i18n_root: &Path) -> Vec<(String, BTreeSet<String>)> {
    let mut locales: Vec<_> = fs::read_dir(i18n_root)
        .map(|entries| {
            entries
                .flatten()
                .map(|entry| entry.path())
                .filter(|path| path.is_dir())
                .filter_map(|path| {
                    let name = path.file_name()?.to_str()?.to_string();
                    let content = fs::read_to_string(path.join(FTL_FILENAME)).unwrap_or_else(|_| {
                        panic!("Locale folder {name} is missing {FTL_FILENAME}")
                    });
                    Some((name, parse_ftl_keys(&content)))
                })
                .collect()
        })
        .unwrap_or_default();
    locales.sort();
    locales
}

#[test]
fn every_referenced_key_is_translated_everywhere() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let referenced = referenced_keys(&crate_root.join("src"));
    assert!(!referenced.is_empty(), "no t! call sites found");

    let locales = locale_files(&crate_root.join(I18N_DIR));
    assert!(
        locales.iter().any(|(name, _)| name == "en-US"),
        "fallback locale en-US missing"
    );

    let mut report = Vec::new();
    for (locale, keys) in &locales {
        let missing: Vec<_> = referenced.difference(keys).cloned().collect();
        if !missing.is_empty() {
            report.push(format!("{locale}: {}", missing.join(", ")));
        }
    }
    assert!(
        report.is_empty(),
        "Referenced keys without a translation:\n{}",
        report.join("\n")
    );
}

#[test]
fn fallback_has_no_dead_keys() {
    let crate_root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let referenced = referenced_keys(&crate_root.join("src"));
    let fallback = crate_root.join(I18N_DIR).join("en-US").join(FTL_FILENAME);
    let content = fs::read_to_string(&fallback).unwrap_or_default();
    let unused: Vec<_> = parse_ftl_keys(&content)
        .difference(&referenced)
        .cloned()
        .collect();
    assert!(
        unused.is_empty(),
        "Keys defined in en-US but never used: {}",
        unused.join(", ")
    );
}
