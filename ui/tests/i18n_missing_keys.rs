use std::collections::{BTreeSet, HashSet};

/// Every non-fallback locale must define every key of the fallback
/// `en-US/scorecard-ui.ftl`, with a non-empty value, and no file may define
/// a key twice.
///
/// Adding a locale:
/// 1. Create `ui/i18n/<locale>/scorecard-ui.ftl`
/// 2. Copy all keys from `en-US/scorecard-ui.ftl` and translate the values
/// 3. Register it in `LOCALES` below
const EN_US: &str = include_str!("../i18n/en-US/scorecard-ui.ftl");

const LOCALES: &[(&str, &str)] = &[
    ("es-ES", include_str!("../i18n/es-ES/scorecard-ui.ftl")),
    ("fr-FR", include_str!("../i18n/fr-FR/scorecard-ui.ftl")),
];

/// `(key, value)` for each single-line message definition.
fn messages(src: &str) -> Vec<(String, String)> {
    src.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('.'))
        .filter_map(|line| {
            let (key, value) = line.split_once('=')?;
            let key = key.trim();
            let valid = !key.is_empty()
                && key
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
            valid.then(|| (key.to_string(), value.trim().to_string()))
        })
        .collect()
}

fn keys(src: &str) -> HashSet<String> {
    messages(src).into_iter().map(|(key, _)| key).collect()
}

fn duplicates(src: &str) -> BTreeSet<String> {
    let mut seen = HashSet::new();
    messages(src)
        .into_iter()
        .filter_map(|(key, _)| (!seen.insert(key.clone())).then_some(key))
        .collect()
}

#[test]
fn all_locales_have_all_fallback_keys() {
    let fallback = keys(EN_US);
    assert!(!fallback.is_empty(), "Fallback (en-US) contains no keys.");

    let mut failures = Vec::new();
    for (locale, src) in LOCALES {
        let present = keys(src);
        let missing: BTreeSet<_> = fallback.difference(&present).cloned().collect();
        if !missing.is_empty() {
            failures.push(format!(
                "Locale {locale} is missing {} key(s):\n  {}",
                missing.len(),
                missing.into_iter().collect::<Vec<_>>().join("\n  ")
            ));
        }
    }

    assert!(
        failures.is_empty(),
        "Translation completeness check failed:\n\n{}\n\nHint: copy the missing keys from en-US, then translate.",
        failures.join("\n\n")
    );
}

#[test]
fn no_locale_defines_a_key_twice() {
    for (locale, src) in std::iter::once(&("en-US", EN_US)).chain(LOCALES) {
        let dups = duplicates(src);
        assert!(dups.is_empty(), "Duplicate keys in {locale}: {dups:?}");
    }
}

#[test]
fn no_message_is_blank() {
    for (locale, src) in std::iter::once(&("en-US", EN_US)).chain(LOCALES) {
        for (key, value) in messages(src) {
            assert!(!value.is_empty(), "{locale}: `{key}` has an empty value");
        }
    }
}
