//! Property-based tests for the config model.
//!
//! These tests use proptest to verify invariants hold across
//! randomly generated configurations.

use proptest::prelude::*;

use gitcfg::core::config::{Config, RemoteConfig};
use gitcfg::core::refspec::RefSpec;
use gitcfg::format::{decode, encode_to_vec, Entry, RawConfig};

/// Strategy for remote names.
fn remote_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_-]{0,11}"
}

/// Strategy for URLs, including characters that need quoting.
fn url() -> impl Strategy<Value = String> {
    prop_oneof![
        "https://[a-z]{1,8}\\.com/[a-z]{1,8}\\.git",
        "git@[a-z]{1,8}:[a-z]{1,8}/[a-z]{1,8}\\.git",
        "/srv/git/[a-z ]{1,8}#[0-9]{1,3}",
    ]
}

/// Strategy for valid refspecs.
fn refspec() -> impl Strategy<Value = RefSpec> {
    ("[a-z]{1,6}", "[a-z]{1,6}", any::<bool>(), any::<bool>()).prop_map(
        |(src, dst, force, wildcard)| {
            let force = if force { "+" } else { "" };
            let spec = if wildcard {
                format!("{force}refs/heads/{src}/*:refs/remotes/{dst}/*")
            } else {
                format!("{force}refs/heads/{src}:refs/remotes/{dst}")
            };
            RefSpec::new(spec).unwrap()
        },
    )
}

/// Strategy for fetch values as found in real files, malformed ones
/// included.
fn fetch_value() -> impl Strategy<Value = String> {
    prop_oneof![
        refspec().prop_map(String::from),
        "refs/heads/[a-z]{1,5}:",
        ":refs/heads/[a-z]{1,5}",
        Just(":".to_string()),
        "refs/heads/[a-z]{1,5}",
        "refs/heads/\\*:refs/remotes/[a-z]{1,5}/main",
        "[a-z]{1,3}:[a-z]{1,3}:[a-z]{1,3}",
    ]
}

/// Strategy for untyped values, written unquoted.
fn plain_value() -> impl Strategy<Value = String> {
    "[A-Za-z0-9/._:+-]{0,12}"
}

/// Strategy for untyped keys. The `x` prefix keeps them apart from
/// `bare`, `url` and `fetch`.
fn extra_options() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("x[a-zA-Z0-9-]{0,6}", plain_value()), 0..3)
}

/// Generated git-config text with the typed config it should decode to.
#[derive(Debug, Clone)]
struct ConfigText {
    text: String,
    expected: Config,
}

fn config_text() -> impl Strategy<Value = ConfigText> {
    let core = (
        prop::option::of(prop_oneof![
            Just("true".to_string()),
            Just("false".to_string()),
            Just("yes".to_string()),
        ]),
        extra_options(),
    );
    let remotes = prop::collection::btree_map(
        remote_name(),
        (
            prop::option::of(url()),
            prop::collection::vec(fetch_value(), 0..4),
            extra_options(),
        ),
        0..4,
    );
    let others = prop::collection::vec(
        (
            "x[a-z]{0,5}",
            prop::option::of("[a-zA-Z0-9 ._-]{1,8}"),
            extra_options(),
        ),
        0..3,
    );

    (core, remotes, others, any::<bool>()).prop_map(
        |((bare, core_extra), remotes, others, comments)| {
            let mut text = String::new();
            let mut expected = Config::new();
            if comments {
                text.push_str("# generated\n");
            }

            text.push_str("[core]\n");
            for (key, value) in &core_extra {
                text.push_str(&format!("\t{key} = {value}\n"));
            }
            if let Some(bare) = &bare {
                text.push_str(&format!("\tbare = {bare}\n"));
                expected.core.is_bare = bare == "true";
            }

            for (name, (url, fetch, extra)) in &remotes {
                text.push_str(&format!("[remote \"{name}\"]\n"));
                if let Some(url) = url {
                    text.push_str(&format!("\turl = {url:?}\n"));
                }
                for (i, value) in fetch.iter().enumerate() {
                    text.push_str(&format!("\tfetch = {value}\n"));
                    if let Some((key, extra_value)) = extra.get(i) {
                        text.push_str(&format!("\t{key} = {extra_value}\n"));
                    }
                }
                for (key, value) in extra.iter().skip(fetch.len()) {
                    text.push_str(&format!("\t{key} = {value}\n"));
                }
                if comments {
                    text.push_str("\t; end of remote\n");
                }

                let fetch = fetch.iter().filter_map(|value| RefSpec::new(value.as_str()).ok());
                let remote = RemoteConfig::new(name.clone(), url.clone().unwrap_or_default())
                    .with_fetch(fetch);
                expected.remotes.insert(name.clone(), remote);
            }

            for (section, subsection, options) in &others {
                match subsection {
                    Some(sub) => text.push_str(&format!("[{section} \"{sub}\"]\n")),
                    None => text.push_str(&format!("[{section}]\n")),
                }
                for (key, value) in options {
                    text.push_str(&format!("\t{key} = {value}\n"));
                }
            }

            ConfigText { text, expected }
        },
    )
}

/// Entries not covered by the typed model.
fn untyped(entries: Vec<Entry>) -> Vec<Entry> {
    entries
        .into_iter()
        .filter(|entry| {
            let typed = match (entry.section.as_str(), &entry.subsection) {
                ("core", None) => entry.key == "bare",
                ("remote", Some(_)) => entry.key == "url" || entry.key == "fetch",
                _ => false,
            };
            !typed
        })
        .collect()
}

/// Strategy for whole configs built in code.
fn config() -> impl Strategy<Value = Config> {
    (
        any::<bool>(),
        prop::collection::btree_map(
            remote_name(),
            (url(), prop::collection::vec(refspec(), 0..4)),
            0..4,
        ),
    )
        .prop_map(|(is_bare, remotes)| {
            let mut config = Config::new();
            config.core.is_bare = is_bare;
            for (name, (url, fetch)) in remotes {
                let remote = RemoteConfig::new(name.clone(), url).with_fetch(fetch);
                config.remotes.insert(name, remote);
            }
            config
        })
}

proptest! {
    /// Marshal then unmarshal preserves every typed field.
    #[test]
    fn marshal_unmarshal_roundtrip(mut config in config()) {
        let data = config.marshal().unwrap();
        let parsed = Config::from_bytes(&data).unwrap();
        prop_assert_eq!(parsed, config);
    }

    /// Validating twice gives the same result and the same fetch lists.
    #[test]
    fn validate_is_idempotent(mut config in config()) {
        let first = config.validate().is_ok();
        let after_first = config.clone();
        let second = config.validate().is_ok();

        prop_assert_eq!(first, second);
        prop_assert_eq!(config, after_first);
    }

    /// After validation every remote has at least one fetch refspec.
    #[test]
    fn validate_fills_fetch(mut config in config()) {
        config.validate().unwrap();
        for remote in config.remotes.values() {
            prop_assert!(!remote.fetch.is_empty());
        }
    }

    /// Repeated marshals produce identical text.
    #[test]
    fn marshal_is_stable(mut config in config()) {
        let first = config.marshal().unwrap();
        let second = config.marshal().unwrap();
        prop_assert_eq!(first, second);
    }

    /// Arbitrary option values survive the raw codec.
    #[test]
    fn raw_values_roundtrip(values in prop::collection::vec("[ -~\t\n\r]{0,20}", 1..6)) {
        let mut raw = RawConfig::new();
        for value in &values {
            raw.add("test", None, "key", value).unwrap();
        }

        let decoded = decode(&encode_to_vec(&raw).unwrap()).unwrap();
        prop_assert_eq!(decoded.get_all("test", None, "key"), values);
        prop_assert_eq!(decoded, raw);
    }

    /// Typed fields read from generated text match what was written, and
    /// survive a marshal.
    #[test]
    fn text_unmarshal_reads_typed_fields(file in config_text()) {
        let mut config = Config::from_bytes(file.text.as_bytes()).unwrap();
        prop_assert_eq!(&config, &file.expected);

        let data = config.marshal().unwrap();
        let reparsed = Config::from_bytes(&data).unwrap();
        prop_assert_eq!(reparsed, file.expected);
    }

    /// Everything outside `core.bare` and remote `url` / `fetch` is unchanged
    /// by a marshal, in order.
    #[test]
    fn text_marshal_keeps_untyped_entries(file in config_text()) {
        let mut config = Config::from_bytes(file.text.as_bytes()).unwrap();
        let before = untyped(config.raw().entries());

        let data = config.marshal().unwrap();
        let reparsed = Config::from_bytes(&data).unwrap();
        prop_assert_eq!(untyped(reparsed.raw().entries()), before);
    }

    /// Default fetch refspecs are always valid.
    #[test]
    fn default_fetch_is_valid(name in remote_name()) {
        prop_assert!(RefSpec::is_valid(RefSpec::default_fetch(&name).as_str()));
    }
}
