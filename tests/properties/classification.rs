//! Property tests for script classification and path normalization.

use std::path::PathBuf;

use proptest::prelude::*;

use mta_helper::domain::ports::WalkEntry;
use mta_helper::domain::services::manifest_synthesizer::classify_entry;
use mta_helper::{ManifestEntry, ManifestPath, ScriptContext};

fn name_part() -> impl Strategy<Value = String> {
    "[a-zA-Z_]{0,8}"
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a file name containing "client" is always a client script,
    /// even when it also contains "server".
    #[test]
    fn property_client_substring_wins(
        prefix in name_part(),
        middle in name_part(),
        suffix in name_part(),
        with_server in any::<bool>(),
    ) {
        let name = if with_server {
            format!("{}client{}server{}.lua", prefix, middle, suffix)
        } else {
            format!("{}client{}.lua", prefix, suffix)
        };
        prop_assert_eq!(ScriptContext::classify(&name), ScriptContext::Client);
    }

    /// PROPERTY: without either substring a script is shared.
    #[test]
    fn property_plain_names_are_shared(stem in "[abd-rt-z0-9_]{1,12}") {
        let name = format!("{}.lua", stem);
        prop_assert_eq!(ScriptContext::classify(&name), ScriptContext::Shared);
    }

    /// PROPERTY: only `.lua` files become scripts; everything else is a file entry.
    #[test]
    fn property_non_lua_files_are_plain_files(
        stem in "[a-z]{1,8}",
        ext in "(txt|png|luac|xml|lua\\.bak|dff)",
    ) {
        let entry = WalkEntry::file(format!("{}client.{}", stem, ext));
        let classified = classify_entry(&entry).unwrap();
        prop_assert!(
            matches!(classified, ManifestEntry::File { .. }),
            "expected a file entry, got {:?}",
            classified
        );
    }

    /// PROPERTY: directories never produce an entry.
    #[test]
    fn property_directories_are_skipped(name in "[a-z_]{1,8}(\\.lua)?") {
        prop_assert_eq!(classify_entry(&WalkEntry::dir(name)), None);
    }

    /// PROPERTY: manifest paths never contain a backslash.
    #[test]
    fn property_manifest_paths_use_forward_slashes(
        parts in proptest::collection::vec("[a-z]{1,6}", 1..5),
        sep in "(\\\\|/)",
    ) {
        let raw = parts.join(&sep);
        let path = ManifestPath::new(&raw);
        prop_assert!(!path.as_str().contains('\\'));
        prop_assert_eq!(path.as_str(), parts.join("/"));

        let from_components = ManifestPath::from_relative(&parts.iter().collect::<PathBuf>());
        prop_assert_eq!(from_components.as_str(), parts.join("/"));
    }
}
