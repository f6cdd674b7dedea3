//! Property tests for scaffolded manifests.

use proptest::prelude::*;

use mta_helper::domain::services::{emit_templates, manifest_synthesizer};
use mta_helper::{ScriptContext, Template};

fn selection() -> impl Strategy<Value = Vec<Template>> {
    proptest::sample::subsequence(Template::PICKER_ORDER.to_vec(), 0..=4).prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: manifest order is fixed regardless of selection order.
    #[test]
    fn property_manifest_order_is_fixed(selected in selection()) {
        let manifest = manifest_synthesizer::from_templates(&selected);
        let expected: Vec<&str> = Template::MANIFEST_ORDER
            .iter()
            .filter(|t| selected.contains(t))
            .map(|t| t.file_name())
            .collect();
        let actual: Vec<&str> = manifest.entries().iter().map(|e| e.src().as_str()).collect();

        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: only server scripts omit the cache attribute.
    #[test]
    fn property_cache_attribute_only_for_non_server(selected in selection()) {
        let rendered = manifest_synthesizer::from_templates(&selected).render();
        for line in rendered.lines().filter(|l| l.contains("<script")) {
            let is_server = line.contains("type=\"server\"");
            prop_assert_eq!(line.contains("cache=\"false\""), !is_server, "line: {}", line);
        }
    }

    /// PROPERTY: the zoom answer never changes meta.xml, only client.lua.
    #[test]
    fn property_zoom_does_not_touch_manifest(selected in selection()) {
        let manifest = manifest_synthesizer::from_templates(&selected);
        prop_assert_eq!(manifest.len(), selected.len());

        let plain = emit_templates(&selected, false);
        let zoomed = emit_templates(&selected, true);
        prop_assert_eq!(plain.len(), zoomed.len());
        for (a, b) in plain.iter().zip(&zoomed) {
            prop_assert_eq!(a.path(), b.path());
            if a.path().ends_with("client.lua") {
                prop_assert_ne!(a.content(), b.content());
            } else {
                prop_assert_eq!(a.content(), b.content());
            }
        }
    }

    /// PROPERTY: utils.lua is always typed as shared.
    #[test]
    fn property_utils_is_shared(selected in selection()) {
        prop_assume!(selected.contains(&Template::Utils));
        prop_assert_eq!(Template::Utils.context(), ScriptContext::Shared);
        let rendered = manifest_synthesizer::from_templates(&selected).render();
        prop_assert!(rendered.contains("<script src=\"utils.lua\" type=\"shared\" cache=\"false\" />"));
    }
}
