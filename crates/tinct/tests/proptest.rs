//! Property-based tests for attribute normalization using proptest.

use proptest::prelude::*;
use serde_json::{json, Map, Value};
use tinct::{
    default_theme, normalize_highlight_default, AttrConfig, Normalizer, Target, DISPLAY_PROPS,
};

// ============================================================================
// Test helpers
// ============================================================================

fn style_key_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z]{0,10}".prop_filter("display and target keys", |k| {
        !DISPLAY_PROPS.contains(&k.as_str()) && Target::parse(k).is_none()
    })
}

fn style_rules_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(style_key_strategy(), "[a-z0-9 ]{1,10}", 1..4).prop_map(|rules| {
        rules
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect()
    })
}

fn target_strategy() -> impl Strategy<Value = Target> {
    prop::sample::select(Target::ALL.to_vec())
}

fn color_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,10}"
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A mapping without target keys describes exactly the base target.
    #[test]
    fn flat_config_promotes_to_base(rules in style_rules_strategy()) {
        let config = AttrConfig::from(rules.clone());
        let attrs = Normalizer::new("ribbon").normalize(&config, default_theme()).unwrap();

        let targets: Vec<Target> = attrs.targets().collect();
        prop_assert_eq!(targets, vec![Target::Base]);

        let base = attrs.base().unwrap();
        prop_assert_eq!(base.style.as_ref(), Some(&rules));
        prop_assert_eq!(base.color.as_str(), "blue");
    }

    /// Only configured targets appear, and every one has a color.
    #[test]
    fn targets_are_never_invented(
        picked in prop::collection::btree_set(target_strategy(), 1..4),
        color in color_strategy(),
    ) {
        let config: Map<String, Value> = picked
            .iter()
            .map(|t| (t.as_str().to_string(), Value::String(color.clone())))
            .collect();
        let attrs = normalize_highlight_default(&AttrConfig::from(config)).unwrap();

        let targets: Vec<Target> = attrs.targets().collect();
        prop_assert_eq!(targets, picked.into_iter().collect::<Vec<_>>());
        for (_, display) in &attrs {
            prop_assert_eq!(display.color.as_str(), color.as_str());
        }
    }

    /// The color shorthand colors the computed fill classes.
    #[test]
    fn color_shorthand_reaches_fill_classes(color in color_strategy()) {
        let attrs = normalize_highlight_default(&AttrConfig::from(color.as_str())).unwrap();
        for (_, display) in &attrs {
            let class = display.class.clone().unwrap_or_default();
            prop_assert!(class.contains(&format!("bg-{}-", color)), "{}", class);
        }
    }

    /// Normalization never fails on arbitrary target values.
    #[test]
    fn arbitrary_target_values_do_not_panic(
        target in target_strategy(),
        value in prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z]{0,6}".prop_map(Value::String),
        ],
    ) {
        let mut config = Map::new();
        config.insert(target.as_str().to_string(), value.clone());
        let attrs = normalize_highlight_default(&AttrConfig::from(config)).unwrap();

        let enabled = matches!(value, Value::Bool(true) | Value::String(_));
        prop_assert_eq!(attrs.contains(target), enabled);
    }
}
