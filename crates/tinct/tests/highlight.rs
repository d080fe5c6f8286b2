//! End-to-end tests: user configuration through theme and highlight resolution.

use serde_json::{json, Value};
use tinct::{
    generate_theme, normalize_highlight, normalize_highlight_default, AttrConfig, FillMode,
    Target, ThemeDocument, ThemeOptions, ThemeRegistry,
};

fn yaml_config(yaml: &str) -> AttrConfig {
    let value: Value = serde_yaml::from_str(yaml).unwrap();
    AttrConfig::from_value(value).unwrap()
}

#[test]
fn flag_expands_every_default_target() {
    let attrs = normalize_highlight_default(&AttrConfig::from(true)).unwrap();

    let targets: Vec<Target> = attrs.targets().collect();
    assert_eq!(targets, Target::ALL.to_vec());

    for (target, display) in &attrs {
        assert_eq!(display.color, "blue", "{target}");
        assert!(!display.class.as_deref().unwrap_or_default().is_empty(), "{target}");
        assert!(!display.content_class.as_deref().unwrap_or_default().is_empty(), "{target}");
    }

    let start = attrs.get(Target::Start).unwrap();
    assert_eq!(start.fill_mode, Some(FillMode::Solid));
    assert_eq!(start.class.as_deref(), Some("hl hl-start bg-blue-d1"));
    assert_eq!(start.content_class.as_deref(), Some("text-white"));
}

#[test]
fn flat_style_config_from_yaml() {
    let config = yaml_config(
        r#"
        style:
            fontWeight: bold
        "#,
    );
    let attrs = normalize_highlight_default(&config).unwrap();

    assert_eq!(attrs.len(), 1);
    let base = attrs.base().unwrap();
    assert_eq!(base.style_value("fontWeight"), Some(&json!("bold")));
    assert_eq!(base.color, "blue");
    assert_eq!(base.class.as_deref(), Some("hl hl-base bg-blue-l5"));
}

#[test]
fn bare_rules_on_target_become_style() {
    let config = yaml_config(
        r#"
        end:
            fontStyle: italic
        "#,
    );
    let attrs = normalize_highlight_default(&config).unwrap();

    let end = attrs.get(Target::End).unwrap();
    assert_eq!(end.style_value("fontStyle"), Some(&json!("italic")));
    assert_eq!(end.color, "blue");
    assert_eq!(end.fill_mode, Some(FillMode::Solid));
}

#[test]
fn disabled_configs() {
    assert_eq!(normalize_highlight_default(&AttrConfig::from(false)), None);
    assert_eq!(AttrConfig::from_value(Value::Null), None);

    let attrs = normalize_highlight_default(&yaml_config("{ base: red, start: false }")).unwrap();
    assert!(attrs.contains(Target::Base));
    assert!(!attrs.contains(Target::Start));
}

#[test]
fn user_theme_from_registry() {
    let mut registry = ThemeRegistry::new();
    registry
        .add_inline(
            "contrast",
            r#"
            highlight:
                base:
                    fillMode: solid
                    contentClass: font-semibold
            highlightFillSolidText:
                light: text-white
                dark: text-{color}-d5
            "#,
        )
        .unwrap();

    let theme = generate_theme(
        ThemeOptions::new()
            .color("orange")
            .dark(true)
            .config(registry.get("contrast").unwrap()),
    );
    let attrs = normalize_highlight(&AttrConfig::from(true), &theme).unwrap();

    let base = attrs.base().unwrap();
    assert_eq!(base.color, "orange");
    assert_eq!(base.fill_mode, Some(FillMode::Solid));
    assert_eq!(base.class.as_deref(), Some("hl hl-base bg-orange-l1"));
    assert_eq!(base.content_class.as_deref(), Some("font-semibold text-orange-d5"));
}

#[test]
fn variant_fill_mode_in_user_theme() {
    let user = ThemeDocument::from_json(
        r#"{ "highlight": { "base": { "fillMode": { "light": "light", "dark": "solid" } } } }"#,
    )
    .unwrap();

    let light = generate_theme(ThemeOptions::new().config(user.clone()));
    let attrs = normalize_highlight(&AttrConfig::from(true), &light).unwrap();
    assert_eq!(attrs.base().unwrap().class.as_deref(), Some("hl hl-base bg-blue-l5"));

    let dark = generate_theme(ThemeOptions::new().dark(true).config(user));
    let attrs = normalize_highlight(&AttrConfig::from(true), &dark).unwrap();
    assert_eq!(attrs.base().unwrap().class.as_deref(), Some("hl hl-base bg-blue-l1"));
}

#[test]
fn serializes_for_renderers() {
    let config = yaml_config("{ startEnd: { color: teal, fillMode: light } }");
    let attrs = normalize_highlight_default(&config).unwrap();

    assert_eq!(
        serde_json::to_value(&attrs).unwrap(),
        json!({
            "startEnd": {
                "class": "hl hl-start-end bg-teal-l5",
                "color": "teal",
                "fillMode": "light",
                "contentClass": "text-teal-d4"
            }
        })
    );
}
