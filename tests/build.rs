//! End-to-end builds through the public API.

use tachyon_styles::rules::{Scalar, StaticTable, Vocabulary, REM_TABLES, STATIC_TABLES};
use tachyon_styles::{
    BuildError, Config, JsonFactory, PartialConfig, RuleFactory, RuleValue, StyleRule, Tachyons,
};

fn build(partial: PartialConfig) -> Tachyons {
    let mut tachyons = Tachyons::new();
    tachyons.build(partial, &RuleFactory).unwrap();
    tachyons
}

#[test]
fn test_rem_scaled_sizes() {
    let tachyons = build(PartialConfig::from_json(r#"{"rem": 10}"#).unwrap());

    assert_eq!(tachyons.size("pa0"), Some(0.0));
    assert_eq!(tachyons.size("pa2"), Some(5.0));
    assert_eq!(tachyons.size("ma7"), Some(160.0));
    assert_eq!(tachyons.size("f1"), Some(30.0));
    assert_eq!(tachyons.size("f2"), Some(22.5));
    assert_eq!(tachyons.size("w5"), Some(160.0));
    assert_eq!(tachyons.size("br2"), Some(2.5));
    assert_eq!(
        tachyons.style("f_subheadline"),
        Some(&StyleRule::with("fontSize", 50.0))
    );
}

#[test]
fn test_default_palette_only() {
    let tachyons = build(PartialConfig::from_json(r#"{"rem": 10}"#).unwrap());

    for name in tachyons.colors().keys() {
        assert!(
            name.contains("white") || name.contains("black"),
            "unexpected color '{}'",
            name
        );
    }
}

#[test]
fn test_brand_palette() {
    let tachyons = build(
        PartialConfig::from_json(r##"{"colors": {"palette": {"brand": "#336699"}}}"##).unwrap(),
    );

    assert_eq!(tachyons.color("brand"), Some("#336699"));
    assert_eq!(tachyons.color("light-brand"), Some("#3D7AB8"));
    assert_eq!(tachyons.color("dark-brand"), Some("#29527A"));
    for percent in (10..100).step_by(10) {
        let key = format!("brand-{}", percent);
        let expected = format!("rgba(51, 102, 153, {})", percent as f64 / 100.0);
        assert_eq!(tachyons.color(&key), Some(expected.as_str()));
    }
    assert_eq!(tachyons.color("brand-100"), None);

    assert_eq!(
        tachyons.style("bg-brand"),
        Some(&StyleRule::with("backgroundColor", "#336699"))
    );
    assert_eq!(tachyons.style("brand"), Some(&StyleRule::with("color", "#336699")));
    assert_eq!(
        tachyons.style("b--brand"),
        Some(&StyleRule::with("borderColor", "#336699"))
    );

    // defaults are still merged in
    assert_eq!(tachyons.color("white"), Some("#ffffff"));
}

#[test]
fn test_font_family() {
    let tachyons = build(PartialConfig::from_json(r#"{"fonts": {"sans": "Helvetica"}}"#).unwrap());

    let rule = tachyons.style("ff-sans").unwrap();
    assert_eq!(rule.get("fontFamily"), Some(&RuleValue::from("Helvetica")));
    assert_eq!(tachyons.style("ff_sans"), Some(rule));
}

#[test]
fn test_hyphenated_static_rule_resolves_both_ways() {
    const NUDGES: StaticTable = &[("nudge-left", &[("left", Scalar::Num(-2.0))])];
    let static_tables: Vec<StaticTable> = STATIC_TABLES.iter().copied().chain([NUDGES]).collect();

    let mut tachyons = Tachyons::new();
    tachyons
        .build_with(
            Config::default(),
            &Vocabulary::new(&static_tables, REM_TABLES),
            &RuleFactory,
        )
        .unwrap();

    assert_eq!(tachyons.style("nudge-left"), tachyons.style("nudge_left"));
    assert_eq!(
        tachyons.style("nudge_left"),
        Some(&StyleRule::with("left", -2.0))
    );
}

#[test]
fn test_palette_expands_in_declaration_order() {
    let tachyons = build(
        PartialConfig::from_json(
            r##"{"colors": {"palette": {"light-blue": "#96ccff", "blue": "#357edd"}}}"##,
        )
        .unwrap(),
    );

    assert_eq!(tachyons.color("light-blue"), Some("#669DE5"));
    assert_eq!(tachyons.color("light_blue"), Some("#669DE5"));
    assert_eq!(tachyons.color("dark-blue"), Some("#2064BC"));
    assert_eq!(
        tachyons.style("bg-light-blue"),
        Some(&StyleRule::with("backgroundColor", "#669DE5"))
    );
}

#[test]
fn test_every_hyphenated_key_has_underscore_twin() {
    let tachyons = build(
        PartialConfig::from_yaml("colors:\n  palette:\n    light-blue: \"#96ccff\"\n").unwrap(),
    );

    for (key, value) in tachyons.sizes() {
        if key.contains('-') {
            assert_eq!(tachyons.sizes().get(&key.replace('-', "_")), Some(value));
        }
    }
    for (key, value) in tachyons.colors() {
        if key.contains('-') {
            assert_eq!(tachyons.colors().get(&key.replace('-', "_")), Some(value));
        }
    }
    for (key, value) in tachyons.styles() {
        if key.contains('-') {
            assert_eq!(tachyons.styles().get(&key.replace('-', "_")), Some(value));
        }
    }
}

#[test]
fn test_disabled_tints() {
    let tachyons = build(
        PartialConfig::from_yaml("colors:\n  lighten: false\n  darken: false\n").unwrap(),
    );

    assert_eq!(tachyons.color("light-white"), None);
    assert_eq!(tachyons.color("dark-black"), None);
    assert_eq!(tachyons.colors().len(), 2 * (10 + 9));
}

#[test]
fn test_invalid_palette_color() {
    let mut tachyons: Tachyons = Tachyons::new();
    let partial =
        PartialConfig::from_json(r#"{"colors": {"palette": {"mud": "brownish"}}}"#).unwrap();

    let err = tachyons.build(partial, &RuleFactory).unwrap_err();
    match err {
        BuildError::InvalidColor { name, .. } => assert_eq!(name, "mud"),
        other => panic!("expected InvalidColor, got {:?}", other),
    }
}

#[test]
fn test_json_output_for_renderer() {
    let mut tachyons = Tachyons::new();
    tachyons.build(Config::new().rem(8.0), &JsonFactory).unwrap();

    let dumped = serde_json::to_value(&tachyons).unwrap();
    assert_eq!(dumped["sizes"]["pa3"], serde_json::json!(8.0));
    assert_eq!(
        dumped["styles"]["ba"],
        serde_json::json!({ "borderStyle": "solid", "borderWidth": 1.0 })
    );
    assert_eq!(
        dumped["styles"]["bg_black_50"],
        serde_json::json!({ "backgroundColor": "rgba(0, 0, 0, 0.5)" })
    );
}
