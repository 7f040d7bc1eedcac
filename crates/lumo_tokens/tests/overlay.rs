use lumo_tokens::{auto_static_color, extract_opacity, TokenTable, DEFAULT_CONTAINER_BG};

const FIXTURE: &str = r##"{
    "transparent-white-25": {"value": "rgba(255, 255, 255, 0.02)"},
    "transparent-white-50": {"value": "rgba(255, 255, 255, 0.05)"},
    "transparent-white-75": {"value": "rgba(255, 255, 255, 0.08)"},
    "transparent-white-100": {"value": "rgba(255, 255, 255, 0.1)"},
    "transparent-white-200": {"value": "rgba(255, 255, 255, 0.2)"},
    "transparent-white-300": {"value": "rgba(255, 255, 255, 0.3)"},
    "transparent-white-400": {"value": "rgba(255, 255, 255, 0.4)"},
    "transparent-white-500": {"value": "rgba(255, 255, 255, 0.5)"},
    "transparent-white-600": {"value": "rgba(255, 255, 255, 0.6)"},
    "transparent-white-700": {"value": "rgba(255, 255, 255, 0.7)"},
    "transparent-white-800": {"value": "rgba(255, 255, 255, 0.8)"},
    "transparent-white-900": {"value": "rgba(255, 255, 255, 0.9)"},
    "transparent-white-1000": {"value": "rgb(255, 255, 255)"}
}"##;

#[test]
fn extract_opacity_parses_the_alpha_channel() {
    assert_eq!(extract_opacity("rgba(10, 20, 30, 0.5)"), 0.5);
    assert_eq!(extract_opacity("rgba(0, 0, 0, .04)"), 0.04);
    assert_eq!(extract_opacity("rgba(255, 255, 255, 1)"), 1.0);
}

#[test]
fn extract_opacity_defaults_to_opaque() {
    assert_eq!(extract_opacity("not-a-color"), 1.0);
    assert_eq!(extract_opacity("rgb(255, 255, 255)"), 1.0);
    // the pattern is fixed-shape: spaces after commas are required
    assert_eq!(extract_opacity("rgba(10,20,30,0.5)"), 1.0);
}

#[test]
fn auto_static_color_embeds_bg_and_alpha() {
    assert_eq!(
        auto_static_color(DEFAULT_CONTAINER_BG, 0.5),
        "lch(from var(--lumo-container-bg) calc((49.44 - l) * infinity) 0 0 / 0.5)"
    );
    assert_eq!(
        auto_static_color("canvas", 1.0),
        "lch(from canvas calc((49.44 - l) * infinity) 0 0 / 1)"
    );
}

#[test]
fn overlay_scale_is_fixed_and_exhaustive() {
    let table = TokenTable::from_json_str(FIXTURE).unwrap();
    let scale = table.overlay_color_scale("var(--panel-bg)").unwrap();

    let keys: Vec<&str> = scale.keys().copied().collect();
    assert_eq!(
        keys,
        vec![
            "transparent-overlay-25",
            "transparent-overlay-50",
            "transparent-overlay-75",
            "transparent-overlay-100",
            "transparent-overlay-200",
            "transparent-overlay-300",
            "transparent-overlay-400",
            "transparent-overlay-500",
            "transparent-overlay-600",
            "transparent-overlay-700",
            "transparent-overlay-800",
            "transparent-overlay-900",
            "transparent-overlay-1000"
        ]
    );

    for (level, expr) in &scale {
        assert!(
            expr.starts_with("lch(from var(--panel-bg) "),
            "level {level} should embed the background: {expr}"
        );
    }

    assert_eq!(
        scale["transparent-overlay-400"],
        auto_static_color("var(--panel-bg)", 0.4)
    );
    // transparent-white-1000 is plain rgb(), so its opacity falls back to 1
    assert_eq!(
        scale["transparent-overlay-1000"],
        auto_static_color("var(--panel-bg)", 1.0)
    );
}

#[test]
fn overlay_scale_requires_every_source_token() {
    let table = TokenTable::from_json_str(
        r#"{"transparent-white-25": {"value": "rgba(255, 255, 255, 0.02)"}}"#,
    )
    .unwrap();
    assert!(table.overlay_color_scale(DEFAULT_CONTAINER_BG).is_err());
}
