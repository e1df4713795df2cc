// Host-side tests for style strings, markup and the page shell.

use parallax_core::markup::{self, escape, layer_container, page_body, window_lit, BUILDINGS};
use parallax_core::style::{container_style, layer_style, translate_y};
use parallax_core::*;

#[test]
fn translate_y_formats_pixels() {
    assert_eq!(translate_y(0.0), "translateY(0px)");
    assert_eq!(translate_y(-0.0), "translateY(0px)");
    assert_eq!(translate_y(37.5), "translateY(37.5px)");
    assert_eq!(translate_y(300.0), "translateY(300px)");
}

#[test]
fn default_transition_and_layer_style() {
    let config = ParallaxConfig::default();
    assert_eq!(config.transition.css(), "transform 0.1s ease-out");
    let t = LayerTransform {
        kind: LayerKind::Skyline,
        translate_y: 60.0,
    };
    assert_eq!(
        layer_style(&t, &config),
        "transform: translateY(60px); transition: transform 0.1s ease-out;"
    );
    assert_eq!(container_style(&config), "height: 250vh;");
}

#[test]
fn config_builders_validate() {
    let config = ParallaxConfig::default()
        .with_container_height(300)
        .unwrap()
        .with_transition(250, " linear ")
        .unwrap()
        .with_passive_listener(false);
    assert_eq!(config.container_height_vh, 300);
    assert_eq!(config.transition.css(), "transform 0.25s linear");
    assert!(!config.passive_listener);

    assert_eq!(
        ParallaxConfig::default().with_container_height(50),
        Err(ConfigError::ContainerTooShort(50))
    );
    assert_eq!(
        ParallaxConfig::default().with_transition(100, "  "),
        Err(ConfigError::EmptyEasing)
    );
}

#[test]
fn escape_covers_html_specials() {
    assert_eq!(
        escape("<a href=\"x\">Tom & Jerry's</a>"),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
}

#[test]
fn window_lighting_is_deterministic() {
    assert!(!window_lit(0, 0));
    assert!(window_lit(0, 1));
    assert!(window_lit(0, 2));
    assert!(!window_lit(0, 3));
    // building 1 starts at 10, which is not a multiple of three
    assert!(window_lit(1, 0));
    assert!(!window_lit(1, 2));
}

#[test]
fn buildings_layer_has_expected_windows() {
    let html = markup::layer_content(LayerKind::Buildings);
    let total: usize = BUILDINGS.iter().map(|b| b.windows).sum();
    let lit = html.matches("window lit").count();
    let dark = html.matches("window dark").count();
    assert_eq!(lit + dark, total);
    let expected_lit = BUILDINGS
        .iter()
        .enumerate()
        .flat_map(|(i, b)| (0..b.windows).map(move |j| window_lit(i, j)))
        .filter(|lit| *lit)
        .count();
    assert_eq!(lit, expected_lit);
    assert!(html.contains("height: 280px;"));
}

#[test]
fn container_renders_one_wrapper_per_layer_in_order() {
    let stack = LayerStack::default();
    let config = ParallaxConfig::default();
    let html = layer_container(&stack, &config, 100.0);

    let positions: Vec<usize> = stack
        .iter()
        .map(|l| {
            html.find(&format!("data-layer=\"{}\"", l.kind.slug()))
                .expect("layer wrapper present")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(html.contains("z-index: 15; transform: translateY(50px);"));
    assert!(html.contains("z-index: 10; transform: translateY(100px);"));
    assert!(html.contains("height: 250vh;"));
}

#[test]
fn speed_legend_follows_stack() {
    let body = page_body(&LayerStack::default(), &ParallaxConfig::default(), 0.0);
    for text in ["0.3x", "1.0x", "0.5x", "Background Skyline", "Cars &amp; Trucks"] {
        assert!(body.contains(text), "missing {text}");
    }
    assert!(body.contains("Parallax Carousel"));
    assert!(body.contains("Precise Layer Control"));
    assert!(body.contains("Ready to Build Something Amazing?"));
}

#[test]
fn shell_sets_metadata_and_root() {
    let meta = PageMetadata::default();
    let html = page_shell(&meta, "<p>body</p>", Some("./pkg/app.js"));
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("<html lang=\"en\">"));
    assert!(html.contains("<title>Parallax Carousel Demo</title>"));
    assert!(html.contains(
        "content=\"Vertical scroll parallax carousel demonstration with layered movement\""
    ));
    assert!(html.contains("<div id=\"app\"><p>body</p></div>"));
    assert!(html.contains("import init from \"./pkg/app.js\""));
    assert!(html.contains(".parallax-layer"));
}

#[test]
fn shell_without_script_is_static() {
    let html = page_shell(&PageMetadata::default(), "", None);
    assert!(!html.contains("<script"));
}

#[test]
fn script_url_is_a_js_literal_not_html_escaped() {
    let html = page_shell(&PageMetadata::default(), "", Some("./pkg/app.js?v=1&t=2"));
    assert!(html.contains("import init from \"./pkg/app.js?v=1&t=2\"; init();"));
    assert!(!html.contains("&amp;"));
}

#[test]
fn js_string_escapes_quotes_and_closing_tags() {
    assert_eq!(js_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    assert_eq!(js_string("x</script>y"), "\"x<\\/script>y\"");
    assert_eq!(js_string("it's"), "\"it's\"");
}
