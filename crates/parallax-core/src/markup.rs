//! HTML for the decorative layers and the static marketing sections.
//!
//! Everything here is a pure function of the layer stack and config, so the
//! native renderer and the wasm front-end produce identical markup.

use crate::config::ParallaxConfig;
use crate::constants::*;
use crate::layer::{LayerKind, LayerStack};
use crate::style::{container_style, layer_style};
use std::fmt::Write;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

// ---------------- Layer content ----------------

pub struct Building {
    pub height_px: u32,
    pub tone: &'static str,
    pub windows: usize,
}

pub const BUILDINGS: [Building; 5] = [
    Building { height_px: 180, tone: "tone-a", windows: 6 },
    Building { height_px: 240, tone: "tone-b", windows: 8 },
    Building { height_px: 280, tone: "tone-c", windows: 10 },
    Building { height_px: 200, tone: "tone-d", windows: 7 },
    Building { height_px: 220, tone: "tone-a", windows: 8 },
];

pub struct Vehicle {
    pub name: &'static str,
    pub class: &'static str,
    pub nudge_x_px: i32,
}

pub const VEHICLES: [Vehicle; 3] = [
    Vehicle { name: "Blue sedan", class: "car sedan", nudge_x_px: -80 },
    Vehicle { name: "Red delivery truck", class: "truck", nudge_x_px: 60 },
    Vehicle { name: "Green compact", class: "car compact", nudge_x_px: -40 },
];

const SKYLINE_POINTS: &str = "0,300 80,200 150,250 220,150 300,220 380,120 460,180 540,100 \
620,160 700,80 780,140 860,60 940,120 1020,40 1100,100 1180,20 1200,80 1200,300 0,300";

/// Deterministic so every render of the page lights the same windows.
#[inline]
pub fn window_lit(building: usize, window: usize) -> bool {
    (building * 10 + window) % 3 != 0
}

fn skyline() -> String {
    let mut html = String::from("<div class=\"sky\">");
    for cloud in ["cloud cloud-1", "cloud cloud-2", "cloud cloud-3"] {
        _ = write!(html, "<div class=\"{}\"></div>", cloud);
    }
    _ = write!(
        html,
        concat!(
            "<div class=\"skyline\">",
            "<svg viewBox=\"0 0 1200 300\" preserveAspectRatio=\"none\">",
            "<defs><linearGradient id=\"skylineGrad\" x1=\"0%\" y1=\"0%\" x2=\"0%\" y2=\"100%\">",
            "<stop offset=\"0%\" stop-color=\"#1e293b\" stop-opacity=\"0.4\"/>",
            "<stop offset=\"100%\" stop-color=\"#0f172a\" stop-opacity=\"0.6\"/>",
            "</linearGradient></defs>",
            "<polygon points=\"{}\" fill=\"url(#skylineGrad)\"/>",
            "</svg></div>"
        ),
        SKYLINE_POINTS
    );
    html.push_str("</div>");
    html
}

fn buildings() -> String {
    let mut html = String::from("<div class=\"street\"><div class=\"buildings\">");
    for (i, b) in BUILDINGS.iter().enumerate() {
        _ = write!(
            html,
            "<div class=\"building {}\" style=\"height: {}px;\"><div class=\"windows\">",
            b.tone, b.height_px
        );
        for j in 0..b.windows {
            let state = if window_lit(i, j) { "lit" } else { "dark" };
            _ = write!(html, "<div class=\"window {}\"></div>", state);
        }
        html.push_str("</div><div class=\"roof\"></div></div>");
    }
    html.push_str("</div></div>");
    html
}

fn vehicles() -> String {
    let mut html = String::from("<div class=\"traffic\">");
    for v in VEHICLES.iter() {
        _ = write!(
            html,
            concat!(
                "<div class=\"vehicle {}\" title=\"{}\" style=\"transform: translateX({}px);\">",
                "<div class=\"cabin\"></div>",
                "<div class=\"light light-left\"></div><div class=\"light light-right\"></div>",
                "<div class=\"wheel wheel-left\"></div><div class=\"wheel wheel-right\"></div>",
                "<div class=\"bumper\"></div>",
                "</div>"
            ),
            v.class,
            escape(v.name),
            v.nudge_x_px
        );
    }
    html.push_str("</div>");
    html
}

fn airplane() -> String {
    concat!(
        "<div class=\"airplane\">",
        "<svg width=\"140\" height=\"70\" viewBox=\"0 0 140 70\">",
        "<defs><linearGradient id=\"planeGrad\" x1=\"0%\" y1=\"0%\" x2=\"100%\" y2=\"100%\">",
        "<stop offset=\"0%\" stop-color=\"#64748b\" stop-opacity=\"0.9\"/>",
        "<stop offset=\"100%\" stop-color=\"#475569\" stop-opacity=\"0.9\"/>",
        "</linearGradient></defs>",
        "<ellipse cx=\"70\" cy=\"35\" rx=\"50\" ry=\"12\" fill=\"url(#planeGrad)\"/>",
        "<ellipse cx=\"20\" cy=\"35\" rx=\"8\" ry=\"10\" fill=\"url(#planeGrad)\"/>",
        "<path d=\"M100 35 L120 25 L125 30 L120 35 Z\" fill=\"url(#planeGrad)\"/>",
        "<path d=\"M100 35 L120 45 L125 40 L120 35 Z\" fill=\"url(#planeGrad)\"/>",
        "<circle cx=\"50\" cy=\"35\" r=\"4\" fill=\"#e2e8f0\" opacity=\"0.9\"/>",
        "<circle cx=\"60\" cy=\"35\" r=\"4\" fill=\"#e2e8f0\" opacity=\"0.9\"/>",
        "<circle cx=\"70\" cy=\"35\" r=\"4\" fill=\"#e2e8f0\" opacity=\"0.9\"/>",
        "<ellipse cx=\"70\" cy=\"35\" rx=\"35\" ry=\"3\" fill=\"url(#planeGrad)\" opacity=\"0.7\"/>",
        "</svg></div>"
    )
    .to_string()
}

pub fn layer_content(kind: LayerKind) -> String {
    match kind {
        LayerKind::Skyline => skyline(),
        LayerKind::Buildings => buildings(),
        LayerKind::Vehicles => vehicles(),
        LayerKind::Airplane => airplane(),
    }
}

/// The tall container with one fixed wrapper per layer, styled for `offset`.
pub fn layer_container(stack: &LayerStack, config: &ParallaxConfig, offset: f64) -> String {
    let mut html = format!(
        "<div class=\"parallax-container\" style=\"{}\">",
        container_style(config)
    );
    for t in stack.translations(offset) {
        let z = stack.get(t.kind).map(|l| l.z_index).unwrap_or_default();
        _ = write!(
            html,
            "<div class=\"{}\" {}=\"{}\" style=\"z-index: {}; {}\">{}</div>",
            LAYER_CLASS,
            LAYER_ATTR,
            t.kind.slug(),
            z,
            layer_style(&t, config),
            layer_content(t.kind)
        );
    }
    html.push_str("</div>");
    html
}

// ---------------- Sections ----------------

fn speed_legend(stack: &LayerStack) -> String {
    let mut html = String::from("<div class=\"legend\">");
    for layer in stack {
        _ = write!(
            html,
            concat!(
                "<div class=\"legend-card accent-{}\">",
                "<div class=\"legend-speed\">{:.1}x</div>",
                "<div><div class=\"legend-label\">{}</div>",
                "<div class=\"legend-caption\">{}</div></div>",
                "</div>"
            ),
            layer.kind.accent(),
            layer.speed,
            escape(layer.kind.label()),
            escape(layer.kind.caption())
        );
    }
    html.push_str("</div>");
    html
}

fn hero(stack: &LayerStack) -> String {
    format!(
        concat!(
            "<section class=\"section hero\"><div class=\"inner centered\">",
            "<h1>Parallax Carousel</h1>",
            "<p class=\"subtitle\">Vertical Scroll with Layered Parallax Movement</p>",
            "<p class=\"tagline\">Experience smooth, depth-creating parallax effects with precise layer speed control</p>",
            "<div class=\"panel\"><h2>Layer Speed Configuration</h2>{}</div>",
            "<div class=\"scroll-hint\">&darr; Scroll to experience the effect &darr;</div>",
            "</div></section>"
        ),
        speed_legend(stack)
    )
}

const HIGHLIGHTS: [&str; 4] = [
    "Rust Component Architecture",
    "Strong Types for Layer Safety",
    "CSS3 Transforms & Performance",
    "Responsive & Accessible",
];

fn design_section() -> String {
    let mut items = String::new();
    for h in HIGHLIGHTS {
        _ = write!(
            items,
            "<li><span class=\"dot\"></span><span>{}</span></li>",
            escape(h)
        );
    }
    format!(
        concat!(
            "<section class=\"section design\"><div class=\"inner split\">",
            "<div><h2>Clean &amp; Simple Design</h2>",
            "<p class=\"lead\">The parallax effect is the star of the show. No heavy animations or distractions, ",
            "just smooth, elegant layered movement that creates visual depth and engagement.</p>",
            "<p>Built with Rust, WebAssembly, and modern CSS3 techniques for optimal performance and maintainability.</p></div>",
            "<ul class=\"highlights\">{}</ul>",
            "</div></section>"
        ),
        items
    )
}

const CONTROL_CARDS: [(&str, &str, &str); 3] = [
    ("\u{1F3AF}", "Precision", "Exact speed ratios for each layer"),
    ("\u{26A1}", "Performance", "Smooth 60fps scrolling experience"),
    ("\u{2728}", "Elegance", "Clean, readable, professional design"),
];

fn control_section() -> String {
    let mut cards = String::new();
    for (icon, title, text) in CONTROL_CARDS {
        _ = write!(
            cards,
            "<div class=\"card\"><div class=\"icon\">{}</div><h3>{}</h3><p>{}</p></div>",
            icon,
            escape(title),
            escape(text)
        );
    }
    format!(
        concat!(
            "<section class=\"section control\"><div class=\"inner centered\">",
            "<h2>Precise Layer Control</h2>",
            "<p class=\"lead\">Each element moves at its designated speed, creating a natural sense of depth and movement. ",
            "The effect is subtle yet captivating, drawing users into the experience.</p>",
            "<div class=\"cards\">{}</div>",
            "</div></section>"
        ),
        cards
    )
}

fn cta_section() -> String {
    concat!(
        "<section class=\"section cta\"><div class=\"inner centered\">",
        "<h2>Ready to Build Something Amazing?</h2>",
        "<p class=\"lead\">This parallax carousel demonstrates the core differentiator for your platform. ",
        "Clean, performant, and ready for production.</p>",
        "<div class=\"badge\">Built with <strong>Rust</strong>, <strong>WebAssembly</strong>, and <strong>web-sys</strong></div>",
        "</div></section>"
    )
    .to_string()
}

pub fn sections(stack: &LayerStack) -> String {
    format!(
        "<div class=\"sections\" style=\"z-index: {};\">{}{}{}{}</div>",
        SECTIONS_Z,
        hero(stack),
        design_section(),
        control_section(),
        cta_section()
    )
}

/// Full page body at scroll offset `offset`.
pub fn page_body(stack: &LayerStack, config: &ParallaxConfig, offset: f64) -> String {
    format!(
        "<div class=\"parallax-page\">{}{}</div>",
        layer_container(stack, config, offset),
        sections(stack)
    )
}
