use crate::config::ParallaxConfig;
use crate::layer::LayerTransform;

#[inline]
pub fn translate_y(px: f64) -> String {
    // `-0` would otherwise print as "-0px"
    let px = if px == 0.0 { 0.0 } else { px };
    format!("translateY({}px)", px)
}

/// Inline style for a layer wrapper.
pub fn layer_style(transform: &LayerTransform, config: &ParallaxConfig) -> String {
    format!(
        "transform: {}; transition: {};",
        translate_y(transform.translate_y),
        config.transition.css()
    )
}

pub fn container_style(config: &ParallaxConfig) -> String {
    format!("height: {}vh;", config.container_height_vh)
}
