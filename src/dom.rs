use parallax_core::constants::{LAYER_ATTR, ROOT_ELEMENT_ID};
use parallax_core::LayerStack;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The page's window and document; both are required before anything mounts.
pub fn window_and_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok((window, document))
}

pub fn root_element(document: &web::Document) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(ROOT_ELEMENT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", ROOT_ELEMENT_ID))
}

/// Layer wrappers in stack order, located by their `data-layer` slug.
pub fn layer_elements(
    document: &web::Document,
    stack: &LayerStack,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    stack
        .iter()
        .map(|layer| {
            let selector = format!("[{}=\"{}\"]", LAYER_ATTR, layer.kind.slug());
            let el = document
                .query_selector(&selector)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?
                .ok_or_else(|| anyhow::anyhow!("missing layer element {}", selector))?;
            el.dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))
        })
        .collect()
}

#[inline]
pub fn set_transform(el: &web::HtmlElement, value: &str) {
    if let Err(e) = el.style().set_property("transform", value) {
        log::warn!("[dom] transform write failed: {:?}", e);
    }
}
