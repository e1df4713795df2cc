#![cfg(target_arch = "wasm32")]
use parallax_core::markup::page_body;
use parallax_core::{LayerStack, MountedView, ParallaxConfig, ParallaxView, ScrollOffset};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

mod constants;
mod dom;
mod frame;
mod paint;
mod scroll;

use frame::FramePainter;
use scroll::{WindowScroll, WindowScrollListener};

struct Mounted {
    view: MountedView<WindowScrollListener>,
    painter: FramePainter,
}

thread_local! {
    static MOUNTED: RefCell<Option<Mounted>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::CONSOLE_LOG_LEVEL).ok();
    log::info!("parallax-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_and_document()?;
    let root = dom::root_element(&document)?;

    let stack = LayerStack::default();
    let config = ParallaxConfig::default();
    let source = WindowScroll::new(window, config.passive_listener);

    // The native renderer ships the body pre-rendered; otherwise build it here.
    let prerendered = root.child_element_count() > 0;
    if !prerendered {
        root.set_inner_html(&page_body(&stack, &config, 0.0));
    }
    log::info!(
        "[init] {} layers, body {}",
        stack.len(),
        if prerendered { "hydrated" } else { "rendered" }
    );

    let painter = FramePainter::new(dom::layer_elements(&document, &stack)?);
    // Transforms rendered into the markup are for offset 0.
    painter.assume_painted(&stack.translations(0.0));

    let view = ParallaxView::new(stack, ScrollOffset::unbounded());
    let painter_cb = painter.clone();
    let mounted = view.mount(&source, move |t| painter_cb.submit(t));

    MOUNTED.with(|slot| {
        if let Some(old) = slot.borrow_mut().replace(Mounted {
            view: mounted,
            painter,
        }) {
            old.painter.cancel();
        }
    });
    Ok(())
}

/// Detach the scroll listener and stop painting. Returns the last offset seen,
/// or `None` if nothing was mounted.
#[wasm_bindgen]
pub fn unmount() -> Option<f64> {
    let mounted = MOUNTED.with(|slot| slot.borrow_mut().take())?;
    let view = mounted.view.unmount();
    mounted.painter.cancel();
    log::info!("[unmount] offset={:.1}", view.offset());
    Some(view.offset())
}

/// Latest recorded scroll offset of the mounted view.
#[wasm_bindgen]
pub fn current_offset() -> Option<f64> {
    MOUNTED.with(|slot| slot.borrow().as_ref().map(|m| m.view.offset()))
}
