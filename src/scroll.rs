use parallax_core::constants::SCROLL_EVENT;
use parallax_core::{ScrollCallback, ScrollOffset, ScrollSource};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `window.scrollY` as a [`ScrollSource`].
pub struct WindowScroll {
    window: web::Window,
    passive: bool,
}

impl WindowScroll {
    pub fn new(window: web::Window, passive: bool) -> Self {
        Self { window, passive }
    }
}

#[inline]
fn read_scroll_y(window: &web::Window) -> f64 {
    ScrollOffset::unbounded().normalize(window.scroll_y().unwrap_or(0.0))
}

impl ScrollSource for WindowScroll {
    type Guard = WindowScrollListener;

    fn current_offset(&self) -> f64 {
        read_scroll_y(&self.window)
    }

    fn subscribe(&self, mut callback: ScrollCallback) -> WindowScrollListener {
        let window = self.window.clone();
        let closure = Closure::wrap(Box::new(move || {
            callback(read_scroll_y(&window));
        }) as Box<dyn FnMut()>);

        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(self.passive);
        let attached = self
            .window
            .add_event_listener_with_callback_and_add_event_listener_options(
                SCROLL_EVENT,
                closure.as_ref().unchecked_ref(),
                &opts,
            );
        if let Err(e) = &attached {
            log::error!("[scroll] listener attach failed: {:?}", e);
        } else {
            log::info!("[scroll] listening (passive={})", self.passive);
        }

        WindowScrollListener {
            target: self.window.clone(),
            closure: attached.is_ok().then_some(closure),
        }
    }
}

/// Removes the scroll listener when dropped. The closure is kept alive
/// exactly as long as the registration.
pub struct WindowScrollListener {
    target: web::Window,
    closure: Option<Closure<dyn FnMut()>>,
}

impl Drop for WindowScrollListener {
    fn drop(&mut self) {
        if let Some(closure) = self.closure.take() {
            let func: &js_sys::Function = closure.as_ref().unchecked_ref();
            _ = self
                .target
                .remove_event_listener_with_callback(SCROLL_EVENT, func);
            log::info!("[scroll] listener removed");
        }
    }
}
