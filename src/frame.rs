use crate::dom;
use crate::paint::PaintLedger;
use parallax_core::style::translate_y;
use parallax_core::Translations;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct PainterState {
    layers: Vec<web::HtmlElement>,
    ledger: PaintLedger,
    pending: Option<Translations>,
    raf_id: Option<i32>,
}

impl PainterState {
    fn paint(&mut self) {
        let Some(next) = self.pending.take() else {
            return;
        };
        let layers = &self.layers;
        self.ledger.apply(&next, |i, y| match layers.get(i) {
            Some(el) => {
                dom::set_transform(el, &translate_y(y));
                true
            }
            None => false,
        });
    }
}

/// Coalesces scroll updates into at most one style pass per animation frame.
/// Whatever arrived last before the frame wins.
#[derive(Clone)]
pub struct FramePainter {
    state: Rc<RefCell<PainterState>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FramePainter {
    pub fn new(layers: Vec<web::HtmlElement>) -> Self {
        let ledger = PaintLedger::new(layers.len());
        let state = Rc::new(RefCell::new(PainterState {
            layers,
            ledger,
            pending: None,
            raf_id: None,
        }));
        let state_tick = state.clone();
        let tick = Rc::new(RefCell::new(Some(Closure::wrap(Box::new(move || {
            let mut s = state_tick.borrow_mut();
            s.raf_id = None;
            s.paint();
        }) as Box<dyn FnMut()>))));
        Self { state, tick }
    }

    pub fn submit(&self, translations: &Translations) {
        let mut s = self.state.borrow_mut();
        s.pending = Some(translations.clone());
        if s.raf_id.is_some() {
            return;
        }
        let Some(w) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(id) => s.raf_id = Some(id),
                Err(e) => log::warn!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    /// Mark the current styles as already applied, e.g. after the markup was
    /// rendered with inline transforms for the same offset.
    pub fn assume_painted(&self, translations: &Translations) {
        let mut s = self.state.borrow_mut();
        for (i, t) in translations.iter().enumerate() {
            s.ledger.mark(i, t.translate_y);
        }
    }

    /// Drop any queued frame and the frame callback itself.
    pub fn cancel(&self) {
        let mut s = self.state.borrow_mut();
        if let (Some(id), Some(w)) = (s.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        s.pending = None;
        self.tick.borrow_mut().take();
    }
}
