//! Scroll offset state and listener registration.
//!
//! [`ScrollSource`] is the seam between the view and whatever produces scroll
//! notifications. The browser window implements it in the web crate;
//! [`ScrollBus`] implements it in memory for the native renderer and tests.
//! Both hand out guards that unsubscribe on drop.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

pub type ScrollCallback = Box<dyn FnMut(f64)>;

pub trait ScrollSource {
    type Guard;

    /// Offset at the time of the call: finite and never negative. Callbacks
    /// receive values with the same guarantee.
    fn current_offset(&self) -> f64;

    /// Register `callback` for every subsequent notification. Dropping the
    /// returned guard must stop all further calls.
    fn subscribe(&self, callback: ScrollCallback) -> Self::Guard;
}

/// Normalization of raw scroll readings.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset {
    pub max_offset: Option<f64>,
}

impl ScrollOffset {
    pub fn unbounded() -> Self {
        Self { max_offset: None }
    }

    pub fn bounded(max_offset: f64) -> Self {
        Self {
            max_offset: Some(max_offset.max(0.0)),
        }
    }

    /// Largest reachable offset for a document of the given height.
    #[inline]
    pub fn max_for(document_height: f64, viewport_height: f64) -> f64 {
        let span = document_height - viewport_height;
        if span.is_finite() {
            span.max(0.0)
        } else {
            0.0
        }
    }

    pub fn normalize(&self, raw: f64) -> f64 {
        // Rubber-band overscroll reports negative offsets on some platforms.
        let v = if raw.is_finite() { raw.max(0.0) } else { 0.0 };
        match self.max_offset {
            Some(max) => v.min(max),
            None => v,
        }
    }
}

/// Latest scroll offset, shared between the listener and the renderer.
#[derive(Clone, Debug, Default)]
pub struct ScrollState {
    offset: Rc<Cell<f64>>,
    bounds: ScrollOffset,
}

impl ScrollState {
    pub fn new(bounds: ScrollOffset) -> Self {
        Self {
            offset: Rc::new(Cell::new(0.0)),
            bounds,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Overwrite the stored offset. Returns `true` when the value changed.
    pub fn record(&self, raw: f64) -> bool {
        let next = self.bounds.normalize(raw);
        let changed = self.offset.get() != next;
        self.offset.set(next);
        changed
    }

    pub fn set_bounds(&mut self, bounds: ScrollOffset) {
        self.bounds = bounds;
        self.record(self.offset.get());
    }
}

type ListenerId = u64;
type SharedCallback = Rc<RefCell<ScrollCallback>>;

#[derive(Default)]
struct BusInner {
    next_id: ListenerId,
    offset: f64,
    listeners: Vec<(ListenerId, SharedCallback)>,
}

/// In-memory scroll notifier.
#[derive(Clone, Default)]
pub struct ScrollBus {
    inner: Rc<RefCell<BusInner>>,
}

impl ScrollBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `offset` and notify every listener registered at the time of the
    /// call. Returns how many listeners ran.
    pub fn emit(&self, offset: f64) -> usize {
        let offset = ScrollOffset::unbounded().normalize(offset);
        let snapshot: Vec<(ListenerId, SharedCallback)> = {
            let mut inner = self.inner.borrow_mut();
            inner.offset = offset;
            inner.listeners.clone()
        };
        let mut notified = 0;
        for (id, cb) in snapshot {
            // A listener may have been removed by an earlier callback in this pass.
            let live = self.inner.borrow().listeners.iter().any(|(l, _)| *l == id);
            if !live {
                continue;
            }
            if let Ok(mut f) = cb.try_borrow_mut() {
                f(offset);
                notified += 1;
            }
        }
        notified
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ScrollSource for ScrollBus {
    type Guard = Subscription;

    fn current_offset(&self) -> f64 {
        self.inner.borrow().offset
    }

    fn subscribe(&self, callback: ScrollCallback) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(RefCell::new(callback))));
        log::debug!("[scroll] subscribed listener {}", id);
        Subscription {
            id,
            bus: Rc::downgrade(&self.inner),
        }
    }
}

/// Keeps a [`ScrollBus`] listener registered while alive.
pub struct Subscription {
    id: ListenerId,
    bus: Weak<RefCell<BusInner>>,
}

impl Subscription {
    pub fn is_active(&self) -> bool {
        self.bus
            .upgrade()
            .map(|b| b.borrow().listeners.iter().any(|(l, _)| *l == self.id))
            .unwrap_or(false)
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(bus) = self.bus.upgrade() {
            // Drop the callback outside the borrow: it may own other guards.
            let removed = {
                let mut inner = bus.borrow_mut();
                let pos = inner.listeners.iter().position(|(l, _)| *l == self.id);
                pos.map(|p| inner.listeners.remove(p))
            };
            if removed.is_some() {
                log::debug!("[scroll] unsubscribed listener {}", self.id);
            }
            drop(removed);
        }
    }
}
