//! The parallax view: one scroll offset, one layer stack, derived transforms.

use crate::layer::{LayerStack, Translations};
use crate::scroll::{ScrollOffset, ScrollSource, ScrollState};

#[derive(Clone, Debug, Default)]
pub struct ParallaxView {
    stack: LayerStack,
    state: ScrollState,
}

impl ParallaxView {
    pub fn new(stack: LayerStack, bounds: ScrollOffset) -> Self {
        Self {
            stack,
            state: ScrollState::new(bounds),
        }
    }

    pub fn stack(&self) -> &LayerStack {
        &self.stack
    }

    pub fn offset(&self) -> f64 {
        self.state.offset()
    }

    pub fn translations(&self) -> Translations {
        self.stack.translations(self.state.offset())
    }

    /// Start following `source`.
    ///
    /// The current offset is read and reported through `on_change` before
    /// subscribing, so the first paint does not wait for a scroll event.
    /// Later notifications call `on_change` only when the stored offset
    /// actually moved.
    pub fn mount<S, F>(self, source: &S, mut on_change: F) -> MountedView<S::Guard>
    where
        S: ScrollSource,
        F: FnMut(&Translations) + 'static,
    {
        self.state.record(source.current_offset());
        on_change(&self.translations());

        let stack = self.stack.clone();
        let state = self.state.clone();
        let guard = source.subscribe(Box::new(move |raw| {
            if state.record(raw) {
                on_change(&stack.translations(state.offset()));
            }
        }));
        log::debug!("[view] mounted with {} layers", self.stack.len());
        MountedView {
            view: self,
            guard: Some(guard),
        }
    }
}

/// A view attached to a scroll source. Dropping it detaches the listener.
pub struct MountedView<G> {
    view: ParallaxView,
    guard: Option<G>,
}

impl<G> MountedView<G> {
    pub fn view(&self) -> &ParallaxView {
        &self.view
    }

    pub fn offset(&self) -> f64 {
        self.view.offset()
    }

    pub fn translations(&self) -> Translations {
        self.view.translations()
    }

    pub fn is_mounted(&self) -> bool {
        self.guard.is_some()
    }

    /// Detach and hand back the view with its last offset.
    pub fn unmount(mut self) -> ParallaxView {
        self.release();
        self.view.clone()
    }

    fn release(&mut self) {
        if self.guard.take().is_some() {
            log::debug!("[view] unmounted");
        }
    }
}

impl<G> Drop for MountedView<G> {
    fn drop(&mut self) {
        self.release();
    }
}
