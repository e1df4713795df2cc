use parallax_core::LayerTransform;
use smallvec::SmallVec;

/// Indices of layers whose translation differs from what was last painted.
/// Layers never painted (`None`) always count as changed.
#[inline]
pub fn changed_layers(
    painted: &[Option<f64>],
    next: &[LayerTransform],
) -> SmallVec<[usize; 4]> {
    next.iter()
        .enumerate()
        .filter(|(i, t)| painted.get(*i).copied().flatten() != Some(t.translate_y))
        .map(|(i, _)| i)
        .collect()
}

/// Last translation written to each layer element.
#[derive(Clone, Debug, Default)]
pub struct PaintLedger {
    painted: Vec<Option<f64>>,
}

impl PaintLedger {
    pub fn new(layers: usize) -> Self {
        Self {
            painted: vec![None; layers],
        }
    }

    pub fn pending(&self, next: &[LayerTransform]) -> SmallVec<[usize; 4]> {
        changed_layers(&self.painted, next)
    }

    /// Hand every changed layer to `write` and record it as painted.
    /// Returns how many layers were written.
    pub fn apply(
        &mut self,
        next: &[LayerTransform],
        mut write: impl FnMut(usize, f64) -> bool,
    ) -> usize {
        let mut written = 0;
        for i in self.pending(next) {
            if write(i, next[i].translate_y) {
                self.mark(i, next[i].translate_y);
                written += 1;
            }
        }
        written
    }

    pub fn mark(&mut self, index: usize, translate_y: f64) {
        if let Some(slot) = self.painted.get_mut(index) {
            *slot = Some(translate_y);
        }
    }

    pub fn last(&self, index: usize) -> Option<f64> {
        self.painted.get(index).copied().flatten()
    }
}
