//! Layer descriptors and the scroll-to-offset projection.
//!
//! A [`LayerStack`] is validated once and then only read. Translations are
//! derived from a scroll offset on demand; nothing here holds scroll state.

use crate::constants::*;
use smallvec::SmallVec;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Skyline,
    Buildings,
    Vehicles,
    Airplane,
}

impl LayerKind {
    /// Stable identifier used in the `data-layer` attribute.
    pub fn slug(self) -> &'static str {
        match self {
            LayerKind::Skyline => "skyline",
            LayerKind::Buildings => "buildings",
            LayerKind::Vehicles => "vehicles",
            LayerKind::Airplane => "airplane",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "skyline" => Some(LayerKind::Skyline),
            "buildings" => Some(LayerKind::Buildings),
            "vehicles" => Some(LayerKind::Vehicles),
            "airplane" => Some(LayerKind::Airplane),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LayerKind::Skyline => "Background Skyline",
            LayerKind::Buildings => "Buildings",
            LayerKind::Vehicles => "Cars & Trucks",
            LayerKind::Airplane => "Airplane",
        }
    }

    pub fn caption(self) -> &'static str {
        match self {
            LayerKind::Skyline => "Slowest movement for depth",
            LayerKind::Buildings => "Normal scroll speed",
            LayerKind::Vehicles | LayerKind::Airplane => "Medium parallax speed",
        }
    }

    /// Accent used by the speed legend card.
    pub fn accent(self) -> &'static str {
        match self {
            LayerKind::Skyline => "blue",
            LayerKind::Buildings => "slate",
            LayerKind::Vehicles => "emerald",
            LayerKind::Airplane => "amber",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    pub kind: LayerKind,
    pub speed: f64,
    pub z_index: i32,
}

/// Declaration order is render order; `z_index` decides stacking.
pub const DEFAULT_LAYERS: [ParallaxLayer; 4] = [
    ParallaxLayer {
        kind: LayerKind::Skyline,
        speed: SKYLINE_SPEED,
        z_index: SKYLINE_Z,
    },
    ParallaxLayer {
        kind: LayerKind::Buildings,
        speed: BUILDINGS_SPEED,
        z_index: BUILDINGS_Z,
    },
    ParallaxLayer {
        kind: LayerKind::Vehicles,
        speed: VEHICLES_SPEED,
        z_index: VEHICLES_Z,
    },
    ParallaxLayer {
        kind: LayerKind::Airplane,
        speed: AIRPLANE_SPEED,
        z_index: AIRPLANE_Z,
    },
];

#[derive(Debug, Error, PartialEq)]
pub enum LayerError {
    #[error("layer stack is empty")]
    Empty,
    #[error("layer {kind:?} has invalid speed {speed}")]
    InvalidSpeed { kind: LayerKind, speed: f64 },
    #[error("layer {0:?} appears more than once")]
    Duplicate(LayerKind),
}

/// Vertical offset of one layer for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerTransform {
    pub kind: LayerKind,
    pub translate_y: f64,
}

pub type Translations = SmallVec<[LayerTransform; 4]>;

#[inline]
pub fn project(offset: f64, speed: f64) -> f64 {
    offset * speed
}

#[derive(Clone, Debug, PartialEq)]
pub struct LayerStack {
    layers: Vec<ParallaxLayer>,
}

impl LayerStack {
    pub fn new(layers: Vec<ParallaxLayer>) -> Result<Self, LayerError> {
        if layers.is_empty() {
            return Err(LayerError::Empty);
        }
        for (i, layer) in layers.iter().enumerate() {
            if !layer.speed.is_finite() || layer.speed < 0.0 {
                return Err(LayerError::InvalidSpeed {
                    kind: layer.kind,
                    speed: layer.speed,
                });
            }
            if layers[..i].iter().any(|l| l.kind == layer.kind) {
                return Err(LayerError::Duplicate(layer.kind));
            }
        }
        Ok(Self { layers })
    }

    pub fn layers(&self) -> &[ParallaxLayer] {
        &self.layers
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParallaxLayer> {
        self.layers.iter()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn get(&self, kind: LayerKind) -> Option<&ParallaxLayer> {
        self.layers.iter().find(|l| l.kind == kind)
    }

    pub fn translations(&self, offset: f64) -> Translations {
        self.layers
            .iter()
            .map(|l| LayerTransform {
                kind: l.kind,
                translate_y: project(offset, l.speed),
            })
            .collect()
    }
}

impl Default for LayerStack {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYERS.to_vec(),
        }
    }
}

impl<'a> IntoIterator for &'a LayerStack {
    type Item = &'a ParallaxLayer;
    type IntoIter = std::slice::Iter<'a, ParallaxLayer>;

    fn into_iter(self) -> Self::IntoIter {
        self.layers.iter()
    }
}
