use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("container height must be at least 100vh, got {0}vh")]
    ContainerTooShort(u32),
    #[error("transition easing must not be empty")]
    EmptyEasing,
}

/// CSS transition applied to every layer wrapper.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub property: String,
    pub duration_ms: u32,
    pub easing: String,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            property: TRANSITION_PROPERTY.to_string(),
            duration_ms: TRANSITION_DURATION_MS,
            easing: TRANSITION_EASING.to_string(),
        }
    }
}

impl Transition {
    /// `transform 0.1s ease-out`
    pub fn css(&self) -> String {
        let secs = self.duration_ms as f64 / 1000.0;
        format!("{} {}s {}", self.property, secs, self.easing)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParallaxConfig {
    pub container_height_vh: u32,
    pub transition: Transition,
    pub passive_listener: bool,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            container_height_vh: CONTAINER_HEIGHT_VH,
            transition: Transition::default(),
            passive_listener: PASSIVE_LISTENER,
        }
    }
}

impl ParallaxConfig {
    pub fn with_container_height(mut self, vh: u32) -> Result<Self, ConfigError> {
        if vh < 100 {
            return Err(ConfigError::ContainerTooShort(vh));
        }
        self.container_height_vh = vh;
        Ok(self)
    }

    pub fn with_transition(
        mut self,
        duration_ms: u32,
        easing: &str,
    ) -> Result<Self, ConfigError> {
        let easing = easing.trim();
        if easing.is_empty() {
            return Err(ConfigError::EmptyEasing);
        }
        self.transition.duration_ms = duration_ms;
        self.transition.easing = easing.to_string();
        Ok(self)
    }

    pub fn with_passive_listener(mut self, passive: bool) -> Self {
        self.passive_listener = passive;
        self
    }
}
