use serde::{Deserialize, Serialize};

use crate::backend::{ContainerId, ScrollTarget};
use crate::error::{LazyError, LazyResult};

pub const DEFAULT_OFFSET_PX: f64 = 100.0;
pub const DEFAULT_SWEEP_THROTTLE_MS: u64 = 30;
pub const DEFAULT_GEOMETRY_THROTTLE_MS: u64 = 60;

/// Engine bootstrap configuration.
///
/// Read once at construction and immutable afterwards. Serializable so hosts
/// can ship it alongside their own settings; callbacks live in
/// [`super::LoadCallbacks`] since closures cannot be serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LazyLoadConfig {
    /// Margin in pixels extending the load zone on every side.
    #[serde(default = "default_offset")]
    pub offset: f64,
    #[serde(default)]
    pub error_class: Option<String>,
    #[serde(default)]
    pub success_class: Option<String>,
    /// Scroll container observed for scroll/touchmove; the window when absent.
    #[serde(default)]
    pub container: Option<ContainerId>,
    #[serde(default = "default_sweep_throttle_ms")]
    pub sweep_throttle_ms: u64,
    #[serde(default = "default_geometry_throttle_ms")]
    pub geometry_throttle_ms: u64,
}

impl Default for LazyLoadConfig {
    fn default() -> Self {
        Self {
            offset: default_offset(),
            error_class: None,
            success_class: None,
            container: None,
            sweep_throttle_ms: default_sweep_throttle_ms(),
            geometry_throttle_ms: default_geometry_throttle_ms(),
        }
    }
}

impl LazyLoadConfig {
    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the marker applied when a fetch fails.
    #[must_use]
    pub fn with_error_class(mut self, class: impl Into<String>) -> Self {
        self.error_class = Some(class.into());
        self
    }

    /// Sets the marker applied when a fetch succeeds.
    #[must_use]
    pub fn with_success_class(mut self, class: impl Into<String>) -> Self {
        self.success_class = Some(class.into());
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: ContainerId) -> Self {
        self.container = Some(container);
        self
    }

    #[must_use]
    pub fn with_sweep_throttle_ms(mut self, window_ms: u64) -> Self {
        self.sweep_throttle_ms = window_ms;
        self
    }

    #[must_use]
    pub fn with_geometry_throttle_ms(mut self, window_ms: u64) -> Self {
        self.geometry_throttle_ms = window_ms;
        self
    }

    #[must_use]
    pub fn scroll_target(&self) -> ScrollTarget {
        ScrollTarget::from(self.container)
    }

    pub fn validate(&self) -> LazyResult<()> {
        if !self.offset.is_finite() {
            return Err(LazyError::InvalidConfig(
                "offset must be finite".to_owned(),
            ));
        }
        if self.sweep_throttle_ms == 0 || self.geometry_throttle_ms == 0 {
            return Err(LazyError::InvalidConfig(
                "throttle windows must be > 0 ms".to_owned(),
            ));
        }
        for (name, class) in [
            ("error_class", &self.error_class),
            ("success_class", &self.success_class),
        ] {
            if let Some(class) = class {
                if class.is_empty() || class.chars().any(char::is_whitespace) {
                    return Err(LazyError::InvalidConfig(format!(
                        "{name} must be a single non-empty class name, got `{class}`"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> LazyResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LazyError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing keys take their defaults.
    pub fn from_json_str(input: &str) -> LazyResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LazyError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_offset() -> f64 {
    DEFAULT_OFFSET_PX
}

fn default_sweep_throttle_ms() -> u64 {
    DEFAULT_SWEEP_THROTTLE_MS
}

fn default_geometry_throttle_ms() -> u64 {
    DEFAULT_GEOMETRY_THROTTLE_MS
}
