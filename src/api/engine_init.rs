use indexmap::{IndexMap, IndexSet};
use tracing::debug;

use crate::backend::Backend;
use crate::core::{ScrollOffset, ViewportSnapshot};
use crate::error::{LazyError, LazyResult};

use super::{
    EngineStats, LazyLoadConfig, LazyLoadEngine, LoadCallbacks,
    scheduler_runtime::SchedulerRuntime,
};

impl<B: Backend> LazyLoadEngine<B> {
    /// Creates an idle engine with default no-op callbacks.
    pub fn new(backend: B, config: LazyLoadConfig) -> LazyResult<Self> {
        Self::with_callbacks(backend, config, LoadCallbacks::default())
    }

    /// Creates an idle engine; no listener is attached until the first source is set.
    pub fn with_callbacks(
        backend: B,
        config: LazyLoadConfig,
        callbacks: LoadCallbacks,
    ) -> LazyResult<Self> {
        config.validate()?;

        let size = backend.viewport_size();
        if !size.is_valid() {
            return Err(LazyError::InvalidViewport {
                width: size.width,
                height: size.height,
            });
        }

        debug!(
            offset = config.offset,
            container = ?config.container,
            sweep_throttle_ms = config.sweep_throttle_ms,
            geometry_throttle_ms = config.geometry_throttle_ms,
            "lazy load engine created"
        );

        let runtime =
            SchedulerRuntime::new(config.sweep_throttle_ms, config.geometry_throttle_ms);
        Ok(Self {
            backend,
            config,
            callbacks,
            elements: IndexMap::new(),
            pending: IndexSet::new(),
            next_element_id: 0,
            viewport: ViewportSnapshot::new(size, ScrollOffset::default()),
            runtime,
            stats: EngineStats::default(),
        })
    }
}
