mod element_controller;
mod engine;
mod engine_config;
mod engine_init;
mod engine_snapshot;
mod engine_stats;
mod json_contract;
mod listener_lifecycle;
mod load_callbacks;
mod load_resolver;
mod scheduler_runtime;
mod sweep_controller;
mod timer_dispatch;
mod tracked_element;

pub use engine::LazyLoadEngine;
pub use engine_config::{
    DEFAULT_GEOMETRY_THROTTLE_MS, DEFAULT_OFFSET_PX, DEFAULT_SWEEP_THROTTLE_MS, LazyLoadConfig,
};
pub use engine_snapshot::{ElementSnapshot, EngineSnapshot};
pub use engine_stats::EngineStats;
pub use json_contract::{ENGINE_SNAPSHOT_JSON_SCHEMA_V1, EngineSnapshotJsonContractV1};
pub use load_callbacks::{LoadCallbackFn, LoadCallbacks};
pub use tracked_element::ElementState;
