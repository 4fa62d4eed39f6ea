//! lazy-viewport: headless visibility-scheduling engine for lazy image loading.
//!
//! Elements bound to an asset URL wait in an ordered pending set until a
//! throttled sweep finds them inside the viewport extended by a margin; only
//! then is their fetch dispatched. Listener attachment follows the pending set
//! so an engine with nothing to load does no work. All host interaction goes
//! through the [`backend::Backend`] trait and all timing through host-supplied
//! [`core::Timestamp`]s.

pub mod api;
pub mod backend;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{LazyLoadConfig, LazyLoadEngine};
pub use error::{LazyError, LazyResult};
