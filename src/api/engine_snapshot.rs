use serde::{Deserialize, Serialize};

use crate::backend::Backend;
use crate::core::{ElementId, Timestamp, ViewportSnapshot};
use crate::error::{LazyError, LazyResult};

use super::{ElementState, EngineStats, LazyLoadEngine};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSnapshot {
    pub id: ElementId,
    pub state: ElementState,
    pub source: Option<String>,
    pub pending: bool,
    pub geometry_cached: bool,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub listening: bool,
    pub listeners_attached: bool,
    pub viewport: ViewportSnapshot,
    pub next_deadline: Option<Timestamp>,
    /// Pending ids in registration order.
    pub pending: Vec<ElementId>,
    /// Every live element in creation order.
    pub elements: Vec<ElementSnapshot>,
    pub stats: EngineStats,
}

impl<B: Backend> LazyLoadEngine<B> {
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let elements = self
            .elements
            .values()
            .map(|element| ElementSnapshot {
                id: element.id,
                state: element.state,
                source: element.source.clone(),
                pending: self.pending.contains(&element.id),
                geometry_cached: element.cache.rect().is_some(),
            })
            .collect();

        EngineSnapshot {
            listening: self.runtime.listening,
            listeners_attached: !self.runtime.attached.is_empty(),
            viewport: self.viewport,
            next_deadline: self.next_deadline(),
            pending: self.pending_ids(),
            elements,
            stats: self.stats,
        }
    }

    pub fn snapshot_json_pretty(&self) -> LazyResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| LazyError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
