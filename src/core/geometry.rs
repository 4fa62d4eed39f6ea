use serde::{Deserialize, Serialize};

use super::types::{ElementRect, ViewportSnapshot};

/// Memoized bounding rectangle of one tracked element.
///
/// The rectangle is only meaningful against the snapshot it was measured with;
/// both are stored and cleared together.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeometryCache {
    rect: Option<ElementRect>,
    snapshot: Option<ViewportSnapshot>,
}

impl GeometryCache {
    #[must_use]
    pub fn rect(&self) -> Option<ElementRect> {
        self.rect
    }

    #[must_use]
    pub fn snapshot(&self) -> Option<ViewportSnapshot> {
        self.snapshot
    }

    /// Returns `true` when the cached rectangle cannot be reused for `current`.
    #[must_use]
    pub fn needs_update(&self, current: ViewportSnapshot) -> bool {
        match (self.rect, self.snapshot) {
            (Some(_), Some(measured_with)) => measured_with != current,
            _ => true,
        }
    }

    pub fn store(&mut self, rect: ElementRect, snapshot: ViewportSnapshot) {
        self.rect = Some(rect);
        self.snapshot = Some(snapshot);
    }

    pub fn clear(&mut self) {
        self.rect = None;
        self.snapshot = None;
    }

    /// Returns the rectangle valid for `current`, measuring it through `read`
    /// only when the cache is stale.
    pub fn resolve<F>(&mut self, current: ViewportSnapshot, read: F) -> GeometryLookup
    where
        F: FnOnce() -> ElementRect,
    {
        if let (false, Some(rect)) = (self.needs_update(current), self.rect) {
            return GeometryLookup {
                rect,
                measured: false,
            };
        }

        let rect = read();
        self.store(rect, current);
        GeometryLookup {
            rect,
            measured: true,
        }
    }
}

/// Result of a cache lookup; `measured` is set when a live read was needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryLookup {
    pub rect: ElementRect,
    pub measured: bool,
}
