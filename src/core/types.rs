use serde::{Deserialize, Serialize};

/// Millisecond timestamp on a host-defined monotonic clock.
///
/// The engine never reads a wall clock; every scheduling entry point receives
/// the current time from the host so behavior stays deterministic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Timestamp(u64);

impl Timestamp {
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub const fn saturating_add_millis(self, millis: u64) -> Self {
        Self(self.0.saturating_add(millis))
    }

    #[must_use]
    pub const fn saturating_millis_since(self, earlier: Self) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

/// Inner dimensions of the global viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width >= 0.0 && self.height >= 0.0
    }
}

/// Live scroll offset of the window or a scroll container.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollOffset {
    pub x: f64,
    pub y: f64,
}

impl ScrollOffset {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Viewport dimensions merged with the scroll offset observed at sweep time.
///
/// Two snapshots compare equal only when size and scroll position all match,
/// which is the condition under which a cached element rectangle stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportSnapshot {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl ViewportSnapshot {
    #[must_use]
    pub fn new(size: ViewportSize, scroll: ScrollOffset) -> Self {
        Self {
            width: size.width,
            height: size.height,
            scroll_x: scroll.x,
            scroll_y: scroll.y,
        }
    }

    #[must_use]
    pub fn size(self) -> ViewportSize {
        ViewportSize::new(self.width, self.height)
    }

    #[must_use]
    pub fn with_size(mut self, size: ViewportSize) -> Self {
        self.width = size.width;
        self.height = size.height;
        self
    }

    #[must_use]
    pub fn with_scroll(mut self, scroll: ScrollOffset) -> Self {
        self.scroll_x = scroll.x;
        self.scroll_y = scroll.y;
        self
    }
}

/// Bounding rectangle of an element relative to the viewport origin.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElementRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementRect {
    /// Builds a rectangle from its top-left corner and size.
    #[must_use]
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            bottom: top + height,
            right: left + width,
            width,
            height,
        }
    }

    /// Returns the rectangle shifted by the given deltas, as a scroll would move it.
    #[must_use]
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            top: self.top + dy,
            left: self.left + dx,
            bottom: self.bottom + dy,
            right: self.right + dx,
            width: self.width,
            height: self.height,
        }
    }
}

/// Engine-assigned identity of a tracked element.
///
/// Ids are allocated monotonically and never reused, so a stale id held by a
/// host after `destroy` can never alias a newer element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(u64);

impl ElementId {
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "element#{}", self.0)
    }
}
