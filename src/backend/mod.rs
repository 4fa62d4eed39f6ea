mod headless;

pub use headless::{HeadlessBackend, HeadlessNode, ListenerChange, NodeHandle};

use serde::{Deserialize, Serialize};

use crate::core::{ElementId, ElementRect, ScrollOffset, ViewportSize};

/// Host-assigned handle of a scroll container other than the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerId(pub u64);

/// Element that emits scroll events and owns a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScrollTarget {
    Window,
    Container(ContainerId),
}

impl From<Option<ContainerId>> for ScrollTarget {
    fn from(container: Option<ContainerId>) -> Self {
        container.map_or(Self::Window, Self::Container)
    }
}

/// Shape of a tracked node, deciding how a loaded asset is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Native image node; the asset goes into its source attribute.
    Image,
    /// Any other node; the asset becomes its CSS background image.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewportEventKind {
    Scroll,
    TouchMove,
    Resize,
}

/// Host event forwarded to [`crate::api::LazyLoadEngine::handle_event`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportEvent {
    pub kind: ViewportEventKind,
    pub target: ScrollTarget,
}

impl ViewportEvent {
    #[must_use]
    pub fn scroll(target: ScrollTarget) -> Self {
        Self {
            kind: ViewportEventKind::Scroll,
            target,
        }
    }

    #[must_use]
    pub fn touch_move(target: ScrollTarget) -> Self {
        Self {
            kind: ViewportEventKind::TouchMove,
            target,
        }
    }

    #[must_use]
    pub fn window_resize() -> Self {
        Self {
            kind: ViewportEventKind::Resize,
            target: ScrollTarget::Window,
        }
    }
}

/// Engine action bound to a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListenerHandler {
    Sweep,
    GeometryRefresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerBinding {
    pub target: ScrollTarget,
    pub event: ViewportEventKind,
    pub handler: ListenerHandler,
}

impl ListenerBinding {
    #[must_use]
    pub fn matches(self, event: ViewportEvent) -> bool {
        self.target == event.target && self.event == event.kind
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetPresentation {
    Source(String),
    BackgroundImage(String),
    Cleared,
}

impl AssetPresentation {
    #[must_use]
    pub fn for_loaded(kind: NodeKind, url: &str) -> Self {
        match kind {
            NodeKind::Image => Self::Source(url.to_owned()),
            NodeKind::Other => Self::BackgroundImage(url.to_owned()),
        }
    }

    /// CSS value used for background presentations.
    #[must_use]
    pub fn css_background_value(&self) -> Option<String> {
        match self {
            Self::BackgroundImage(url) => Some(format!("url(\"{url}\")")),
            Self::Source(_) | Self::Cleared => None,
        }
    }
}

/// Identifies one dispatched fetch.
///
/// `generation` is the element's load generation at dispatch time; a rebind
/// bumps it so late results for a previous source are recognized as stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LoadTicket {
    pub element: ElementId,
    pub generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadRequest {
    pub ticket: LoadTicket,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadOutcome {
    Success,
    Error,
}

/// Contract implemented by any host environment.
///
/// The engine owns its backend and calls into it for every side effect:
/// viewport and layout reads, listener management, presentation, and
/// asynchronous fetches whose results come back through
/// [`crate::api::LazyLoadEngine::complete_load`].
pub trait Backend {
    /// Opaque handle of a host node, owned by the binding layer.
    type Element;

    fn viewport_size(&self) -> ViewportSize;
    fn scroll_offset(&self, target: ScrollTarget) -> ScrollOffset;
    /// Layout-forcing read of an element rectangle relative to the viewport.
    fn bounding_rect(&self, element: &Self::Element) -> ElementRect;
    fn node_kind(&self, element: &Self::Element) -> NodeKind;

    fn attach_listener(&mut self, binding: ListenerBinding);
    fn detach_listener(&mut self, binding: ListenerBinding);

    fn apply_asset(&mut self, element: &Self::Element, presentation: AssetPresentation);
    fn add_marker(&mut self, element: &Self::Element, marker: &str);
    fn remove_marker(&mut self, element: &Self::Element, marker: &str);

    fn fetch(&mut self, request: LoadRequest);
}
