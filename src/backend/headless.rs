use std::cell::Cell;

use indexmap::IndexMap;

use crate::core::{ElementRect, ScrollOffset, ViewportSize};

use super::{
    AssetPresentation, Backend, ListenerBinding, LoadRequest, NodeKind, ScrollTarget,
};

/// Handle of a node living in a [`HeadlessBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(u32);

/// Recorded state of one headless node.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessNode {
    pub kind: NodeKind,
    /// Rectangle in document coordinates of its scroll target.
    pub document_rect: ElementRect,
    pub scroll_target: ScrollTarget,
    pub source: Option<String>,
    /// CSS `background-image` value, e.g. `url("a.png")`.
    pub background_image: Option<String>,
    pub markers: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Attached,
    Detached,
}

/// In-memory backend used by tests and headless hosts.
///
/// Layout is scripted: each node carries a document-space rectangle and the
/// viewport-relative rectangle is derived from the scroll offset of the node's
/// scroll target. Every side effect requested by the engine is recorded.
#[derive(Debug)]
pub struct HeadlessBackend {
    viewport: ViewportSize,
    scroll_offsets: IndexMap<ScrollTarget, ScrollOffset>,
    nodes: IndexMap<NodeHandle, HeadlessNode>,
    next_node: u32,
    attached: Vec<ListenerBinding>,
    listener_log: Vec<(ListenerChange, ListenerBinding)>,
    fetches: Vec<LoadRequest>,
    rect_reads: Cell<u64>,
}

impl HeadlessBackend {
    #[must_use]
    pub fn new(viewport: ViewportSize) -> Self {
        Self {
            viewport,
            scroll_offsets: IndexMap::new(),
            nodes: IndexMap::new(),
            next_node: 0,
            attached: Vec::new(),
            listener_log: Vec::new(),
            fetches: Vec::new(),
            rect_reads: Cell::new(0),
        }
    }

    /// Adds a node scrolled by the window.
    pub fn add_node(&mut self, kind: NodeKind, document_rect: ElementRect) -> NodeHandle {
        self.add_node_in(ScrollTarget::Window, kind, document_rect)
    }

    pub fn add_node_in(
        &mut self,
        scroll_target: ScrollTarget,
        kind: NodeKind,
        document_rect: ElementRect,
    ) -> NodeHandle {
        let handle = NodeHandle(self.next_node);
        self.next_node += 1;
        self.nodes.insert(
            handle,
            HeadlessNode {
                kind,
                document_rect,
                scroll_target,
                source: None,
                background_image: None,
                markers: Vec::new(),
            },
        );
        handle
    }

    #[must_use]
    pub fn node(&self, handle: NodeHandle) -> Option<&HeadlessNode> {
        self.nodes.get(&handle)
    }

    pub fn set_document_rect(&mut self, handle: NodeHandle, rect: ElementRect) {
        if let Some(node) = self.nodes.get_mut(&handle) {
            node.document_rect = rect;
        }
    }

    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        self.viewport = viewport;
    }

    pub fn scroll_to(&mut self, target: ScrollTarget, offset: ScrollOffset) {
        self.scroll_offsets.insert(target, offset);
    }

    #[must_use]
    pub fn rect_reads(&self) -> u64 {
        self.rect_reads.get()
    }

    #[must_use]
    pub fn attached_listeners(&self) -> &[ListenerBinding] {
        &self.attached
    }

    #[must_use]
    pub fn listener_log(&self) -> &[(ListenerChange, ListenerBinding)] {
        &self.listener_log
    }

    #[must_use]
    pub fn fetches(&self) -> &[LoadRequest] {
        &self.fetches
    }

    /// Drains recorded fetch requests so tests can resolve them.
    pub fn take_fetches(&mut self) -> Vec<LoadRequest> {
        std::mem::take(&mut self.fetches)
    }

    #[must_use]
    pub fn has_marker(&self, handle: NodeHandle, marker: &str) -> bool {
        self.nodes
            .get(&handle)
            .is_some_and(|node| node.markers.iter().any(|entry| entry == marker))
    }
}

impl Backend for HeadlessBackend {
    type Element = NodeHandle;

    fn viewport_size(&self) -> ViewportSize {
        self.viewport
    }

    fn scroll_offset(&self, target: ScrollTarget) -> ScrollOffset {
        self.scroll_offsets.get(&target).copied().unwrap_or_default()
    }

    fn bounding_rect(&self, element: &NodeHandle) -> ElementRect {
        self.rect_reads.set(self.rect_reads.get() + 1);
        let Some(node) = self.nodes.get(element) else {
            return ElementRect::default();
        };
        let scroll = self.scroll_offset(node.scroll_target);
        node.document_rect.translated(-scroll.x, -scroll.y)
    }

    fn node_kind(&self, element: &NodeHandle) -> NodeKind {
        self.nodes
            .get(element)
            .map_or(NodeKind::Other, |node| node.kind)
    }

    fn attach_listener(&mut self, binding: ListenerBinding) {
        self.attached.push(binding);
        self.listener_log.push((ListenerChange::Attached, binding));
    }

    fn detach_listener(&mut self, binding: ListenerBinding) {
        if let Some(position) = self.attached.iter().position(|entry| *entry == binding) {
            self.attached.remove(position);
        }
        self.listener_log.push((ListenerChange::Detached, binding));
    }

    fn apply_asset(&mut self, element: &NodeHandle, presentation: AssetPresentation) {
        let Some(node) = self.nodes.get_mut(element) else {
            return;
        };
        match &presentation {
            AssetPresentation::Source(url) => node.source = Some(url.clone()),
            AssetPresentation::BackgroundImage(_) => {
                node.background_image = presentation.css_background_value();
            }
            AssetPresentation::Cleared => {
                node.source = None;
                node.background_image = None;
            }
        }
    }

    fn add_marker(&mut self, element: &NodeHandle, marker: &str) {
        if let Some(node) = self.nodes.get_mut(element) {
            if !node.markers.iter().any(|entry| entry == marker) {
                node.markers.push(marker.to_owned());
            }
        }
    }

    fn remove_marker(&mut self, element: &NodeHandle, marker: &str) {
        if let Some(node) = self.nodes.get_mut(element) {
            node.markers.retain(|entry| entry != marker);
        }
    }

    fn fetch(&mut self, request: LoadRequest) {
        self.fetches.push(request);
    }
}
