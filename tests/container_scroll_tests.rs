use lazy_viewport::api::{LazyLoadConfig, LazyLoadEngine};
use lazy_viewport::backend::{
    ContainerId, HeadlessBackend, NodeKind, ScrollTarget, ViewportEvent, ViewportEventKind,
};
use lazy_viewport::core::{ElementRect, ScrollOffset, Timestamp, ViewportSize};

const FEED: ContainerId = ContainerId(42);

fn at(millis: u64) -> Timestamp {
    Timestamp::from_millis(millis)
}

fn build_engine() -> LazyLoadEngine<HeadlessBackend> {
    let backend = HeadlessBackend::new(ViewportSize::new(600.0, 800.0));
    let config = LazyLoadConfig::default().with_container(FEED);
    LazyLoadEngine::new(backend, config).expect("engine init")
}

fn track_far_node(engine: &mut LazyLoadEngine<HeadlessBackend>) {
    let node = engine.backend_mut().add_node_in(
        ScrollTarget::Container(FEED),
        NodeKind::Image,
        ElementRect::from_origin_size(10.0, 3_000.0, 40.0, 50.0),
    );
    let id = engine.create_element(node);
    engine.set_source(id, "feed.png", at(0));
    engine.advance(at(1));
}

#[test]
fn scroll_listeners_bind_to_configured_container() {
    let mut engine = build_engine();
    track_far_node(&mut engine);

    let attached = engine.backend().attached_listeners();
    for binding in attached {
        match binding.event {
            ViewportEventKind::Scroll | ViewportEventKind::TouchMove => {
                assert_eq!(binding.target, ScrollTarget::Container(FEED));
            }
            ViewportEventKind::Resize => assert_eq!(binding.target, ScrollTarget::Window),
        }
    }
}

#[test]
fn sweep_reads_scroll_offset_from_container_not_window() {
    let mut engine = build_engine();
    track_far_node(&mut engine);

    engine
        .backend_mut()
        .scroll_to(ScrollTarget::Window, ScrollOffset::new(0.0, 2_800.0));
    engine.handle_event(ViewportEvent::scroll(ScrollTarget::Container(FEED)), at(100));
    assert_eq!(engine.viewport_snapshot().scroll_y, 0.0);
    assert!(engine.backend().fetches().is_empty());

    engine
        .backend_mut()
        .scroll_to(ScrollTarget::Container(FEED), ScrollOffset::new(0.0, 2_500.0));
    engine.handle_event(ViewportEvent::scroll(ScrollTarget::Container(FEED)), at(200));
    assert_eq!(engine.viewport_snapshot().scroll_y, 2_500.0);
    assert_eq!(engine.backend().fetches().len(), 1);
}

#[test]
fn window_scroll_events_are_not_bound_when_container_is_configured() {
    let mut engine = build_engine();
    track_far_node(&mut engine);
    let sweeps = engine.stats().sweeps;

    engine.handle_event(ViewportEvent::scroll(ScrollTarget::Window), at(100));
    engine.handle_event(ViewportEvent::touch_move(ScrollTarget::Window), at(150));

    assert_eq!(engine.stats().sweeps, sweeps);
    assert_eq!(engine.next_deadline(), None);
}

#[test]
fn container_scroll_change_invalidates_cached_geometry() {
    let mut engine = build_engine();
    track_far_node(&mut engine);
    assert_eq!(engine.backend().rect_reads(), 1);

    engine.handle_event(ViewportEvent::scroll(ScrollTarget::Container(FEED)), at(100));
    assert_eq!(engine.backend().rect_reads(), 1);
    assert_eq!(engine.stats().rect_cache_hits, 1);

    engine
        .backend_mut()
        .scroll_to(ScrollTarget::Container(FEED), ScrollOffset::new(0.0, 1.0));
    engine.handle_event(ViewportEvent::touch_move(ScrollTarget::Container(FEED)), at(200));
    assert_eq!(engine.backend().rect_reads(), 2);
    assert_eq!(engine.stats().rect_reads, 2);
}
