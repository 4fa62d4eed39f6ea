use criterion::{Criterion, criterion_group, criterion_main};
use lazy_viewport::api::{LazyLoadConfig, LazyLoadEngine};
use lazy_viewport::backend::{HeadlessBackend, NodeKind, ScrollTarget};
use lazy_viewport::core::{
    ElementRect, ScrollOffset, Timestamp, ViewportSize, ViewportSnapshot, rect_in_load_zone,
};
use std::hint::black_box;

/// Engine listening on `count` pending elements that all sit below the load zone.
fn listening_engine(count: u32) -> LazyLoadEngine<HeadlessBackend> {
    let backend = HeadlessBackend::new(ViewportSize::new(1920.0, 1080.0));
    let mut engine =
        LazyLoadEngine::new(backend, LazyLoadConfig::default()).expect("engine init");
    for row in 0..count {
        let node = engine.backend_mut().add_node(
            NodeKind::Image,
            ElementRect::from_origin_size(0.0, 5_000.0 + f64::from(row) * 10.0, 320.0, 240.0),
        );
        let id = engine.create_element(node);
        engine.set_source(id, "tile.png", Timestamp::from_millis(0));
    }
    engine.advance(Timestamp::from_millis(1));
    engine
}

fn bench_load_zone_test(c: &mut Criterion) {
    let viewport = ViewportSnapshot::new(
        ViewportSize::new(1920.0, 1080.0),
        ScrollOffset::default(),
    );
    let rect = ElementRect::from_origin_size(10.0, 1_150.0, 320.0, 240.0);

    c.bench_function("rect_in_load_zone", |b| {
        b.iter(|| rect_in_load_zone(black_box(rect), black_box(100.0), black_box(viewport)))
    });
}

fn bench_sweep_cached_10k(c: &mut Criterion) {
    let mut engine = listening_engine(10_000);

    c.bench_function("sweep_cached_10k", |b| {
        b.iter(|| black_box(engine.sweep_now()))
    });
}

fn bench_sweep_after_scroll_10k(c: &mut Criterion) {
    let mut engine = listening_engine(10_000);
    let mut flip = false;

    c.bench_function("sweep_after_scroll_10k", |b| {
        b.iter(|| {
            flip = !flip;
            let scroll_y = if flip { 1.0 } else { 0.0 };
            engine
                .backend_mut()
                .scroll_to(ScrollTarget::Window, ScrollOffset::new(0.0, scroll_y));
            black_box(engine.sweep_now())
        })
    });
}

criterion_group!(
    benches,
    bench_load_zone_test,
    bench_sweep_cached_10k,
    bench_sweep_after_scroll_10k
);
criterion_main!(benches);
