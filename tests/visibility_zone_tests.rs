use std::cell::Cell;

use approx::assert_relative_eq;
use lazy_viewport::core::{
    ElementRect, GeometryCache, ScrollOffset, ViewportSize, ViewportSnapshot, is_in_load_zone,
    rect_in_load_zone,
};

fn snapshot(scroll_y: f64) -> ViewportSnapshot {
    ViewportSnapshot::new(
        ViewportSize::new(600.0, 800.0),
        ScrollOffset::new(0.0, scroll_y),
    )
}

#[test]
fn element_touching_bottom_margin_line_loads() {
    let rect = ElementRect::from_origin_size(10.0, 850.0, 40.0, 50.0);
    assert_relative_eq!(rect.bottom, 900.0);
    assert!(rect_in_load_zone(rect, 100.0, snapshot(0.0)));
}

#[test]
fn zero_offset_shrinks_the_zone_to_the_viewport() {
    let rect = ElementRect::from_origin_size(10.0, 850.0, 40.0, 50.0);
    assert!(!rect_in_load_zone(rect, 0.0, snapshot(0.0)));

    let inside = ElementRect::from_origin_size(10.0, 700.0, 40.0, 50.0);
    assert!(rect_in_load_zone(inside, 0.0, snapshot(0.0)));
}

#[test]
fn tall_element_covering_the_viewport_is_in_zone() {
    // top is above the viewport but still within one element height
    let rect = ElementRect::from_origin_size(0.0, -500.0, 100.0, 2_000.0);
    assert!(rect_in_load_zone(rect, 100.0, snapshot(0.0)));
}

#[test]
fn cached_rect_is_reused_while_snapshot_is_unchanged() {
    let reads = Cell::new(0_u32);
    let rect = ElementRect::from_origin_size(10.0, 1_200.0, 40.0, 50.0);
    let mut cache = GeometryCache::default();

    let read = || {
        reads.set(reads.get() + 1);
        rect
    };
    assert!(!is_in_load_zone(&mut cache, 100.0, snapshot(0.0), read));
    assert!(!is_in_load_zone(&mut cache, 100.0, snapshot(0.0), read));
    assert_eq!(reads.get(), 1);

    let scrolled = rect.translated(0.0, -1.0);
    assert!(!is_in_load_zone(&mut cache, 100.0, snapshot(1.0), || {
        reads.set(reads.get() + 1);
        scrolled
    }));
    assert_eq!(reads.get(), 2);
    assert_relative_eq!(cache.rect().map_or(0.0, |cached| cached.top), 1_199.0);
}

#[test]
fn scrolling_element_into_band_flips_result() {
    let document = ElementRect::from_origin_size(10.0, 1_200.0, 40.0, 50.0);
    let mut cache = GeometryCache::default();

    assert!(!is_in_load_zone(&mut cache, 100.0, snapshot(0.0), || document));

    let scroll_y = 350.0;
    let relative = document.translated(0.0, -scroll_y);
    assert_relative_eq!(relative.top, 850.0);
    assert!(is_in_load_zone(&mut cache, 100.0, snapshot(scroll_y), || relative));
}
