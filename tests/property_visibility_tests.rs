use lazy_viewport::core::{
    ElementRect, ScrollOffset, ViewportSize, ViewportSnapshot, rect_in_load_zone,
};
use proptest::prelude::*;

// Integer-valued coordinates keep the edge arithmetic exact.
fn viewport(width: i32, height: i32) -> ViewportSnapshot {
    ViewportSnapshot::new(
        ViewportSize::new(f64::from(width), f64::from(height)),
        ScrollOffset::default(),
    )
}

fn rect(left: i32, top: i32, width: i32, height: i32) -> ElementRect {
    ElementRect::from_origin_size(
        f64::from(left),
        f64::from(top),
        f64::from(width),
        f64::from(height),
    )
}

proptest! {
    #[test]
    fn element_below_bottom_line_is_never_in_zone(
        vw in 1i32..2_000, vh in 1i32..2_000, offset in 0i32..500,
        left in -500i32..2_000, width in 0i32..400, height in 0i32..400,
        gap in 1i32..5_000
    ) {
        let top = vh + offset + gap;
        let element = rect(left, top, width, height);
        prop_assert!(!rect_in_load_zone(element, f64::from(offset), viewport(vw, vh)));
    }

    #[test]
    fn element_above_top_margin_is_never_in_zone(
        vw in 1i32..2_000, vh in 1i32..2_000, offset in 0i32..500,
        left in -500i32..2_000, width in 0i32..400, height in 0i32..400,
        gap in 1i32..5_000
    ) {
        let bottom = -offset - gap;
        let element = rect(left, bottom - height, width, height);
        prop_assert!(!rect_in_load_zone(element, f64::from(offset), viewport(vw, vh)));
    }

    #[test]
    fn element_past_either_side_is_never_in_zone(
        vw in 1i32..2_000, vh in 1i32..2_000, offset in 0i32..500,
        top in -200i32..1_000, width in 0i32..400, height in 0i32..400,
        gap in 1i32..5_000, to_the_right in any::<bool>()
    ) {
        let left = if to_the_right { vw + offset + gap } else { -width - gap };
        let element = rect(left, top, width, height);
        prop_assert!(!rect_in_load_zone(element, f64::from(offset), viewport(vw, vh)));
    }

    #[test]
    fn element_with_top_edge_in_band_is_in_zone(
        vw in 1i32..2_000, vh in 1i32..2_000, offset in 0i32..500,
        width in 0i32..400, height in 0i32..400,
        left_frac in 0.0f64..=1.0, top_frac in 0.0f64..=1.0
    ) {
        let left_span = vw + offset;
        let left = -width + (f64::from(left_span) * left_frac).floor() as i32;
        let top_span = vh + offset + height;
        let top = -height + (f64::from(top_span) * top_frac).floor() as i32;

        let element = rect(left, top, width, height);
        prop_assert!(rect_in_load_zone(element, f64::from(offset), viewport(vw, vh)));
    }
}
