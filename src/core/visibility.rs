use super::geometry::GeometryCache;
use super::types::{ElementRect, ViewportSnapshot};

/// Returns whether `rect` falls inside the viewport extended by `offset` pixels.
///
/// This is a cheap approximate intersection test. Horizontally the element must
/// not lie entirely left of the viewport (by more than its own width) nor end
/// past the right margin. Vertically either the top edge or the bottom edge
/// has to land inside the extended band. Boundary values are inclusive.
#[must_use]
pub fn rect_in_load_zone(rect: ElementRect, offset: f64, viewport: ViewportSnapshot) -> bool {
    let bottom_line = viewport.height + offset;

    let horizontal = rect.left >= -rect.width && rect.right <= viewport.width + offset;
    let top_inside = rect.top >= -rect.height && rect.top <= bottom_line;
    let bottom_inside = rect.bottom <= bottom_line && rect.bottom >= -offset;

    horizontal && (top_inside || bottom_inside)
}

/// Load-zone test against a memoized rectangle.
///
/// `read_rect` is only invoked when `cache` was measured against a different
/// viewport snapshot (or never measured); the fresh rectangle is stored
/// together with `viewport`.
pub fn is_in_load_zone<F>(
    cache: &mut GeometryCache,
    offset: f64,
    viewport: ViewportSnapshot,
    read_rect: F,
) -> bool
where
    F: FnOnce() -> ElementRect,
{
    let lookup = cache.resolve(viewport, read_rect);
    rect_in_load_zone(lookup.rect, offset, viewport)
}
