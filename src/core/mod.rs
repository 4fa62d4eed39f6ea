pub mod geometry;
pub mod throttle;
pub mod types;
pub mod visibility;

pub use geometry::{GeometryCache, GeometryLookup};
pub use throttle::Throttle;
pub use types::{
    ElementId, ElementRect, ScrollOffset, Timestamp, ViewportSize, ViewportSnapshot,
};
pub use visibility::{is_in_load_zone, rect_in_load_zone};
