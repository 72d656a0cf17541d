pub mod blur;
pub mod composite;
pub mod layer;
pub mod paint;

pub use layer::{Layer, Mask};
pub use paint::{Painter, PlacedGlyph};
