pub mod gradient;
pub mod mask;
pub mod rounded_rect;

pub use gradient::{GradientKind, auto_adjust_endpoints, fill_gradient};
pub use mask::build_mask;
pub use rounded_rect::{draw_asym_rounded_rect, rounded_rect_path, rounded_ring_path};
