pub mod compact;
pub mod model;
pub mod overrides;
pub mod presets;

pub use model::{
    BannerConfig, EffectPosition, IconPosition, OverlayParams, SS_RANGE, ShapeSpec,
};
pub use overrides::Overrides;
pub use presets::PresetLibrary;
