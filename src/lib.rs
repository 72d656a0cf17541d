//! bannerforge renders decorative raster banners from a declarative config.
//!
//! A render runs a fixed sequence of layer stages on a canvas enlarged by the supersampling
//! factor, then resizes once with Lanczos3 to the requested size:
//!
//! - background gradient, pattern, shapes
//! - icon and text
//! - texture, effects, overlay
//! - silhouette clip and border
//!
//! Start with [`BannerConfig`] and [`generate_banner`].
#![forbid(unsafe_code)]

pub mod color;
pub mod config;
pub mod effects;
pub mod foundation;
pub mod geometry;
pub mod layers;
pub mod overlays;
pub mod patterns;
pub mod pipeline;
pub mod raster;
pub mod shapes;
pub mod textures;

pub use crate::color::ColorSpec;
pub use crate::config::{BannerConfig, Overrides, PresetLibrary};
pub use crate::foundation::core::{Canvas, CornerRadii, Rgba8};
pub use crate::foundation::error::{BannerError, BannerResult};
pub use crate::foundation::math::Rng64;
pub use crate::layers::{FontBytes, FontProvider, SystemFonts};
pub use crate::pipeline::{Services, Stage, StageError, generate_banner, render_to_file};
pub use crate::raster::{Layer, Mask};
