//! pixmorph: elementary transforms and morph animation for plain-text pixel maps.
//!
//! # Overview
//!
//! 1. **Decode**: a text pixel map (`P3`-style header plus `r g b` triples) becomes a
//!    [`PixelBuffer`] via [`read_ppm`] / [`parse_ppm`].
//! 2. **Transform**: pure functions return fresh buffers: [`flip_horizontal`],
//!    [`flip_vertical`], [`grayscale`], [`scale`], [`blend_buffers`].
//! 3. **Morph**: [`morph`] blends source into target over `n` steps and hands each
//!    frame to a [`Renderer`].
//!
//! Buffers are never mutated in place. Every failure is an explicit [`PixmorphError`];
//! in particular an out-of-range blend alpha is an error, never a default colour.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod config;
mod effects;
mod foundation;
mod render;

pub use animation::morph::{
    Morph, MorphFrame, MorphOpts, MorphState, MorphStats, morph, morph_alpha,
};
pub use assets::ppm::{parse_ppm, read_ppm};
pub use config::MorphConfig;
pub use effects::composite::{blend_buffers, blend_pixel};
pub use effects::transform::{flip_horizontal, flip_vertical, grayscale, luminance, scale};
pub use foundation::buffer::PixelBuffer;
pub use foundation::core::{Dims, Rgb};
pub use foundation::error::{PixmorphError, PixmorphResult};
pub use render::backend::Renderer;
pub use render::png::PngSequenceRenderer;
pub use render::text::TextRenderer;
