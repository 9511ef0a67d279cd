//! Renders a "Turrell circle": a solid disk of color that fades linearly into
//! a second color at its rim, centered on a flat gray background.
//!
//! Main features:
//!  - JSON configuration (size, inner radius ratio, center and edge colors)
//!  - Closed-form per-pixel color, bit-for-bit reproducible
//!  - PNG output
//!
#![deny(warnings)]

mod color;
mod config;
mod error;
mod geometry;
mod grad;
mod image;
mod render;
mod utils;

pub use color::{ColorError, RGB};
pub use config::{CONFIG_FILE, Config, ConfigError};
pub use error::Error;
pub use geometry::{EPSILON, Point, Scalar};
pub use grad::{BACKGROUND, Paint, TurrellCircle};
pub use image::{Image, ImageOwned, Shape, write_png};
pub use render::{OUTPUT_FILE, Renderer, Timings, encode, render, render_paint, save};
