//! fpsplot - Plot measured FPS against color changes.
//!
//! fpsplot reads a two-column text file of `color_changes fps` samples and
//! renders them as a line-and-marker plot to a PNG image.
//!
//! # Features
//!
//! - Strict two-column parsing with line-numbered errors
//! - Derived `color_lifetime` column (`1 / color_changes`)
//! - Explicit figure/axes model with matplotlib-style format strings
//! - Pure Rust rasterization, no system fonts required
//! - Atomic PNG output
//!
//! # Example
//!
//! ```no_run
//! use fpsplot::config::PlotConfig;
//!
//! let summary = fpsplot::pipeline::run(&PlotConfig::default())?;
//! println!("plotted {} samples to {}", summary.samples, summary.output.display());
//! # Ok::<(), fpsplot::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod plot;
pub mod writer;

pub use error::{PlotError, Result};
