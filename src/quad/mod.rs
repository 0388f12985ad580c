//! The one-shot quad renderer.
//!
//! - [`gl`] -- trait over the WebGL calls the pipeline needs, so the
//!   pipeline can run against a fake context in host tests.
//! - [`matrix`] -- column-major 4x4 matrices (perspective + translation).
//! - [`pipeline`] -- shader/vertex constants and the initialization sequence
//!   that ends in a single triangle-strip draw.

pub mod gl;
pub mod matrix;
pub mod pipeline;

pub use gl::{GlApi, ShaderStage};
pub use matrix::Mat4;
pub use pipeline::{render, RenderError};
