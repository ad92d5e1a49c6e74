//! Core curve-extraction and rendering logic for the video-prediction
//! visualizer.
//!
//! The modules split the reporting pipeline into plot-ready data extraction,
//! checkpoint-backed activation lookup, and bitmap rendering, with the
//! filesystem/CLI plumbing living in the `reporter` driver crate.

pub mod activation;
pub mod curve;
pub mod math;
pub mod model;
pub mod prelude;
pub mod render;

pub use prelude::{ActivationModel, SampleBatch, VizError, VizResult};
