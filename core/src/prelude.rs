use ndarray::{Array2, Array4};

/// Input bundle for one restricted forward pass: a stack of frames plus the
/// optional action/state conditioning vectors loaded alongside them.
#[derive(Debug, Clone)]
pub struct SampleBatch {
    /// `[frame, channel, height, width]`
    pub frames: Array4<f32>,
    pub actions: Option<Array2<f32>>,
    pub states: Option<Array2<f32>>,
}

/// Common error type for extraction, model, and rendering failures.
#[derive(thiserror::Error, Debug)]
pub enum VizError {
    #[error("empty curve: {0}")]
    EmptyCurve(String),
    #[error("degenerate range: {0}")]
    DegenerateRange(String),
    #[error("checkpoint name: {0}")]
    CheckpointName(String),
    #[error("missing parameter: {0}")]
    MissingParameter(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("render failure: {0}")]
    Render(String),
    #[error("io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("npy read failure: {0}")]
    Npy(#[from] ndarray_npy::ReadNpyError),
    #[error("npz read failure: {0}")]
    Npz(#[from] ndarray_npy::ReadNpzError),
}

pub type VizResult<T> = Result<T, VizError>;

/// Model collaborators expose one layer's activation tensor for an input
/// batch. The model proper (architecture, training) lives outside this crate;
/// this trait is the seam the visualizer draws through.
pub trait ActivationModel {
    /// Returns the `[batch, channel, height, width]` activation map of the
    /// requested layer.
    fn layer_activation(&self, layer_idx: usize, input: &SampleBatch) -> VizResult<Array4<f32>>;
}
