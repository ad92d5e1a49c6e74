use crate::math::conv::{conv2d_same, relu_inplace};
use crate::model::variant::ModelVariant;
use crate::prelude::{ActivationModel, SampleBatch, VizError, VizResult};
use log::info;
use ndarray::{Array1, Array4};
use ndarray_npy::NpzReader;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Construction parameters for the predictive model collaborator, mirroring
/// what the training pipeline was configured with.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSpec {
    pub variant: ModelVariant,
    pub num_masks: usize,
    pub use_state: bool,
    pub scheduled_sampling_k: f64,
    pub context_frames: usize,
}

#[derive(Debug)]
struct ConvLayer {
    weights: Array4<f32>,
    bias: Array1<f32>,
}

/// Convolutional encoder parameters restored from a serialized checkpoint.
/// Only the encoder stack is materialized; visualizing one layer's activation
/// never needs the motion-transformation head.
#[derive(Debug)]
pub struct CheckpointModel {
    spec: ModelSpec,
    layers: Vec<ConvLayer>,
}

impl CheckpointModel {
    /// Restores the encoder weights `enc<i>/W` and biases `enc<i>/b` from the
    /// checkpoint archive. Any serializer prefix ahead of the layer name is
    /// tolerated. Layers load in index order until the numbering stops.
    pub fn load(path: &Path, spec: ModelSpec) -> VizResult<Self> {
        let file = File::open(path)?;
        let mut npz = NpzReader::new(file)?;
        let names = npz.names()?;

        let mut layers = Vec::new();
        for idx in 0.. {
            let weight_key = match find_param(&names, idx, "W") {
                Some(key) => key,
                None => break,
            };
            let bias_key = find_param(&names, idx, "b").ok_or_else(|| {
                VizError::MissingParameter(format!("checkpoint has enc{}/W but no enc{}/b", idx, idx))
            })?;
            let weights: Array4<f32> = npz.by_name(&weight_key)?;
            let bias: Array1<f32> = npz.by_name(&bias_key)?;
            layers.push(ConvLayer { weights, bias });
        }

        if layers.is_empty() {
            return Err(VizError::MissingParameter(
                "checkpoint contains no enc<i>/W convolution parameters".into(),
            ));
        }

        info!(
            "restored {} encoder layers from {} ({} variant)",
            layers.len(),
            path.display(),
            spec.variant
        );
        Ok(Self { spec, layers })
    }

    pub fn spec(&self) -> &ModelSpec {
        &self.spec
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl ActivationModel for CheckpointModel {
    /// Runs the encoder chain up to `layer_idx`, ReLU between layers, and
    /// returns the requested layer's pre-activation map. The frame axis of
    /// the input acts as the batch axis.
    fn layer_activation(&self, layer_idx: usize, input: &SampleBatch) -> VizResult<Array4<f32>> {
        if layer_idx >= self.layers.len() {
            return Err(VizError::InvalidInput(format!(
                "layer index {} out of range, checkpoint has {} encoder layers",
                layer_idx,
                self.layers.len()
            )));
        }
        if input.frames.is_empty() {
            return Err(VizError::InvalidInput("input batch has no frames".into()));
        }

        let mut current = input.frames.to_owned();
        for (idx, layer) in self.layers.iter().take(layer_idx + 1).enumerate() {
            let mut output = conv2d_same(current.view(), layer.weights.view(), layer.bias.view())?;
            if idx < layer_idx {
                relu_inplace(&mut output);
            }
            current = output;
        }
        Ok(current)
    }
}

fn find_param(names: &[String], idx: usize, which: &str) -> Option<String> {
    let suffix = format!("enc{}/{}", idx, which);
    names
        .iter()
        .find(|name| name.trim_end_matches(".npy").ends_with(&suffix))
        .cloned()
}
