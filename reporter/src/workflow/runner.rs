use crate::data::load_sample;
use crate::workflow::config::VisualizeConfig;
use anyhow::{bail, Context};
use log::info;
use std::fs;
use std::path::Path;
use vizcore::activation::{grid_layout, normalize_to_u8};
use vizcore::curve::LossHistory;
use vizcore::math::resize_nearest;
use vizcore::model::{variant_from_checkpoint_name, CheckpointModel, ModelSpec};
use vizcore::render::{draw_activation_grid, draw_loss_chart, draw_point_series, Canvas, ChartLabels};
use vizcore::{ActivationModel, SampleBatch};

const CHART_WIDTH: u32 = 800;
const CHART_HEIGHT: u32 = 600;
const GRID_CELL_PIXELS: u32 = 160;

/// Drives the two fail-fast phases of a visualization run: loss plots always,
/// the activation grid only when a checkpoint is named.
pub struct Runner {
    config: VisualizeConfig,
}

impl Runner {
    pub fn new(config: VisualizeConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> anyhow::Result<()> {
        let model_path = self.config.model_path();
        if !model_path.exists() {
            bail!("model directory {} does not exist", model_path.display());
        }

        let visualization_path = self.config.visualization_path();
        fs::create_dir_all(&visualization_path).with_context(|| {
            format!("creating output directory {}", visualization_path.display())
        })?;

        let history = LossHistory::load(&model_path)
            .with_context(|| format!("loading loss history from {}", model_path.display()))?;
        self.render_loss_plots(&history, &visualization_path)?;

        if let Some(checkpoint) = self.config.checkpoint.clone() {
            self.render_activation_grid(&model_path, &visualization_path, &checkpoint)?;
        }

        Ok(())
    }

    fn render_loss_plots(&self, history: &LossHistory, out_dir: &Path) -> anyhow::Result<()> {
        info!("Plotting the loss curves");
        let iterations = history
            .iteration_count()
            .context("resolving the iteration count")?;
        let train = history.train_extract().context("extracting training curve")?;
        let valid = history.valid_extract().context("extracting validation curve")?;

        let loss_path = out_dir.join(format!("{}-iteration-{}.png", self.config.model, iterations));
        let canvas = Canvas::new(&loss_path, CHART_WIDTH, CHART_HEIGHT)?;
        draw_loss_chart(&canvas, train.as_ref(), valid.as_ref())?;
        canvas.present()?;
        info!("Loss chart written to {}", loss_path.display());

        let values = history
            .preferred_values()
            .context("selecting the curve for the validation chart")?;
        let valid_path = out_dir.join(format!(
            "{}-validation-iteration-{}.png",
            self.config.model, iterations
        ));
        let canvas = Canvas::new(&valid_path, CHART_WIDTH, CHART_HEIGHT)?;
        draw_point_series(
            &canvas,
            &ChartLabels {
                x: "Epoch",
                y: "Mean",
                title: "Training global losses valid",
            },
            values.nrows(),
            |i| {
                let value = values[[i, 0]];
                if value != 0.0 {
                    Some((i as f64, value as f64))
                } else {
                    None
                }
            },
        )?;
        canvas.present()?;
        info!("Validation chart written to {}", valid_path.display());

        Ok(())
    }

    fn render_activation_grid(
        &self,
        model_path: &Path,
        out_dir: &Path,
        checkpoint: &str,
    ) -> anyhow::Result<()> {
        let checkpoint_path = model_path.join(checkpoint);
        if !checkpoint_path.exists() {
            bail!("checkpoint {} does not exist", checkpoint_path.display());
        }

        info!("Loading data sample {}", self.config.data_index);
        let sample = load_sample(&self.config.data_dir, self.config.data_index)
            .context("loading the data sample")?;

        let variant = match self.config.variant {
            Some(variant) => variant,
            None => variant_from_checkpoint_name(checkpoint)
                .context("resolving the model variant from the checkpoint name")?,
        };

        info!(
            "Importing model {}/{} of variant {}",
            self.config.model_dir.display(),
            self.config.model,
            variant
        );
        let spec = ModelSpec {
            variant,
            num_masks: self.config.num_masks,
            use_state: self.config.use_state,
            scheduled_sampling_k: self.config.schedsamp_k,
            context_frames: self.config.context_frames,
        };
        let model = CheckpointModel::load(&checkpoint_path, spec)
            .with_context(|| format!("importing checkpoint {}", checkpoint_path.display()))?;
        info!("Model imported successfully");

        let frames = resize_nearest(
            sample.frames.view(),
            self.config.image_height,
            self.config.image_width,
        )
        .context("resizing the input frames")?;
        let frames = frames.mapv(|value| value / 255.0);
        let batch = SampleBatch {
            frames,
            actions: sample.actions,
            states: sample.states,
        };

        info!(
            "Computing the activation map for layer {}",
            self.config.layer_idx
        );
        let activations = model
            .layer_activation(self.config.layer_idx, &batch)
            .context("computing the layer activation")?;
        let normalized = normalize_to_u8(activations).context("normalizing the activation map")?;

        let channels = normalized.dim().1;
        let layout = grid_layout(channels).context("laying out the activation grid")?;
        let grid_path = out_dir.join(format!(
            "{}-activation-layer-{}.png",
            self.config.model, self.config.layer_idx
        ));
        let canvas = Canvas::new(
            &grid_path,
            layout.columns as u32 * GRID_CELL_PIXELS,
            layout.rows as u32 * GRID_CELL_PIXELS,
        )?;
        draw_activation_grid(&canvas, normalized.view(), 0)?;
        canvas.present()?;
        info!("Activation grid written to {}", grid_path.display());

        Ok(())
    }
}
