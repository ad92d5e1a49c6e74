use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use vizcore::model::ModelVariant;
use workflow::config::VisualizeConfig;
use workflow::runner::Runner;

mod data;
mod workflow;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Offline visualization driver for video-prediction training runs"
)]
struct Args {
    /// Model identifier, also the run directory name under --model-dir
    model: String,
    /// Convolution layer index for the activation map
    #[arg(long, default_value_t = 0)]
    layer_idx: usize,
    /// Checkpoint file name inside the run directory; enables the activation phase
    #[arg(long)]
    checkpoint: Option<String>,
    /// Index of the data sample used for the activation map
    #[arg(long, default_value_t = 0)]
    data_index: usize,
    /// Directory containing one subdirectory per training run
    #[arg(long, default_value = "models")]
    model_dir: PathBuf,
    /// Directory the rendered reports are written under
    #[arg(long, default_value = "reports")]
    output_dir: PathBuf,
    /// Directory containing preprocessed data samples
    #[arg(long, default_value = "data/processed/push_testnovel")]
    data_dir: PathBuf,
    /// Number of future frames the model was trained to predict
    #[arg(long, default_value_t = 8)]
    time_step: usize,
    /// Explicit architecture variant, overriding the checkpoint-name contract
    #[arg(long)]
    variant: Option<ModelVariant>,
    /// Scheduled-sampling k parameter the run was trained with, -1 for none
    #[arg(long, default_value_t = 900.0)]
    schedsamp_k: f64,
    /// Number of real frames fed before prediction starts
    #[arg(long, default_value_t = 2)]
    context_frames: usize,
    /// Whether the model conditions on the state and action vectors
    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    use_state: bool,
    /// Number of transformation masks, 1 for DNA, usually 10 for CDNA and STP
    #[arg(long, default_value_t = 10)]
    num_masks: usize,
    /// Height of one predicted frame
    #[arg(long, default_value_t = 64)]
    image_height: usize,
    /// Width of one predicted frame
    #[arg(long, default_value_t = 64)]
    image_width: usize,
    /// Load the option set from a YAML file instead of individual flags
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> VisualizeConfig {
        VisualizeConfig {
            model: self.model,
            layer_idx: self.layer_idx,
            checkpoint: self.checkpoint,
            data_index: self.data_index,
            model_dir: self.model_dir,
            output_dir: self.output_dir,
            data_dir: self.data_dir,
            time_step: self.time_step,
            variant: self.variant,
            schedsamp_k: self.schedsamp_k,
            context_frames: self.context_frames,
            use_state: self.use_state,
            num_masks: self.num_masks,
            image_height: self.image_height,
            image_width: self.image_width,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config.clone() {
        let mut config = VisualizeConfig::load(&path)
            .with_context(|| format!("loading config {}", path.display()))?;
        config.model = args.model;
        config
    } else {
        args.into_config()
    };

    Runner::new(config).execute()
}
