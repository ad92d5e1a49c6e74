use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use vizcore::model::ModelVariant;

/// Resolved options for one visualization run, either assembled from CLI
/// flags or loaded from a YAML file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizeConfig {
    /// Model identifier, also the run directory name under `model_dir`.
    pub model: String,
    pub layer_idx: usize,
    /// Checkpoint file name inside the run directory; enables the activation
    /// phase when set.
    pub checkpoint: Option<String>,
    pub data_index: usize,
    pub model_dir: PathBuf,
    pub output_dir: PathBuf,
    pub data_dir: PathBuf,
    /// Prediction horizon the run was trained with. Accepted for parity with
    /// the training CLI; the visualizer itself never reads it.
    pub time_step: usize,
    /// Explicit architecture variant, overriding the checkpoint-name contract.
    pub variant: Option<ModelVariant>,
    pub schedsamp_k: f64,
    pub context_frames: usize,
    pub use_state: bool,
    pub num_masks: usize,
    pub image_height: usize,
    pub image_width: usize,
}

impl Default for VisualizeConfig {
    fn default() -> Self {
        Self {
            model: String::new(),
            layer_idx: 0,
            checkpoint: None,
            data_index: 0,
            model_dir: PathBuf::from("models"),
            output_dir: PathBuf::from("reports"),
            data_dir: PathBuf::from("data/processed/push_testnovel"),
            time_step: 8,
            variant: None,
            schedsamp_k: 900.0,
            context_frames: 2,
            use_state: true,
            num_masks: 10,
            image_height: 64,
            image_width: 64,
        }
    }
}

impl VisualizeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path_ref = path.as_ref();
        let contents = fs::read_to_string(path_ref)
            .with_context(|| format!("reading visualize config {}", path_ref.display()))?;
        let config: VisualizeConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("parsing visualize config {}", path_ref.display()))?;
        Ok(config)
    }

    /// `<model_dir>/<model>`: where the loss files and checkpoints live.
    pub fn model_path(&self) -> PathBuf {
        self.model_dir.join(&self.model)
    }

    /// `<output_dir>/<model>`: where the rendered images are written.
    pub fn visualization_path(&self) -> PathBuf {
        self.output_dir.join(&self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn defaults_match_the_documented_cli_surface() {
        let config = VisualizeConfig::default();
        assert_eq!(config.model_dir, PathBuf::from("models"));
        assert_eq!(config.num_masks, 10);
        assert_eq!(config.schedsamp_k, 900.0);
        assert!(config.use_state);
    }

    #[test]
    fn config_load_reads_yaml() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(b"model: push-run-CDNA-01\nlayer_idx: 2\nvariant: CDNA\n")
            .unwrap();
        let path = temp.into_temp_path();
        let config = VisualizeConfig::load(&path).unwrap();
        assert_eq!(config.model, "push-run-CDNA-01");
        assert_eq!(config.layer_idx, 2);
        assert_eq!(config.variant, Some(ModelVariant::Cdna));
        assert_eq!(config.image_height, 64);
    }

    #[test]
    fn paths_are_rooted_under_their_directories() {
        let config = VisualizeConfig {
            model: "run".into(),
            ..Default::default()
        };
        assert_eq!(config.model_path(), PathBuf::from("models/run"));
        assert_eq!(config.visualization_path(), PathBuf::from("reports/run"));
    }
}
