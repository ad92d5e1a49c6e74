use crate::curve::extract::{extract_coordinates, CurveExtract};
use crate::prelude::{VizError, VizResult};
use log::debug;
use ndarray::{s, Array2};
use ndarray_npy::read_npy;
use std::path::Path;

pub const TRAINING_LOSSES_FILE: &str = "training-global_losses.npy";
pub const VALIDATION_LOSSES_FILE: &str = "training-global_losses_valid.npy";

/// Loss curves persisted by the training pipeline under the model directory.
/// Either file may be absent. Rows are recorded entries; column 0 holds the
/// scalar to plot and column 1 its standard deviation.
#[derive(Debug, Default)]
pub struct LossHistory {
    pub train: Option<Array2<f32>>,
    pub valid: Option<Array2<f32>>,
}

impl LossHistory {
    pub fn load(model_path: &Path) -> VizResult<Self> {
        let train = read_optional(&model_path.join(TRAINING_LOSSES_FILE))?;
        let valid = read_optional(&model_path.join(VALIDATION_LOSSES_FILE))?;
        Ok(Self { train, valid })
    }

    /// Number of recorded entries, training preferred. Both curves being
    /// absent or empty is a precondition failure for the loss-plot phase.
    pub fn iteration_count(&self) -> VizResult<usize> {
        let train_rows = self.train.as_ref().map(|a| a.nrows()).unwrap_or(0);
        if train_rows > 0 {
            return Ok(train_rows);
        }
        let valid_rows = self.valid.as_ref().map(|a| a.nrows()).unwrap_or(0);
        if valid_rows > 0 {
            return Ok(valid_rows);
        }
        Err(VizError::EmptyCurve(
            "no loss history entries found in either loss file".into(),
        ))
    }

    pub fn train_extract(&self) -> VizResult<Option<CurveExtract>> {
        optional_extract(self.train.as_ref())
    }

    pub fn valid_extract(&self) -> VizResult<Option<CurveExtract>> {
        optional_extract(self.valid.as_ref())
    }

    /// The scalar column of whichever curve has entries, training preferred.
    pub fn preferred_values(&self) -> VizResult<Array2<f32>> {
        let values = match (&self.train, &self.valid) {
            (Some(train), _) if train.nrows() > 0 => train.clone(),
            (_, Some(valid)) if valid.nrows() > 0 => valid.clone(),
            _ => {
                return Err(VizError::EmptyCurve(
                    "no loss history entries found in either loss file".into(),
                ))
            }
        };
        if values.ncols() == 0 {
            return Err(VizError::InvalidInput(
                "loss array has no value column".into(),
            ));
        }
        Ok(values)
    }
}

/// Splits a loss array into its scalar column and std column and extracts
/// plot coordinates from them. A single-column array gets no band; an array
/// with no columns at all has nothing to plot and is rejected.
pub fn curve_extract(array: &Array2<f32>) -> VizResult<CurveExtract> {
    if array.ncols() == 0 {
        return Err(VizError::InvalidInput(
            "loss array has no value column".into(),
        ));
    }
    let values = array.slice(s![.., 0]);
    if array.ncols() >= 2 {
        extract_coordinates(values, array.slice(s![.., 1]))
    } else {
        extract_coordinates(values, array.slice(s![..0, 0]))
    }
}

fn optional_extract(array: Option<&Array2<f32>>) -> VizResult<Option<CurveExtract>> {
    match array {
        Some(array) if array.nrows() > 0 => Ok(Some(curve_extract(array)?)),
        _ => Ok(None),
    }
}

fn read_optional(path: &Path) -> VizResult<Option<Array2<f32>>> {
    if !path.exists() {
        debug!("loss file {} not present, skipping", path.display());
        return Ok(None);
    }
    let array: Array2<f32> = read_npy(path)?;
    Ok(Some(array))
}
