use crate::prelude::{VizError, VizResult};
use ndarray::{Array1, ArrayView1};

/// Linearly maps each value from `[mins, maxs]` into `[low, high]` via
/// `high - ((high - low) * (maxs - x) / (maxs - mins))`. Bounds default to
/// the observed extrema when not supplied. Pure function; the input is left
/// untouched.
pub fn scale_data(
    data: ArrayView1<'_, f32>,
    high: f32,
    low: f32,
    maxs: Option<f32>,
    mins: Option<f32>,
) -> VizResult<Array1<f32>> {
    if data.is_empty() {
        return Err(VizError::EmptyCurve("cannot rescale an empty series".into()));
    }

    let mins = mins.unwrap_or_else(|| data.iter().copied().fold(f32::INFINITY, f32::min));
    let maxs = maxs.unwrap_or_else(|| data.iter().copied().fold(f32::NEG_INFINITY, f32::max));
    let range = maxs - mins;
    if range == 0.0 {
        return Err(VizError::DegenerateRange(format!(
            "cannot rescale a series whose values all equal {}",
            maxs
        )));
    }

    Ok(data.mapv(|value| high - (((high - low) * (maxs - value)) / range)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::arr1;

    #[test]
    fn scales_into_default_unit_range() {
        let data = arr1(&[0.0f32, 5.0, 10.0]);
        let scaled = scale_data(data.view(), 1.0, -1.0, None, None).unwrap();
        assert_eq!(scaled, arr1(&[-1.0, 0.0, 1.0]));
    }

    #[test]
    fn inverse_mapping_recovers_original_values() {
        let data = arr1(&[1.0f32, 2.5, 4.0, 7.5]);
        let forward = scale_data(data.view(), 1.0, -1.0, None, None).unwrap();
        let back = scale_data(forward.view(), 7.5, 1.0, None, None).unwrap();
        for (orig, round) in data.iter().zip(back.iter()) {
            assert!((orig - round).abs() < 1e-5);
        }
    }

    #[test]
    fn explicit_bounds_override_observed_extrema() {
        let data = arr1(&[5.0f32]);
        let scaled = scale_data(data.view(), 1.0, 0.0, Some(10.0), Some(0.0)).unwrap();
        assert_eq!(scaled, arr1(&[0.5]));
    }

    #[test]
    fn constant_series_is_rejected() {
        let data = arr1(&[2.0f32, 2.0, 2.0]);
        let err = scale_data(data.view(), 1.0, -1.0, None, None).unwrap_err();
        assert!(matches!(err, VizError::DegenerateRange(_)));
    }
}
