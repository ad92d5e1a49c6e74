use crate::prelude::{VizError, VizResult};
use ndarray::Array4;

/// Rescales an activation tensor into `[0, 255]` and casts to `u8` with
/// truncation. The divisor is the maximum taken *after* min-subtraction, so
/// the ordering of the two passes is load-bearing: `[2, 4, 6]` becomes
/// `[0, 127, 255]`.
pub fn normalize_to_u8(mut activations: Array4<f32>) -> VizResult<Array4<u8>> {
    let min = activations
        .iter()
        .copied()
        .fold(f32::INFINITY, f32::min);
    if !min.is_finite() {
        return Err(VizError::InvalidInput(
            "cannot normalize an empty activation tensor".into(),
        ));
    }

    activations.mapv_inplace(|value| value - min);
    let max = activations
        .iter()
        .copied()
        .fold(f32::NEG_INFINITY, f32::max);
    if max == 0.0 {
        return Err(VizError::DegenerateRange(
            "activation tensor has no dynamic range, all values are equal".into(),
        ));
    }

    Ok(activations.mapv(|value| (value / max * 255.0) as u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    fn tensor(values: &[f32]) -> Array4<f32> {
        Array4::from_shape_vec((1, 1, 1, values.len()), values.to_vec()).unwrap()
    }

    #[test]
    fn divides_by_the_post_subtraction_max() {
        let normalized = normalize_to_u8(tensor(&[2.0, 4.0, 6.0])).unwrap();
        let values: Vec<u8> = normalized.iter().copied().collect();
        assert_eq!(values, vec![0, 127, 255]);
    }

    #[test]
    fn constant_tensor_is_rejected() {
        let err = normalize_to_u8(tensor(&[3.0, 3.0, 3.0])).unwrap_err();
        assert!(matches!(err, VizError::DegenerateRange(_)));
    }

    #[test]
    fn empty_tensor_is_rejected() {
        let empty = Array4::<f32>::zeros((0, 0, 0, 0));
        let err = normalize_to_u8(empty).unwrap_err();
        assert!(matches!(err, VizError::InvalidInput(_)));
    }

    #[test]
    fn negative_values_shift_to_zero() {
        let normalized = normalize_to_u8(tensor(&[-1.0, 0.0, 1.0])).unwrap();
        let values: Vec<u8> = normalized.iter().copied().collect();
        assert_eq!(values, vec![0, 127, 255]);
    }
}
