use crate::prelude::{VizError, VizResult};
use ndarray::{Array4, ArrayView4};

/// Nearest-neighbour spatial resize of a `[batch, channel, height, width]`
/// tensor to `target_h` x `target_w`.
pub fn resize_nearest(
    input: ArrayView4<'_, f32>,
    target_h: usize,
    target_w: usize,
) -> VizResult<Array4<f32>> {
    let (batch, channels, height, width) = input.dim();
    if height == 0 || width == 0 {
        return Err(VizError::InvalidInput(
            "cannot resize a tensor with empty spatial dimensions".into(),
        ));
    }
    if target_h == 0 || target_w == 0 {
        return Err(VizError::InvalidInput(
            "target dimensions must be non-zero".into(),
        ));
    }

    let mut output = Array4::<f32>::zeros((batch, channels, target_h, target_w));
    for b in 0..batch {
        for c in 0..channels {
            for y in 0..target_h {
                let sy = (y * height / target_h).min(height - 1);
                for x in 0..target_w {
                    let sx = (x * width / target_w).min(width - 1);
                    output[[b, c, y, x]] = input[[b, c, sy, sx]];
                }
            }
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array4;

    #[test]
    fn doubling_repeats_each_source_pixel() {
        let input =
            Array4::from_shape_vec((1, 1, 2, 2), vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
        let output = resize_nearest(input.view(), 4, 4).unwrap();
        assert_eq!(output[[0, 0, 0, 0]], 1.0);
        assert_eq!(output[[0, 0, 0, 1]], 1.0);
        assert_eq!(output[[0, 0, 0, 2]], 2.0);
        assert_eq!(output[[0, 0, 3, 3]], 4.0);
    }

    #[test]
    fn shrinking_samples_the_nearest_pixel() {
        let input = Array4::from_shape_vec(
            (1, 1, 4, 4),
            (0..16).map(|v| v as f32).collect(),
        )
        .unwrap();
        let output = resize_nearest(input.view(), 2, 2).unwrap();
        assert_eq!(output[[0, 0, 0, 0]], 0.0);
        assert_eq!(output[[0, 0, 1, 1]], 10.0);
    }

    #[test]
    fn identity_resize_is_lossless() {
        let input =
            Array4::from_shape_vec((1, 2, 2, 2), (0..8).map(|v| v as f32).collect()).unwrap();
        let output = resize_nearest(input.view(), 2, 2).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn zero_target_is_rejected() {
        let input = Array4::<f32>::zeros((1, 1, 2, 2));
        assert!(resize_nearest(input.view(), 0, 2).is_err());
    }
}
