use crate::prelude::{VizError, VizResult};
use ndarray::{Array4, ArrayView1, ArrayView4};

/// Zero-padded stride-1 convolution over a `[batch, channel, height, width]`
/// tensor. Weights are `[out_channel, in_channel, kernel_h, kernel_w]`; the
/// spatial size is preserved.
pub fn conv2d_same(
    input: ArrayView4<'_, f32>,
    weights: ArrayView4<'_, f32>,
    bias: ArrayView1<'_, f32>,
) -> VizResult<Array4<f32>> {
    let (batch, in_channels, height, width) = input.dim();
    let (out_channels, weight_in, kernel_h, kernel_w) = weights.dim();

    if weight_in != in_channels {
        return Err(VizError::InvalidInput(format!(
            "weights expect {} input channels, tensor has {}",
            weight_in, in_channels
        )));
    }
    if bias.len() != out_channels {
        return Err(VizError::InvalidInput(format!(
            "bias length {} does not match {} output channels",
            bias.len(),
            out_channels
        )));
    }
    if kernel_h == 0 || kernel_w == 0 {
        return Err(VizError::InvalidInput("zero-sized kernel".into()));
    }

    let pad_h = kernel_h / 2;
    let pad_w = kernel_w / 2;
    let mut output = Array4::<f32>::zeros((batch, out_channels, height, width));

    for b in 0..batch {
        for oc in 0..out_channels {
            for y in 0..height {
                for x in 0..width {
                    let mut acc = bias[oc];
                    for ic in 0..in_channels {
                        for ky in 0..kernel_h {
                            let sy = match (y + ky).checked_sub(pad_h) {
                                Some(sy) if sy < height => sy,
                                _ => continue,
                            };
                            for kx in 0..kernel_w {
                                let sx = match (x + kx).checked_sub(pad_w) {
                                    Some(sx) if sx < width => sx,
                                    _ => continue,
                                };
                                acc += input[[b, ic, sy, sx]] * weights[[oc, ic, ky, kx]];
                            }
                        }
                    }
                    output[[b, oc, y, x]] = acc;
                }
            }
        }
    }

    Ok(output)
}

pub fn relu_inplace(tensor: &mut Array4<f32>) {
    tensor.mapv_inplace(|value| value.max(0.0));
}
