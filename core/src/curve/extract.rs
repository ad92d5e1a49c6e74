use crate::prelude::{VizError, VizResult};
use ndarray::ArrayView1;

/// Plot-ready view of one scalar curve: dense integer x positions, the
/// optional uncertainty band, and the min/max summary used for axis scaling.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveExtract {
    pub coord: Vec<(usize, f32)>,
    /// `(lower, upper)` per point; empty when no matching std was supplied.
    pub band: Vec<(f32, f32)>,
    pub stats: CurveStats,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveStats {
    pub x_min: usize,
    pub x_max: usize,
    pub y_min: f32,
    pub y_max: f32,
}

/// Turns a scalar series into plot coordinates. X values come from the array
/// index, never from a stored step counter. The band is populated only when
/// `std` matches `data` element for element in length; any other length
/// silently yields an empty band.
pub fn extract_coordinates(
    data: ArrayView1<'_, f32>,
    std: ArrayView1<'_, f32>,
) -> VizResult<CurveExtract> {
    if data.is_empty() {
        return Err(VizError::EmptyCurve(
            "cannot extract coordinates from an empty series".into(),
        ));
    }

    let y_min = data.iter().copied().fold(f32::INFINITY, f32::min);
    let y_max = data.iter().copied().fold(f32::NEG_INFINITY, f32::max);

    let with_band = std.len() == data.len();
    let mut coord = Vec::with_capacity(data.len());
    let mut band = Vec::with_capacity(if with_band { data.len() } else { 0 });
    for (i, &value) in data.iter().enumerate() {
        if with_band {
            band.push((value - std[i], value + std[i]));
        }
        coord.push((i, value));
    }

    let stats = CurveStats {
        x_min: 0,
        x_max: coord.len(),
        y_min,
        y_max,
    };
    Ok(CurveExtract { coord, band, stats })
}
