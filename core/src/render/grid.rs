use crate::activation::grid::grid_layout;
use crate::prelude::{VizError, VizResult};
use crate::render::canvas::{render_err, Canvas};
use ndarray::ArrayView4;
use plotters::prelude::*;

/// Tiles each channel of a normalized activation tensor as a grayscale map,
/// one captioned cell per channel, stretched nearest-neighbour to the cell.
pub fn draw_activation_grid(
    canvas: &Canvas<'_>,
    activations: ArrayView4<'_, u8>,
    batch: usize,
) -> VizResult<()> {
    let (batches, channels, height, width) = activations.dim();
    if batch >= batches {
        return Err(VizError::InvalidInput(format!(
            "batch index {} out of range for {} batches",
            batch, batches
        )));
    }
    if height == 0 || width == 0 {
        return Err(VizError::InvalidInput(
            "activation tensor has empty spatial dimensions".into(),
        ));
    }

    let layout = grid_layout(channels)?;
    let cells = canvas.area().split_evenly((layout.rows, layout.columns));

    for (channel, cell) in cells.into_iter().take(channels).enumerate() {
        let caption = format!("Filter: {}", channel);
        let cell = cell
            .titled(&caption, ("sans-serif", 12))
            .map_err(render_err)?;
        let (cell_w, cell_h) = cell.dim_in_pixel();
        if cell_w == 0 || cell_h == 0 {
            continue;
        }

        for y in 0..height {
            let y0 = (y as f64 * cell_h as f64 / height as f64) as i32;
            let y1 = ((y + 1) as f64 * cell_h as f64 / height as f64) as i32;
            for x in 0..width {
                let x0 = (x as f64 * cell_w as f64 / width as f64) as i32;
                let x1 = ((x + 1) as f64 * cell_w as f64 / width as f64) as i32;
                let value = activations[[batch, channel, y, x]];
                let color = RGBColor(value, value, value);
                cell.draw(&Rectangle::new([(x0, y0), (x1, y1)], color.filled()))
                    .map_err(render_err)?;
            }
        }
    }

    Ok(())
}
