use crate::curve::extract::CurveExtract;
use crate::prelude::VizResult;
use crate::render::canvas::{render_err, Canvas};
use plotters::prelude::*;

const SERIES_COLORS: [RGBColor; 2] = [RED, BLUE];

/// One curve plus its legend label.
pub struct CurveSeries<'a> {
    pub extract: &'a CurveExtract,
    pub label: &'a str,
}

/// Axis and title text for one chart.
pub struct ChartLabels<'a> {
    pub x: &'a str,
    pub y: &'a str,
    pub title: &'a str,
}

/// Draws the given curves on shared axes. A curve with a non-empty band gets
/// a shaded polygon between its lower and upper bounds, rendered before the
/// line so the line stays on top. The legend appears only when more than one
/// curve is present. With no curves at all the y-range degenerates to
/// `[0, 0]` and an empty chart is produced.
pub fn draw_curves(
    canvas: &Canvas<'_>,
    series: &[CurveSeries<'_>],
    labels: &ChartLabels<'_>,
) -> VizResult<()> {
    let x_max = series
        .iter()
        .map(|s| s.extract.stats.x_max)
        .max()
        .unwrap_or(0) as f64;
    let (y_min, y_max) = if series.is_empty() {
        (0.0, 0.0)
    } else {
        (
            series
                .iter()
                .map(|s| s.extract.stats.y_min)
                .fold(f32::INFINITY, f32::min) as f64,
            series
                .iter()
                .map(|s| s.extract.stats.y_max)
                .fold(f32::NEG_INFINITY, f32::max) as f64,
        )
    };

    let mut chart = ChartBuilder::on(canvas.area())
        .caption(labels.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc(labels.x)
        .y_desc(labels.y)
        .draw()
        .map_err(render_err)?;

    for (slot, curve) in series.iter().enumerate() {
        let color = SERIES_COLORS[slot % SERIES_COLORS.len()];

        if !curve.extract.band.is_empty() {
            let mut outline: Vec<(f64, f64)> = curve
                .extract
                .band
                .iter()
                .enumerate()
                .map(|(i, band)| (i as f64, band.0 as f64))
                .collect();
            outline.extend(
                curve
                    .extract
                    .band
                    .iter()
                    .enumerate()
                    .rev()
                    .map(|(i, band)| (i as f64, band.1 as f64)),
            );
            chart
                .draw_series(std::iter::once(Polygon::new(outline, color.mix(0.2))))
                .map_err(render_err)?;
        }

        chart
            .draw_series(LineSeries::new(
                curve
                    .extract
                    .coord
                    .iter()
                    .map(|&(x, y)| (x as f64, y as f64)),
                color,
            ))
            .map_err(render_err)?
            .label(curve.label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if series.len() > 1 {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .map_err(render_err)?;
    }

    Ok(())
}

/// Draws the training/validation loss chart. Either curve may be absent; the
/// title carries the iteration count, training preferred.
pub fn draw_loss_chart(
    canvas: &Canvas<'_>,
    train: Option<&CurveExtract>,
    valid: Option<&CurveExtract>,
) -> VizResult<()> {
    let iterations = train
        .map(|c| c.coord.len())
        .or_else(|| valid.map(|c| c.coord.len()))
        .unwrap_or(0);
    let title = format!("Network loss (iteration #{})", iterations);

    let mut series = Vec::new();
    if let Some(extract) = train {
        series.push(CurveSeries {
            extract,
            label: "Train",
        });
    }
    if let Some(extract) = valid {
        series.push(CurveSeries {
            extract,
            label: "Test",
        });
    }

    draw_curves(
        canvas,
        &series,
        &ChartLabels {
            x: "Epoch",
            y: "Loss",
            title: &title,
        },
    )
}

/// Draws one plain line through the points the selector keeps: the selector
/// maps each index to `Some((x, y))` or drops it with `None`.
pub fn draw_point_series<F>(
    canvas: &Canvas<'_>,
    labels: &ChartLabels<'_>,
    count: usize,
    mut select: F,
) -> VizResult<()>
where
    F: FnMut(usize) -> Option<(f64, f64)>,
{
    let mut points = Vec::new();
    for i in 0..count {
        if let Some(point) = select(i) {
            points.push(point);
        }
    }

    let x_max = points.iter().map(|p| p.0).fold(0.0f64, f64::max);
    let (y_min, y_max) = if points.is_empty() {
        (0.0, 0.0)
    } else {
        points.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(lo, hi), p| (lo.min(p.1), hi.max(p.1)),
        )
    };

    let mut chart = ChartBuilder::on(canvas.area())
        .caption(labels.title, ("sans-serif", 24).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .x_desc(labels.x)
        .y_desc(labels.y)
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(points.into_iter(), &SERIES_COLORS[0]))
        .map_err(render_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::extract::extract_coordinates;
    use ndarray::arr1;
    use tempfile::tempdir;

    #[test]
    fn single_curve_chart_renders_without_legend() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("train.png");
        let extract =
            extract_coordinates(arr1(&[0.5f32, 0.4, 0.3]).view(), arr1(&[]).view()).unwrap();

        let canvas = Canvas::new(&path, 320, 240).unwrap();
        draw_loss_chart(&canvas, Some(&extract), None).unwrap();
        canvas.present().unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn banded_curves_share_one_chart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("both.png");
        let train = extract_coordinates(
            arr1(&[0.5f32, 0.4]).view(),
            arr1(&[0.125f32, 0.125]).view(),
        )
        .unwrap();
        let valid =
            extract_coordinates(arr1(&[0.75f32, 0.5]).view(), arr1(&[]).view()).unwrap();

        let canvas = Canvas::new(&path, 320, 240).unwrap();
        draw_loss_chart(&canvas, Some(&train), Some(&valid)).unwrap();
        canvas.present().unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn no_curves_at_all_still_renders_an_empty_chart() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");

        let canvas = Canvas::new(&path, 320, 240).unwrap();
        draw_curves(
            &canvas,
            &[],
            &ChartLabels {
                x: "Epoch",
                y: "Loss",
                title: "Network loss (iteration #0)",
            },
        )
        .unwrap();
        canvas.present().unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn point_series_drops_filtered_indices() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("filtered.png");
        let values = [0.0f64, 0.5, 0.0, 0.25];

        let canvas = Canvas::new(&path, 320, 240).unwrap();
        draw_point_series(
            &canvas,
            &ChartLabels {
                x: "Epoch",
                y: "Mean",
                title: "Filtered",
            },
            values.len(),
            |i| {
                if values[i] != 0.0 {
                    Some((i as f64, values[i]))
                } else {
                    None
                }
            },
        )
        .unwrap();
        canvas.present().unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
