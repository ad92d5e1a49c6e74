pub mod canvas;
pub mod grid;
pub mod losses;

pub use canvas::Canvas;
pub use grid::draw_activation_grid;
pub use losses::{draw_curves, draw_loss_chart, draw_point_series, ChartLabels, CurveSeries};
