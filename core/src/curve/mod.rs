pub mod extract;
pub mod history;
pub mod scale;

pub use extract::{extract_coordinates, CurveExtract, CurveStats};
pub use history::LossHistory;
pub use scale::scale_data;
