pub mod grid;
pub mod normalize;

pub use grid::{grid_layout, GridLayout};
pub use normalize::normalize_to_u8;
