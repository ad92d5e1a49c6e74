pub mod conv;
pub mod resize;

pub use conv::{conv2d_same, relu_inplace};
pub use resize::resize_nearest;
