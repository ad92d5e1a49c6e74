pub mod sample;

pub use sample::load_sample;
