pub mod checkpoint;
pub mod variant;

pub use checkpoint::{CheckpointModel, ModelSpec};
pub use variant::{variant_from_checkpoint_name, ModelVariant};
