use crate::prelude::{VizError, VizResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Motion-transformation variants of the predictive model. Exactly one is in
/// effect per checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ModelVariant {
    Cdna,
    Dna,
    Stp,
}

impl FromStr for ModelVariant {
    type Err = VizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CDNA" => Ok(Self::Cdna),
            "DNA" => Ok(Self::Dna),
            "STP" => Ok(Self::Stp),
            other => Err(VizError::CheckpointName(format!(
                "unknown model variant {}, expected CDNA, DNA, or STP",
                other
            ))),
        }
    }
}

impl fmt::Display for ModelVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Cdna => "CDNA",
            Self::Dna => "DNA",
            Self::Stp => "STP",
        };
        f.write_str(name)
    }
}

/// Checkpoint files follow the `<project>-<run>-<variant>-<suffix>` naming
/// contract: exactly four dash-separated segments, third names the variant.
/// Anything else requires an explicit variant override from the caller.
pub fn variant_from_checkpoint_name(name: &str) -> VizResult<ModelVariant> {
    let segments: Vec<&str> = name.split('-').collect();
    if segments.len() != 4 {
        return Err(VizError::CheckpointName(format!(
            "checkpoint {} does not match <project>-<run>-<variant>-<suffix>, \
             pass the variant explicitly",
            name
        )));
    }
    segments[2].parse()
}
