use serde::{Deserialize, Serialize};
use similar::Algorithm;

/// Line diff algorithm, stored in the settings file by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    #[default]
    Myers,
    Patience,
}

impl DiffAlgorithm {
    /// Map to the `similar` algorithm
    #[must_use]
    pub const fn to_similar(self) -> Algorithm {
        match self {
            DiffAlgorithm::Myers => Algorithm::Myers,
            DiffAlgorithm::Patience => Algorithm::Patience,
        }
    }
}

/// Knobs for row computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiffOptions {
    pub algorithm: DiffAlgorithm,
    /// Run the word differ on modification pairs
    pub inline_highlight: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::Myers,
            inline_highlight: true,
        }
    }
}
