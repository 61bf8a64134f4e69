use serde::{Deserialize, Serialize};

/// Aerator technology installed in a pond. Informational only: the power
/// requirement does not depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AerationType {
    #[default]
    Paddlewheel,
    Venturi,
    Diffuser,
    Mixed,
}

impl AerationType {
    pub fn label(&self) -> &'static str {
        match self {
            AerationType::Paddlewheel => "Paddlewheel",
            AerationType::Venturi => "Venturi injector",
            AerationType::Diffuser => "Air diffuser",
            AerationType::Mixed => "Mixed system",
        }
    }
}
