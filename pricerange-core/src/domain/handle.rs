use serde::{Deserialize, Serialize};

/// One of the two draggable control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Handle {
    Low,
    High,
}

impl Handle {
    pub const BOTH: [Handle; 2] = [Handle::Low, Handle::High];

    pub fn other(self) -> Handle {
        match self {
            Handle::Low => Handle::High,
            Handle::High => Handle::Low,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Handle::Low => "low",
            Handle::High => "high",
        }
    }
}
