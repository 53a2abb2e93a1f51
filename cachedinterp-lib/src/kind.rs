use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InterpolateError;

/// Kind of interpolation rule applied between knots.
///
/// The kind fixes the shape of the coefficient table and of the cached
/// offset-power table, so it is resolved once at construction rather than
/// re-checked in the evaluate path.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Nearest,
    Linear,
    #[default]
    Cubic,
}

impl Kind {
    /// Number of offset-power rows the locator caches for this kind.
    ///
    /// Nearest needs no offsets at all, linear needs `[1, d]`, cubic needs
    /// `[1, d, d^2, d^3]`.
    pub fn power_rows(self) -> usize {
        match self {
            Kind::Nearest => 0,
            Kind::Linear => 2,
            Kind::Cubic => 4,
        }
    }
}

impl FromStr for Kind {
    type Err = InterpolateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nearest" => Ok(Kind::Nearest),
            "linear" => Ok(Kind::Linear),
            "cubic" => Ok(Kind::Cubic),
            _ => Err(InterpolateError::UnknownKind(s.to_string())),
        }
    }
}
