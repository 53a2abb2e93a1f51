use std::fmt;

#[derive(Debug)]
pub enum InterpolateError {
    UnknownKind(String),
    LengthMismatch { knots: usize, values: usize },
    TooFewKnots { got: usize, need: usize },
    KnotsNotIncreasing { index: usize },
}

pub type Result<T> = std::result::Result<T, InterpolateError>;

impl fmt::Display for InterpolateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKind(kind) => write!(f, "unknown interpolation kind: {kind}"),
            Self::LengthMismatch { knots, values } => {
                write!(f, "{values} values for {knots} knots")
            }
            Self::TooFewKnots { got, need } => {
                write!(f, "need at least {need} knots, got {got}")
            }
            Self::KnotsNotIncreasing { index } => {
                write!(f, "knots must be strictly increasing at index {index}")
            }
        }
    }
}

impl std::error::Error for InterpolateError {}
