use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("dimension mismatch: expected a unit of '{expected}', found '{found}'")]
    DimensionMismatch {
        expected: &'static str,
        found: &'static str,
    },

    #[error("unknown unit symbol '{0}'")]
    UnknownUnit(String),

    #[error("prime differentiator sequence exhausted: too many dimensionless pseudo-dimensions declared")]
    PrimesExhausted,
}

impl Error {
    pub(crate) fn mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::DimensionMismatch { expected, found }
    }
}
