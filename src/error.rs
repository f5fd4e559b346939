use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("lower bound {lower} is above upper bound {upper}")]
    InvertedRange { lower: u32, upper: u32 },

    /// The value (or the limit derived from it) needs more than six digits.
    #[error("{value} does not fit in a six digit password")]
    TooWide { value: u32 },

    /// Carry ran off the most significant digit. Only reachable if the limit was never hit.
    #[error("carry overflowed past the first digit after {candidate}")]
    CarryOverflow { candidate: String },
}
