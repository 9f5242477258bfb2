//! Error types

use num_derive::FromPrimitive;
use solana_program::{
    decode_error::DecodeError,
    msg,
    program_error::{PrintProgramError, ProgramError},
};
use thiserror::Error;

/// Errors that may be returned by the quorum override engine
#[derive(Clone, Debug, Eq, Error, FromPrimitive, PartialEq)]
pub enum QuorumError {
    /// Math operation overflow
    #[error("Math operation overflow")]
    MathOverflow = 700, // 700

    /// Super majority percentage must be within 1..=100
    #[error("Invalid super majority percentage")]
    InvalidSuperMajorityPercentage, // 701

    /// Vote shares can't be computed when no votes were cast
    #[error("No votes cast")]
    NoVotesCast, // 702

    /// Only YesVotePercentage thresholds can override the super majority
    #[error("Vote threshold type not supported")]
    VoteThresholdTypeNotSupported, // 703
}

impl PrintProgramError for QuorumError {
    fn print<E>(&self) {
        msg!("QUORUM-ERROR: {}", &self.to_string());
    }
}

impl From<QuorumError> for ProgramError {
    fn from(e: QuorumError) -> Self {
        ProgramError::Custom(e as u32)
    }
}

impl<T> DecodeError<T> for QuorumError {
    fn type_of() -> &'static str {
        "Quorum Error"
    }
}
