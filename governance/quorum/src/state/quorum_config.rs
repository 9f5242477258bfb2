//! Quorum override configuration

use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};
use serde_derive::{Deserialize, Serialize};
use solana_program::{msg, program_error::ProgramError};

use crate::{error::QuorumError, state::enums::VoteThreshold};

/// How the additional Yes votes needed to reach the super majority are computed
#[repr(C)]
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    BorshDeserialize,
    BorshSerialize,
    BorshSchema,
    Serialize,
    Deserialize,
)]
pub enum AdditionalVotesStrategy {
    /// Holds the total fixed: ceil(pct / 100 * total) - yes
    /// It undercounts because added Yes votes also grow the total
    Approximate,

    /// Accounts for the total growing with every added vote:
    /// (pct * total - 100 * yes) / (100 - pct)
    Exact,
}

#[allow(clippy::derivable_impls)]
impl Default for AdditionalVotesStrategy {
    fn default() -> Self {
        AdditionalVotesStrategy::Approximate
    }
}

/// Thresholds a finalized Proposal must meet under the quorum rules
#[derive(
    Clone,
    Debug,
    PartialEq,
    Eq,
    BorshDeserialize,
    BorshSerialize,
    BorshSchema,
    Serialize,
    Deserialize,
)]
pub struct QuorumConfig {
    /// Total votes (yes + no) in human units the Proposal must exceed
    pub min_required_votes: u64,

    /// Percentage (0-100) of Yes votes out of all cast votes required to succeed
    pub super_majority_percentage: u8,

    /// Strategy for the advisory additional Yes votes
    #[serde(default)]
    pub additional_votes_strategy: AdditionalVotesStrategy,

    /// Whether a YesVotePercentage threshold captured by the Proposal
    /// takes precedence over super_majority_percentage
    #[serde(default = "default_use_proposal_vote_threshold")]
    pub use_proposal_vote_threshold: bool,
}

fn default_use_proposal_vote_threshold() -> bool {
    true
}

impl Default for QuorumConfig {
    fn default() -> Self {
        Self {
            min_required_votes: Self::DEFAULT_MIN_REQUIRED_VOTES,
            super_majority_percentage: Self::DEFAULT_SUPER_MAJORITY_PERCENTAGE,
            additional_votes_strategy: AdditionalVotesStrategy::Approximate,
            use_proposal_vote_threshold: true,
        }
    }
}

impl QuorumConfig {
    /// Minimum total votes observed for the Helium community mint
    pub const DEFAULT_MIN_REQUIRED_VOTES: u64 = 100_000_000;

    /// Super majority percentage observed for the Helium community mint
    pub const DEFAULT_SUPER_MAJORITY_PERCENTAGE: u8 = 66;

    /// Asserts the config thresholds are within range
    pub fn validate(&self) -> Result<(), ProgramError> {
        assert_valid_super_majority_percentage(self.super_majority_percentage)
    }

    /// Resolves the super majority percentage for a Proposal
    /// A YesVotePercentage threshold captured by the Proposal overrides the configured one
    /// unless use_proposal_vote_threshold is off
    pub fn resolve_super_majority_percentage(
        &self,
        vote_threshold: Option<&VoteThreshold>,
    ) -> Result<u8, ProgramError> {
        let vote_threshold = vote_threshold.filter(|_| self.use_proposal_vote_threshold);

        let super_majority_percentage = match vote_threshold {
            Some(VoteThreshold::YesVotePercentage(percentage)) => *percentage,
            Some(VoteThreshold::QuorumPercentage(percentage)) => {
                msg!("QUORUM-ERROR: {}% quorum threshold can't be overridden", percentage);
                return Err(QuorumError::VoteThresholdTypeNotSupported.into());
            }
            Some(VoteThreshold::Disabled) | None => self.super_majority_percentage,
        };

        assert_valid_super_majority_percentage(super_majority_percentage)?;

        Ok(super_majority_percentage)
    }
}

/// Asserts the percentage is within 1..=100
pub fn assert_valid_super_majority_percentage(
    super_majority_percentage: u8,
) -> Result<(), ProgramError> {
    if super_majority_percentage == 0 || super_majority_percentage > 100 {
        return Err(QuorumError::InvalidSuperMajorityPercentage.into());
    }

    Ok(())
}
