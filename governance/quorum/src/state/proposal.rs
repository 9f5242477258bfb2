//! Proposal snapshot and its quorum view

use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};
use solana_program::pubkey::Pubkey;

use crate::{
    math::Decimal,
    quorum::QuorumResult,
    state::enums::{ProposalState, VoteThreshold},
};

/// The part of a governance Proposal account the quorum override reads
/// It's a snapshot taken by the caller and is never mutated by the override
#[derive(Clone, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub struct ProposalSnapshot {
    /// Indicates which Governing Token is used to vote on the Proposal
    pub governing_token_mint: Pubkey,

    /// Proposal state as resolved by the default governance engine
    pub state: ProposalState,

    /// The number of Yes votes in the governing token smallest units
    pub yes_votes_count: u64,

    /// The number of No votes in the governing token smallest units
    pub no_votes_count: u64,

    /// The max vote weight captured when the Proposal was decided
    pub max_vote_weight: Option<u64>,

    /// The vote threshold captured when the Proposal was decided
    pub vote_threshold: Option<VoteThreshold>,
}

impl ProposalSnapshot {
    /// Returns the number of Yes votes
    pub fn get_yes_vote_count(&self) -> u64 {
        self.yes_votes_count
    }

    /// Returns the number of No votes
    pub fn get_no_vote_count(&self) -> u64 {
        self.no_votes_count
    }

    /// Returns the number of all cast votes
    /// u128 because the sum of two u64 counts can exceed u64::MAX
    pub fn get_total_vote_count(&self) -> u128 {
        self.yes_votes_count as u128 + self.no_votes_count as u128
    }

    /// Returns true if the default governance engine closed the vote
    pub fn is_vote_finalized(&self) -> bool {
        self.state.is_vote_finalized()
    }
}

/// Proposal as seen under the quorum rules
/// Produced by ProposalFinalizer, it wraps the snapshot instead of mutating it
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuorumProposal {
    /// The Proposal with the authoritative state
    /// max_vote_weight and vote_threshold are replaced when the override applied
    pub proposal: ProposalSnapshot,

    /// Whether the quorum rules were applied to the Proposal
    pub is_quorum_override_applied: bool,

    /// Digit shift used to normalize the vote counts
    pub digit_shift: i8,

    /// Minimum number of total votes (exclusive) in human units
    pub min_required_votes: Decimal,

    /// Quorum evaluation, None when the Proposal state was passed through
    pub quorum: Option<QuorumResult>,
}

impl QuorumProposal {
    /// Returns the authoritative Proposal state
    pub fn state(&self) -> ProposalState {
        self.proposal.state
    }

    /// Returns the advisory number of votes to display as the threshold
    pub fn max_vote_weight(&self) -> Option<u64> {
        self.proposal.max_vote_weight
    }

    /// Returns the minimum total votes a Proposal must exceed
    pub fn get_minimum_total_votes(&self) -> Decimal {
        self.min_required_votes
    }
}
