//! State enumerations

use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};

/// What state a Proposal is in
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub enum ProposalState {
    /// Draft - Proposal enters Draft state when it's created
    Draft,

    /// SigningOff - The Proposal is being signed off by Signatories
    SigningOff,

    /// Taking votes
    Voting,

    /// Voting ended with success
    Succeeded,

    /// Voting on Proposal succeeded and now instructions are being executed
    Executing,

    /// Completed
    Completed,

    /// Cancelled
    Cancelled,

    /// Defeated
    Defeated,

    /// Same as Executing but indicates some instructions failed to execute
    ExecutingWithErrors,

    /// The Proposal was vetoed
    Vetoed,
}

#[allow(clippy::derivable_impls)]
impl Default for ProposalState {
    fn default() -> Self {
        ProposalState::Draft
    }
}

impl ProposalState {
    /// Returns true if the default governance engine already closed the vote
    pub fn is_vote_finalized(&self) -> bool {
        match self {
            ProposalState::Succeeded
            | ProposalState::Executing
            | ProposalState::Completed
            | ProposalState::Defeated
            | ProposalState::ExecutingWithErrors
            | ProposalState::Vetoed => true,
            ProposalState::Draft
            | ProposalState::SigningOff
            | ProposalState::Voting
            | ProposalState::Cancelled => false,
        }
    }

    /// Returns true if the quorum override is allowed to replace the state
    /// Only a finalized Succeeded or Defeated outcome is reinterpreted
    pub fn can_override_outcome(&self) -> bool {
        self.is_vote_finalized()
            && matches!(self, ProposalState::Succeeded | ProposalState::Defeated)
    }
}

/// The type of the vote threshold captured by a Proposal
#[repr(C)]
#[derive(Clone, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub enum VoteThreshold {
    /// Voting threshold of Yes votes in % required to tip the vote (Approval Quorum)
    /// It's the percentage of tokens out of the entire pool of governance tokens eligible to vote
    YesVotePercentage(u8),

    /// Voting threshold of total votes in % required to tip the vote
    /// Note: Not supported by the quorum override
    QuorumPercentage(u8),

    /// Disabled vote threshold indicates the given voting population can't cast votes
    Disabled,
}
