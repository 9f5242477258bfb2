//! Voter shares for the top voters leaderboard

use solana_program::{program_error::ProgramError, pubkey::Pubkey};

use crate::{
    error::QuorumError,
    math::Decimal,
    state::{
        proposal::ProposalSnapshot,
        registrar::{get_digit_shift, Registrar},
    },
};

/// Votes cast by a single voter on a Proposal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoterVotes {
    /// The voter's wallet
    pub voter: Pubkey,

    /// Votes cast in the governing token smallest units
    pub votes_cast: u64,

    /// Decimals of the governing token mint
    pub decimals: u8,
}

/// A voter's share of all votes cast on a Proposal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VoterShare {
    /// The voter's wallet
    pub voter: Pubkey,

    /// Votes cast in the governing token smallest units
    pub votes_cast: u64,

    /// Decimals adjusted by the digit shift, used to display votes_cast
    pub decimals: i16,

    /// Percentage (0-100) of all cast votes, truncated to 18 decimals
    pub vote_percentage: Decimal,
}

/// Computes each voter's share of total_votes
///
/// Voters keep their order. The percentage is computed over the raw integers
/// so large on-chain amounts don't lose precision.
pub fn get_voter_shares(
    voters: &[VoterVotes],
    total_votes: u128,
    digit_shift: i8,
) -> Result<Vec<VoterShare>, ProgramError> {
    if total_votes == 0 {
        return Err(QuorumError::NoVotesCast.into());
    }

    voters
        .iter()
        .map(|voter_votes| {
            Ok(VoterShare {
                voter: voter_votes.voter,
                votes_cast: voter_votes.votes_cast,
                decimals: voter_votes.decimals as i16 + digit_shift as i16,
                vote_percentage: Decimal::try_from_fraction(
                    voter_votes.votes_cast as u128 * 100,
                    total_votes,
                )?,
            })
        })
        .collect()
}

/// Computes the top voters shares of a Proposal
/// The digit shift comes from the registrar, a Realm without registrar keeps the mint decimals
pub fn heliumise_top_voters(
    voters: &[VoterVotes],
    registrar: Option<&Registrar>,
    proposal: &ProposalSnapshot,
) -> Result<Vec<VoterShare>, ProgramError> {
    if voters.is_empty() {
        return Ok(vec![]);
    }

    let digit_shift = get_digit_shift(registrar, &proposal.governing_token_mint);

    get_voter_shares(voters, proposal.get_total_vote_count(), digit_shift)
}
