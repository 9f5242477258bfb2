//! Proposal outcome override under the quorum rules

use solana_program::{msg, program_error::ProgramError, pubkey::Pubkey};

use crate::{
    math::{Decimal, TryAdd},
    normalizer::{normalize_vote_weight, to_raw_amount},
    quorum::evaluate_quorum,
    state::{
        enums::{ProposalState, VoteThreshold},
        proposal::{ProposalSnapshot, QuorumProposal},
        quorum_config::QuorumConfig,
        registrar::{get_digit_shift, MintInfo, Registrar},
    },
};

/// Reinterprets Proposals finalized by the default governance engine
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposalFinalizer {
    config: QuorumConfig,
}

impl ProposalFinalizer {
    /// Creates a finalizer for the given thresholds
    pub fn new(config: QuorumConfig) -> Result<Self, ProgramError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the thresholds the finalizer applies
    pub fn config(&self) -> &QuorumConfig {
        &self.config
    }

    /// Resolves the authoritative state of the Proposal
    ///
    /// Only a Succeeded or Defeated outcome of a finalized vote is replaced, any other state
    /// is passed through. The returned view is built from scratch and the snapshot is left
    /// untouched, so a failed evaluation never applies a partial override.
    pub fn finalize(
        &self,
        proposal: &ProposalSnapshot,
        mint_info: &MintInfo,
        digit_shift: i8,
    ) -> Result<QuorumProposal, ProgramError> {
        if !proposal.state.can_override_outcome() {
            return Ok(self.pass_through(proposal, digit_shift));
        }

        let min_required_votes = Decimal::from(self.config.min_required_votes);

        let super_majority_percentage = self
            .config
            .resolve_super_majority_percentage(proposal.vote_threshold.as_ref())?;

        let yes_votes = normalize_vote_weight(
            proposal.get_yes_vote_count(),
            mint_info.decimals,
            digit_shift,
        )?;
        let no_votes = normalize_vote_weight(
            proposal.get_no_vote_count(),
            mint_info.decimals,
            digit_shift,
        )?;

        let quorum = evaluate_quorum(
            yes_votes,
            no_votes,
            min_required_votes,
            super_majority_percentage,
            self.config.additional_votes_strategy,
        )?;

        let state = if quorum.is_passing() {
            ProposalState::Succeeded
        } else {
            ProposalState::Defeated
        };

        // Display only: the digit shift isn't reversed and the value saturates at u64::MAX
        let max_vote_weight = to_raw_amount(
            yes_votes.try_add(quorum.additional_yes_votes_needed)?,
            mint_info.decimals,
        )
        .unwrap_or(u64::MAX);

        if state != proposal.state {
            msg!(
                "QUORUM-OVERRIDE: mint {} {:?} -> {:?} (total votes {}, yes {}%)",
                proposal.governing_token_mint,
                proposal.state,
                state,
                quorum.total_votes,
                quorum.percentage_yes
            );
        }

        Ok(QuorumProposal {
            proposal: ProposalSnapshot {
                state,
                max_vote_weight: Some(max_vote_weight),
                vote_threshold: Some(VoteThreshold::YesVotePercentage(super_majority_percentage)),
                ..proposal.clone()
            },
            is_quorum_override_applied: true,
            digit_shift,
            min_required_votes,
            quorum: Some(quorum),
        })
    }

    /// Resolves the authoritative state of all Proposals of a Realm
    ///
    /// The quorum rules apply to Proposals voted with the community mint only,
    /// Proposals of other governing mints (council) keep the default outcome.
    /// Fails as a whole if any Proposal fails.
    pub fn finalize_realm_proposals(
        &self,
        community_mint: &Pubkey,
        community_mint_info: &MintInfo,
        registrar: Option<&Registrar>,
        proposals: &[ProposalSnapshot],
    ) -> Result<Vec<QuorumProposal>, ProgramError> {
        let digit_shift = get_digit_shift(registrar, community_mint);

        proposals
            .iter()
            .map(|proposal| {
                if proposal.governing_token_mint == *community_mint {
                    self.finalize(proposal, community_mint_info, digit_shift)
                } else {
                    Ok(self.pass_through(proposal, 0))
                }
            })
            .collect()
    }

    fn pass_through(&self, proposal: &ProposalSnapshot, digit_shift: i8) -> QuorumProposal {
        QuorumProposal {
            proposal: proposal.clone(),
            is_quorum_override_applied: false,
            digit_shift,
            min_required_votes: Decimal::from(self.config.min_required_votes),
            quorum: None,
        }
    }
}
