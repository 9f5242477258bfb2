use solana_program::pubkey::Pubkey;
use spl_governance_quorum::state::{
    proposal::ProposalSnapshot,
    registrar::{MintInfo, Registrar},
};
use spl_governance_quorum::voter_share::VoterVotes;

#[derive(Debug)]
pub struct RealmCookie {
    pub address: Pubkey,

    pub community_mint: Pubkey,

    pub community_mint_info: MintInfo,

    pub council_mint: Pubkey,
}

#[derive(Debug)]
pub struct RegistrarCookie {
    pub address: Pubkey,
    pub account: Registrar,
}

#[derive(Debug)]
pub struct ProposalCookie {
    pub address: Pubkey,
    pub account: ProposalSnapshot,
}

#[derive(Debug)]
pub struct VoteRecordCookie {
    pub account: VoterVotes,
}
