#![allow(dead_code)]

use solana_program::pubkey::Pubkey;
use spl_governance_quorum::{
    cache::RegistrarCache,
    finalizer::ProposalFinalizer,
    state::{
        enums::ProposalState,
        proposal::ProposalSnapshot,
        quorum_config::QuorumConfig,
        registrar::{MintInfo, Registrar, VotingMintConfig},
    },
    voter_share::VoterVotes,
};

pub mod cookies;

use self::cookies::{ProposalCookie, RealmCookie, RegistrarCookie, VoteRecordCookie};

/// HNT like community mint decimals
pub const COMMUNITY_MINT_DECIMALS: u8 = 8;

pub struct QuorumProgramTest {
    pub finalizer: ProposalFinalizer,
    pub registrar_cache: RegistrarCache,
}

impl QuorumProgramTest {
    pub fn start_new() -> Self {
        Self::start_with_config(QuorumConfig::default())
    }

    pub fn start_with_config(config: QuorumConfig) -> Self {
        Self {
            finalizer: ProposalFinalizer::new(config).unwrap(),
            registrar_cache: RegistrarCache::new(),
        }
    }

    pub fn with_realm(&mut self) -> RealmCookie {
        RealmCookie {
            address: Pubkey::new_unique(),
            community_mint: Pubkey::new_unique(),
            community_mint_info: MintInfo {
                decimals: COMMUNITY_MINT_DECIMALS,
            },
            council_mint: Pubkey::new_unique(),
        }
    }

    pub fn with_registrar(
        &mut self,
        realm_cookie: &RealmCookie,
        digit_shift: i8,
    ) -> RegistrarCookie {
        let address = Pubkey::new_unique();

        let account = Registrar {
            realm: realm_cookie.address,
            realm_governing_token_mint: realm_cookie.community_mint,
            voting_mints: vec![VotingMintConfig {
                mint: realm_cookie.community_mint,
                digit_shift,
            }],
        };

        self.registrar_cache.refresh(&address, account.clone());

        RegistrarCookie { address, account }
    }

    /// Creates a community Proposal with vote counts given in whole tokens
    pub fn with_community_proposal(
        &mut self,
        realm_cookie: &RealmCookie,
        state: ProposalState,
        yes_tokens: u64,
        no_tokens: u64,
    ) -> ProposalCookie {
        let unit = 10u64.pow(realm_cookie.community_mint_info.decimals as u32);

        self.with_proposal(
            realm_cookie.community_mint,
            state,
            yes_tokens * unit,
            no_tokens * unit,
        )
    }

    pub fn with_council_proposal(
        &mut self,
        realm_cookie: &RealmCookie,
        state: ProposalState,
        yes_votes_count: u64,
        no_votes_count: u64,
    ) -> ProposalCookie {
        self.with_proposal(
            realm_cookie.council_mint,
            state,
            yes_votes_count,
            no_votes_count,
        )
    }

    pub fn with_proposal(
        &mut self,
        governing_token_mint: Pubkey,
        state: ProposalState,
        yes_votes_count: u64,
        no_votes_count: u64,
    ) -> ProposalCookie {
        ProposalCookie {
            address: Pubkey::new_unique(),
            account: ProposalSnapshot {
                governing_token_mint,
                state,
                yes_votes_count,
                no_votes_count,
                max_vote_weight: None,
                vote_threshold: None,
            },
        }
    }

    pub fn with_vote_record(
        &mut self,
        realm_cookie: &RealmCookie,
        votes_cast: u64,
    ) -> VoteRecordCookie {
        VoteRecordCookie {
            account: VoterVotes {
                voter: Pubkey::new_unique(),
                votes_cast,
                decimals: realm_cookie.community_mint_info.decimals,
            },
        }
    }
}
