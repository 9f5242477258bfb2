//! Voter stake registrar configuration

use borsh::{BorshDeserialize, BorshSchema, BorshSerialize};
use solana_program::pubkey::Pubkey;

/// Governing token mint information
#[derive(Clone, Copy, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub struct MintInfo {
    /// Number of base 10 digits to the right of the decimal place
    pub decimals: u8,
}

/// Exchange rate configuration of a single mint accepted by the registrar
#[derive(Clone, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub struct VotingMintConfig {
    /// Mint of the deposited tokens
    pub mint: Pubkey,

    /// Number of digits to shift native amounts by
    /// It compensates the voting mint accounting diverging from the realm mint decimals
    pub digit_shift: i8,
}

/// Registrar of a voter stake registry plugin for a Realm
#[derive(Clone, Debug, PartialEq, Eq, BorshDeserialize, BorshSerialize, BorshSchema)]
pub struct Registrar {
    /// The Realm the registrar belongs to
    pub realm: Pubkey,

    /// The governing token mint of the Realm
    pub realm_governing_token_mint: Pubkey,

    /// Mints accepted for deposits, the first entry is the primary voting mint
    pub voting_mints: Vec<VotingMintConfig>,
}

impl Registrar {
    /// Returns the digit shift of the primary voting mint or 0 when none is configured
    pub fn digit_shift(&self) -> i8 {
        self.voting_mints
            .first()
            .map(|voting_mint| voting_mint.digit_shift)
            .unwrap_or(0)
    }

    /// Returns the digit shift configured for the given mint
    /// Falls back to the primary voting mint when the mint has no entry
    pub fn digit_shift_for_mint(&self, mint: &Pubkey) -> i8 {
        self.voting_mints
            .iter()
            .find(|voting_mint| voting_mint.mint == *mint)
            .map(|voting_mint| voting_mint.digit_shift)
            .unwrap_or_else(|| self.digit_shift())
    }
}

/// Resolves the digit shift for the given mint from an optional registrar
/// A Realm without registrar doesn't correct its vote weights
pub fn get_digit_shift(registrar: Option<&Registrar>, mint: &Pubkey) -> i8 {
    registrar
        .map(|registrar| registrar.digit_shift_for_mint(mint))
        .unwrap_or(0)
}
