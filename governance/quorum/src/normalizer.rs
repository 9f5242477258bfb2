//! Vote weight normalization

use solana_program::program_error::ProgramError;

use crate::math::{Decimal, TryMul};

/// Returns the factor compensating the digit shift of a voting mint
/// Both positive and negative shifts scale up: 10^|digit_shift|
pub fn get_correction_factor(digit_shift: i8) -> Result<Decimal, ProgramError> {
    if digit_shift == 0 {
        return Ok(Decimal::one());
    }

    Decimal::one().try_shifted_by(digit_shift.unsigned_abs() as i32)
}

/// Converts a raw vote weight in the mint smallest units into a comparable decimal magnitude
/// normalized = raw_amount / 10^decimals * 10^|digit_shift|
pub fn normalize_vote_weight(
    raw_amount: u64,
    decimals: u8,
    digit_shift: i8,
) -> Result<Decimal, ProgramError> {
    let human_amount = Decimal::from(raw_amount).try_shifted_by(-(decimals as i32))?;

    human_amount.try_mul(get_correction_factor(digit_shift)?)
}

/// Converts a normalized value back into the mint smallest units, rounding up
/// Only the decimals are reversed, the digit shift correction is not
pub fn to_raw_amount(value: Decimal, decimals: u8) -> Result<u64, ProgramError> {
    value.try_shifted_by(decimals as i32)?.try_ceil_u64()
}
