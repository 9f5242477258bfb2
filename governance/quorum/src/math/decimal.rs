//! Math for preserving precision of vote weights which are limited
//! by the SPL Token program to be at most u64::MAX.
//!
//! Decimals are internally scaled by a WAD (10^18) to preserve
//! precision up to 18 decimal places. The underlying representation is a
//! u192 which leaves enough head room to scale a full u64 token amount
//! by a digit shift correction. Products of two decimals and ratios are
//! computed on a u384 intermediate so they never overflow before the
//! final narrowing.

#![allow(clippy::assign_op_pattern)]
#![allow(clippy::ptr_offset_with_cast)]
#![allow(clippy::manual_range_contains)]

use crate::{error::QuorumError, math::common::*};
use solana_program::program_error::ProgramError;
use std::{convert::TryFrom, fmt};
use uint::construct_uint;

// U192 with 192 bits consisting of 3 x 64-bit words
construct_uint! {
    pub struct U192(3);
}

// U384 with 384 bits consisting of 6 x 64-bit words
construct_uint! {
    pub struct U384(6);
}

/// Returns 10^exponent or None if it doesn't fit into U192
fn ten_pow(exponent: u32) -> Option<U192> {
    U192::from(10u64).checked_pow(U192::from(exponent))
}

/// Large decimal values, precise to 18 digits
#[derive(Clone, Copy, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct Decimal(pub U192);

impl Decimal {
    /// One
    pub fn one() -> Self {
        Self(Self::wad())
    }

    /// Zero
    pub fn zero() -> Self {
        Self(U192::zero())
    }

    fn wad() -> U192 {
        U192::from(WAD)
    }

    /// Create decimal from scaled value
    pub fn from_scaled_val(scaled_val: u128) -> Self {
        Self(U192::from(scaled_val))
    }

    /// Returns the scaled value widened to 384 bits
    pub fn to_wide(&self) -> U384 {
        let U192(ref words) = self.0;
        U384([words[0], words[1], words[2], 0, 0, 0])
    }

    /// Create decimal from a 384 bit scaled value if it fits into 192 bits
    pub fn try_from_wide(scaled_val: U384) -> Result<Self, ProgramError> {
        if scaled_val.bits() > 192 {
            return Err(QuorumError::MathOverflow.into());
        }

        let U384(ref words) = scaled_val;
        Ok(Self(U192([words[0], words[1], words[2]])))
    }

    /// Create decimal from the exact ratio numerator / denominator
    /// The result is truncated at the 18th decimal place
    pub fn try_from_fraction(numerator: u128, denominator: u128) -> Result<Self, ProgramError> {
        Ok(Self(
            U192::from(numerator)
                .checked_mul(Self::wad())
                .ok_or(QuorumError::MathOverflow)?
                .checked_div(U192::from(denominator))
                .ok_or(QuorumError::MathOverflow)?,
        ))
    }

    /// Returns true if the value is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplies the value by 10^exponent
    /// A negative exponent divides and truncates anything below 10^-18
    pub fn try_shifted_by(self, exponent: i32) -> Result<Self, ProgramError> {
        if exponent >= 0 {
            let factor = ten_pow(exponent as u32).ok_or(QuorumError::MathOverflow)?;
            Ok(Self(
                self.0
                    .checked_mul(factor)
                    .ok_or(QuorumError::MathOverflow)?,
            ))
        } else {
            match ten_pow(exponent.unsigned_abs()) {
                Some(factor) => Ok(Self(
                    self.0
                        .checked_div(factor)
                        .ok_or(QuorumError::MathOverflow)?,
                )),
                // The divisor is larger than any representable value
                None => Ok(Self::zero()),
            }
        }
    }

    /// Ceiling scaled decimal to u64
    pub fn try_ceil_u64(&self) -> Result<u64, ProgramError> {
        let ceil_val = self.try_ceil()?.0 / Self::wad();
        Ok(u64::try_from(ceil_val).map_err(|_| QuorumError::MathOverflow)?)
    }

    /// Ceiling scaled decimal to the next whole unit
    pub fn try_ceil(&self) -> Result<Self, ProgramError> {
        let wad = U384::from(WAD);
        let units = (self.to_wide() + wad - U384::one()) / wad;

        Self::try_from_wide(units * wad)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut scaled_val = self.0.to_string();
        if scaled_val.len() <= SCALE {
            scaled_val.insert_str(0, &vec!["0"; SCALE - scaled_val.len()].join(""));
            scaled_val.insert_str(0, "0.");
        } else {
            scaled_val.insert(scaled_val.len() - SCALE, '.');
        }
        f.write_str(&scaled_val)
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl From<u64> for Decimal {
    fn from(val: u64) -> Self {
        Self(Self::wad() * U192::from(val))
    }
}

impl TryAdd for Decimal {
    fn try_add(self, rhs: Self) -> Result<Self, ProgramError> {
        Ok(Self(
            self.0
                .checked_add(rhs.0)
                .ok_or(QuorumError::MathOverflow)?,
        ))
    }
}

impl TrySub for Decimal {
    fn try_sub(self, rhs: Self) -> Result<Self, ProgramError> {
        Ok(Self(
            self.0
                .checked_sub(rhs.0)
                .ok_or(QuorumError::MathOverflow)?,
        ))
    }
}

impl TryMul<Decimal> for Decimal {
    fn try_mul(self, rhs: Self) -> Result<Self, ProgramError> {
        // Both operands fit into 192 bits so their product can't overflow 384 bits
        Self::try_from_wide(self.to_wide() * rhs.to_wide() / U384::from(WAD))
    }
}
