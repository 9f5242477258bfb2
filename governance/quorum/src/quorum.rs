//! Quorum evaluation for normalized vote weights

use solana_program::program_error::ProgramError;

use crate::{
    error::QuorumError,
    math::{Decimal, TryAdd, TrySub, U384, WAD},
    state::quorum_config::AdditionalVotesStrategy,
};

/// Outcome of the quorum rules for a set of normalized votes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuorumResult {
    /// Total votes are strictly above the minimum required votes
    pub has_min_required_votes: bool,

    /// Yes votes reached the super majority percentage of all cast votes
    pub has_super_majority: bool,

    /// Sum of normalized Yes and No votes
    pub total_votes: Decimal,

    /// Percentage (0-100) of Yes votes out of all cast votes, truncated to 18 decimals
    pub percentage_yes: Decimal,

    /// Advisory number of Yes votes still needed to reach the super majority
    pub additional_yes_votes_needed: Decimal,
}

impl QuorumResult {
    /// Returns true if the Proposal passes under the quorum rules
    pub fn is_passing(&self) -> bool {
        self.has_min_required_votes && self.has_super_majority
    }
}

/// Evaluates the quorum rules for normalized Yes and No votes
///
/// The minimum is exclusive, a total equal to `min_required_votes` doesn't meet it.
/// When no votes were cast the Yes percentage is 0 and neither condition holds.
pub fn evaluate_quorum(
    yes_votes: Decimal,
    no_votes: Decimal,
    min_required_votes: Decimal,
    super_majority_percentage: u8,
    strategy: AdditionalVotesStrategy,
) -> Result<QuorumResult, ProgramError> {
    if super_majority_percentage > 100 {
        return Err(QuorumError::InvalidSuperMajorityPercentage.into());
    }

    let total_votes = yes_votes.try_add(no_votes)?;

    let has_min_required_votes = total_votes > min_required_votes;
    let percentage_yes = get_percentage_yes(yes_votes, total_votes)?;

    // yes / total >= pct / 100 is compared as yes * 100 >= total * pct to stay exact
    let has_super_majority = if total_votes.is_zero() {
        super_majority_percentage == 0
    } else {
        yes_votes.to_wide() * U384::from(100u64)
            >= total_votes.to_wide() * U384::from(super_majority_percentage)
    };

    let additional_yes_votes_needed = match strategy {
        AdditionalVotesStrategy::Approximate => {
            approximate_additional_votes(yes_votes, total_votes, super_majority_percentage)?
        }
        AdditionalVotesStrategy::Exact => {
            exact_additional_votes(yes_votes, total_votes, super_majority_percentage)?
        }
    };

    Ok(QuorumResult {
        has_min_required_votes,
        has_super_majority,
        total_votes,
        percentage_yes,
        additional_yes_votes_needed,
    })
}

/// Returns the percentage of Yes votes out of all votes or 0 when no votes were cast
pub fn get_percentage_yes(
    yes_votes: Decimal,
    total_votes: Decimal,
) -> Result<Decimal, ProgramError> {
    if total_votes.is_zero() {
        return Ok(Decimal::zero());
    }

    let scaled_percentage =
        yes_votes.to_wide() * U384::from(100u64) * U384::from(WAD) / total_votes.to_wide();

    Decimal::try_from_wide(scaled_percentage)
}

/// Additional Yes votes needed holding the total votes fixed
/// target = ceil(pct / 100 * total), additional = max(0, target - yes)
pub fn approximate_additional_votes(
    yes_votes: Decimal,
    total_votes: Decimal,
    super_majority_percentage: u8,
) -> Result<Decimal, ProgramError> {
    // The target is rounded up to a whole vote from the exact product
    let unit = U384::from(100u64) * U384::from(WAD);
    let required = total_votes.to_wide() * U384::from(super_majority_percentage);
    let target_units = (required + unit - U384::one()) / unit;

    let target_votes = Decimal::try_from_wide(target_units * U384::from(WAD))?;

    if target_votes <= yes_votes {
        return Ok(Decimal::zero());
    }

    target_votes.try_sub(yes_votes)
}

/// Additional Yes votes needed given each added Yes vote also grows the total
/// additional = max(0, (pct * total - 100 * yes) / (100 - pct)), rounded up
///
/// A 100% threshold can't be reached by adding Yes votes once a No vote exists,
/// the approximate figure is returned instead.
pub fn exact_additional_votes(
    yes_votes: Decimal,
    total_votes: Decimal,
    super_majority_percentage: u8,
) -> Result<Decimal, ProgramError> {
    let required = total_votes.to_wide() * U384::from(super_majority_percentage);
    let current = yes_votes.to_wide() * U384::from(100u64);

    if current >= required {
        return Ok(Decimal::zero());
    }

    if super_majority_percentage >= 100 {
        return approximate_additional_votes(yes_votes, total_votes, super_majority_percentage);
    }

    let remaining = U384::from(100 - super_majority_percentage);

    Decimal::try_from_wide((required - current + remaining - U384::one()) / remaining)
}

#[cfg(test)]
mod test {
    use {super::*, proptest::prelude::*};

    fn votes(amount: u64) -> Decimal {
        Decimal::from(amount)
    }

    fn evaluate(yes: u64, no: u64) -> QuorumResult {
        evaluate_quorum(
            votes(yes),
            votes(no),
            votes(100_000_000),
            66,
            AdditionalVotesStrategy::Approximate,
        )
        .unwrap()
    }

    #[test]
    fn test_evaluate_without_votes() {
        let result = evaluate(0, 0);

        assert_eq!(result.percentage_yes, Decimal::zero());
        assert!(!result.has_min_required_votes);
        assert!(!result.has_super_majority);
        assert_eq!(result.additional_yes_votes_needed, Decimal::zero());
    }

    #[test]
    fn test_evaluate_below_min_required_votes() {
        let result = evaluate(70_000_000, 20_000_000);

        assert_eq!(result.total_votes, votes(90_000_000));
        assert!(!result.has_min_required_votes);
        assert!(result.has_super_majority);
        assert!(!result.is_passing());
    }

    #[test]
    fn test_evaluate_above_min_required_votes_with_super_majority() {
        let result = evaluate(80_000_001, 20_000_000);

        assert_eq!(result.total_votes, votes(100_000_001));
        assert!(result.has_min_required_votes);
        assert!(result.has_super_majority);
        assert!(result.is_passing());
        // 80,000,001 / 100,000,001 = 80.0000002%
        assert!(result.percentage_yes > Decimal::from(80u64));
        assert!(result.percentage_yes < Decimal::from_scaled_val(80_000_001_000_000_000_000));
        assert_eq!(result.additional_yes_votes_needed, Decimal::zero());
    }

    #[test]
    fn test_evaluate_exactly_min_required_votes() {
        let result = evaluate(60_000_000, 40_000_000);

        assert!(!result.has_min_required_votes);
        assert!(!result.has_super_majority);
        assert_eq!(result.percentage_yes, Decimal::from(60u64));
        // ceil(0.66 * 100M) - 60M
        assert_eq!(result.additional_yes_votes_needed, votes(6_000_000));
    }

    #[test]
    fn test_evaluate_exact_threshold_is_super_majority() {
        let result = evaluate_quorum(
            votes(66),
            votes(34),
            votes(0),
            66,
            AdditionalVotesStrategy::Approximate,
        )
        .unwrap();

        assert!(result.has_super_majority);
        assert_eq!(result.percentage_yes, Decimal::from(66u64));
    }

    #[test]
    fn test_evaluate_with_invalid_percentage_error() {
        let err = evaluate_quorum(
            votes(1),
            votes(1),
            votes(0),
            101,
            AdditionalVotesStrategy::Approximate,
        )
        .err()
        .unwrap();

        assert_eq!(err, QuorumError::InvalidSuperMajorityPercentage.into());
    }

    #[test]
    fn test_approximate_additional_votes_rounds_target_up() {
        // 0.66 * 10 = 6.6 -> 7
        let additional = approximate_additional_votes(votes(3), votes(10), 66).unwrap();

        assert_eq!(additional, votes(4));
    }

    #[test]
    fn test_exact_additional_votes() {
        // (66 * 100 - 100 * 60) / 34
        let additional = exact_additional_votes(votes(60), votes(100), 66).unwrap();

        // 17.647058823529411764705.. rounded up at the 18th decimal place
        assert_eq!(additional, Decimal::from_scaled_val(17_647_058_823_529_411_765));

        // Adding the exact amount reaches the super majority
        let result = evaluate_quorum(
            votes(60).try_add(additional).unwrap(),
            votes(40),
            votes(0),
            66,
            AdditionalVotesStrategy::Exact,
        )
        .unwrap();
        assert!(result.has_super_majority);
        assert_eq!(result.additional_yes_votes_needed, Decimal::zero());
    }

    #[test]
    fn test_exact_additional_votes_exceeds_approximation() {
        let approximate = approximate_additional_votes(votes(60), votes(100), 66).unwrap();
        let exact = exact_additional_votes(votes(60), votes(100), 66).unwrap();

        assert!(exact > approximate);
    }

    #[test]
    fn test_exact_additional_votes_with_unanimity_threshold() {
        // Falls back to ceil(1.0 * 101) - 100 once a No vote exists
        assert_eq!(
            exact_additional_votes(votes(100), votes(101), 100).unwrap(),
            votes(1)
        );

        // Nothing to add when the votes are already unanimous
        assert_eq!(
            exact_additional_votes(votes(100), votes(100), 100).unwrap(),
            Decimal::zero()
        );
    }

    #[test]
    fn test_additional_votes_for_smallest_vote_weight() {
        // Arrange
        // A single raw unit of an 18 decimals mint
        let no_votes = Decimal::from_scaled_val(1);

        for strategy in [AdditionalVotesStrategy::Approximate, AdditionalVotesStrategy::Exact] {
            // Act
            let result =
                evaluate_quorum(Decimal::zero(), no_votes, votes(0), 66, strategy).unwrap();

            // Assert
            assert!(!result.has_super_majority);
            assert!(result.additional_yes_votes_needed > Decimal::zero());
        }

        // ceil(0.66 * 10^-18) is a whole vote
        assert_eq!(
            approximate_additional_votes(Decimal::zero(), no_votes, 66).unwrap(),
            Decimal::one()
        );
    }

    #[test]
    fn test_evaluate_full_u64_vote_weight_with_digit_shift() {
        // u64::MAX votes shifted by 4 digits
        let yes_votes = votes(u64::MAX).try_shifted_by(4).unwrap();
        let no_votes = votes(u64::MAX).try_shifted_by(3).unwrap();

        let result = evaluate_quorum(
            yes_votes,
            no_votes,
            votes(100_000_000),
            66,
            AdditionalVotesStrategy::Exact,
        )
        .unwrap();

        // 10 / 11 of all votes
        assert!(result.is_passing());
        assert_eq!(
            result.percentage_yes,
            Decimal::from_scaled_val(90_909_090_909_090_909_090)
        );
        assert_eq!(result.additional_yes_votes_needed, Decimal::zero());
    }

    proptest! {
        #[test]
        fn test_super_majority_monotonic_in_yes_votes(
            yes_votes in 0..=u64::MAX / 2,
            extra_yes_votes in 0..=u64::MAX / 2,
            no_votes in 0..=u64::MAX,
            super_majority_percentage in 1..=100u8,
        ) {
            let lower = evaluate_quorum(
                votes(yes_votes),
                votes(no_votes),
                votes(0),
                super_majority_percentage,
                AdditionalVotesStrategy::Approximate,
            )
            .unwrap();
            let higher = evaluate_quorum(
                votes(yes_votes + extra_yes_votes),
                votes(no_votes),
                votes(0),
                super_majority_percentage,
                AdditionalVotesStrategy::Approximate,
            )
            .unwrap();

            assert!(!lower.has_super_majority || higher.has_super_majority);
        }

        #[test]
        fn test_additional_votes_zero_with_super_majority(
            yes_votes in 0..=u64::MAX / 2,
            no_votes in 0..=u64::MAX / 2,
            super_majority_percentage in 1..=100u8,
        ) {
            for strategy in [AdditionalVotesStrategy::Approximate, AdditionalVotesStrategy::Exact] {
                let result = evaluate_quorum(
                    votes(yes_votes),
                    votes(no_votes),
                    votes(0),
                    super_majority_percentage,
                    strategy,
                )
                .unwrap();

                if result.has_super_majority || result.total_votes.is_zero() {
                    assert_eq!(result.additional_yes_votes_needed, Decimal::zero());
                } else {
                    assert!(result.additional_yes_votes_needed > Decimal::zero());
                }
            }
        }
    }
}
