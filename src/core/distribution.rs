//! One round's shares. Pure, recomputed every round, never retained.

use crate::algebra::{Ratio, RatioError};

/// How a single lowest concession splits across the table.
///
/// The conceding claimant's concession is spread evenly over every *other*
/// claimant. Partials keep a `(fulls + 1)`-th of their portion and hand the
/// rest, split evenly, to the fulls; each full receives its own base
/// portion plus one such contribution from every partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    /// The concession being resolved this round.
    pub concession: Ratio,
    /// `concession / (claimants - 1)`.
    pub per_claimant: Ratio,
    /// `per_claimant / (fulls + 1)`, what each partial keeps.
    pub split_with_fulls: Ratio,
    /// `per_claimant + partials * split_with_fulls`, what each full gains.
    /// Zero when no full claimant exists to consume it.
    pub total_for_fulls: Ratio,
}

impl Distribution {
    /// Derives the round's shares from the triggering concession and the
    /// current partial/full split. Requires `partials <= claimants`; a
    /// single-claimant table surfaces as [`RatioError::DivideByZero`]
    /// (guarded upstream by dispute construction).
    pub fn compute(
        concession: Ratio,
        partials: usize,
        claimants: usize,
    ) -> Result<Self, RatioError> {
        debug_assert!(partials <= claimants);
        let fulls = claimants - partials;

        let others = claimants.checked_sub(1).unwrap_or(0);
        let per_claimant = concession.div_int(others as u64)?;
        let split_with_fulls = per_claimant.div_int(fulls as u64 + 1)?;
        // With no fulls at the table there is nobody to pay the aggregate
        // share to; the formula would leave the unit interval, so it is
        // only evaluated when a full claimant exists to consume it.
        let total_for_fulls = if fulls == 0 {
            Ratio::ZERO
        } else {
            per_claimant.add(split_with_fulls.mul_int(partials as u64)?)?
        };

        Ok(Self {
            concession,
            per_claimant,
            split_with_fulls,
            total_for_fulls,
        })
    }
}
