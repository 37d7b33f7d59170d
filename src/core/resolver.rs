//! The fixed-point loop. Applies dispute rounds until the estate is gone.

use alloc::vec::Vec;

use super::dispute::{Dispute, DisputeError};
use crate::algebra::Ratio;

/// Settled outcome for one claimant, in input order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub id: usize,
    pub claim: Ratio,
    pub collects: Ratio,
}

/// Drives the dispute to its terminal state: the lowest outstanding
/// concession is resolved while any partial claimant remains, then the
/// remainder splits evenly. Returns the number of rounds taken.
///
/// Terminates because every round strictly shrinks the remainder: either
/// by the (positive) lowest concession restated in distributed form, or by
/// the whole remainder in the final equal split. At most one round per
/// distinct positive concession value, plus the split.
pub fn resolve(dispute: &mut Dispute) -> Result<usize, DisputeError> {
    let mut rounds = 0;
    while !dispute.is_resolved() {
        if dispute.partials() == 0 {
            dispute.split_remainder_equally()?;
        } else {
            dispute.distribute_lowest_concession()?;
        }
        rounds += 1;
    }
    Ok(rounds)
}

/// One-shot convenience: build the table, resolve it, extract the awards.
pub fn settle(claims: &[Ratio]) -> Result<Vec<Award>, DisputeError> {
    let mut dispute = Dispute::new(claims)?;
    resolve(&mut dispute)?;
    Ok(dispute
        .claimants()
        .iter()
        .map(|claimant| Award {
            id: claimant.id,
            claim: claimant.claim,
            collects: claimant.collects,
        })
        .collect())
}
