//! Per-claimant state. Mutates only as a side effect of a dispute round.

use crate::algebra::{Ratio, RatioError};

/// One party to the dispute.
///
/// `concession` is the portion of the estate the claimant does not contest
/// (`1 - claim`); `collects` is the running allocation, monotonically
/// non-decreasing across rounds. A claimant is *partial* while any
/// concession is outstanding and *full* once it reaches exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Claimant {
    /// Positional identity, assigned at construction, stable for life.
    pub id: usize,
    /// The fraction of the estate this party asserts is owed to them.
    pub claim: Ratio,
    /// Outstanding unconceded portion, consumed round by round.
    pub concession: Ratio,
    /// Running allocation. Never decreases.
    pub collects: Ratio,
    /// True while `concession > 0`.
    pub partial: bool,
}

impl Claimant {
    /// Derives the initial state from a validated unit-interval claim.
    pub fn new(id: usize, claim: Ratio) -> Result<Self, RatioError> {
        let concession = Ratio::ONE.sub(claim)?;
        Ok(Self {
            id,
            claim,
            concession,
            collects: Ratio::ZERO,
            partial: !concession.is_zero(),
        })
    }

    /// Adds a resolved share to the running allocation.
    pub(crate) fn collect(&mut self, share: Ratio) -> Result<(), RatioError> {
        self.collects = self.collects.add(share)?;
        Ok(())
    }

    /// Consumes `amount` of the outstanding concession. Returns true when
    /// the concession reached exactly zero and the claimant flipped to full.
    pub(crate) fn concede(&mut self, amount: Ratio) -> Result<bool, RatioError> {
        self.concession = self.concession.sub(amount)?;
        if self.concession.is_zero() {
            self.partial = false;
            return Ok(true);
        }
        Ok(false)
    }
}
