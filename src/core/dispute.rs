//! Dispute state machine. Active while remainder > 0, resolved at exactly 0.

use alloc::vec::Vec;
use core::fmt;

use super::claimant::Claimant;
use super::distribution::Distribution;
use crate::algebra::{Ratio, RatioError};

/// Resolution failed. Check the variant for why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum DisputeError {
    /// Need at least two claimants to split a concession.
    TooFewClaimants = 1,
    /// Exact arithmetic left the unit interval mid-round. The dispute is
    /// partially updated and must be discarded.
    Arithmetic = 2,
}

impl fmt::Display for DisputeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            DisputeError::TooFewClaimants => "need at least two claimants",
            DisputeError::Arithmetic => "exact arithmetic left the unit interval",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DisputeError {}

impl From<RatioError> for DisputeError {
    #[inline(always)]
    fn from(_: RatioError) -> Self {
        DisputeError::Arithmetic
    }
}

/// Aggregate state for one resolution run: the unallocated remainder plus
/// every claimant, owned exclusively by the driving loop.
///
/// Invariants after every completed round: `partials` equals the count of
/// claimants still flagged partial, and the sum of all `collects` plus
/// `remainder` equals the whole estate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispute {
    remainder: Ratio,
    claimants: Vec<Claimant>,
    partials: usize,
}

impl Dispute {
    /// Builds the table from an ordered claim list. Ids are positional
    /// (0-based). Fewer than two claims is rejected: the per-claimant
    /// split divides by `claimants - 1`.
    pub fn new(claims: &[Ratio]) -> Result<Self, DisputeError> {
        if claims.len() < 2 {
            return Err(DisputeError::TooFewClaimants);
        }

        let mut claimants = Vec::with_capacity(claims.len());
        let mut partials = 0;
        for (id, &claim) in claims.iter().enumerate() {
            let claimant = Claimant::new(id, claim)?;
            if claimant.partial {
                partials += 1;
            }
            claimants.push(claimant);
        }

        Ok(Self {
            remainder: Ratio::ONE,
            claimants,
            partials,
        })
    }

    /// Unallocated portion of the estate. Never increases.
    #[inline(always)]
    pub fn remainder(&self) -> Ratio {
        self.remainder
    }

    /// Count of claimants with outstanding concessions.
    #[inline(always)]
    pub fn partials(&self) -> usize {
        self.partials
    }

    #[inline(always)]
    pub fn claimants(&self) -> &[Claimant] {
        &self.claimants
    }

    /// Terminal once the remainder is exactly zero.
    #[inline(always)]
    pub fn is_resolved(&self) -> bool {
        self.remainder.is_zero()
    }

    /// Minimum outstanding concession over the partial claimants; the first
    /// minimum encountered wins ties (every claimant sharing it reaches
    /// zero in the same round regardless). Sentinel `1/1` when no partials
    /// remain; the driver checks `partials()` first, so the sentinel is
    /// never consumed.
    pub fn lowest_concession(&self) -> Ratio {
        let mut lowest = Ratio::ONE;
        for claimant in &self.claimants {
            if claimant.partial && claimant.concession < lowest {
                lowest = claimant.concession;
            }
        }
        lowest
    }

    /// One concession round. Each partial collects its kept share and
    /// concedes the round's lowest concession; each full collects its
    /// aggregate share; the remainder drops by the round total.
    pub fn distribute_lowest_concession(&mut self) -> Result<(), DisputeError> {
        let lowest = self.lowest_concession();
        let distribution = Distribution::compute(lowest, self.partials, self.claimants.len())?;

        for claimant in &mut self.claimants {
            if claimant.partial {
                claimant.collect(distribution.split_with_fulls)?;
                if claimant.concede(lowest)? {
                    self.partials -= 1;
                }
            } else {
                claimant.collect(distribution.total_for_fulls)?;
            }
        }

        // The round total is the lowest concession restated in distributed
        // form: per_claimant * claimants.
        let round_total = distribution
            .per_claimant
            .mul_int(self.claimants.len() as u64)?;
        self.remainder = self.remainder.sub(round_total)?;

        Ok(())
    }

    /// Terminal round once no partials remain: the rest of the estate
    /// splits evenly across the whole table.
    pub fn split_remainder_equally(&mut self) -> Result<(), DisputeError> {
        let share = self.remainder.div_int(self.claimants.len() as u64)?;
        for claimant in &mut self.claimants {
            claimant.collect(share)?;
        }
        self.remainder = Ratio::ZERO;
        Ok(())
    }
}
