//! Conservation witness. Runtime-verifiable: collected + remainder = whole.

use super::ratio::Ratio;

/// Observed allocation totals for one dispute, plus whether they account
/// for the whole estate. Built from the awards and the remainder; any
/// arithmetic refusal while summing (over-allocation) reads as not holding
/// rather than as a separate failure.
#[derive(Debug, Clone, Copy)]
pub struct ConservationWitness {
    pub total_collected: Ratio,
    pub remainder: Ratio,
    pub holds: bool,
}

impl ConservationWitness {
    pub fn verify<I>(collected: I, remainder: Ratio) -> Self
    where
        I: IntoIterator<Item = Ratio>,
    {
        let mut total = Ratio::ZERO;
        for share in collected {
            match total.add(share) {
                Ok(sum) => total = sum,
                Err(_) => {
                    return Self {
                        total_collected: total,
                        remainder,
                        holds: false,
                    }
                }
            }
        }

        let holds = match total.add(remainder) {
            Ok(whole) => whole.is_one(),
            Err(_) => false,
        };

        Self {
            total_collected: total,
            remainder,
            holds,
        }
    }

    #[inline(always)]
    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}
