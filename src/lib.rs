//! Contested-garment dispute resolution. Exact rationals, no floats on
//! control paths, conservation verifiable after every round.
//!
//! The estate is always `1/1`. Claims are unit-interval rationals; each
//! claimant's *concession* (`1 - claim`) is redistributed round by round,
//! lowest concession first, until the remainder hits exactly zero.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algebra;
pub mod core;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::algebra::{ConservationWitness, Ratio, RatioError};
    pub use crate::core::{resolve, settle, Award, Claimant, Dispute, DisputeError, Distribution};
}

// Re-export primary types at crate root for convenience.
pub use crate::algebra::{ConservationWitness, Ratio, RatioError};
pub use crate::core::{resolve, settle, Award, Claimant, Dispute, DisputeError, Distribution};
