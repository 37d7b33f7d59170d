//! Exact arithmetic. Unit-interval rationals and the conservation witness.

pub mod conservation;
pub mod ratio;

pub use conservation::ConservationWitness;
pub use ratio::{Ratio, RatioError};
