//! The guts. Claimants, round distributions, the dispute machine, the loop.

pub mod claimant;
pub mod dispute;
pub mod distribution;
pub mod resolver;

pub use claimant::Claimant;
pub use dispute::{Dispute, DisputeError};
pub use distribution::Distribution;
pub use resolver::{resolve, settle, Award};
