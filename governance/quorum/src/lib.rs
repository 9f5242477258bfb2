#![deny(missing_docs)]
//! Quorum override for SPL Governance Proposals
//!
//! Reinterprets the outcome of Proposals finalized by the default governance engine under
//! an absolute minimum of total votes and a super majority of Yes votes. Vote weights are
//! normalized with the governing mint decimals and the digit shift of a voter stake registrar.

pub mod cache;
pub mod error;
pub mod finalizer;
pub mod math;
pub mod normalizer;
pub mod quorum;
pub mod state;
pub mod voter_share;

// Export current sdk types for downstream users building with a different sdk version
pub use solana_program;
