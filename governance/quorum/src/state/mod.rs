//! Quorum override state

pub mod enums;
pub mod proposal;
pub mod quorum_config;
pub mod registrar;
