//! Math for preserving precision of normalized vote weights

mod common;
mod decimal;

pub use {common::*, decimal::*};
