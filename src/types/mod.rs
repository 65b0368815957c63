//! Core types for FitGenie.

pub mod generation;
pub mod plan;
pub mod profile;

pub use generation::*;
pub use plan::*;
pub use profile::*;
