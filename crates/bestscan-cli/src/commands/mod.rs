//! CLI command implementations.

pub mod cohort;
pub mod mods;
pub mod run;
