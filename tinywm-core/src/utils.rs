//! Various helpers for the core.
pub mod modmask_lookup;
