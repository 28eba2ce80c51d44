//! Application core: path classification and related-file derivation.

pub mod classify;
pub mod relate;
