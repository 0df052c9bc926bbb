//! Integration test crate for QuickCut.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on multiple quickcut crates to verify they work together.

#[cfg(test)]
mod export;

#[cfg(test)]
mod playback;

#[cfg(test)]
mod session;
