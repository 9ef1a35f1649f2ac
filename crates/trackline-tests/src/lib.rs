//! Integration test crate for Trackline.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the core, timeline and gesture crates to verify they work
//! together the way a UI layer drives them.

#[cfg(test)]
mod timeline;

#[cfg(test)]
mod gestures;
