//! avl-forest-util - test-data generation for avl-forest.
//!
//! Provides a seeded [`Fuzzer`] so that randomized tree matrices can replay
//! a failing sequence from its printed seed.

pub mod fuzzer;

pub use fuzzer::{Fuzzer, Op};
