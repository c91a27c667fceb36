//! Security primitives
//!
//! - [`random`]: the thread-safe random byte source used for credential and
//!   nonce generation

pub mod random;

pub use random::RandomSource;
