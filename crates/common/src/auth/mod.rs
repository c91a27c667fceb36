//! FauxAPI authentication
//!
//! - [`credential`]: validated key/secret pairs and random generation
//! - [`token`]: signed, time-stamped tokens for the `fauxapi-auth` header

pub mod credential;
pub mod token;

pub use credential::{
    is_valid_key, is_valid_secret, Credential, Secret, DEFAULT_KEY_LENGTH, DEFAULT_SECRET_LENGTH,
    KEY_LENGTH_RANGE, KEY_PREFIX, SECRET_LENGTH_RANGE,
};
pub use token::{compute_digest, SignedToken, TokenSigner, TIMESTAMP_FORMAT};
