//! Signed authentication tokens
//!
//! Token layout: `key:timestamp:nonce:digest`, where the timestamp is UTC as
//! `yyyyMMddZHHmmss`, the nonce is eight lowercase hex digits and the digest
//! is the lowercase hex SHA-256 of `secret || timestamp || nonce`.
//!
//! Validation compares key and digest only. Timestamp freshness is left to
//! the remote verifier.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};
use tracing::trace;

use super::credential::Credential;
use crate::security::RandomSource;
use crate::validation::ValidationResult;

/// `chrono` format of the timestamp segment; the `Z` is a literal separator
pub const TIMESTAMP_FORMAT: &str = "%Y%m%dZ%H%M%S";

/// Parsed form of a token string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedToken {
    key: String,
    timestamp: String,
    nonce: String,
    digest: String,
}

impl SignedToken {
    /// Split a token string into its four segments
    ///
    /// Returns `None` for anything other than exactly four `:`-separated
    /// parts. The segment contents are not checked here.
    pub fn parse(token: &str) -> Option<Self> {
        let mut parts = token.split(':');
        let key = parts.next()?;
        let timestamp = parts.next()?;
        let nonce = parts.next()?;
        let digest = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        Some(Self {
            key: key.to_string(),
            timestamp: timestamp.to_string(),
            nonce: nonce.to_string(),
            digest: digest.to_string(),
        })
    }

    /// API key segment
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Timestamp segment (`yyyyMMddZHHmmss`)
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Nonce segment
    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    /// Digest segment
    pub fn digest(&self) -> &str {
        &self.digest
    }
}

impl fmt::Display for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.key, self.timestamp, self.nonce, self.digest)
    }
}

/// Lowercase hex SHA-256 of `secret || timestamp || nonce`
pub fn compute_digest(secret: &str, timestamp: &str, nonce: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hasher.update(timestamp.as_bytes());
    hasher.update(nonce.as_bytes());
    hex::encode(hasher.finalize())
}

/// Mints and checks tokens for one credential
///
/// Holds no per-call state; a single signer may be used from many tasks at
/// once. The only shared resource is its [`RandomSource`].
#[derive(Debug, Clone)]
pub struct TokenSigner {
    credential: Credential,
    random: Arc<RandomSource>,
}

impl TokenSigner {
    /// Create a signer from caller-supplied key and secret
    ///
    /// # Errors
    /// Returns a [`ValidationError`](crate::validation::ValidationError)
    /// naming the offending field.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self::from_credential(Credential::new(key, secret)?))
    }

    /// Create a signer with a freshly generated credential
    ///
    /// # Errors
    /// Returns a validation error when a length is out of range.
    pub fn generate(key_length: usize, secret_length: usize) -> ValidationResult<Self> {
        let random = RandomSource::shared();
        let credential = Credential::generate_with(key_length, secret_length, &random)?;
        Ok(Self { credential, random })
    }

    /// Wrap an existing credential, drawing nonces from the process-wide source
    pub fn from_credential(credential: Credential) -> Self {
        Self { credential, random: RandomSource::shared() }
    }

    /// Replace the nonce source
    pub fn with_random_source(mut self, random: Arc<RandomSource>) -> Self {
        self.random = random;
        self
    }

    /// The credential tokens are signed with
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// The API key tokens are issued for
    pub fn key(&self) -> &str {
        self.credential.key()
    }

    /// Mint a token for the current instant
    pub fn generate_token(&self) -> SignedToken {
        self.generate_token_at(Utc::now())
    }

    /// Mint a token stamped with `at`
    pub fn generate_token_at(&self, at: DateTime<Utc>) -> SignedToken {
        let timestamp = at.format(TIMESTAMP_FORMAT).to_string();
        let nonce = format!("{:08x}", self.random.next_u32());
        let digest = compute_digest(self.credential.secret().expose(), &timestamp, &nonce);
        trace!(key = %self.credential.key(), %timestamp, %nonce, "minted token");

        SignedToken { key: self.credential.key().to_string(), timestamp, nonce, digest }
    }

    /// Whether `token` was signed with this signer's credential
    ///
    /// Never fails: malformed input is simply not valid.
    pub fn validate_token(&self, token: &str) -> bool {
        let Some(parsed) = SignedToken::parse(token) else {
            return false;
        };
        if parsed.key != self.credential.key() {
            return false;
        }

        let expected =
            compute_digest(self.credential.secret().expose(), &parsed.timestamp, &parsed.nonce);
        constant_time_eq(expected.as_bytes(), parsed.digest.as_bytes())
    }
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}
