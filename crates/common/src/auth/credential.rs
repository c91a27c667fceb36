//! API credentials
//!
//! A [`Credential`] pairs a `PFFA`-prefixed key with an alphanumeric secret.
//! Both are checked once at construction and never change afterwards.

use std::fmt;
use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::security::RandomSource;
use crate::validation::{ValidationError, ValidationResult};

/// Fixed prefix of every API key
pub const KEY_PREFIX: &str = "PFFA";

/// Allowed total key length, prefix included
pub const KEY_LENGTH_RANGE: RangeInclusive<usize> = 12..=40;

/// Allowed secret length
pub const SECRET_LENGTH_RANGE: RangeInclusive<usize> = 40..=128;

/// Key length used when the caller does not choose one
pub const DEFAULT_KEY_LENGTH: usize = 24;
/// Secret length used when the caller does not choose one
pub const DEFAULT_SECRET_LENGTH: usize = 60;

/// Example keys shipped with the device; never accepted as real credentials
const RESERVED_KEYS: [&str; 2] = ["PFFAexample01", "PFFAexample02"];

const ALPHANUMERIC: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^PFFA[A-Za-z0-9]{8,36}$").expect("KEY_PATTERN should compile - this is a bug")
});

static SECRET_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]{40,128}$").expect("SECRET_PATTERN should compile - this is a bug")
});

/// Whether `key` is an acceptable API key
pub fn is_valid_key(key: &str) -> bool {
    KEY_PATTERN.is_match(key) && !RESERVED_KEYS.contains(&key)
}

/// Whether `secret` is an acceptable API secret
pub fn is_valid_secret(secret: &str) -> bool {
    SECRET_PATTERN.is_match(secret)
}

/// API secret that zeroes its memory on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Secret {
    inner: String,
}

impl Secret {
    fn new(inner: String) -> Self {
        Self { inner }
    }

    /// Expose the secret value
    ///
    /// Only for immediate use (digest computation); never store or log it.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the secret is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Secret(***)")
    }
}

/// A validated API key and secret
#[derive(Clone, Debug)]
pub struct Credential {
    key: String,
    secret: Secret,
}

impl Credential {
    /// Build a credential from caller-supplied values
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming `key` and/or `secret` when either
    /// is blank or does not match its pattern.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> ValidationResult<Self> {
        let key = key.into();
        let secret = Secret::new(secret.into());

        let mut errors = ValidationError::new();
        if key.trim().is_empty() {
            errors.add_field_error("key", "cannot be blank");
        } else if !is_valid_key(&key) {
            errors.add_field_error("key", "is not a valid API key");
        }
        if secret.expose().trim().is_empty() {
            errors.add_field_error("secret", "cannot be blank");
        } else if !is_valid_secret(secret.expose()) {
            errors.add_field_error("secret", "is not a valid API secret");
        }

        errors.into_result(Self { key, secret })
    }

    /// Generate a random credential from the process-wide random source
    pub fn generate(key_length: usize, secret_length: usize) -> ValidationResult<Self> {
        Self::generate_with(key_length, secret_length, &RandomSource::shared())
    }

    /// Generate a random credential of the requested lengths
    ///
    /// Draws every byte for key and secret in one call, maps each into the
    /// alphanumeric alphabet and retries with a fresh batch until both
    /// results validate.
    ///
    /// # Errors
    /// Returns a [`ValidationError`] naming `key_length` or `secret_length`
    /// when either lies outside its allowed range.
    pub fn generate_with(
        key_length: usize,
        secret_length: usize,
        random: &RandomSource,
    ) -> ValidationResult<Self> {
        let mut errors = ValidationError::new();
        if !KEY_LENGTH_RANGE.contains(&key_length) {
            errors.add_field_error(
                "key_length",
                format!(
                    "must be between {} and {}",
                    KEY_LENGTH_RANGE.start(),
                    KEY_LENGTH_RANGE.end()
                ),
            );
        }
        if !SECRET_LENGTH_RANGE.contains(&secret_length) {
            errors.add_field_error(
                "secret_length",
                format!(
                    "must be between {} and {}",
                    SECRET_LENGTH_RANGE.start(),
                    SECRET_LENGTH_RANGE.end()
                ),
            );
        }
        errors.into_result(())?;

        let body_length = key_length - KEY_PREFIX.len();
        loop {
            let bytes = Zeroizing::new(random.bytes(body_length + secret_length));
            let (key_bytes, secret_bytes) = bytes.split_at(body_length);

            let key = format!("{KEY_PREFIX}{}", to_alphanumeric(key_bytes));
            let secret = Secret::new(to_alphanumeric(secret_bytes));

            if is_valid_key(&key) && is_valid_secret(secret.expose()) {
                return Ok(Self { key, secret });
            }
            debug!(key_length, secret_length, "generated credential rejected, drawing again");
        }
    }

    /// The API key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The API secret
    pub fn secret(&self) -> &Secret {
        &self.secret
    }
}

fn to_alphanumeric(bytes: &[u8]) -> String {
    bytes.iter().map(|b| ALPHANUMERIC[usize::from(*b) % ALPHANUMERIC.len()] as char).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    const VALID_KEY: &str = "PFFAValidItem1";
    const VALID_SECRET: &str = "0123456789012345678901234567890123456789";

    #[test]
    fn rejects_invalid_keys_naming_the_key() {
        let invalid = [
            "",
            "   ",
            "pffainvaliditem",
            "PFFAexample01",
            "PFFAexample02",
            "PFFA1234",
            "PFFA1234567",
            "PFFA-example99",
            "PFFA0123456789abcdef0123456789abcdef01234",
            "abcdefghijklmnop",
        ];

        for key in invalid {
            let err = Credential::new(key, VALID_SECRET).unwrap_err();
            assert!(err.has_field("key"), "expected key error for {key:?}: {err}");
            assert!(!err.has_field("secret"), "unexpected secret error for {key:?}");
        }
    }

    #[test]
    fn accepts_valid_keys() {
        let valid = [
            "PFFAValidItem1",
            "PFFAexample03",
            "PFFA0123456789abcdef",
            "PFFA0123456789abcdef0123456789abcdef0123",
        ];

        for key in valid {
            let credential = Credential::new(key, VALID_SECRET).unwrap();
            assert_eq!(credential.key(), key);
        }
    }

    #[test]
    fn rejects_invalid_secrets_naming_the_secret() {
        let invalid = [
            String::new(),
            "1234".to_string(),
            "0".repeat(39),
            format!("{}-", "a".repeat(40)),
            "b".repeat(129),
        ];

        for secret in invalid {
            let err = Credential::new(VALID_KEY, secret.as_str()).unwrap_err();
            assert!(err.has_field("secret"), "expected secret error for {secret:?}: {err}");
            assert!(!err.has_field("key"));
        }
    }

    #[test]
    fn accepts_valid_secrets() {
        let valid = [
            "0".repeat(40),
            "Z".repeat(128),
            "01234567890123456789abcdef01234567890123456789ABCDEF".to_string(),
        ];

        for secret in valid {
            let credential = Credential::new(VALID_KEY, secret.as_str()).unwrap();
            assert_eq!(credential.secret().expose(), secret);
        }
    }

    #[test]
    fn reports_both_fields_when_both_are_invalid() {
        let err = Credential::new("PFFA1234", "1234").unwrap_err();
        assert_eq!(err.error_count(), 2);
        assert!(err.has_field("key"));
        assert!(err.has_field("secret"));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let credential = Credential::new(VALID_KEY, VALID_SECRET).unwrap();
        let rendered = format!("{credential:?}");
        assert!(rendered.contains(VALID_KEY));
        assert!(!rendered.contains(VALID_SECRET));
    }

    #[test]
    fn generated_credentials_are_unique_and_valid() {
        let mut keys = HashSet::new();
        let mut secrets = HashSet::new();

        for _ in 0..100 {
            let credential =
                Credential::generate(DEFAULT_KEY_LENGTH, DEFAULT_SECRET_LENGTH).unwrap();
            assert_eq!(credential.key().len(), DEFAULT_KEY_LENGTH);
            assert_eq!(credential.secret().len(), DEFAULT_SECRET_LENGTH);
            assert!(is_valid_key(credential.key()));
            assert!(is_valid_secret(credential.secret().expose()));

            keys.insert(credential.key().to_string());
            secrets.insert(credential.secret().expose().to_string());
        }

        assert_eq!(keys.len(), 100);
        assert_eq!(secrets.len(), 100);
    }

    #[test]
    fn generates_boundary_lengths() {
        let shortest = Credential::generate(12, 40).unwrap();
        assert_eq!(shortest.key().len(), 12);
        assert_eq!(shortest.secret().len(), 40);

        let longest = Credential::generate(40, 128).unwrap();
        assert_eq!(longest.key().len(), 40);
        assert_eq!(longest.secret().len(), 128);
    }

    #[test]
    fn generation_rejects_out_of_range_lengths() {
        let err = Credential::generate(11, DEFAULT_SECRET_LENGTH).unwrap_err();
        assert!(err.has_field("key_length"));

        let err = Credential::generate(DEFAULT_KEY_LENGTH, 129).unwrap_err();
        assert!(err.has_field("secret_length"));

        let err = Credential::generate(41, 39).unwrap_err();
        assert_eq!(err.error_count(), 2);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a = Credential::generate_with(20, 50, &RandomSource::from_seed(7)).unwrap();
        let b = Credential::generate_with(20, 50, &RandomSource::from_seed(7)).unwrap();
        assert_eq!(a.key(), b.key());
        assert_eq!(a.secret().expose(), b.secret().expose());
    }
}
