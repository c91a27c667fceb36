//! Integration tests for request signing
//!
//! Exercises the public signer surface the way the HTTP client uses it: one
//! signer shared across threads, every token checked by a separate verifier.

#![cfg(feature = "platform")]

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use fauxapi_common::auth::{Credential, SignedToken, TokenSigner, DEFAULT_KEY_LENGTH};
use fauxapi_common::RandomSource;

const KEY: &str = "PFFAValidItem1";
const SECRET: &str = "0123456789012345678901234567890123456789";

#[test]
fn shared_signer_produces_valid_tokens_across_threads() {
    let signer = Arc::new(TokenSigner::new(KEY, SECRET).unwrap());
    let verifier = TokenSigner::new(KEY, SECRET).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let signer = Arc::clone(&signer);
            thread::spawn(move || {
                (0..25).map(|_| signer.generate_token().to_string()).collect::<Vec<_>>()
            })
        })
        .collect();

    let mut seen = HashSet::new();
    for handle in handles {
        for token in handle.join().unwrap() {
            assert!(verifier.validate_token(&token), "rejected {token}");
            seen.insert(token);
        }
    }
    // Nonces are 32 bits wide; 200 draws colliding would point at a broken source.
    assert!(seen.len() > 190);
}

#[test]
fn generated_credential_round_trips_through_signer() {
    let source = RandomSource::from_seed(7);
    let credential = Credential::generate_with(DEFAULT_KEY_LENGTH, 60, &source).unwrap();
    assert_eq!(credential.key().len(), DEFAULT_KEY_LENGTH);

    let signer = TokenSigner::from_credential(credential.clone());
    let token = signer.generate_token().to_string();
    let parsed = SignedToken::parse(&token).unwrap();
    assert_eq!(parsed.key(), credential.key());

    let other = TokenSigner::new(credential.key(), credential.secret().expose()).unwrap();
    assert!(other.validate_token(&token));
}

#[test]
fn signer_with_different_secret_rejects_token() {
    let signer = TokenSigner::new(KEY, SECRET).unwrap();
    let other = TokenSigner::new(KEY, "9876543210987654321098765432109876543210").unwrap();
    assert!(!other.validate_token(&signer.generate_token().to_string()));
}
