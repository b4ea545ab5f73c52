//! Integration tests for the PwVault crypto module.

use pwvault::crypto::{decrypt, encrypt, Key};
use pwvault::errors::PwVaultError;

fn key(byte: u8) -> Key {
    Key::new(vec![byte; 32])
}

// ---------------------------------------------------------------------------
// Encryption round-trip
// ---------------------------------------------------------------------------

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = key(0xAB);
    let plaintext = b"correct horse battery staple";

    let ciphertext = encrypt(&key, plaintext).expect("encrypt should succeed");

    // Ciphertext must be longer than plaintext (12-byte nonce + 16-byte tag).
    assert!(ciphertext.len() > plaintext.len());

    let recovered = decrypt(&key, &ciphertext).expect("decrypt should succeed");
    assert_eq!(recovered, plaintext);
}

#[test]
fn encrypt_produces_different_ciphertext_each_time() {
    let key = key(0xCD);
    let plaintext = b"same password";

    let ct1 = encrypt(&key, plaintext).expect("encrypt 1");
    let ct2 = encrypt(&key, plaintext).expect("encrypt 2");

    // Because each call generates a new random nonce, the output must differ.
    assert_ne!(ct1, ct2, "two encryptions of the same plaintext must differ");

    // Both still decrypt to the original plaintext.
    assert_eq!(decrypt(&key, &ct1).unwrap(), plaintext);
    assert_eq!(decrypt(&key, &ct2).unwrap(), plaintext);
}

// ---------------------------------------------------------------------------
// Key isolation and tamper detection
// ---------------------------------------------------------------------------

#[test]
fn decrypt_with_wrong_key_fails() {
    let key_a = key(0x11);
    let key_b = key(0x22);
    let plaintext = b"top secret";

    let ciphertext = encrypt(&key_a, plaintext).expect("encrypt");
    let result = decrypt(&key_b, &ciphertext);

    assert!(
        matches!(result, Err(PwVaultError::DecryptionFailed)),
        "decryption with the wrong key must fail"
    );
}

#[test]
fn decrypt_with_truncated_data_fails() {
    // Anything shorter than 12 bytes (nonce length) should fail.
    let key = key(0xAA);
    let result = decrypt(&key, &[0u8; 5]);
    assert!(result.is_err(), "truncated ciphertext must fail");
}

#[test]
fn decrypt_with_corrupted_ciphertext_fails() {
    let key = key(0xBB);
    let plaintext = b"abc";

    let mut ciphertext = encrypt(&key, plaintext).expect("encrypt");
    // Flip a byte in the ciphertext portion (after the 12-byte nonce).
    if let Some(byte) = ciphertext.get_mut(14) {
        *byte ^= 0xFF;
    }

    let result = decrypt(&key, &ciphertext);
    assert!(result.is_err(), "corrupted ciphertext must fail auth check");
}

// ---------------------------------------------------------------------------
// Deferred key validation
// ---------------------------------------------------------------------------

#[test]
fn wrong_length_key_fails_at_encrypt_not_before() {
    // A key of the wrong length is accepted by the Key wrapper and
    // only rejected when a cipher is built from it.
    let short_key = Key::new(vec![0x01; 7]);
    let result = encrypt(&short_key, b"data");
    assert!(matches!(result, Err(PwVaultError::EncryptionFailed(_))));
}

#[test]
fn wrong_length_key_fails_at_decrypt() {
    let good_key = key(0x42);
    let ciphertext = encrypt(&good_key, b"data").unwrap();

    let short_key = Key::new(vec![0x01; 7]);
    let result = decrypt(&short_key, &ciphertext);
    assert!(matches!(result, Err(PwVaultError::DecryptionFailed)));
}
