use cipherdrop_crypto::{
    decrypt, encrypt, CryptoError, FileKey, Nonce96, TAG_SIZE,
};

#[test]
fn encrypt_decrypt_roundtrip() {
    let key = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    let plaintext = b"Hello, World!";
    let ciphertext = encrypt(plaintext, &key, &nonce).unwrap();
    let decrypted = decrypt(&ciphertext, &key, &nonce).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn encrypt_decrypt_empty() {
    let key = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    let ciphertext = encrypt(b"", &key, &nonce).unwrap();
    assert_eq!(ciphertext.len(), TAG_SIZE);
    let decrypted = decrypt(&ciphertext, &key, &nonce).unwrap();
    assert_eq!(decrypted, b"");
}

#[test]
fn encrypt_decrypt_large_data() {
    let key = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    let plaintext: Vec<u8> = (0..100_000).map(|i| (i % 256) as u8).collect();
    let ciphertext = encrypt(&plaintext, &key, &nonce).unwrap();
    let decrypted = decrypt(&ciphertext, &key, &nonce).unwrap();
    assert_eq!(decrypted, plaintext);
}

#[test]
fn ciphertext_is_plaintext_plus_tag() {
    let key = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    for len in [0usize, 1, 12, 255, 4096] {
        let plaintext = vec![0xAB; len];
        let ciphertext = encrypt(&plaintext, &key, &nonce).unwrap();
        assert_eq!(ciphertext.len(), len + TAG_SIZE);
    }
}

#[test]
fn wrong_key_fails_decryption() {
    let key_a = FileKey::generate().unwrap();
    let key_b = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    let ciphertext = encrypt(b"Secret", &key_a, &nonce).unwrap();
    assert!(matches!(
        decrypt(&ciphertext, &key_b, &nonce),
        Err(CryptoError::DecryptionFailed)
    ));
}

#[test]
fn wrong_nonce_fails_decryption() {
    let key = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    let other_nonce = Nonce96::generate().unwrap();
    let ciphertext = encrypt(b"Secret", &key, &nonce).unwrap();
    assert!(matches!(
        decrypt(&ciphertext, &key, &other_nonce),
        Err(CryptoError::DecryptionFailed)
    ));
}

#[test]
fn any_single_bit_flip_is_detected() {
    let key = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    let ciphertext = encrypt(b"integrity matters", &key, &nonce).unwrap();

    for byte in 0..ciphertext.len() {
        for bit in 0..8 {
            let mut tampered = ciphertext.clone();
            tampered[byte] ^= 1 << bit;
            assert!(
                matches!(
                    decrypt(&tampered, &key, &nonce),
                    Err(CryptoError::DecryptionFailed)
                ),
                "flip at byte {byte} bit {bit} was not detected"
            );
        }
    }
}

#[test]
fn truncated_ciphertext_fails() {
    let key = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    let ciphertext = encrypt(b"some data", &key, &nonce).unwrap();

    // Shorter than the tag alone.
    assert!(matches!(
        decrypt(&ciphertext[..TAG_SIZE - 1], &key, &nonce),
        Err(CryptoError::DecryptionFailed)
    ));
    // Tag-length prefix of a longer message.
    assert!(matches!(
        decrypt(&ciphertext[..TAG_SIZE], &key, &nonce),
        Err(CryptoError::DecryptionFailed)
    ));
    // One byte short of the full output.
    assert!(matches!(
        decrypt(&ciphertext[..ciphertext.len() - 1], &key, &nonce),
        Err(CryptoError::DecryptionFailed)
    ));
}

#[test]
fn same_plaintext_fresh_nonces_differ() {
    let key = FileKey::generate().unwrap();
    let n1 = Nonce96::generate().unwrap();
    let n2 = Nonce96::generate().unwrap();
    let c1 = encrypt(b"Same", &key, &n1).unwrap();
    let c2 = encrypt(b"Same", &key, &n2).unwrap();
    assert_ne!(n1, n2);
    assert_ne!(c1, c2);
}

#[test]
fn key_isolation_across_files() {
    // A key generated for file A never decrypts file B's ciphertext.
    let key_a = FileKey::generate().unwrap();
    let key_b = FileKey::generate().unwrap();
    let nonce_b = Nonce96::generate().unwrap();
    let ciphertext_b = encrypt(b"file B contents", &key_b, &nonce_b).unwrap();
    assert!(matches!(
        decrypt(&ciphertext_b, &key_a, &nonce_b),
        Err(CryptoError::DecryptionFailed)
    ));
}

// ── End-to-end scenario ──────────────────────────────────────────

#[test]
fn hello_world_upload_scenario() {
    let plaintext = b"hello world!";
    assert_eq!(plaintext.len(), 12);

    let key = FileKey::generate().unwrap();
    let nonce = Nonce96::generate().unwrap();
    let ciphertext = encrypt(plaintext, &key, &nonce).unwrap();
    assert_eq!(ciphertext.len(), 12 + TAG_SIZE);

    let decrypted = decrypt(&ciphertext, &key, &nonce).unwrap();
    assert_eq!(decrypted, plaintext);

    let fresh_nonce = Nonce96::generate().unwrap();
    assert!(matches!(
        decrypt(&ciphertext, &key, &fresh_nonce),
        Err(CryptoError::DecryptionFailed)
    ));
}
