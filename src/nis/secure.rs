//! NIS1 secure (encrypted) messages.
//!
//! `payload = salt (32) || iv (16) || AES-256-CBC/PKCS#7(shared_key, iv, plaintext)`,
//! where the shared key comes from [`KeyPair::shared_key`] with `salt`.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::error::SignError;
use crate::nis::constants::PUBLIC_KEY_LEN;
use crate::nis::keys::KeyPair;

pub const SALT_LEN: usize = 32;
pub const IV_LEN: usize = 16;
const BLOCK_LEN: usize = 16;

type Encryptor = cbc::Encryptor<Aes256>;
type Decryptor = cbc::Decryptor<Aes256>;

/// Encrypt `plaintext` for `receiver_public_key` with a fresh salt and IV.
pub fn encrypt_message(
    sender: &KeyPair,
    receiver_public_key: &[u8; PUBLIC_KEY_LEN],
    plaintext: &[u8],
) -> Result<Vec<u8>, SignError> {
    let salt: [u8; SALT_LEN] = rand::random();
    let iv: [u8; IV_LEN] = rand::random();
    encrypt_message_with(sender, receiver_public_key, plaintext, &salt, &iv)
}

/// Encrypt with a caller-chosen salt and IV.
pub fn encrypt_message_with(
    sender: &KeyPair,
    receiver_public_key: &[u8; PUBLIC_KEY_LEN],
    plaintext: &[u8],
    salt: &[u8; SALT_LEN],
    iv: &[u8; IV_LEN],
) -> Result<Vec<u8>, SignError> {
    let key = sender.shared_key(receiver_public_key, salt)?;
    let ciphertext = Encryptor::new_from_slices(&key, iv)
        .map_err(|e| SignError::Encryption(e.to_string()))?
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut payload = Vec::with_capacity(SALT_LEN + IV_LEN + ciphertext.len());
    payload.extend_from_slice(salt);
    payload.extend_from_slice(iv);
    payload.extend_from_slice(&ciphertext);
    Ok(payload)
}

/// Decrypt a secure message payload sent by `sender_public_key`.
pub fn decrypt_message(
    receiver: &KeyPair,
    sender_public_key: &[u8; PUBLIC_KEY_LEN],
    payload: &[u8],
) -> Result<Vec<u8>, SignError> {
    if payload.len() < SALT_LEN + IV_LEN + BLOCK_LEN {
        return Err(SignError::Encryption(format!(
            "payload too short: {} bytes",
            payload.len()
        )));
    }
    let (salt, rest) = payload.split_at(SALT_LEN);
    let (iv, ciphertext) = rest.split_at(IV_LEN);
    let salt: [u8; SALT_LEN] = salt
        .try_into()
        .map_err(|_| SignError::Encryption("bad salt".to_string()))?;

    let key = receiver.shared_key(sender_public_key, &salt)?;
    Decryptor::new_from_slices(&key, iv)
        .map_err(|e| SignError::Encryption(e.to_string()))?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|e| SignError::Encryption(e.to_string()))
}
