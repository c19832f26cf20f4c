// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm};

use crate::{AesKeyError, PaymentToken, Version};

/// Decrypts the token's payload with the caller-supplied symmetric key.
///
/// The key length must exactly match the scheme's requirement; anything else
/// fails before the ciphertext is touched. The payload is ciphertext with the
/// authentication tag appended, and the IV is the scheme-fixed all-zero value
/// (each symmetric key is single-use per token by construction of the outer
/// protocol). Wrong key and tampered ciphertext both surface as the same
/// authentication failure.
pub fn decrypt_aes(token: &PaymentToken, key: &[u8]) -> Result<Vec<u8>, AesKeyError> {
    let version = token.version();

    let expected = version.symmetric_key_len();
    if key.len() != expected {
        return Err(AesKeyError::InvalidKeyLength {
            expected,
            actual: key.len(),
        });
    }

    let payload = token.encrypted_data();
    if payload.len() < version.symmetric_tag_len() {
        return Err(AesKeyError::AuthenticationFailed);
    }

    match version {
        Version::EcV1 => open::<Aes256Gcm>(key, payload),
        Version::RsaV1 => open::<Aes128Gcm>(key, payload),
    }
}

fn open<C: KeyInit + Aead>(key: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, AesKeyError> {
    // Key length was validated by the caller.
    let cipher = C::new_from_slice(key).map_err(|_| AesKeyError::AuthenticationFailed)?;
    cipher
        .decrypt(&GenericArray::default(), ciphertext_and_tag)
        .map_err(|_| AesKeyError::AuthenticationFailed)
}
