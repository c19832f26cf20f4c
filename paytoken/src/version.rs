// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use rsa::pkcs1v15;
use rsa::pkcs8::DecodePublicKey as _;
use rsa::RsaPublicKey;
use sha2::Sha256;
use signature::Verifier as _;

use p256::elliptic_curve::sec1::ToEncodedPoint as _;

use crate::TokenDecodeError;

/// Token scheme identifier.
///
/// The version tag fixes every algorithm parameter of a token: the asymmetric
/// routine used to check the detached signature and the symmetric cipher
/// (with its key length) used for the payload.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Version {
    /// Elliptic-curve variant: ECDSA P-256 / SHA-256 signature, AES-256-GCM payload.
    EcV1,
    /// RSA variant: RSA PKCS#1 v1.5 / SHA-256 signature, AES-128-GCM payload.
    RsaV1,
}

impl Version {
    /// Parses the wire `version` field.
    pub fn from_wire(s: &str) -> Result<Self, TokenDecodeError> {
        match s {
            "EC_v1" => Ok(Self::EcV1),
            "RSA_v1" => Ok(Self::RsaV1),
            other => Err(TokenDecodeError::UnknownVersion(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::EcV1 => "EC_v1",
            Self::RsaV1 => "RSA_v1",
        }
    }

    /// Exact symmetric key length the scheme requires, in bytes.
    pub const fn symmetric_key_len(self) -> usize {
        match self {
            Self::EcV1 => 32,
            Self::RsaV1 => 16,
        }
    }

    /// Length of the authentication tag appended to the ciphertext.
    pub const fn symmetric_tag_len(self) -> usize {
        16
    }

    /// Length of the scheme-fixed all-zero IV.
    pub const fn symmetric_iv_len(self) -> usize {
        12
    }

    /// Verifies a detached signature over `message` against a leaf SPKI,
    /// using the scheme's asymmetric algorithm.
    pub(crate) fn verify_detached(
        self,
        leaf_spki_der: &[u8],
        message: &[u8],
        signature: &[u8],
    ) -> Result<(), String> {
        match self {
            Self::EcV1 => {
                let pk = p256::PublicKey::from_public_key_der(leaf_spki_der)
                    .map_err(|e| format!("bad P-256 public key: {e}"))?;
                let ep = pk.to_encoded_point(false);
                let vk = p256::ecdsa::VerifyingKey::from_sec1_bytes(ep.as_bytes())
                    .map_err(|e| format!("bad P-256 public key: {e}"))?;
                let sig = p256::ecdsa::Signature::from_der(signature)
                    .map_err(|e| format!("bad ECDSA signature bytes: {e}"))?;
                vk.verify(message, &sig)
                    .map_err(|_| "signature verification failed".to_string())
            }
            Self::RsaV1 => {
                let key = RsaPublicKey::from_public_key_der(leaf_spki_der)
                    .map_err(|e| format!("bad RSA public key: {e}"))?;
                let vk = pkcs1v15::VerifyingKey::<Sha256>::new(key);
                let sig = pkcs1v15::Signature::try_from(signature)
                    .map_err(|e| format!("bad RSA signature bytes: {e}"))?;
                vk.verify(message, &sig)
                    .map_err(|_| "signature verification failed".to_string())
            }
        }
    }
}
