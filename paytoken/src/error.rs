// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use paytoken_cms::ContainerError;
use paytoken_x509::{CertificateError, ChainError, ExtractError};

/// Wire-format decoding failed while constructing a token envelope.
#[derive(thiserror::Error, Debug)]
pub enum TokenDecodeError {
    #[error("invalid token JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base64 field: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("invalid hex field: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("unknown token version: {0}")]
    UnknownVersion(String),
}

/// Signature verification failed at one of the ordered gates.
///
/// Exactly one classified error surfaces per call; gates never aggregate.
#[derive(thiserror::Error, Debug)]
pub enum SignatureError {
    #[error("no signature present")]
    MissingSignature,

    #[error(transparent)]
    Container(#[from] ContainerError),

    #[error(transparent)]
    Certificate(#[from] CertificateError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error("signature verification failed: {0}")]
    SignatureMismatch(String),

    #[error("signature container carries no signing time")]
    MissingSigningTime,

    #[error(
        "signed time outside replay window: skew of {skew_seconds}s exceeds {threshold_seconds}s"
    )]
    SignedTimeOutsideWindow {
        skew_seconds: u64,
        threshold_seconds: u64,
    },
}

/// Authenticated decryption failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AesKeyError {
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Covers both a wrong key and tampered ciphertext; the classification
    /// does not distinguish the two.
    #[error("decryption authentication failed")]
    AuthenticationFailed,
}
