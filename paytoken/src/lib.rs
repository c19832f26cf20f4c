// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Verification and decryption engine for tokenized wallet payment tokens.
//!
//! A payment token is an envelope holding an encrypted payload, a detached
//! signature over a certificate bundle, and header metadata. This crate
//! proves the token was issued by a trusted authority, was not replayed, and
//! recovers the underlying transaction payload:
//!
//! - [`verify_signature`] / [`verify_signature_at`]: certificate extraction
//!   by role, chain-of-trust validation against a configured trusted root,
//!   cryptographic verification of the detached signature, and replay-window
//!   enforcement, in a fixed short-circuiting order.
//! - [`is_valid_signature`]: the non-throwing boolean form.
//! - [`decrypt_aes`]: authenticated symmetric decryption of the payload with
//!   a caller-supplied key.
//!
//! Signature verification and decryption operate on disjoint envelope fields
//! and neither depends on the other's success; production callers run both
//! before accepting a token. Everything is purely functional over its inputs,
//! so independent tokens verify concurrently without locking.

mod config;
mod decrypt;
mod error;
mod token;
mod verifier;
mod version;

pub use config::{
    VerifyConfig, DEFAULT_INTERMEDIATE_OID, DEFAULT_LEAF_OID, DEFAULT_REPLAY_THRESHOLD,
};
pub use decrypt::decrypt_aes;
pub use error::{AesKeyError, SignatureError, TokenDecodeError};
pub use token::{PaymentToken, WireHeader, WireToken};
pub use verifier::{is_valid_signature, verify_signature, verify_signature_at};
pub use version::Version;

pub use paytoken_cms::{ContainerError, DigestAlgorithm, SignedContainer, SignerDigest};
pub use paytoken_x509::{
    CertificateBundle, CertificateError, ChainError, ExtractError, ParsedCert,
};
