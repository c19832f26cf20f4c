// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Signature verification pipeline.
//!
//! Five ordered gates over one token envelope and one configuration:
//! 1) parse the detached-signature container and extract one certificate per role
//! 2) check the extracted root against the configured trusted root
//! 3) validate the chain (distinctness + signing direction)
//! 4) verify the detached signature over the envelope's signed content
//! 5) enforce the replay window against the container's signing time
//!
//! The first failing gate aborts with its classified error; there is no
//! partial credit and no aggregation.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use paytoken_cms::{SignedContainer, SignerDigest};
use paytoken_x509::{
    extract_certificates, verify_root_certificate, verify_x509_chain, CertificateBundle,
    ParsedCert,
};
use sha2::{Digest as _, Sha256};

use crate::{PaymentToken, SignatureError, VerifyConfig};

/// Verifies the token's detached signature against `config`, using the wall
/// clock for the replay window.
///
/// Returns the validated certificate bundle on success.
pub fn verify_signature(
    token: &PaymentToken,
    config: &VerifyConfig,
) -> Result<CertificateBundle, SignatureError> {
    verify_signature_at(token, config, SystemTime::now())
}

/// [`verify_signature`] with an explicit `now`, for callers that manage time.
pub fn verify_signature_at(
    token: &PaymentToken,
    config: &VerifyConfig,
    now: SystemTime,
) -> Result<CertificateBundle, SignatureError> {
    let signature_der = token.signature().ok_or(SignatureError::MissingSignature)?;
    let container = SignedContainer::from_der(signature_der)?;

    let mut certs = Vec::with_capacity(container.certificates_der.len());
    for der in &container.certificates_der {
        certs.push(ParsedCert::from_der(der)?);
    }

    let bundle = extract_certificates(certs, config.leaf_oid(), config.intermediate_oid())?;
    verify_root_certificate(&bundle.root, config.trusted_root_der())?;
    verify_x509_chain(&bundle.root, &bundle.intermediate, &bundle.leaf)?;
    validate_signature(token, &container.signer, &bundle)?;
    verify_signed_time(&container.signer, now, config.replay_threshold())?;

    Ok(bundle)
}

/// Non-throwing form: `true` iff [`verify_signature`] succeeds.
pub fn is_valid_signature(token: &PaymentToken, config: &VerifyConfig) -> bool {
    verify_signature(token, config).is_ok()
}

fn validate_signature(
    token: &PaymentToken,
    signer: &SignerDigest,
    bundle: &CertificateBundle,
) -> Result<(), SignatureError> {
    let content = token.signed_content();
    let version = token.version();

    match &signer.signed_attrs_der {
        Some(attrs_der) => {
            // With signed attributes the signature covers the attribute set,
            // which in turn binds the content through the message-digest
            // attribute.
            let digest = Sha256::digest(&content);
            let message_digest = signer.message_digest.as_deref().ok_or_else(|| {
                SignatureError::SignatureMismatch(
                    "signed attributes carry no message digest".to_string(),
                )
            })?;
            if message_digest != digest.as_slice() {
                return Err(SignatureError::SignatureMismatch(
                    "message digest does not match signed content".to_string(),
                ));
            }
            version
                .verify_detached(&bundle.leaf.spki_der, attrs_der, &signer.signature)
                .map_err(SignatureError::SignatureMismatch)
        }
        None => version
            .verify_detached(&bundle.leaf.spki_der, &content, &signer.signature)
            .map_err(SignatureError::SignatureMismatch),
    }
}

/// Enforces the replay window: the absolute difference between `now` and the
/// container's signing time must not exceed `threshold`, inclusive on both
/// the too-old and too-new sides.
fn verify_signed_time(
    signer: &SignerDigest,
    now: SystemTime,
    threshold: Duration,
) -> Result<(), SignatureError> {
    let signed = signer
        .signing_time
        .ok_or(SignatureError::MissingSigningTime)?;

    let now_secs = match now.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    };

    let skew_seconds = (now_secs - signed).unsigned_abs();
    let threshold_seconds = threshold.as_secs();
    if skew_seconds <= threshold_seconds {
        Ok(())
    } else {
        Err(SignatureError::SignedTimeOutsideWindow {
            skew_seconds,
            threshold_seconds,
        })
    }
}
