// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::cert::verify_cert_signature;
use crate::{ChainError, ParsedCert};

/// Checks the extracted root against the configured trusted root.
///
/// Equality is exact byte-level encoding match, not a subject/issuer string
/// comparison.
pub fn verify_root_certificate(
    root: &ParsedCert,
    trusted_root_der: &[u8],
) -> Result<(), ChainError> {
    if root.der.as_slice() == trusted_root_der {
        Ok(())
    } else {
        Err(ChainError::UntrustedRoot)
    }
}

/// Validates the signing relationships root → intermediate → leaf.
///
/// Two short-circuiting stages:
/// 1. pairwise identity distinctness — a self-signed certificate reused in
///    multiple roles would pass the cryptographic checks trivially, so
///    duplicated identities are rejected up front;
/// 2. cryptographic direction — the intermediate must verify under the root's
///    public key and the leaf under the intermediate's. The direction only
///    holds one way, so role-permuted inputs fail here.
pub fn verify_x509_chain(
    root: &ParsedCert,
    intermediate: &ParsedCert,
    leaf: &ParsedCert,
) -> Result<(), ChainError> {
    if intermediate.same_identity(root) || intermediate.same_identity(leaf) {
        return Err(ChainError::InvalidChain {
            reason: "intermediate certificate duplicates another chain member".to_string(),
        });
    }
    if root.same_identity(leaf) {
        return Err(ChainError::InvalidChain {
            reason: "root and leaf certificates are identical".to_string(),
        });
    }

    verify_cert_signature(
        &root.spki_der,
        &intermediate.tbs_der,
        &intermediate.signature_oid,
        &intermediate.signature,
    )
    .map_err(|_| ChainError::InvalidChain {
        reason: "certificate signature verification failed".to_string(),
    })?;

    verify_cert_signature(
        &intermediate.spki_der,
        &leaf.tbs_der,
        &leaf.signature_oid,
        &leaf.signature,
    )
    .map_err(|_| ChainError::InvalidChain {
        reason: "certificate signature verification failed".to_string(),
    })?;

    Ok(())
}
