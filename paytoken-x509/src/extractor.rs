// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use crate::{ExtractError, ParsedCert};

/// The three role-tagged certificates extracted from one signature container.
///
/// Produced per verification; never persisted.
#[derive(Debug, Clone)]
pub struct CertificateBundle {
    pub leaf: ParsedCert,
    pub intermediate: ParsedCert,
    pub root: ParsedCert,
}

/// Partitions the container's certificates into leaf / intermediate / root
/// buckets by extension-OID membership and requires exactly one candidate in
/// each bucket.
///
/// Certificates carrying `leaf_oid` are leaf candidates, those carrying
/// `intermediate_oid` are intermediate candidates, and those carrying neither
/// are root candidates. The membership tests are independent, so a
/// certificate tagged with both OIDs lands in both buckets and trips the
/// uniqueness checks as soon as either role has another candidate.
pub fn extract_certificates(
    certs: Vec<ParsedCert>,
    leaf_oid: &str,
    intermediate_oid: &str,
) -> Result<CertificateBundle, ExtractError> {
    let mut leaves = Vec::new();
    let mut intermediates = Vec::new();
    let mut roots = Vec::new();

    for cert in certs {
        let is_leaf = cert.has_extension(leaf_oid);
        let is_intermediate = cert.has_extension(intermediate_oid);

        if is_leaf {
            leaves.push(cert.clone());
        }
        if is_intermediate {
            intermediates.push(cert.clone());
        }
        if !is_leaf && !is_intermediate {
            roots.push(cert);
        }
    }

    if leaves.is_empty() {
        return Err(ExtractError::LeafNotFound);
    }
    if intermediates.is_empty() {
        return Err(ExtractError::IntermediateNotFound);
    }
    if leaves.len() > 1 {
        return Err(ExtractError::NoUniqueLeaf);
    }
    if intermediates.len() > 1 {
        return Err(ExtractError::NoUniqueIntermediate);
    }
    if roots.len() > 1 {
        return Err(ExtractError::TooManyCertificates);
    }

    let leaf = leaves.remove(0);
    let intermediate = intermediates.remove(0);
    let root = roots.pop().ok_or(ExtractError::RootNotFound)?;

    Ok(CertificateBundle {
        leaf,
        intermediate,
        root,
    })
}
