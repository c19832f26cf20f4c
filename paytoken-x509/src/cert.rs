// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use rsa::pkcs1v15;
use rsa::pkcs8::DecodePublicKey as _;
use rsa::RsaPublicKey;
use sha2::Sha256;
use signature::Verifier as _;

use p256::elliptic_curve::sec1::ToEncodedPoint as _;

use crate::CertificateError;

/// A certificate parsed into the fields role extraction and chain validation
/// need, with the original DER retained for identity comparison.
#[derive(Debug, Clone)]
pub struct ParsedCert {
    pub der: Vec<u8>,
    pub subject_dn: String,
    pub issuer_dn: String,
    pub spki_der: Vec<u8>,
    pub tbs_der: Vec<u8>,
    pub signature_oid: String,
    pub signature: Vec<u8>,
    pub extension_oids: Vec<String>,
}

impl ParsedCert {
    pub fn from_der(der: &[u8]) -> Result<Self, CertificateError> {
        let (_, cert) = x509_parser::parse_x509_certificate(der)
            .map_err(|e| CertificateError::Parse(format!("{e}")))?;

        Ok(Self {
            der: der.to_vec(),
            subject_dn: cert.tbs_certificate.subject.to_string(),
            issuer_dn: cert.tbs_certificate.issuer.to_string(),
            spki_der: cert.tbs_certificate.subject_pki.raw.to_vec(),
            // `x509-parser` keeps the raw DER for TBSCertificate; expose it via `AsRef`.
            tbs_der: cert.tbs_certificate.as_ref().to_vec(),
            signature_oid: cert.signature_algorithm.algorithm.to_string(),
            signature: cert.signature_value.data.to_vec(),
            extension_oids: cert
                .extensions()
                .iter()
                .map(|ext| ext.oid.to_string())
                .collect(),
        })
    }

    /// Role membership test: does this certificate carry the given extension OID?
    ///
    /// The tests are independent per role; a certificate may carry neither,
    /// one, or both role extensions.
    pub fn has_extension(&self, oid: &str) -> bool {
        self.extension_oids.iter().any(|o| o == oid)
    }

    /// Identity comparison: exact encoding equality, not subject/issuer match.
    pub fn same_identity(&self, other: &ParsedCert) -> bool {
        self.der == other.der
    }
}

/// Verifies that `signature` over `tbs_der` checks out under the issuer's
/// public key, dispatching on the certificate's signature algorithm OID.
pub(crate) fn verify_cert_signature(
    issuer_spki_der: &[u8],
    tbs_der: &[u8],
    signature_oid: &str,
    signature: &[u8],
) -> Result<(), String> {
    match signature_oid {
        // sha256WithRSAEncryption
        "1.2.840.113549.1.1.11" => {
            let key = RsaPublicKey::from_public_key_der(issuer_spki_der)
                .map_err(|e| format!("bad RSA public key: {e}"))?;
            let vk = pkcs1v15::VerifyingKey::<Sha256>::new(key);
            let sig = pkcs1v15::Signature::try_from(signature)
                .map_err(|e| format!("bad RSA signature bytes: {e}"))?;
            vk.verify(tbs_der, &sig)
                .map_err(|_| "certificate signature verification failed".to_string())
        }

        // ecdsa-with-SHA256
        "1.2.840.10045.4.3.2" => {
            let pk = p256::PublicKey::from_public_key_der(issuer_spki_der)
                .map_err(|e| format!("bad P-256 issuer public key: {e}"))?;
            let ep = pk.to_encoded_point(false);
            let vk = p256::ecdsa::VerifyingKey::from_sec1_bytes(ep.as_bytes())
                .map_err(|e| format!("bad P-256 issuer public key: {e}"))?;
            let sig = p256::ecdsa::Signature::from_der(signature)
                .map_err(|e| format!("bad ECDSA signature bytes: {e}"))?;
            vk.verify(tbs_der, &sig)
                .map_err(|_| "certificate signature verification failed".to_string())
        }

        _ => Err(format!(
            "unsupported certificate signature algorithm OID: {signature_oid}"
        )),
    }
}
