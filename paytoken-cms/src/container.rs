// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use cms::cert::CertificateChoices;
use cms::content_info::ContentInfo;
use cms::signed_data::{SignedData, SignerInfo};
use const_oid::db::rfc5911::{ID_MESSAGE_DIGEST, ID_SIGNED_DATA, ID_SIGNING_TIME};
use const_oid::db::rfc5912::ID_SHA_256;
use der::asn1::OctetString;
use der::{Decode, Encode};
use x509_cert::time::Time;

use crate::ContainerError;

/// Digest algorithms the scheme's signer infos may declare.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha256,
}

/// Signer metadata pulled from the container's first signer info.
#[derive(Debug, Clone)]
pub struct SignerDigest {
    pub digest_algorithm: DigestAlgorithm,
    /// Raw signature value (DER ECDSA or PKCS#1 v1.5, per scheme).
    pub signature: Vec<u8>,
    /// Re-encoded `SET OF` signed attributes, the exact bytes the signature
    /// covers when signed attributes are present.
    pub signed_attrs_der: Option<Vec<u8>>,
    /// Value of the message-digest signed attribute, if present.
    pub message_digest: Option<Vec<u8>>,
    /// Signing time as Unix seconds, if the signer declared one.
    pub signing_time: Option<i64>,
}

/// A parsed detached-signature container.
#[derive(Debug, Clone)]
pub struct SignedContainer {
    /// DER of every certificate embedded in the container, in container order.
    pub certificates_der: Vec<Vec<u8>>,
    pub signer: SignerDigest,
}

impl SignedContainer {
    /// Parses a DER-encoded CMS `SignedData` container.
    pub fn from_der(der: &[u8]) -> Result<Self, ContainerError> {
        let content_info = ContentInfo::from_der(der)
            .map_err(|e| ContainerError::Malformed(e.to_string()))?;

        if content_info.content_type != ID_SIGNED_DATA {
            return Err(ContainerError::Malformed(format!(
                "unexpected content type {}",
                content_info.content_type
            )));
        }

        let content_der = content_info
            .content
            .to_der()
            .map_err(|e| ContainerError::Malformed(e.to_string()))?;
        let signed_data = SignedData::from_der(&content_der)
            .map_err(|e| ContainerError::Malformed(e.to_string()))?;

        let mut certificates_der = Vec::new();
        if let Some(certs) = &signed_data.certificates {
            for choice in certs.0.iter() {
                if let CertificateChoices::Certificate(cert) = choice {
                    let cert_der = cert
                        .to_der()
                        .map_err(|e| ContainerError::Malformed(e.to_string()))?;
                    certificates_der.push(cert_der);
                }
            }
        }

        let signer_info = signed_data
            .signer_infos
            .0
            .iter()
            .next()
            .ok_or(ContainerError::NoSignerInfo)?;

        Ok(Self {
            certificates_der,
            signer: parse_signer(signer_info)?,
        })
    }
}

fn parse_signer(signer_info: &SignerInfo) -> Result<SignerDigest, ContainerError> {
    let digest_algorithm = if signer_info.digest_alg.oid == ID_SHA_256 {
        DigestAlgorithm::Sha256
    } else {
        return Err(ContainerError::UnsupportedDigestAlgorithm(
            signer_info.digest_alg.oid.to_string(),
        ));
    };

    let mut signed_attrs_der = None;
    let mut message_digest = None;
    let mut signing_time = None;

    if let Some(attrs) = &signer_info.signed_attrs {
        // The signature covers the attribute set re-encoded with its
        // explicit SET OF tag, not the context-specific tag used in the
        // message encoding.
        signed_attrs_der = Some(
            attrs
                .to_der()
                .map_err(|e| ContainerError::Malformed(e.to_string()))?,
        );

        for attr in attrs.iter() {
            let Some(value) = attr.values.iter().next() else {
                continue;
            };
            let value_der = value
                .to_der()
                .map_err(|e| ContainerError::Malformed(e.to_string()))?;

            if attr.oid == ID_MESSAGE_DIGEST {
                let digest = OctetString::from_der(&value_der)
                    .map_err(|e| ContainerError::Malformed(e.to_string()))?;
                message_digest = Some(digest.as_bytes().to_vec());
            } else if attr.oid == ID_SIGNING_TIME {
                let time = Time::from_der(&value_der)
                    .map_err(|e| ContainerError::Malformed(e.to_string()))?;
                signing_time = Some(time.to_unix_duration().as_secs() as i64);
            }
        }
    }

    Ok(SignerDigest {
        digest_algorithm,
        signature: signer_info.signature.as_bytes().to_vec(),
        signed_attrs_der,
        message_digest,
        signing_time,
    })
}
