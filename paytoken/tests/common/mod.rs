// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Shared helpers for `paytoken` integration tests.
//!
//! Tokens are built end to end the way an issuer would: a real certificate
//! chain from `rcgen` with the role extensions in place, an AES-GCM sealed
//! payload, and a detached CMS `SignedData` container assembled from the
//! RustCrypto `cms` types and signed with the leaf key.

#![allow(dead_code)]

use std::time::Duration;

use aes_gcm::aead::generic_array::GenericArray;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::Aes256Gcm;
use cms::cert::{CertificateChoices, IssuerAndSerialNumber};
use cms::content_info::{CmsVersion, ContentInfo};
use cms::signed_data::{
    CertificateSet, EncapsulatedContentInfo, SignedData, SignerIdentifier, SignerInfo,
    SignerInfos,
};
use const_oid::db::rfc5911::{ID_CONTENT_TYPE, ID_DATA, ID_MESSAGE_DIGEST, ID_SIGNED_DATA, ID_SIGNING_TIME};
use const_oid::db::rfc5912::{ECDSA_WITH_SHA_256, ID_SHA_256};
use der::asn1::{OctetString, SetOfVec, UtcTime};
use der::{Any, Decode as _, Encode as _};
use p256::pkcs8::DecodePrivateKey as _;
use rcgen::{BasicConstraints, CertificateParams, CustomExtension, DnType, IsCa, KeyPair};
use sha2::{Digest as _, Sha256};
use signature::Signer as _;
use x509_cert::attr::Attribute;
use x509_cert::spki::AlgorithmIdentifierOwned;
use x509_cert::Certificate;

use paytoken::{PaymentToken, Version};

const LEAF_OID_ARCS: &[u64] = &[1, 2, 840, 113635, 100, 6, 29];
const INTERMEDIATE_OID_ARCS: &[u64] = &[1, 2, 840, 113635, 100, 6, 2, 14];

pub const SIGNING_TIME: i64 = 1_700_000_000;

pub struct TestChain {
    pub root_der: Vec<u8>,
    pub intermediate_der: Vec<u8>,
    pub leaf_der: Vec<u8>,
    pub leaf_key: p256::ecdsa::SigningKey,
}

impl TestChain {
    pub fn certs(&self) -> Vec<Vec<u8>> {
        vec![
            self.leaf_der.clone(),
            self.intermediate_der.clone(),
            self.root_der.clone(),
        ]
    }
}

fn ca_params(cn: &str, role_oid_arcs: Option<&[u64]>) -> CertificateParams {
    let mut params = CertificateParams::new(vec![format!("{cn}.test")]).unwrap();
    params.distinguished_name.push(DnType::CommonName, cn);
    params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    if let Some(arcs) = role_oid_arcs {
        params
            .custom_extensions
            .push(CustomExtension::from_oid_content(arcs, vec![0x05, 0x00]));
    }
    params
}

/// Builds a root → intermediate → leaf chain and keeps the leaf signing key.
pub fn make_chain() -> TestChain {
    let root_key = KeyPair::generate().unwrap();
    let root_cert = ca_params("token root", None).self_signed(&root_key).unwrap();

    let intermediate_key = KeyPair::generate().unwrap();
    let intermediate_cert = ca_params("token intermediate", Some(INTERMEDIATE_OID_ARCS))
        .signed_by(&intermediate_key, &root_cert, &root_key)
        .unwrap();

    let leaf_key_pair = KeyPair::generate().unwrap();
    let mut leaf_params = CertificateParams::new(vec!["leaf.test".to_string()]).unwrap();
    leaf_params
        .distinguished_name
        .push(DnType::CommonName, "token leaf");
    leaf_params.is_ca = IsCa::NoCa;
    leaf_params.custom_extensions.push(
        CustomExtension::from_oid_content(LEAF_OID_ARCS, vec![0x05, 0x00]),
    );
    let leaf_cert = leaf_params
        .signed_by(&leaf_key_pair, &intermediate_cert, &intermediate_key)
        .unwrap();

    let leaf_key =
        p256::ecdsa::SigningKey::from_pkcs8_der(&leaf_key_pair.serialize_der()).unwrap();

    TestChain {
        root_der: root_cert.der().to_vec(),
        intermediate_der: intermediate_cert.der().to_vec(),
        leaf_der: leaf_cert.der().to_vec(),
        leaf_key,
    }
}

/// A self-signed certificate carrying the given role extensions, for
/// polluting a container's certificate set.
pub fn make_standalone_cert(role_oid_arcs: &[&[u64]]) -> Vec<u8> {
    let key = KeyPair::generate().unwrap();
    let mut params = CertificateParams::new(vec!["standalone.test".to_string()]).unwrap();
    params
        .distinguished_name
        .push(DnType::CommonName, "standalone");
    for arcs in role_oid_arcs {
        params
            .custom_extensions
            .push(CustomExtension::from_oid_content(arcs, vec![0x05, 0x00]));
    }
    params.self_signed(&key).unwrap().der().to_vec()
}

pub fn leaf_arcs() -> &'static [u64] {
    LEAF_OID_ARCS
}

pub fn intermediate_arcs() -> &'static [u64] {
    INTERMEDIATE_OID_ARCS
}

fn attribute(oid: const_oid::ObjectIdentifier, value: Any) -> Attribute {
    let mut values = SetOfVec::new();
    values.insert(value).unwrap();
    Attribute { oid, values }
}

/// Assembles a detached CMS `SignedData` container over `content`, embedding
/// `certs_der` and signing with the leaf's P-256 key.
pub fn build_container(
    certs_der: &[Vec<u8>],
    leaf_der: &[u8],
    leaf_key: &p256::ecdsa::SigningKey,
    content: &[u8],
    signing_time: Option<i64>,
) -> Vec<u8> {
    let digest = Sha256::digest(content);

    let mut attrs = SetOfVec::new();
    attrs
        .insert(attribute(
            ID_CONTENT_TYPE,
            Any::encode_from(&ID_DATA).unwrap(),
        ))
        .unwrap();
    attrs
        .insert(attribute(
            ID_MESSAGE_DIGEST,
            Any::encode_from(&OctetString::new(digest.to_vec()).unwrap()).unwrap(),
        ))
        .unwrap();
    if let Some(secs) = signing_time {
        let time = UtcTime::from_unix_duration(Duration::from_secs(secs as u64)).unwrap();
        attrs
            .insert(attribute(ID_SIGNING_TIME, Any::encode_from(&time).unwrap()))
            .unwrap();
    }

    // The signature covers the SET OF re-encoding of the signed attributes.
    let signed_attrs_der = attrs.to_der().unwrap();
    let sig: p256::ecdsa::Signature = leaf_key.sign(&signed_attrs_der);
    let sig_der = sig.to_der();

    let leaf = Certificate::from_der(leaf_der).unwrap();
    let sid = SignerIdentifier::IssuerAndSerialNumber(IssuerAndSerialNumber {
        issuer: leaf.tbs_certificate.issuer.clone(),
        serial_number: leaf.tbs_certificate.serial_number.clone(),
    });

    let signer_info = SignerInfo {
        version: CmsVersion::V1,
        sid,
        digest_alg: AlgorithmIdentifierOwned {
            oid: ID_SHA_256,
            parameters: None,
        },
        signed_attrs: Some(attrs),
        signature_algorithm: AlgorithmIdentifierOwned {
            oid: ECDSA_WITH_SHA_256,
            parameters: None,
        },
        signature: OctetString::new(sig_der.as_bytes()).unwrap(),
        unsigned_attrs: None,
    };

    let mut digest_algorithms = SetOfVec::new();
    digest_algorithms
        .insert(AlgorithmIdentifierOwned {
            oid: ID_SHA_256,
            parameters: None,
        })
        .unwrap();

    let mut cert_set = SetOfVec::new();
    for der in certs_der {
        cert_set
            .insert(CertificateChoices::Certificate(
                Certificate::from_der(der).unwrap(),
            ))
            .unwrap();
    }

    let mut signer_infos = SetOfVec::new();
    signer_infos.insert(signer_info).unwrap();

    let signed_data = SignedData {
        version: CmsVersion::V1,
        digest_algorithms,
        encap_content_info: EncapsulatedContentInfo {
            econtent_type: ID_DATA,
            econtent: None,
        },
        certificates: Some(CertificateSet(cert_set)),
        crls: None,
        signer_infos: SignerInfos(signer_infos),
    };

    let content_info = ContentInfo {
        content_type: ID_SIGNED_DATA,
        content: Any::encode_from(&signed_data).unwrap(),
    };
    content_info.to_der().unwrap()
}

/// Seals `plaintext` the way the scheme does: AES-256-GCM, all-zero IV, tag
/// appended to the ciphertext.
pub fn seal_aes256(key: &[u8; 32], plaintext: &[u8]) -> Vec<u8> {
    let cipher = Aes256Gcm::new_from_slice(key).unwrap();
    cipher.encrypt(&GenericArray::default(), plaintext).unwrap()
}

pub fn seal_aes128(key: &[u8; 16], plaintext: &[u8]) -> Vec<u8> {
    let cipher = aes_gcm::Aes128Gcm::new_from_slice(key).unwrap();
    cipher.encrypt(&GenericArray::default(), plaintext).unwrap()
}

pub fn transaction_id() -> Vec<u8> {
    vec![0xAB; 16]
}

/// Builds a complete valid token: sealed payload, signed container, default
/// transaction id, no application data.
pub fn make_token(chain: &TestChain, key: &[u8; 32], plaintext: &[u8]) -> PaymentToken {
    let data = seal_aes256(key, plaintext);
    let txid = transaction_id();
    let content = [data.as_slice(), txid.as_slice()].concat();
    let container = build_container(
        &chain.certs(),
        &chain.leaf_der,
        &chain.leaf_key,
        &content,
        Some(SIGNING_TIME),
    );
    PaymentToken::new(Version::EcV1, data, Some(container), txid, None)
}
