// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;

use crate::{TokenDecodeError, Version};

/// The wire token record as deserialized from JSON, text encodings intact.
#[derive(Debug, Clone, Deserialize)]
pub struct WireToken {
    pub version: String,
    /// Base64 ciphertext with the authentication tag appended.
    pub data: String,
    /// Base64 DER of the detached-signature container.
    pub signature: Option<String>,
    pub header: WireHeader,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireHeader {
    pub transaction_id: String,
    pub application_data: Option<String>,
}

/// A decoded payment token envelope. Immutable after construction.
#[derive(Debug, Clone)]
pub struct PaymentToken {
    version: Version,
    encrypted_data: Vec<u8>,
    signature: Option<Vec<u8>>,
    transaction_id: Vec<u8>,
    application_data: Option<Vec<u8>>,
}

impl PaymentToken {
    pub fn new(
        version: Version,
        encrypted_data: Vec<u8>,
        signature: Option<Vec<u8>>,
        transaction_id: Vec<u8>,
        application_data: Option<Vec<u8>>,
    ) -> Self {
        Self {
            version,
            encrypted_data,
            signature,
            transaction_id,
            application_data,
        }
    }

    /// Decodes a wire token from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, TokenDecodeError> {
        Self::from_wire(serde_json::from_str(json)?)
    }

    /// Decodes an already-deserialized wire record.
    ///
    /// Fails on the first malformed field; a partially-populated envelope is
    /// never produced.
    pub fn from_wire(wire: WireToken) -> Result<Self, TokenDecodeError> {
        let version = Version::from_wire(&wire.version)?;
        let encrypted_data = BASE64.decode(&wire.data)?;
        let signature = wire
            .signature
            .as_deref()
            .map(|s| BASE64.decode(s))
            .transpose()?;
        let transaction_id = hex::decode(&wire.header.transaction_id)?;
        let application_data = wire
            .header
            .application_data
            .as_deref()
            .map(hex::decode)
            .transpose()?;

        Ok(Self {
            version,
            encrypted_data,
            signature,
            transaction_id,
            application_data,
        })
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn encrypted_data(&self) -> &[u8] {
        &self.encrypted_data
    }

    pub fn signature(&self) -> Option<&[u8]> {
        self.signature.as_deref()
    }

    pub fn transaction_id(&self) -> &[u8] {
        &self.transaction_id
    }

    pub fn application_data(&self) -> Option<&[u8]> {
        self.application_data.as_deref()
    }

    /// The bytes the detached signature covers: encrypted payload, then
    /// transaction id, then application data when present.
    pub(crate) fn signed_content(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(
            self.encrypted_data.len()
                + self.transaction_id.len()
                + self.application_data.as_ref().map_or(0, Vec::len),
        );
        out.extend_from_slice(&self.encrypted_data);
        out.extend_from_slice(&self.transaction_id);
        if let Some(app) = &self.application_data {
            out.extend_from_slice(app);
        }
        out
    }
}
