// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Detached-signature container parsing.
//!
//! Payment tokens carry their signature as a DER-encoded CMS `SignedData`
//! structure with no encapsulated content: the signed bytes live in the token
//! envelope, while the container supplies the embedded certificate set, the
//! signer's digest algorithm, the signature value, the signed attributes, and
//! the signing timestamp used for replay-window enforcement.
//!
//! This crate only parses; cryptographic verification of the signature and
//! the certificate chain is the caller's job.

mod container;
mod error;

pub use container::{DigestAlgorithm, SignedContainer, SignerDigest};
pub use error::ContainerError;
