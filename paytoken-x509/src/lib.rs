// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Certificate handling for payment token verification.
//!
//! A detached-signature container embeds three certificates: a leaf (holder of
//! the token signing key), an intermediate, and a root. Roles are not
//! positional; they are tagged through custom certificate extensions whose
//! OIDs are supplied by the caller's configuration. This crate partitions the
//! embedded set by role, checks the extracted root against a configured
//! trusted root byte-for-byte, and validates the two signing relationships
//! (root issued intermediate, intermediate issued leaf).

mod cert;
mod chain;
mod error;
mod extractor;

pub use cert::ParsedCert;
pub use chain::{verify_root_certificate, verify_x509_chain};
pub use error::{CertificateError, ChainError, ExtractError};
pub use extractor::{extract_certificates, CertificateBundle};
