// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// A certificate embedded in a signature container could not be parsed.
#[derive(thiserror::Error, Debug)]
pub enum CertificateError {
    #[error("invalid certificate DER: {0}")]
    Parse(String),
}

/// Role extraction failed to produce exactly one certificate per role.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("no leaf certificate found")]
    LeafNotFound,

    #[error("no intermediate certificate found")]
    IntermediateNotFound,

    #[error("no unique leaf certificate found")]
    NoUniqueLeaf,

    #[error("no unique intermediate certificate found")]
    NoUniqueIntermediate,

    #[error("no root certificate found")]
    RootNotFound,

    #[error("too many certificates found")]
    TooManyCertificates,
}

/// Chain-of-trust validation failed.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("root certificate is not trusted")]
    UntrustedRoot,

    #[error("invalid chain: {reason}")]
    InvalidChain { reason: String },
}
