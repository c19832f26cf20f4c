// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

/// The signature container could not be understood.
#[derive(thiserror::Error, Debug)]
pub enum ContainerError {
    #[error("malformed signature container: {0}")]
    Malformed(String),

    #[error("signature container has no signer info")]
    NoSignerInfo,

    #[error("unsupported signer digest algorithm: {0}")]
    UnsupportedDigestAlgorithm(String),
}
