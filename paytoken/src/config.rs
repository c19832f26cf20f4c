// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::time::Duration;

/// Extension OID tagging the leaf role in the standard scheme.
pub const DEFAULT_LEAF_OID: &str = "1.2.840.113635.100.6.29";

/// Extension OID tagging the intermediate role in the standard scheme.
pub const DEFAULT_INTERMEDIATE_OID: &str = "1.2.840.113635.100.6.2.14";

/// Standard replay window.
pub const DEFAULT_REPLAY_THRESHOLD: Duration = Duration::from_secs(300);

/// Verification configuration: trusted root material, role OIDs, and the
/// replay window.
///
/// Construct with [`VerifyConfig::new`] to get the scheme defaults, then
/// override per field with the `with_*` builders. Immutable once handed to a
/// verification call; there is no process-wide configuration.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    trusted_root_der: Vec<u8>,
    leaf_oid: String,
    intermediate_oid: String,
    replay_threshold: Duration,
}

impl VerifyConfig {
    /// Configuration with scheme defaults, trusting `trusted_root_der`.
    pub fn new(trusted_root_der: impl Into<Vec<u8>>) -> Self {
        Self {
            trusted_root_der: trusted_root_der.into(),
            leaf_oid: DEFAULT_LEAF_OID.to_string(),
            intermediate_oid: DEFAULT_INTERMEDIATE_OID.to_string(),
            replay_threshold: DEFAULT_REPLAY_THRESHOLD,
        }
    }

    pub fn with_leaf_oid(mut self, oid: impl Into<String>) -> Self {
        self.leaf_oid = oid.into();
        self
    }

    pub fn with_intermediate_oid(mut self, oid: impl Into<String>) -> Self {
        self.intermediate_oid = oid.into();
        self
    }

    pub fn with_replay_threshold(mut self, threshold: Duration) -> Self {
        self.replay_threshold = threshold;
        self
    }

    pub fn trusted_root_der(&self) -> &[u8] {
        &self.trusted_root_der
    }

    pub fn leaf_oid(&self) -> &str {
        &self.leaf_oid
    }

    pub fn intermediate_oid(&self) -> &str {
        &self.intermediate_oid
    }

    pub fn replay_threshold(&self) -> Duration {
        self.replay_threshold
    }
}
