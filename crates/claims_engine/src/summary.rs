//! Reports returned by engine operations

use serde::Serialize;

use core_kernel::{ClaimId, PolicyId, PolicyholderId};

/// Every record removed by a delete, including cascaded children
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeletionSummary {
    pub policyholders: Vec<PolicyholderId>,
    pub policies: Vec<PolicyId>,
    pub claims: Vec<ClaimId>,
}

impl DeletionSummary {
    /// Total number of records removed
    pub fn total(&self) -> usize {
        self.policyholders.len() + self.policies.len() + self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Record counts held by an engine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EngineStats {
    pub policyholders: usize,
    pub policies: usize,
    pub claims: usize,
}
