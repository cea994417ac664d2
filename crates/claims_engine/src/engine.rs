//! The claims engine: validated CRUD over the three record mappings

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use core_kernel::{
    ClaimId, Clock, DomainError, DomainResult, PolicyId, PolicyholderId, SystemClock,
};
use domain_claims::{ensure_modifiable, Claim, ClaimStatus, ClaimUpdate, ClaimValidator, NewClaim};
use domain_party::{Policyholder, PolicyholderUpdate, PolicyholderValidator};
use domain_policy::{validate_age_at_start, Policy, PolicyUpdate, PolicyValidator};

use crate::summary::{DeletionSummary, EngineStats};

/// In-memory store of policyholders, policies, and claims
///
/// Records are keyed by id and reference each other only by id; the engine
/// resolves those references on every write.
#[derive(Debug)]
pub struct ClaimsEngine {
    policyholders: BTreeMap<PolicyholderId, Policyholder>,
    policies: BTreeMap<PolicyId, Policy>,
    claims: BTreeMap<ClaimId, Claim>,
    clock: Arc<dyn Clock>,
}

impl Default for ClaimsEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimsEngine {
    /// Creates an empty engine using the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty engine that reads "today" from `clock`
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            policyholders: BTreeMap::new(),
            policies: BTreeMap::new(),
            claims: BTreeMap::new(),
            clock,
        }
    }

    /// The date used for age checks and default submission dates
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn stats(&self) -> EngineStats {
        EngineStats {
            policyholders: self.policyholders.len(),
            policies: self.policies.len(),
            claims: self.claims.len(),
        }
    }

    // ========================================================================
    // Policyholders
    // ========================================================================

    /// Registers a new policyholder
    ///
    /// # Errors
    ///
    /// - `DuplicateKey` if the id is taken
    /// - `InvalidFormat` for a bad email, phone, or future date of birth
    /// - `BusinessRuleViolation` if the holder is under 18 today
    pub fn create_policyholder(&mut self, policyholder: Policyholder) -> DomainResult<Policyholder> {
        let id = policyholder.id.clone();
        self.try_create_policyholder(policyholder)
            .inspect(|_| info!(policyholder_id = %id, "Policyholder created"))
            .inspect_err(|e| reject("create_policyholder", id.as_str(), e))
    }

    fn try_create_policyholder(&mut self, policyholder: Policyholder) -> DomainResult<Policyholder> {
        if self.policyholders.contains_key(&policyholder.id) {
            return Err(DomainError::duplicate(PolicyholderId::entity(), &policyholder.id));
        }
        PolicyholderValidator::validate(&policyholder, self.today())?;
        self.policyholders.insert(policyholder.id.clone(), policyholder.clone());
        Ok(policyholder)
    }

    pub fn get_policyholder(&self, id: &PolicyholderId) -> Option<&Policyholder> {
        self.policyholders.get(id)
    }

    pub fn policyholders(&self) -> impl Iterator<Item = &Policyholder> {
        self.policyholders.values()
    }

    /// Applies the provided fields and revalidates the whole record, including
    /// the holder's age at the start of every policy they own
    ///
    /// On failure the stored policyholder is left exactly as it was.
    pub fn update_policyholder(
        &mut self,
        id: &PolicyholderId,
        update: PolicyholderUpdate,
    ) -> DomainResult<Policyholder> {
        self.try_update_policyholder(id, &update)
            .inspect(|_| info!(policyholder_id = %id, "Policyholder updated"))
            .inspect_err(|e| reject("update_policyholder", id.as_str(), e))
    }

    fn try_update_policyholder(
        &mut self,
        id: &PolicyholderId,
        update: &PolicyholderUpdate,
    ) -> DomainResult<Policyholder> {
        let current = self
            .policyholders
            .get(id)
            .ok_or_else(|| DomainError::not_found(PolicyholderId::entity(), id))?;
        let candidate = current.with_update(update);
        PolicyholderValidator::validate(&candidate, self.today())?;
        for policy in self.policies_for(id) {
            validate_age_at_start(candidate.date_of_birth, policy.start_date)?;
        }
        self.policyholders.insert(id.clone(), candidate.clone());
        Ok(candidate)
    }

    /// Removes a policyholder together with its policies and their claims
    pub fn delete_policyholder(&mut self, id: &PolicyholderId) -> DomainResult<DeletionSummary> {
        if !self.policyholders.contains_key(id) {
            let err = DomainError::not_found(PolicyholderId::entity(), id);
            reject("delete_policyholder", id.as_str(), &err);
            return Err(err);
        }

        let mut summary = DeletionSummary::default();
        let policy_ids: Vec<PolicyId> = self.policies_for(id).map(|p| p.id.clone()).collect();
        for policy_id in &policy_ids {
            self.remove_policy_cascade(policy_id, &mut summary);
        }
        self.policyholders.remove(id);
        summary.policyholders.push(id.clone());

        info!(
            policyholder_id = %id,
            policies_removed = summary.policies.len(),
            claims_removed = summary.claims.len(),
            "Policyholder deleted"
        );
        Ok(summary)
    }

    // ========================================================================
    // Policies
    // ========================================================================

    /// Issues a new policy to an existing policyholder
    ///
    /// # Errors
    ///
    /// - `NotFound` if the policyholder does not exist
    /// - `DuplicateKey` if the policy id is taken
    /// - `InvalidFormat` for misordered dates or non-positive amounts
    /// - `BusinessRuleViolation` if the holder is under 18 at the start date
    pub fn create_policy(&mut self, policy: Policy) -> DomainResult<Policy> {
        let id = policy.id.clone();
        self.try_create_policy(policy)
            .inspect(|p| info!(policy_id = %id, policyholder_id = %p.policyholder_id, "Policy created"))
            .inspect_err(|e| reject("create_policy", id.as_str(), e))
    }

    fn try_create_policy(&mut self, policy: Policy) -> DomainResult<Policy> {
        if !self.policyholders.contains_key(&policy.policyholder_id) {
            return Err(DomainError::not_found(PolicyholderId::entity(), &policy.policyholder_id));
        }
        if self.policies.contains_key(&policy.id) {
            return Err(DomainError::duplicate(PolicyId::entity(), &policy.id));
        }
        self.check_policy(&policy)?;
        self.policies.insert(policy.id.clone(), policy.clone());
        Ok(policy)
    }

    pub fn get_policy(&self, id: &PolicyId) -> Option<&Policy> {
        self.policies.get(id)
    }

    pub fn policies(&self) -> impl Iterator<Item = &Policy> {
        self.policies.values()
    }

    /// Policies owned by the given policyholder
    pub fn policies_for<'a: 'b, 'b>(
        &'a self,
        policyholder_id: &'b PolicyholderId,
    ) -> impl Iterator<Item = &'a Policy> + 'b {
        self.policies
            .values()
            .filter(move |p| &p.policyholder_id == policyholder_id)
    }

    /// Applies the provided fields and revalidates the whole policy,
    /// including its holder reference and the holder's age at the start date
    pub fn update_policy(&mut self, id: &PolicyId, update: PolicyUpdate) -> DomainResult<Policy> {
        self.try_update_policy(id, &update)
            .inspect(|_| info!(policy_id = %id, "Policy updated"))
            .inspect_err(|e| reject("update_policy", id.as_str(), e))
    }

    fn try_update_policy(&mut self, id: &PolicyId, update: &PolicyUpdate) -> DomainResult<Policy> {
        let current = self
            .policies
            .get(id)
            .ok_or_else(|| DomainError::not_found(PolicyId::entity(), id))?;
        let candidate = current.with_update(update);
        self.check_policy(&candidate)?;
        self.policies.insert(id.clone(), candidate.clone());
        Ok(candidate)
    }

    /// Removes a policy together with its claims
    pub fn delete_policy(&mut self, id: &PolicyId) -> DomainResult<DeletionSummary> {
        if !self.policies.contains_key(id) {
            let err = DomainError::not_found(PolicyId::entity(), id);
            reject("delete_policy", id.as_str(), &err);
            return Err(err);
        }

        let mut summary = DeletionSummary::default();
        self.remove_policy_cascade(id, &mut summary);

        info!(policy_id = %id, claims_removed = summary.claims.len(), "Policy deleted");
        Ok(summary)
    }

    fn check_policy(&self, policy: &Policy) -> DomainResult<()> {
        let holder = self
            .policyholders
            .get(&policy.policyholder_id)
            .ok_or_else(|| DomainError::not_found(PolicyholderId::entity(), &policy.policyholder_id))?;
        PolicyValidator::validate(policy, holder.date_of_birth)
    }

    /// Removes the policy's claims, then the policy itself
    fn remove_policy_cascade(&mut self, policy_id: &PolicyId, summary: &mut DeletionSummary) {
        let claim_ids: Vec<ClaimId> = self.claims_for(policy_id).map(|c| c.id.clone()).collect();
        for claim_id in claim_ids {
            if self.claims.remove(&claim_id).is_some() {
                debug!(policy_id = %policy_id, claim_id = %claim_id, "Cascade removed claim");
                summary.claims.push(claim_id);
            }
        }
        if self.policies.remove(policy_id).is_some() {
            debug!(policy_id = %policy_id, "Cascade removed policy");
            summary.policies.push(policy_id.clone());
        }
    }

    // ========================================================================
    // Claims
    // ========================================================================

    /// Submits a claim under an existing policy
    ///
    /// Missing status defaults to Submitted and a missing submission date to
    /// today.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the policy does not exist
    /// - `DuplicateKey` if the claim id is taken
    /// - `InvalidFormat` if the incident is outside the policy period, the
    ///   amount is not in `(0, coverage]`, or submission precedes the incident
    /// - `BusinessRuleViolation` if submitted more than 30 days after the incident
    pub fn create_claim(&mut self, new_claim: NewClaim) -> DomainResult<Claim> {
        let id = new_claim.id.clone();
        self.try_create_claim(new_claim)
            .inspect(|c| info!(claim_id = %id, policy_id = %c.policy_id, amount = %c.amount, "Claim created"))
            .inspect_err(|e| reject("create_claim", id.as_str(), e))
    }

    fn try_create_claim(&mut self, new_claim: NewClaim) -> DomainResult<Claim> {
        if !self.policies.contains_key(&new_claim.policy_id) {
            return Err(DomainError::not_found(PolicyId::entity(), &new_claim.policy_id));
        }
        if self.claims.contains_key(&new_claim.id) {
            return Err(DomainError::duplicate(ClaimId::entity(), &new_claim.id));
        }
        let claim = new_claim.into_claim(self.today());
        self.check_claim(&claim)?;
        self.claims.insert(claim.id.clone(), claim.clone());
        Ok(claim)
    }

    pub fn get_claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.get(id)
    }

    pub fn claims(&self) -> impl Iterator<Item = &Claim> {
        self.claims.values()
    }

    /// Claims made under the given policy
    pub fn claims_for<'a: 'b, 'b>(&'a self, policy_id: &'b PolicyId) -> impl Iterator<Item = &'a Claim> + 'b {
        self.claims.values().filter(move |c| &c.policy_id == policy_id)
    }

    /// Applies the provided fields and revalidates the claim against its policy
    ///
    /// Closed claims reject every update with `BusinessRuleViolation`.
    pub fn update_claim(&mut self, id: &ClaimId, update: ClaimUpdate) -> DomainResult<Claim> {
        self.try_update_claim(id, &update)
            .inspect(|c| info!(claim_id = %id, status = %c.status, "Claim updated"))
            .inspect_err(|e| reject("update_claim", id.as_str(), e))
    }

    /// Moves a claim to `status`
    pub fn update_claim_status(&mut self, id: &ClaimId, status: ClaimStatus) -> DomainResult<Claim> {
        self.update_claim(id, ClaimUpdate::default().status(status))
    }

    fn try_update_claim(&mut self, id: &ClaimId, update: &ClaimUpdate) -> DomainResult<Claim> {
        let current = self
            .claims
            .get(id)
            .ok_or_else(|| DomainError::not_found(ClaimId::entity(), id))?;
        ensure_modifiable(current)?;
        let candidate = current.with_update(update);
        self.check_claim(&candidate)?;
        self.claims.insert(id.clone(), candidate.clone());
        Ok(candidate)
    }

    pub fn delete_claim(&mut self, id: &ClaimId) -> DomainResult<DeletionSummary> {
        match self.claims.remove(id) {
            Some(_) => {
                info!(claim_id = %id, "Claim deleted");
                Ok(DeletionSummary {
                    claims: vec![id.clone()],
                    ..Default::default()
                })
            }
            None => {
                let err = DomainError::not_found(ClaimId::entity(), id);
                reject("delete_claim", id.as_str(), &err);
                Err(err)
            }
        }
    }

    fn check_claim(&self, claim: &Claim) -> DomainResult<()> {
        let policy = self
            .policies
            .get(&claim.policy_id)
            .ok_or_else(|| DomainError::not_found(PolicyId::entity(), &claim.policy_id))?;
        ClaimValidator::validate(claim, policy)
    }
}

fn reject(operation: &'static str, id: &str, error: &DomainError) {
    warn!(operation, id, kind = %error.kind(), reason = %error, "Operation rejected");
}
