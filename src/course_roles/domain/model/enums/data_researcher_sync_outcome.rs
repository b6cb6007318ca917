/// What a listener did about the derived data researcher role.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DataResearcherSyncOutcome {
    Granted,
    AlreadyGranted,
    /// A concurrent writer created the derived role between the existence check and the insert.
    GrantConflictResolved,
    Revoked,
    /// The last course-team role went away but no data researcher role was stored.
    NothingToRevoke,
    RetainedByRemainingRole,
}

impl DataResearcherSyncOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Granted => "granted",
            Self::AlreadyGranted => "already_granted",
            Self::GrantConflictResolved => "grant_conflict_resolved",
            Self::Revoked => "revoked",
            Self::NothingToRevoke => "nothing_to_revoke",
            Self::RetainedByRemainingRole => "retained_by_remaining_role",
        }
    }

    pub fn changed_store(&self) -> bool {
        matches!(self, Self::Granted | Self::Revoked)
    }
}
