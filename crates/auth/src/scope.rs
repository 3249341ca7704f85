//! Row scoping derived from the caller identity

use uuid::Uuid;

use crate::types::AuthIdentity;

/// Which rows a caller may read.
///
/// Repositories choose their query from this value; a row outside the scope
/// is indistinguishable from a missing row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadScope {
    /// Staff: every row, no ownership check
    All,
    /// End user: only rows owned by this user
    Owner(Uuid),
}

impl ReadScope {
    pub fn for_identity(identity: &AuthIdentity) -> Self {
        if identity.is_staff() {
            ReadScope::All
        } else {
            ReadScope::Owner(identity.id)
        }
    }

    /// Whether a row owned by `owner_id` falls inside this scope
    pub fn permits(&self, owner_id: Uuid) -> bool {
        match self {
            ReadScope::All => true,
            ReadScope::Owner(id) => *id == owner_id,
        }
    }
}

impl From<&AuthIdentity> for ReadScope {
    fn from(identity: &AuthIdentity) -> Self {
        Self::for_identity(identity)
    }
}
