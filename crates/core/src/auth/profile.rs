//! Authorization profile consumed by privileged transitions.

use serde::{Deserialize, Serialize};

use super::role::Role;

/// Capability set extracted from a verified bearer-token claim set.
///
/// The transport layer validates and maps the claims; the engine only
/// consumes the role and, for audit trails, the holder's full name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthProfile {
    role: Role,
    full_name: Option<String>,
}

impl AuthProfile {
    /// Creates a profile from a role and an optional full name.
    #[must_use]
    pub fn new(role: Role, full_name: Option<String>) -> Self {
        Self { role, full_name }
    }

    /// Returns the profile's role.
    #[must_use]
    pub const fn role(&self) -> Role {
        self.role
    }

    /// Returns the holder's full name, if present and non-blank.
    #[must_use]
    pub fn full_name(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name_present() {
        let profile = AuthProfile::new(Role::SuperAdmin, Some("Ada Lovelace".to_string()));
        assert_eq!(profile.full_name(), Some("Ada Lovelace"));
        assert!(profile.role().is_super_admin());
    }

    #[test]
    fn test_full_name_missing() {
        let profile = AuthProfile::new(Role::SuperAdmin, None);
        assert_eq!(profile.full_name(), None);
    }

    #[test]
    fn test_blank_full_name_is_none() {
        let profile = AuthProfile::new(Role::Admin, Some("   ".to_string()));
        assert_eq!(profile.full_name(), None);
    }

    #[test]
    fn test_full_name_is_trimmed() {
        let profile = AuthProfile::new(Role::User, Some("  Grace Hopper ".to_string()));
        assert_eq!(profile.full_name(), Some("Grace Hopper"));
    }
}
