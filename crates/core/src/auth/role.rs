//! Roles and capability predicates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User role in the platform hierarchy.
///
/// Roles form a closed set parsed from verified token claims. Capability
/// checks go through the predicates below rather than comparing strings at
/// call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular wallet owner.
    User,
    /// Platform administrator.
    Admin,
    /// Organization administrator.
    OrgAdmin,
    /// Full access, including withdrawal approval.
    SuperAdmin,
}

impl Role {
    /// Parses a role from a string, case-insensitively.
    ///
    /// # Panics
    ///
    /// Panics on an unrecognized value. Role strings come from claims the
    /// transport layer has already validated, so an unknown role is a
    /// programming error rather than a user-facing condition.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "USER" => Self::User,
            "ADMIN" => Self::Admin,
            "ORG_ADMIN" => Self::OrgAdmin,
            "SUPER_ADMIN" => Self::SuperAdmin,
            other => panic!("invalid role provided: {other}"),
        }
    }

    /// Returns the string representation of the role.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "USER",
            Self::Admin => "ADMIN",
            Self::OrgAdmin => "ORG_ADMIN",
            Self::SuperAdmin => "SUPER_ADMIN",
        }
    }

    /// Returns true for the super admin role only.
    #[must_use]
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }

    /// Returns true for organization admins and above.
    #[must_use]
    pub fn is_org_admin(&self) -> bool {
        matches!(self, Self::OrgAdmin | Self::SuperAdmin)
    }

    /// Returns true for any administrative role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin | Self::OrgAdmin | Self::SuperAdmin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
