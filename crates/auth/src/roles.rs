use serde::{Deserialize, Serialize};

use crate::{AuthError, ModuleId};

/// Portal role.
///
/// The set is closed and fixed at build time; each role maps to a static,
/// ordered list of modules (see [`crate::permissions`]).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Analista,
    Operador,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Analista, Role::Operador];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Analista => "analista",
            Role::Operador => "operador",
        }
    }

    /// Exact lookup by role name; `None` for anything outside the closed set.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == name)
    }

    /// Modules this role may access, in menu order.
    pub fn modules(self) -> &'static [ModuleId] {
        crate::permissions::modules_for(self)
    }

    pub fn description(&self) -> &'static str {
        match self {
            Role::Admin => "Full access to every portal module",
            Role::Analista => "Quotes, customs and client management",
            Role::Operador => "Guard shifts and own account",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Role {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| AuthError::UnknownRole(s.to_string()))
    }
}
