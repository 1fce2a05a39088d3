//! Mock user directory.
//!
//! Users live in an in-memory table keyed by lower-cased email. Passwords are
//! stored as given; the directory backs demo logins only.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use aflow_core::UserId;

use crate::{AuthError, Role};

/// Authenticated portal user (never carries the password).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password: String,
}

#[derive(Debug, Clone, Default)]
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory seeded with one account per role.
    pub fn demo() -> Self {
        Self::new()
            .with_user("admin@aflow.cl", "Administrador AFLOW", Role::Admin, "admin123")
            .with_user("analista@aflow.cl", "Analista AFLOW", Role::Analista, "analista123")
            .with_user("operador@aflow.cl", "Operador AFLOW", Role::Operador, "operador123")
    }

    pub fn with_user(mut self, email: &str, name: &str, role: Role, password: &str) -> Self {
        self.insert(email, name, role, password);
        self
    }

    /// Add or replace the account registered under `email`.
    pub fn insert(&mut self, email: &str, name: &str, role: Role, password: &str) -> User {
        let key = normalize_email(email);
        let user = User {
            id: UserId::new(),
            email: key.clone(),
            name: name.trim().to_string(),
            role,
        };
        self.users.insert(
            key,
            UserRecord {
                user: user.clone(),
                password: password.to_string(),
            },
        );
        user
    }

    pub fn find(&self, email: &str) -> Option<&User> {
        self.users.get(&normalize_email(email)).map(|r| &r.user)
    }

    /// Check credentials. Unknown emails and wrong passwords are
    /// indistinguishable to the caller.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<User, AuthError> {
        match self.users.get(&normalize_email(email)) {
            Some(record) if record.password == password => Ok(record.user.clone()),
            _ => Err(AuthError::InvalidCredentials),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_has_one_user_per_role() {
        let dir = UserDirectory::demo();
        assert_eq!(dir.len(), 3);
        for role in Role::ALL {
            let email = format!("{}@aflow.cl", role.as_str());
            assert_eq!(dir.find(&email).unwrap().role, role);
        }
    }

    #[test]
    fn authenticate_is_case_insensitive_on_email() {
        let dir = UserDirectory::demo();
        let user = dir.authenticate("  Admin@AFLOW.cl ", "admin123").unwrap();
        assert_eq!(user.email, "admin@aflow.cl");
        assert_eq!(user.role, Role::Admin);
    }

    #[test]
    fn authenticate_rejects_wrong_password_and_unknown_email() {
        let dir = UserDirectory::demo();
        assert_eq!(
            dir.authenticate("admin@aflow.cl", "nope"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            dir.authenticate("ghost@aflow.cl", "admin123"),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn insert_replaces_existing_account() {
        let mut dir = UserDirectory::new();
        dir.insert("x@aflow.cl", "X", Role::Operador, "one");
        dir.insert("X@aflow.cl", "X", Role::Analista, "two");
        assert_eq!(dir.len(), 1);
        assert!(dir.authenticate("x@aflow.cl", "one").is_err());
        assert_eq!(dir.authenticate("x@aflow.cl", "two").unwrap().role, Role::Analista);
    }
}
