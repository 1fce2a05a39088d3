//! `aflow-auth` — roles, module permissions, menus and mock sessions.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod error;
pub mod menu;
pub mod modules;
pub mod permissions;
pub mod roles;
pub mod session;
pub mod user;

pub use error::AuthError;
pub use menu::{Menu, MenuGroup, MenuItem, build_menu, build_menu_from};
pub use modules::{CATALOG, GROUPS, MenuGroupId, ModuleEntry, ModuleId};
pub use permissions::{RoleDefinition, has_permission, permitted_modules, role_catalog};
pub use roles::Role;
pub use session::{
    Authenticator, InMemorySessionStore, Session, SessionError, SessionStore, validate_session,
};
pub use user::{User, UserDirectory};
