//! Role → module permission table.
//!
//! Resolution is a static lookup: no IO, no allocation, safe to call from any
//! number of request handlers at once.

use serde::Serialize;

use crate::{ModuleId, Role};

const ADMIN_MODULES: &[ModuleId] = &[
    ModuleId::Cotizacion,
    ModuleId::Comex,
    ModuleId::Guardia,
    ModuleId::Finanzas,
    ModuleId::Clientes,
    ModuleId::MiCuenta,
];

const ANALISTA_MODULES: &[ModuleId] = &[
    ModuleId::Cotizacion,
    ModuleId::Comex,
    ModuleId::Clientes,
    ModuleId::MiCuenta,
];

const OPERADOR_MODULES: &[ModuleId] = &[ModuleId::Guardia, ModuleId::MiCuenta];

pub(crate) fn modules_for(role: Role) -> &'static [ModuleId] {
    match role {
        Role::Admin => ADMIN_MODULES,
        Role::Analista => ANALISTA_MODULES,
        Role::Operador => OPERADOR_MODULES,
    }
}

/// Modules a role name may access, in table order.
///
/// Unknown roles resolve to an empty slice rather than an error, so callers
/// degrade to a dashboard-only view.
pub fn permitted_modules(role: &str) -> &'static [ModuleId] {
    Role::parse(role).map(modules_for).unwrap_or(&[])
}

/// Whether `role` grants access to the module named `module_id`.
pub fn has_permission(role: &str, module_id: &str) -> bool {
    permitted_modules(role)
        .iter()
        .any(|m| m.as_str() == module_id)
}

/// Role with its granted modules (for admin/audit display).
#[derive(Debug, Clone, Serialize)]
pub struct RoleDefinition {
    pub name: Role,
    pub description: &'static str,
    pub modules: &'static [ModuleId],
}

/// All roles and their modules.
pub fn role_catalog() -> Vec<RoleDefinition> {
    Role::ALL
        .into_iter()
        .map(|role| RoleDefinition {
            name: role,
            description: role.description(),
            modules: role.modules(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operador_gets_guardia_then_micuenta() {
        assert_eq!(
            permitted_modules("operador"),
            &[ModuleId::Guardia, ModuleId::MiCuenta]
        );
        let ids: Vec<&str> = permitted_modules("operador").iter().map(|m| m.as_str()).collect();
        assert_eq!(ids, vec!["guardia", "micuenta"]);
    }

    #[test]
    fn unknown_role_has_no_modules() {
        assert!(permitted_modules("unknown_role").is_empty());
        assert!(permitted_modules("").is_empty());
        assert!(!has_permission("unknown_role", "micuenta"));
    }

    #[test]
    fn finanzas_is_admin_only() {
        assert!(!has_permission("analista", "finanzas"));
        assert!(has_permission("admin", "finanzas"));
        assert!(!has_permission("operador", "finanzas"));
    }

    #[test]
    fn has_permission_ignores_unknown_modules() {
        assert!(!has_permission("admin", "reportes"));
    }

    #[test]
    fn role_catalog_covers_every_role() {
        let catalog = role_catalog();
        assert_eq!(catalog.len(), Role::ALL.len());
        let admin = catalog.iter().find(|r| r.name == Role::Admin).unwrap();
        assert_eq!(admin.modules.len(), 6);
    }
}
