//! Static catalog of portal modules and the menu groups they belong to.

use serde::{Deserialize, Serialize};

/// Identifier of a portal module.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleId {
    Dashboard,
    Cotizacion,
    Comex,
    Guardia,
    Finanzas,
    Clientes,
    MiCuenta,
}

impl ModuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleId::Dashboard => "dashboard",
            ModuleId::Cotizacion => "cotizacion",
            ModuleId::Comex => "comex",
            ModuleId::Guardia => "guardia",
            ModuleId::Finanzas => "finanzas",
            ModuleId::Clientes => "clientes",
            ModuleId::MiCuenta => "micuenta",
        }
    }

    pub fn parse(id: &str) -> Option<Self> {
        CATALOG.iter().map(|e| e.id).find(|m| m.as_str() == id)
    }
}

impl core::fmt::Display for ModuleId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Navigation bucket a module is listed under.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MenuGroupId {
    Principal,
    Operaciones,
    Gestion,
    Usuario,
}

/// One row of the module catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleEntry {
    pub id: ModuleId,
    pub label: &'static str,
    pub path: &'static str,
    pub group: MenuGroupId,
    pub order: u32,
}

/// Menu group definition; groups are rendered by ascending `order`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupEntry {
    pub id: MenuGroupId,
    pub label: &'static str,
    pub order: u32,
}

/// Every module, in menu order.
pub const CATALOG: &[ModuleEntry] = &[
    ModuleEntry {
        id: ModuleId::Dashboard,
        label: "Dashboard",
        path: "/dashboard",
        group: MenuGroupId::Principal,
        order: 1,
    },
    ModuleEntry {
        id: ModuleId::Cotizacion,
        label: "Cotización",
        path: "/dashboard/cotizacion",
        group: MenuGroupId::Operaciones,
        order: 2,
    },
    ModuleEntry {
        id: ModuleId::Comex,
        label: "Comex",
        path: "/dashboard/comex",
        group: MenuGroupId::Operaciones,
        order: 3,
    },
    ModuleEntry {
        id: ModuleId::Guardia,
        label: "Turnos de Guardia",
        path: "/dashboard/guardia",
        group: MenuGroupId::Operaciones,
        order: 4,
    },
    ModuleEntry {
        id: ModuleId::Finanzas,
        label: "Finanzas",
        path: "/dashboard/finanzas",
        group: MenuGroupId::Gestion,
        order: 5,
    },
    ModuleEntry {
        id: ModuleId::Clientes,
        label: "Clientes",
        path: "/dashboard/clientes",
        group: MenuGroupId::Gestion,
        order: 6,
    },
    ModuleEntry {
        id: ModuleId::MiCuenta,
        label: "Mi Cuenta",
        path: "/dashboard/micuenta",
        group: MenuGroupId::Usuario,
        order: 7,
    },
];

pub const GROUPS: &[GroupEntry] = &[
    GroupEntry {
        id: MenuGroupId::Principal,
        label: "Principal",
        order: 1,
    },
    GroupEntry {
        id: MenuGroupId::Operaciones,
        label: "Operaciones",
        order: 2,
    },
    GroupEntry {
        id: MenuGroupId::Gestion,
        label: "Gestión",
        order: 3,
    },
    GroupEntry {
        id: MenuGroupId::Usuario,
        label: "Usuario",
        order: 4,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_module_id_round_trips_through_parse() {
        for entry in CATALOG {
            assert_eq!(ModuleId::parse(entry.id.as_str()), Some(entry.id));
        }
        assert_eq!(ModuleId::parse("reportes"), None);
    }

    #[test]
    fn serde_names_match_as_str() {
        for entry in CATALOG {
            let json = serde_json::to_string(&entry.id).unwrap();
            assert_eq!(json, format!("\"{}\"", entry.id.as_str()));
        }
    }

    #[test]
    fn catalog_is_ordered_and_every_group_is_defined() {
        assert!(CATALOG.windows(2).all(|w| w[0].order < w[1].order));
        for entry in CATALOG {
            assert!(GROUPS.iter().any(|g| g.id == entry.group));
        }
    }
}
