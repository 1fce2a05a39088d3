//! Grouped navigation menu for a role.

use serde::Serialize;

use crate::modules::{CATALOG, GROUPS, MenuGroupId, ModuleEntry, ModuleId};
use crate::permissions::permitted_modules;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub id: ModuleId,
    pub label: &'static str,
    pub path: &'static str,
    pub group: MenuGroupId,
    pub order: u32,
}

impl From<&ModuleEntry> for MenuItem {
    fn from(e: &ModuleEntry) -> Self {
        Self {
            id: e.id,
            label: e.label,
            path: e.path,
            group: e.group,
            order: e.order,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuGroup {
    pub id: MenuGroupId,
    pub label: &'static str,
    pub order: u32,
    pub items: Vec<MenuItem>,
}

/// Menu payload: non-empty groups plus the flat list of visible items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Menu {
    pub groups: Vec<MenuGroup>,
    pub items: Vec<MenuItem>,
}

impl Menu {
    pub fn group(&self, id: MenuGroupId) -> Option<&MenuGroup> {
        self.groups.iter().find(|g| g.id == id)
    }
}

/// Build the menu for a role name.
///
/// The dashboard is always present; every other catalog entry is kept only
/// when the role grants it. Unknown roles get a dashboard-only menu.
pub fn build_menu(role: &str) -> Menu {
    build_menu_from(permitted_modules(role))
}

/// Build the menu from an explicit permitted set.
pub fn build_menu_from(permitted: &[ModuleId]) -> Menu {
    let items: Vec<MenuItem> = CATALOG
        .iter()
        .filter(|e| e.id == ModuleId::Dashboard || permitted.contains(&e.id))
        .map(MenuItem::from)
        .collect();

    let mut groups: Vec<MenuGroup> = GROUPS
        .iter()
        .map(|g| MenuGroup {
            id: g.id,
            label: g.label,
            order: g.order,
            items: items.iter().filter(|i| i.group == g.id).cloned().collect(),
        })
        .filter(|g| !g.items.is_empty())
        .collect();
    groups.sort_by_key(|g| g.order);

    Menu { groups, items }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[MenuItem]) -> Vec<&'static str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn operador_menu_omits_gestion() {
        let menu = build_menu("operador");

        let group_ids: Vec<MenuGroupId> = menu.groups.iter().map(|g| g.id).collect();
        assert_eq!(
            group_ids,
            vec![MenuGroupId::Principal, MenuGroupId::Operaciones, MenuGroupId::Usuario]
        );

        assert_eq!(ids(&menu.group(MenuGroupId::Principal).unwrap().items), vec!["dashboard"]);
        assert_eq!(ids(&menu.group(MenuGroupId::Operaciones).unwrap().items), vec!["guardia"]);
        assert_eq!(ids(&menu.group(MenuGroupId::Usuario).unwrap().items), vec!["micuenta"]);
        assert!(menu.group(MenuGroupId::Gestion).is_none());

        assert_eq!(ids(&menu.items), vec!["dashboard", "guardia", "micuenta"]);
    }

    #[test]
    fn admin_menu_has_every_group_in_order() {
        let menu = build_menu("admin");
        let orders: Vec<u32> = menu.groups.iter().map(|g| g.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4]);
        assert_eq!(menu.items.len(), CATALOG.len());
        assert_eq!(
            ids(&menu.group(MenuGroupId::Gestion).unwrap().items),
            vec!["finanzas", "clientes"]
        );
    }

    #[test]
    fn analista_gestion_has_clientes_only() {
        let menu = build_menu("analista");
        assert_eq!(
            ids(&menu.group(MenuGroupId::Gestion).unwrap().items),
            vec!["clientes"]
        );
        assert_eq!(
            ids(&menu.group(MenuGroupId::Operaciones).unwrap().items),
            vec!["cotizacion", "comex"]
        );
    }

    #[test]
    fn unknown_role_gets_dashboard_only() {
        let menu = build_menu("unknown_role");
        assert_eq!(menu.groups.len(), 1);
        assert_eq!(menu.groups[0].id, MenuGroupId::Principal);
        assert_eq!(ids(&menu.items), vec!["dashboard"]);
    }

    #[test]
    fn json_shape_matches_menu_payload() {
        let json = serde_json::to_value(build_menu("operador")).unwrap();
        let first = &json["groups"][0];
        assert_eq!(first["id"], "principal");
        assert_eq!(first["label"], "Principal");
        assert_eq!(first["order"], 1);
        assert_eq!(first["items"][0]["path"], "/dashboard");
        assert_eq!(first["items"][0]["group"], "principal");
        assert_eq!(json["items"][2]["id"], "micuenta");
    }
}
