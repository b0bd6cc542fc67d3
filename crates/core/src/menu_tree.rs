//! Navigation tree construction for the admin console.
//!
//! Menus are stored flat with a nullable `parent_id`. The login response
//! nests them so the frontend can render the sidebar directly.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::DbId;

/// One granted menu row, flattened from the role → menu → label join.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub id: DbId,
    pub parent_id: Option<DbId>,
    pub menu_name: String,
    pub menu_path: Option<String>,
    pub menu_icon: Option<String>,
    pub menu_order: i32,
    pub label_id: Option<DbId>,
    pub label_name: Option<String>,
}

/// A menu with its nested children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuNode {
    #[serde(flatten)]
    pub entry: MenuEntry,
    pub children: Vec<MenuNode>,
}

/// Nest flat menu entries into a forest keyed by `parent_id`.
///
/// - Siblings are ordered by `menu_order`, then `id`.
/// - An entry whose parent is not in the set becomes a root.
/// - Duplicate ids keep the first occurrence.
/// - Entries caught in a parent cycle are promoted to roots rather than lost.
pub fn build_menu_tree(entries: Vec<MenuEntry>) -> Vec<MenuNode> {
    let mut seen = HashSet::new();
    let mut entries: Vec<MenuEntry> = entries.into_iter().filter(|e| seen.insert(e.id)).collect();
    entries.sort_by_key(|e| (e.menu_order, e.id));

    let ids: HashSet<DbId> = entries.iter().map(|e| e.id).collect();
    let mut children: HashMap<DbId, Vec<MenuEntry>> = HashMap::new();
    let mut roots = Vec::new();

    for entry in &entries {
        match entry.parent_id {
            Some(parent) if parent != entry.id && ids.contains(&parent) => {
                children.entry(parent).or_default().push(entry.clone());
            }
            _ => roots.push(entry.clone()),
        }
    }

    let mut visited = HashSet::new();
    let mut forest: Vec<MenuNode> = roots
        .into_iter()
        .map(|root| attach(root, &children, &mut visited))
        .collect();

    for entry in entries {
        if !visited.contains(&entry.id) {
            forest.push(attach(entry, &children, &mut visited));
        }
    }

    forest
}

fn attach(
    entry: MenuEntry,
    children: &HashMap<DbId, Vec<MenuEntry>>,
    visited: &mut HashSet<DbId>,
) -> MenuNode {
    visited.insert(entry.id);
    let kids = children
        .get(&entry.id)
        .map(|list| {
            list.iter()
                .filter(|child| !visited.contains(&child.id))
                .cloned()
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let mut nodes = Vec::with_capacity(kids.len());
    for child in kids {
        if !visited.contains(&child.id) {
            nodes.push(attach(child, children, visited));
        }
    }

    MenuNode {
        entry,
        children: nodes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: DbId, parent_id: Option<DbId>, order: i32) -> MenuEntry {
        MenuEntry {
            id,
            parent_id,
            menu_name: format!("menu-{id}"),
            menu_path: Some(format!("/m/{id}")),
            menu_icon: None,
            menu_order: order,
            label_id: None,
            label_name: None,
        }
    }

    fn ids(nodes: &[MenuNode]) -> Vec<DbId> {
        nodes.iter().map(|n| n.entry.id).collect()
    }

    #[test]
    fn nests_children_under_parents() {
        let tree = build_menu_tree(vec![
            entry(1, None, 1),
            entry(2, Some(1), 2),
            entry(3, Some(1), 1),
            entry(4, None, 2),
            entry(5, Some(3), 1),
        ]);

        assert_eq!(ids(&tree), vec![1, 4]);
        assert_eq!(ids(&tree[0].children), vec![3, 2]);
        assert_eq!(ids(&tree[0].children[0].children), vec![5]);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn ties_on_order_break_by_id() {
        let tree = build_menu_tree(vec![entry(9, None, 1), entry(2, None, 1), entry(5, None, 0)]);
        assert_eq!(ids(&tree), vec![5, 2, 9]);
    }

    #[test]
    fn orphan_is_promoted_to_root() {
        let tree = build_menu_tree(vec![entry(1, None, 1), entry(7, Some(99), 0)]);
        assert_eq!(ids(&tree), vec![7, 1]);
    }

    #[test]
    fn duplicates_are_dropped() {
        let tree = build_menu_tree(vec![entry(1, None, 1), entry(1, None, 1)]);
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn cycle_is_not_lost() {
        let tree = build_menu_tree(vec![entry(1, Some(2), 1), entry(2, Some(1), 2)]);
        let total: usize = tree.iter().map(|n| 1 + n.children.len()).sum();
        assert_eq!(total, 2);
        assert_eq!(tree[0].entry.id, 1);
        assert_eq!(ids(&tree[0].children), vec![2]);
    }

    #[test]
    fn self_parent_is_root() {
        let tree = build_menu_tree(vec![entry(3, Some(3), 1)]);
        assert_eq!(ids(&tree), vec![3]);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn serializes_flat_fields_with_children() {
        let tree = build_menu_tree(vec![entry(1, None, 1), entry(2, Some(1), 1)]);
        let json = serde_json::to_value(&tree).unwrap();
        assert_eq!(json[0]["id"], 1);
        assert_eq!(json[0]["menu_name"], "menu-1");
        assert_eq!(json[0]["children"][0]["parent_id"], 1);
    }
}
