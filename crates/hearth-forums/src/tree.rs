/// Subforum forest built from flat rows
///
/// Nodes live in an arena in row order; parent and child relationships are
/// stored as ids, so the tree owns every node exactly once and can be shared
/// immutably between requests.

use std::collections::HashMap;

use hearth_router::{ProjectId, SubforumId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::TreeError;

/// One row of the subforum table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubforumRow {
    pub id: SubforumId,
    #[serde(default)]
    pub parent_id: Option<SubforumId>,
    pub project_id: ProjectId,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub blurb: String,
    #[serde(default)]
    pub sort: i32,
}

impl SubforumRow {
    /// Puts rows in canonical sibling order, `(sort, id)`
    pub fn sort_canonical(rows: &mut [SubforumRow]) {
        rows.sort_by_key(|row| (row.sort, row.id));
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubforumNode {
    pub id: SubforumId,
    pub parent_id: Option<SubforumId>,
    pub project_id: ProjectId,
    pub slug: String,
    pub name: String,
    pub blurb: String,
    /// Children in row order
    pub children: Vec<SubforumId>,
}

impl From<SubforumRow> for SubforumNode {
    fn from(row: SubforumRow) -> Self {
        SubforumNode {
            id: row.id,
            parent_id: row.parent_id,
            project_id: row.project_id,
            slug: row.slug,
            name: row.name,
            blurb: row.blurb,
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SubforumTree {
    nodes: Vec<SubforumNode>,
    index: HashMap<SubforumId, usize>,
}

impl SubforumTree {
    /// Builds the forest from rows in sibling order
    ///
    /// The first pass creates one node per row, the second links each node
    /// to its parent in row order, so children keep the order of the rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use hearth_forums::{SubforumRow, SubforumTree};
    /// use hearth_router::{ProjectId, SubforumId};
    ///
    /// let row = |id: i64, parent: Option<i64>| SubforumRow {
    ///     id: SubforumId::new(id).unwrap(),
    ///     parent_id: parent.map(|p| SubforumId::new(p).unwrap()),
    ///     project_id: ProjectId::new(1).unwrap(),
    ///     slug: format!("sf-{}", id),
    ///     name: format!("Subforum {}", id),
    ///     blurb: String::new(),
    ///     sort: 0,
    /// };
    ///
    /// let tree = SubforumTree::build(vec![row(1, None), row(2, Some(1))]).unwrap();
    /// assert_eq!(tree.len(), 2);
    /// assert!(SubforumTree::build(vec![row(2, Some(9))]).is_err());
    /// ```
    pub fn build<I>(rows: I) -> Result<Self, TreeError>
    where
        I: IntoIterator<Item = SubforumRow>,
    {
        let mut nodes: Vec<SubforumNode> = Vec::new();
        let mut index = HashMap::new();

        for row in rows {
            if index.insert(row.id, nodes.len()).is_some() {
                return Err(TreeError::DuplicateId(row.id));
            }
            nodes.push(row.into());
        }

        for i in 0..nodes.len() {
            let Some(parent_id) = nodes[i].parent_id else {
                continue;
            };
            let id = nodes[i].id;
            let parent = *index
                .get(&parent_id)
                .ok_or(TreeError::DanglingParent { id, parent_id })?;
            nodes[parent].children.push(id);
        }

        let tree = SubforumTree { nodes, index };
        tree.check_acyclic()?;
        debug!(nodes = tree.len(), roots = tree.roots().count(), "Built subforum tree");
        Ok(tree)
    }

    // Any parent chain longer than the node count revisits a node.
    fn check_acyclic(&self) -> Result<(), TreeError> {
        for node in &self.nodes {
            let mut current = node.parent_id;
            let mut steps = 0;
            while let Some(id) = current {
                steps += 1;
                if id == node.id || steps > self.nodes.len() {
                    return Err(TreeError::Cycle(node.id));
                }
                current = self.get(id).and_then(|parent| parent.parent_id);
            }
        }
        Ok(())
    }

    pub fn get(&self, id: SubforumId) -> Option<&SubforumNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: SubforumId) -> bool {
        self.index.contains_key(&id)
    }

    pub fn parent(&self, id: SubforumId) -> Option<&SubforumNode> {
        self.get(id)?.parent_id.and_then(|p| self.get(p))
    }

    pub fn children(&self, id: SubforumId) -> impl Iterator<Item = &SubforumNode> + '_ {
        self.get(id)
            .map(|node| node.children.as_slice())
            .unwrap_or_default()
            .iter()
            .filter_map(move |child| self.get(*child))
    }

    /// Nodes without a parent, in row order
    pub fn roots(&self) -> impl Iterator<Item = &SubforumNode> + '_ {
        self.nodes.iter().filter(|node| node.parent_id.is_none())
    }

    /// The forum root of a project
    pub fn root_for_project(&self, project_id: ProjectId) -> Option<&SubforumNode> {
        self.roots().find(|node| node.project_id == project_id)
    }

    /// All nodes in row order
    pub fn iter(&self) -> impl Iterator<Item = &SubforumNode> + '_ {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) fn row(id: i64, parent: Option<i64>) -> SubforumRow {
        SubforumRow {
            id: SubforumId::new(id).unwrap(),
            parent_id: parent.map(|p| SubforumId::new(p).unwrap()),
            project_id: ProjectId::new(1).unwrap(),
            slug: format!("sf-{}", id),
            name: format!("Subforum {}", id),
            blurb: String::new(),
            sort: 0,
        }
    }

    fn ids<'a>(nodes: impl Iterator<Item = &'a SubforumNode>) -> Vec<u32> {
        nodes.map(|n| n.id.get()).collect()
    }

    fn sf(id: i64) -> SubforumId {
        SubforumId::new(id).unwrap()
    }

    #[test]
    fn test_children_keep_row_order() {
        let tree = SubforumTree::build(vec![row(1, None), row(3, Some(1)), row(2, Some(1))]).unwrap();
        assert_eq!(ids(tree.children(sf(1))), vec![3, 2]);
    }

    #[test]
    fn test_child_before_parent_in_rows() {
        let tree = SubforumTree::build(vec![row(2, Some(1)), row(1, None)]).unwrap();
        assert_eq!(ids(tree.children(sf(1))), vec![2]);
        assert_eq!(tree.parent(sf(2)).unwrap().id, sf(1));
    }

    #[test]
    fn test_dangling_parent_is_fatal() {
        let err = SubforumTree::build(vec![row(1, None), row(2, Some(7))]).unwrap_err();
        assert_eq!(err, TreeError::DanglingParent { id: sf(2), parent_id: sf(7) });
    }

    #[test]
    fn test_duplicate_id_is_fatal() {
        let err = SubforumTree::build(vec![row(1, None), row(1, None)]).unwrap_err();
        assert_eq!(err, TreeError::DuplicateId(sf(1)));
    }

    #[test]
    fn test_cycle_is_fatal() {
        let err = SubforumTree::build(vec![row(1, Some(2)), row(2, Some(1))]).unwrap_err();
        assert!(matches!(err, TreeError::Cycle(_)));

        let err = SubforumTree::build(vec![row(1, Some(1))]).unwrap_err();
        assert_eq!(err, TreeError::Cycle(sf(1)));
    }

    #[test]
    fn test_roots_and_project_root() {
        let mut other = row(10, None);
        other.project_id = ProjectId::new(2).unwrap();
        let tree = SubforumTree::build(vec![row(1, None), row(2, Some(1)), other]).unwrap();

        assert_eq!(ids(tree.roots()), vec![1, 10]);
        assert_eq!(tree.root_for_project(ProjectId::new(2).unwrap()).unwrap().id, sf(10));
        assert!(tree.root_for_project(ProjectId::new(3).unwrap()).is_none());
    }

    #[test]
    fn test_unknown_id_queries() {
        let tree = SubforumTree::build(vec![row(1, None)]).unwrap();
        assert!(tree.get(sf(2)).is_none());
        assert_eq!(tree.children(sf(2)).count(), 0);
        assert!(tree.parent(sf(1)).is_none());
    }

    #[test]
    fn test_sort_canonical() {
        let mut a = row(5, None);
        a.sort = 1;
        let mut b = row(3, None);
        b.sort = 1;
        let c = row(9, None);
        let mut rows = vec![a, b, c];
        SubforumRow::sort_canonical(&mut rows);
        assert_eq!(rows.iter().map(|r| r.id.get()).collect::<Vec<_>>(), vec![9, 3, 5]);
    }

    #[test]
    fn test_row_deserializes_with_defaults() {
        let row: SubforumRow =
            serde_json::from_str(r#"{"id": 4, "project_id": 1, "slug": "code", "name": "Code"}"#).unwrap();
        assert_eq!(row.parent_id, None);
        assert_eq!(row.sort, 0);
        assert_eq!(row.blurb, "");
    }
}
