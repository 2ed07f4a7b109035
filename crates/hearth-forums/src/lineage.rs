use std::collections::HashMap;
use std::ops::Deref;
use std::sync::Arc;

use hearth_router::{ProjectId, SubforumId};

use crate::{LineageError, SubforumNode, SubforumTree};

/// Ancestor chain from a root down to a subforum, inclusive
///
/// Cheap to clone; a chain and its root-less view share storage.
#[derive(Debug, Clone)]
pub struct Lineage<T> {
    items: Arc<[T]>,
    skip: usize,
}

impl<T> Lineage<T> {
    fn new(items: Arc<[T]>) -> Self {
        Lineage { items, skip: 0 }
    }

    /// The same chain without its first entry
    pub fn excluding_root(&self) -> Self {
        Lineage {
            items: Arc::clone(&self.items),
            skip: (self.skip + 1).min(self.items.len()),
        }
    }
}

impl<T> Deref for Lineage<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.items[self.skip..]
    }
}

/// Per-request memoizing view over a [`SubforumTree`]
///
/// Create one per request and drop it with the request; the tree itself is
/// shared and never mutated.
#[derive(Debug)]
pub struct LineageBuilder<'t> {
    tree: &'t SubforumTree,
    lineages: HashMap<SubforumId, Lineage<&'t SubforumNode>>,
    slugs: HashMap<SubforumId, Lineage<&'t str>>,
}

impl<'t> LineageBuilder<'t> {
    pub fn new(tree: &'t SubforumTree) -> Self {
        LineageBuilder {
            tree,
            lineages: HashMap::new(),
            slugs: HashMap::new(),
        }
    }

    pub fn tree(&self) -> &'t SubforumTree {
        self.tree
    }

    /// Ancestors of `id` from its root down to the node itself
    ///
    /// The first entry has no parent and the last entry is the node.
    pub fn lineage(&mut self, id: SubforumId) -> Result<Lineage<&'t SubforumNode>, LineageError> {
        if let Some(cached) = self.lineages.get(&id) {
            return Ok(cached.clone());
        }

        let tree = self.tree;
        let mut chain = Vec::new();
        let mut current = Some(id);
        while let Some(next) = current {
            let node = tree.get(next).ok_or(LineageError::UnknownSubforum(next))?;
            chain.push(node);
            current = node.parent_id;
        }
        chain.reverse();

        let lineage = Lineage::new(Arc::from(chain));
        self.lineages.insert(id, lineage.clone());
        Ok(lineage)
    }

    /// [`lineage`](Self::lineage) without the project's root forum
    pub fn lineage_excluding_root(&mut self, id: SubforumId) -> Result<Lineage<&'t SubforumNode>, LineageError> {
        Ok(self.lineage(id)?.excluding_root())
    }

    /// Slugs along the lineage, root included
    pub fn slug_lineage(&mut self, id: SubforumId) -> Result<Lineage<&'t str>, LineageError> {
        if let Some(cached) = self.slugs.get(&id) {
            return Ok(cached.clone());
        }

        let slugs: Vec<&'t str> = self.lineage(id)?.iter().copied().map(|node| node.slug.as_str()).collect();
        let lineage = Lineage::new(Arc::from(slugs));
        self.slugs.insert(id, lineage.clone());
        Ok(lineage)
    }

    /// Slugs along the lineage below the root; what forum URLs are built from
    pub fn subforum_slug_lineage(&mut self, id: SubforumId) -> Result<Lineage<&'t str>, LineageError> {
        Ok(self.slug_lineage(id)?.excluding_root())
    }

    /// Finds a subforum of `project_id` by slug
    ///
    /// Linear in the number of subforums. `None` when no subforum of that
    /// project has the slug.
    pub fn find_id_by_slug(&self, project_id: ProjectId, slug: &str) -> Option<SubforumId> {
        self.tree
            .iter()
            .find(|node| node.project_id == project_id && node.slug == slug)
            .map(|node| node.id)
    }

    /// Resolves the subforum slugs captured from a forum URL
    ///
    /// Walks down from the project's root forum one slug at a time, so a slug
    /// only matches among the children of the previous one. An empty list is
    /// the root forum itself.
    pub fn resolve_slug_path<S: AsRef<str>>(&self, project_id: ProjectId, slugs: &[S]) -> Option<SubforumId> {
        let mut current = self.tree.root_for_project(project_id)?;
        for slug in slugs {
            current = self
                .tree
                .children(current.id)
                .find(|child| child.slug == slug.as_ref())?;
        }
        Some(current.id)
    }
}
